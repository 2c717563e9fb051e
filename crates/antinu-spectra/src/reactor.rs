// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Reactor Spectrum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reactor antineutrino spectrum from four fissile isotopes.
//!
//! Per-fission spectra are exp(Σ c_k E^k) fits [ν/MeV/fission]. Each is
//! weighted by the fission rate N_i = P · (MeV/J) · α_i / E_f,i, with the
//! thermal-power fractions α and energies per fission E_f of Kopeikin (2004).

use std::fmt;

use antinu_math::poly::exp_poly;
use antinu_types::config::ReactorConfig;
use antinu_types::constants::{DEFAULT_REACTOR_POWER_W, MEV_PER_JOULE};
use antinu_types::error::{SpectrumError, SpectrumResult};
use ndarray::Array1;

/// Tolerance on Σα before a warning is logged.
const POWER_FRACTION_SUM_TOL: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FissileIsotope {
    U235,
    U238,
    Pu239,
    Pu241,
}

impl FissileIsotope {
    /// Order used by configuration arrays.
    pub const ALL: [FissileIsotope; 4] = [Self::U235, Self::U238, Self::Pu239, Self::Pu241];

    pub fn name(&self) -> &'static str {
        match self {
            Self::U235 => "U-235",
            Self::U238 => "U-238",
            Self::Pu239 => "Pu-239",
            Self::Pu241 => "Pu-241",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::U235 => 0,
            Self::U238 => 1,
            Self::Pu239 => 2,
            Self::Pu241 => 3,
        }
    }
}

impl fmt::Display for FissileIsotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Empirical spectrum fit and fission energetics of one isotope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorIsotopeFit {
    pub isotope: FissileIsotope,
    /// c0..c5 of the log-spectrum polynomial in E [MeV].
    pub coefficients: [f64; 6],
    /// Relative contribution to thermal power α.
    pub power_fraction: f64,
    /// Thermal energy released per fission [MeV].
    pub energy_per_fission_mev: f64,
}

impl ReactorIsotopeFit {
    /// Kopeikin (2004) reference values.
    pub fn kopeikin(isotope: FissileIsotope) -> Self {
        let (coefficients, power_fraction, energy_per_fission_mev) = match isotope {
            FissileIsotope::U235 => (
                [4.367, -4.577, 2.100, -5.294e-1, 6.186e-2, -2.777e-3],
                0.59,
                201.92,
            ),
            // Quadratic fit; upper coefficients are zero.
            FissileIsotope::U238 => ([0.976, -0.162, -0.079, 0.0, 0.0, 0.0], 0.07, 205.52),
            FissileIsotope::Pu239 => (
                [4.757, -5.392, 2.563, -6.596e-1, 7.820e-2, -3.536e-3],
                0.29,
                209.99,
            ),
            FissileIsotope::Pu241 => (
                [2.990, -2.882, 1.278, -3.343e-1, 3.905e-2, -1.754e-3],
                0.05,
                213.60,
            ),
        };
        ReactorIsotopeFit {
            isotope,
            coefficients,
            power_fraction,
            energy_per_fission_mev,
        }
    }

    /// Antineutrinos per MeV per fission at `energy_mev`.
    pub fn spectrum_per_fission(&self, energy_mev: f64) -> f64 {
        exp_poly(&self.coefficients, energy_mev)
    }
}

/// Per-isotope components and their sum.
#[derive(Debug, Clone)]
pub struct ReactorSpectrum {
    /// Fission-rate weighted spectrum of each isotope [ν/MeV/s].
    pub components: Vec<(FissileIsotope, Array1<f64>)>,
    pub total: Array1<f64>,
}

impl ReactorSpectrum {
    pub fn component(&self, isotope: FissileIsotope) -> Option<&Array1<f64>> {
        self.components
            .iter()
            .find(|(iso, _)| *iso == isotope)
            .map(|(_, s)| s)
    }
}

/// Power-weighted reactor antineutrino source.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactorModel {
    /// Thermal power [W].
    pub thermal_power_w: f64,
    /// [MeV/J]
    pub mev_per_joule: f64,
    /// Indexed in [`FissileIsotope::ALL`] order.
    pub fits: [ReactorIsotopeFit; 4],
}

impl Default for ReactorModel {
    fn default() -> Self {
        ReactorModel {
            thermal_power_w: DEFAULT_REACTOR_POWER_W,
            mev_per_joule: MEV_PER_JOULE,
            fits: FissileIsotope::ALL.map(ReactorIsotopeFit::kopeikin),
        }
    }
}

impl ReactorModel {
    /// Kopeikin fits at the given thermal power [W].
    pub fn new(thermal_power_w: f64) -> SpectrumResult<Self> {
        let model = ReactorModel {
            thermal_power_w,
            ..Self::default()
        };
        model.validate()?;
        Ok(model)
    }

    pub fn from_config(config: &ReactorConfig) -> SpectrumResult<Self> {
        let mut model = ReactorModel {
            thermal_power_w: config.thermal_power_w,
            mev_per_joule: config.mev_per_joule,
            ..Self::default()
        };
        if let Some(alphas) = config.power_fractions {
            for (fit, alpha) in model.fits.iter_mut().zip(alphas) {
                fit.power_fraction = alpha;
            }
        }
        if let Some(energies) = config.energy_per_fission_mev {
            for (fit, ef) in model.fits.iter_mut().zip(energies) {
                fit.energy_per_fission_mev = ef;
            }
        }
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> SpectrumResult<()> {
        if !self.thermal_power_w.is_finite() || self.thermal_power_w < 0.0 {
            return Err(SpectrumError::ConfigError(format!(
                "thermal power must be finite and non-negative, got {} W",
                self.thermal_power_w
            )));
        }
        if !self.mev_per_joule.is_finite() || self.mev_per_joule <= 0.0 {
            return Err(SpectrumError::ConfigError(format!(
                "mev_per_joule must be positive, got {}",
                self.mev_per_joule
            )));
        }
        for fit in &self.fits {
            if !(0.0..=1.0).contains(&fit.power_fraction) {
                return Err(SpectrumError::ConfigError(format!(
                    "{}: power fraction must be within [0, 1], got {}",
                    fit.isotope, fit.power_fraction
                )));
            }
            if !fit.energy_per_fission_mev.is_finite() || fit.energy_per_fission_mev <= 0.0 {
                return Err(SpectrumError::ConfigError(format!(
                    "{}: energy per fission must be positive, got {} MeV",
                    fit.isotope, fit.energy_per_fission_mev
                )));
            }
        }
        let alpha_sum: f64 = self.fits.iter().map(|f| f.power_fraction).sum();
        if (alpha_sum - 1.0).abs() > POWER_FRACTION_SUM_TOL {
            tracing::warn!(alpha_sum, "reactor power fractions do not sum to 1");
        }
        Ok(())
    }

    pub fn fit(&self, isotope: FissileIsotope) -> &ReactorIsotopeFit {
        &self.fits[isotope.index()]
    }

    /// Fission rate N_i [fissions/s].
    pub fn fission_rate(&self, isotope: FissileIsotope) -> f64 {
        let fit = self.fit(isotope);
        self.thermal_power_w * self.mev_per_joule * fit.power_fraction
            / fit.energy_per_fission_mev
    }

    /// (isotope, N_i) for all four isotopes.
    pub fn weight_factors(&self) -> [(FissileIsotope, f64); 4] {
        FissileIsotope::ALL.map(|iso| (iso, self.fission_rate(iso)))
    }

    /// Per-fission spectrum of one isotope on `energies` [ν/MeV/fission].
    pub fn isotope_spectrum(&self, isotope: FissileIsotope, energies: &[f64]) -> Array1<f64> {
        let fit = self.fit(isotope);
        energies.iter().map(|&e| fit.spectrum_per_fission(e)).collect()
    }

    /// Weighted components and their sum on `energies`.
    pub fn spectrum(&self, energies: &[f64]) -> ReactorSpectrum {
        let mut total = Array1::zeros(energies.len());
        let mut components = Vec::with_capacity(FissileIsotope::ALL.len());
        for (iso, n_fiss) in self.weight_factors() {
            let component = self.isotope_spectrum(iso, energies) * n_fiss;
            total += &component;
            components.push((iso, component));
        }
        tracing::debug!(
            power_w = self.thermal_power_w,
            points = energies.len(),
            "reactor spectrum"
        );
        ReactorSpectrum { components, total }
    }

    /// Σ_i S_i(E) · N_i [ν/MeV/s].
    pub fn full_spectrum(&self, energies: &[f64]) -> Array1<f64> {
        self.spectrum(energies).total
    }
}
