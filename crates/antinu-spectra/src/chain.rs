// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Decay Chain Aggregation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Branching-weighted sum of beta spectra over a decay chain.
//!
//! Every sub-branch spectrum is normalized to unit area on the grid
//! (rectangle rule, dE = E[2] − E[1]) and weighted by
//! branching fraction × intensity. Branches whose raw spectrum is zero
//! everywhere on the grid contribute nothing and are not normalized.

use antinu_math::quadrature::{any_positive, rectangle_sum};
use antinu_types::constants::MAX_ATOMIC_NUMBER;
use antinu_types::decay::{DecayChain, DecayChainKind, IsotopeBranch};
use antinu_types::error::{SpectrumError, SpectrumResult};
use antinu_types::grid::EnergyGrid;
use ndarray::Array1;

use crate::beta::beta_spectrum;

/// One scaled sub-branch spectrum.
#[derive(Debug, Clone)]
pub struct BranchSpectrum {
    pub isotope: String,
    /// End-point energy [MeV].
    pub endpoint_mev: f64,
    /// branching fraction × intensity.
    pub scale: f64,
    /// False when the raw spectrum was zero on the whole grid.
    pub normalized: bool,
    pub spectrum: Array1<f64>,
}

/// Result of aggregating one decay chain.
#[derive(Debug, Clone)]
pub struct ChainSpectrum {
    pub kind: DecayChainKind,
    /// Every sub-branch, in table order.
    pub branches: Vec<BranchSpectrum>,
    /// Sum of all branches.
    pub total: Array1<f64>,
}

impl ChainSpectrum {
    /// Sum of the branches belonging to `isotope`, if it appears in the chain.
    pub fn isotope_spectrum(&self, isotope: &str) -> Option<Array1<f64>> {
        let mut found = false;
        let mut sum = Array1::zeros(self.total.len());
        for b in self.branches.iter().filter(|b| b.isotope == isotope) {
            found = true;
            sum += &b.spectrum;
        }
        found.then_some(sum)
    }

    /// Rectangle-rule integral of the total with the grid's bin width.
    pub fn integral(&self, grid: &EnergyGrid) -> f64 {
        rectangle_sum(self.total.view(), grid.bin_width())
    }
}

/// Unit-area spectrum of one branch scaled by its branching weight.
///
/// Returns the spectrum and whether it was normalized.
pub fn branch_spectrum(branch: &IsotopeBranch, grid: &EnergyGrid) -> (Array1<f64>, bool) {
    let raw = beta_spectrum(
        branch.endpoint_mev,
        branch.mass_number,
        branch.atomic_number,
        grid.as_slice(),
    );
    if !any_positive(raw.view()) {
        return (raw, false);
    }
    let area = rectangle_sum(raw.view(), grid.bin_width());
    let scale = branch.scale_factor();
    (raw.mapv(|v| v / area * scale), true)
}

/// Aggregate every sub-branch of `chain` on `grid`.
///
/// Fails with [`SpectrumError::MissingData`] before computing anything if
/// the chain tables are empty or an isotope has no transition table, and
/// with [`SpectrumError::NumericDegenerate`] if a nucleus has A = 0 or
/// αZ ≥ 1, or a branch evaluates to a non-finite value.
pub fn chain_spectrum(chain: &DecayChain, grid: &EnergyGrid) -> SpectrumResult<ChainSpectrum> {
    if chain.is_empty() {
        tracing::error!(chain = %chain.kind, "no branching data loaded");
        return Err(SpectrumError::MissingData {
            chain: chain.kind.to_string(),
        });
    }
    let branches = chain.branches().map_err(|isotope| {
        tracing::error!(chain = %chain.kind, %isotope, "isotope has no transition table");
        SpectrumError::MissingData {
            chain: format!("{} (isotope {isotope})", chain.kind),
        }
    })?;
    for branch in &branches {
        check_nucleus(branch)?;
    }

    let mut total = Array1::zeros(grid.len());
    let mut out = Vec::with_capacity(branches.len());
    for branch in &branches {
        let (spectrum, normalized) = branch_spectrum(branch, grid);
        if spectrum.iter().any(|v| !v.is_finite()) {
            tracing::error!(
                isotope = %branch.isotope,
                endpoint_mev = branch.endpoint_mev,
                "branch spectrum is not finite"
            );
            return Err(SpectrumError::NumericDegenerate(format!(
                "{} branch at {} MeV has non-finite values",
                branch.isotope, branch.endpoint_mev
            )));
        }
        if normalized {
            tracing::debug!(
                isotope = %branch.isotope,
                endpoint_mev = branch.endpoint_mev,
                z = branch.atomic_number,
                a = branch.mass_number,
                scale = branch.scale_factor(),
                "branch spectrum"
            );
        } else {
            tracing::warn!(
                isotope = %branch.isotope,
                endpoint_mev = branch.endpoint_mev,
                grid_min = grid.min(),
                "branch has no support on the energy grid"
            );
        }
        total += &spectrum;
        out.push(BranchSpectrum {
            isotope: branch.isotope.clone(),
            endpoint_mev: branch.endpoint_mev,
            scale: branch.scale_factor(),
            normalized,
            spectrum,
        });
    }

    Ok(ChainSpectrum {
        kind: chain.kind,
        branches: out,
        total,
    })
}

fn check_nucleus(branch: &IsotopeBranch) -> SpectrumResult<()> {
    if branch.mass_number == 0 || branch.atomic_number > MAX_ATOMIC_NUMBER {
        tracing::error!(
            isotope = %branch.isotope,
            z = branch.atomic_number,
            a = branch.mass_number,
            "nucleus outside the Fermi function domain"
        );
        return Err(SpectrumError::NumericDegenerate(format!(
            "{}: A = {}, Z = {} (need A > 0 and Z <= {MAX_ATOMIC_NUMBER})",
            branch.isotope, branch.mass_number, branch.atomic_number
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use antinu_types::decay::{BetaTransition, ChainIsotope};

    fn grid() -> EnergyGrid {
        EnergyGrid::linspace(0.0, 4.0, 801).unwrap()
    }

    fn bi214_chain() -> DecayChain {
        let mut chain = DecayChain::new(DecayChainKind::U238);
        chain.add_isotope(
            ChainIsotope {
                name: "Bi214".into(),
                mass_number: 214,
                atomic_number: 84,
                branching_fraction: 0.9998,
            },
            vec![
                BetaTransition { endpoint_mev: 3.270, intensity: 0.191 },
                BetaTransition { endpoint_mev: 1.540, intensity: 0.178 },
                BetaTransition { endpoint_mev: 1.505, intensity: 0.170 },
            ],
        );
        chain.add_isotope(
            ChainIsotope {
                name: "Pb210".into(),
                mass_number: 210,
                atomic_number: 83,
                branching_fraction: 1.0,
            },
            vec![BetaTransition { endpoint_mev: 0.0635, intensity: 0.16 }],
        );
        chain
    }

    #[test]
    fn test_branches_unit_normalized() {
        let g = grid();
        let result = chain_spectrum(&bi214_chain(), &g).unwrap();
        assert_eq!(result.branches.len(), 4);
        for b in &result.branches {
            assert!(b.normalized);
            let area = rectangle_sum(b.spectrum.view(), g.bin_width()) / b.scale;
            assert!((area - 1.0).abs() < 1e-9, "{} area = {area}", b.isotope);
        }
    }

    #[test]
    fn test_total_is_sum_of_weights() {
        let g = grid();
        let result = chain_spectrum(&bi214_chain(), &g).unwrap();
        let expected: f64 = result.branches.iter().map(|b| b.scale).sum();
        assert!((result.integral(&g) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_endpoint_below_grid_contributes_zero() {
        let g = EnergyGrid::linspace(0.5, 4.0, 351).unwrap();
        let result = chain_spectrum(&bi214_chain(), &g).unwrap();
        let pb = result.isotope_spectrum("Pb210").unwrap();
        assert!(pb.iter().all(|&v| v == 0.0));
        assert!(!result.branches[3].normalized);
        assert!(result.total.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_isotope_spectrum_lookup() {
        let g = grid();
        let result = chain_spectrum(&bi214_chain(), &g).unwrap();
        let bi = result.isotope_spectrum("Bi214").unwrap();
        let area = rectangle_sum(bi.view(), g.bin_width());
        assert!((area - 0.9998 * (0.191 + 0.178 + 0.170)).abs() < 1e-9);
        assert!(result.isotope_spectrum("Po214").is_none());
    }

    fn single(mass_number: u32, atomic_number: u32) -> DecayChain {
        let mut chain = DecayChain::new(DecayChainKind::U238);
        chain.add_isotope(
            ChainIsotope {
                name: "X".into(),
                mass_number,
                atomic_number,
                branching_fraction: 1.0,
            },
            vec![BetaTransition { endpoint_mev: 2.0, intensity: 1.0 }],
        );
        chain
    }

    #[test]
    fn test_supercritical_charge_is_rejected() {
        match chain_spectrum(&single(240, 140), &grid()).unwrap_err() {
            SpectrumError::NumericDegenerate(msg) => assert!(msg.contains("Z = 140")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_mass_number_is_rejected() {
        assert!(matches!(
            chain_spectrum(&single(0, 84), &grid()),
            Err(SpectrumError::NumericDegenerate(_))
        ));
    }

    #[test]
    fn test_heaviest_allowed_charge_stays_finite() {
        let g = grid();
        let result = chain_spectrum(&single(300, MAX_ATOMIC_NUMBER), &g).unwrap();
        assert!(result.branches[0].normalized);
        assert!(result.total.iter().all(|v| v.is_finite()));
        assert!((result.integral(&g) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_chain_is_missing_data() {
        let chain = DecayChain::new(DecayChainKind::Th232);
        match chain_spectrum(&chain, &grid()).unwrap_err() {
            SpectrumError::MissingData { chain } => assert_eq!(chain, "Th-232"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_isotope_table_is_missing_data() {
        let mut chain = bi214_chain();
        chain.transitions.remove("Pb210");
        match chain_spectrum(&chain, &grid()).unwrap_err() {
            SpectrumError::MissingData { chain } => assert!(chain.contains("Pb210")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
