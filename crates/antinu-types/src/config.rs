// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REACTOR_POWER_W, KEV_PER_MEV, MAX_ATOMIC_NUMBER, MEV_PER_JOULE};
use crate::decay::{BetaTransition, ChainIsotope, DecayChain, DecayChainKind};
use crate::error::{SpectrumError, SpectrumResult};

/// Top-level background configuration.
/// Tables are stored in spreadsheet units (keV, %).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundConfig {
    #[serde(default)]
    pub chains: Vec<DecayChainConfig>,
    #[serde(default)]
    pub reactor: ReactorConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector: Option<DetectorConfig>,
}

/// One "<chain> chain branching" sheet together with its isotope sheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayChainConfig {
    pub chain: DecayChainKind,
    pub isotopes: Vec<IsotopeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsotopeConfig {
    pub isotope: String,
    #[serde(rename = "A")]
    pub a: u32,
    #[serde(rename = "Z")]
    pub z: u32,
    pub branching_percent: f64,
    pub transitions: Vec<TransitionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub endpoint_kev: f64,
    pub intensity_percent: f64,
}

/// Reactor source parameters.
///
/// Per-isotope arrays are ordered (U-235, U-238, Pu-239, Pu-241).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorConfig {
    /// Thermal power [W] (default: 1e9)
    #[serde(default = "default_thermal_power")]
    pub thermal_power_w: f64,
    /// Energy conversion [MeV/J] (default: 6.242e12)
    #[serde(default = "default_mev_per_joule")]
    pub mev_per_joule: f64,
    /// Relative thermal-power fractions; Kopeikin 2004 values when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_fractions: Option<[f64; 4]>,
    /// Energy released per fission [MeV]; Kopeikin 2004 values when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_per_fission_mev: Option<[f64; 4]>,
}

fn default_thermal_power() -> f64 {
    DEFAULT_REACTOR_POWER_W
}
fn default_mev_per_joule() -> f64 {
    MEV_PER_JOULE
}

impl Default for ReactorConfig {
    fn default() -> Self {
        ReactorConfig {
            thermal_power_w: default_thermal_power(),
            mev_per_joule: default_mev_per_joule(),
            power_fractions: None,
            energy_per_fission_mev: None,
        }
    }
}

/// Detector placement and target (all lengths in metres).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// "xenon", "argon" or "germanium"
    pub material: String,
    #[serde(default = "default_distance")]
    pub distance_m: f64,
    #[serde(default = "default_mass")]
    pub mass_kg: f64,
    #[serde(default = "default_side")]
    pub height_m: f64,
    #[serde(default = "default_side")]
    pub width_m: f64,
}

fn default_distance() -> f64 {
    100.0
}
fn default_mass() -> f64 {
    1000.0
}
fn default_side() -> f64 {
    1.0
}

impl BackgroundConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> SpectrumResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Table for `kind`, if present in the file.
    pub fn chain(&self, kind: DecayChainKind) -> Option<&DecayChainConfig> {
        self.chains.iter().find(|c| c.chain == kind)
    }
}

impl DecayChainConfig {
    /// Convert to MeV and fractions.
    pub fn to_chain(&self) -> SpectrumResult<DecayChain> {
        let mut chain = DecayChain::new(self.chain);
        for iso in &self.isotopes {
            if iso.a == 0 {
                return Err(SpectrumError::ConfigError(format!(
                    "{}: mass number must be positive",
                    iso.isotope
                )));
            }
            if iso.z > MAX_ATOMIC_NUMBER {
                return Err(SpectrumError::ConfigError(format!(
                    "{}: atomic number {} exceeds {MAX_ATOMIC_NUMBER} (αZ must stay below 1)",
                    iso.isotope, iso.z
                )));
            }
            check_percent(&iso.isotope, "branching_percent", iso.branching_percent)?;
            let mut transitions = Vec::with_capacity(iso.transitions.len());
            for t in &iso.transitions {
                check_percent(&iso.isotope, "intensity_percent", t.intensity_percent)?;
                if !t.endpoint_kev.is_finite() || t.endpoint_kev < 0.0 {
                    return Err(SpectrumError::ConfigError(format!(
                        "{}: invalid end-point energy {} keV",
                        iso.isotope, t.endpoint_kev
                    )));
                }
                transitions.push(BetaTransition {
                    endpoint_mev: t.endpoint_kev / KEV_PER_MEV,
                    intensity: t.intensity_percent / 100.0,
                });
            }
            chain.add_isotope(
                ChainIsotope {
                    name: iso.isotope.clone(),
                    mass_number: iso.a,
                    atomic_number: iso.z,
                    branching_fraction: iso.branching_percent / 100.0,
                },
                transitions,
            );
        }
        Ok(chain)
    }
}

fn check_percent(isotope: &str, field: &str, value: f64) -> SpectrumResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(SpectrumError::ConfigError(format!(
            "{isotope}: {field} must be within [0, 100], got {value}"
        )));
    }
    Ok(())
}
