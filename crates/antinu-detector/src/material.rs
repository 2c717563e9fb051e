//! Target materials and natural isotopic abundances.

use std::fmt;
use std::str::FromStr;

use antinu_types::error::SpectrumError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetMaterial {
    Xenon,
    Argon,
    Germanium,
}

const XENON_ABUNDANCES: [(u32, f64); 9] = [
    (124, 0.000952),
    (126, 0.000890),
    (128, 0.019102),
    (129, 0.264006),
    (130, 0.040710),
    (131, 0.21232),
    (132, 0.269086),
    (134, 0.104257),
    (136, 0.088573),
];

const ARGON_ABUNDANCES: [(u32, f64); 2] = [(36, 0.003373), (40, 0.996627)];

const GERMANIUM_ABUNDANCES: [(u32, f64); 5] = [
    (70, 0.2038),
    (72, 0.2731),
    (73, 0.0776),
    (74, 0.3672),
    (76, 0.0786),
];

impl TargetMaterial {
    pub const ALL: [TargetMaterial; 3] = [Self::Xenon, Self::Argon, Self::Germanium];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Xenon => "xenon",
            Self::Argon => "argon",
            Self::Germanium => "germanium",
        }
    }

    pub fn atomic_number(&self) -> u32 {
        match self {
            Self::Xenon => 54,
            Self::Argon => 18,
            Self::Germanium => 32,
        }
    }

    /// (mass number, natural abundance) pairs, ascending in A.
    pub fn isotopes(&self) -> &'static [(u32, f64)] {
        match self {
            Self::Xenon => &XENON_ABUNDANCES,
            Self::Argon => &ARGON_ABUNDANCES,
            Self::Germanium => &GERMANIUM_ABUNDANCES,
        }
    }

    /// Natural abundance of isotope `mass_number`, 0 if absent.
    pub fn abundance(&self, mass_number: u32) -> f64 {
        self.isotopes()
            .iter()
            .find(|(a, _)| *a == mass_number)
            .map_or(0.0, |(_, f)| *f)
    }

    /// Abundance-weighted mean mass number.
    pub fn mean_mass_number(&self) -> f64 {
        let iso = self.isotopes();
        let norm: f64 = iso.iter().map(|(_, f)| f).sum();
        iso.iter().map(|(a, f)| f64::from(*a) * f).sum::<f64>() / norm
    }
}

impl fmt::Display for TargetMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetMaterial {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xenon" | "xe" => Ok(Self::Xenon),
            "argon" | "ar" => Ok(Self::Argon),
            "germanium" | "ge" => Ok(Self::Germanium),
            other => Err(SpectrumError::ConfigError(format!(
                "unknown target material '{other}'"
            ))),
        }
    }
}
