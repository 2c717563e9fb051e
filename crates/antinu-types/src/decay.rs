// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Decay Chain Data Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Branching-ratio tables for the geoneutrino decay chains.
//!
//! A chain is a per-chain isotope table (A, Z, branching fraction) plus one
//! table of beta transitions per isotope, the same split as the
//! "<chain> chain branching" sheet and the per-isotope sheets it names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SpectrumError;

/// Long-lived parents whose chains produce geoneutrinos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DecayChainKind {
    #[serde(rename = "U-238")]
    U238,
    #[serde(rename = "Th-232")]
    Th232,
    #[serde(rename = "K-40")]
    K40,
}

impl DecayChainKind {
    pub const ALL: [DecayChainKind; 3] = [Self::U238, Self::Th232, Self::K40];

    pub fn name(&self) -> &'static str {
        match self {
            Self::U238 => "U-238",
            Self::Th232 => "Th-232",
            Self::K40 => "K-40",
        }
    }
}

impl fmt::Display for DecayChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DecayChainKind {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "u238" => Ok(Self::U238),
            "th232" => Ok(Self::Th232),
            "k40" => Ok(Self::K40),
            _ => Err(SpectrumError::ConfigError(format!(
                "unknown decay chain '{s}'"
            ))),
        }
    }
}

/// One beta transition (sub-branch) of an isotope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaTransition {
    /// End-point energy Q [MeV].
    pub endpoint_mev: f64,
    /// Fraction of this isotope's decays through the transition (0-1).
    pub intensity: f64,
}

/// Isotope row of a chain branching table.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainIsotope {
    pub name: String,
    /// Mass number A.
    pub mass_number: u32,
    /// Atomic number Z used in the Fermi function.
    pub atomic_number: u32,
    /// Fraction of chain decays that pass through this isotope (0-1).
    pub branching_fraction: f64,
}

/// Flattened view of one sub-branch: isotope data plus one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotopeBranch {
    pub isotope: String,
    pub mass_number: u32,
    pub atomic_number: u32,
    pub branching_fraction: f64,
    pub endpoint_mev: f64,
    pub intensity: f64,
}

impl IsotopeBranch {
    /// Weight applied to the unit-normalized branch spectrum.
    pub fn scale_factor(&self) -> f64 {
        self.branching_fraction * self.intensity
    }
}

/// Branching tables of one decay chain.
///
/// Fractions are not checked to sum to one; tables are taken as given.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayChain {
    pub kind: DecayChainKind,
    /// Isotopes in table order.
    pub isotopes: Vec<ChainIsotope>,
    /// Beta transitions keyed by isotope name.
    pub transitions: BTreeMap<String, Vec<BetaTransition>>,
}

impl DecayChain {
    pub fn new(kind: DecayChainKind) -> Self {
        DecayChain {
            kind,
            isotopes: Vec::new(),
            transitions: BTreeMap::new(),
        }
    }

    /// Append an isotope with its transition table.
    pub fn add_isotope(&mut self, isotope: ChainIsotope, transitions: Vec<BetaTransition>) {
        self.transitions.insert(isotope.name.clone(), transitions);
        self.isotopes.push(isotope);
    }

    /// True when either table has not been loaded.
    pub fn is_empty(&self) -> bool {
        self.isotopes.is_empty() || self.transitions.is_empty()
    }

    /// Every (isotope, transition) pair in table order.
    ///
    /// Returns the name of the first isotope that has no transition table
    /// as the error value.
    pub fn branches(&self) -> Result<Vec<IsotopeBranch>, String> {
        let mut out = Vec::new();
        for iso in &self.isotopes {
            let table = self
                .transitions
                .get(&iso.name)
                .ok_or_else(|| iso.name.clone())?;
            out.extend(table.iter().map(|t| IsotopeBranch {
                isotope: iso.name.clone(),
                mass_number: iso.mass_number,
                atomic_number: iso.atomic_number,
                branching_fraction: iso.branching_fraction,
                endpoint_mev: t.endpoint_mev,
                intensity: t.intensity,
            }));
        }
        Ok(out)
    }
}
