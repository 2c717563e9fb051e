// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Geoneutrino Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Holder for the U-238, Th-232 and K-40 branching tables.
//!
//! Tables are loaded once and read-only afterwards; every spectrum call goes
//! through [`chain_spectrum`] with the stored chain.

use std::collections::BTreeMap;

use antinu_types::config::BackgroundConfig;
use antinu_types::decay::{DecayChain, DecayChainKind};
use antinu_types::error::{SpectrumError, SpectrumResult};
use antinu_types::grid::EnergyGrid;

use crate::chain::{chain_spectrum, ChainSpectrum};

#[derive(Debug, Clone, Default)]
pub struct GeoneutrinoModel {
    chains: BTreeMap<DecayChainKind, DecayChain>,
}

impl GeoneutrinoModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every chain table present in `config`.
    pub fn from_config(config: &BackgroundConfig) -> SpectrumResult<Self> {
        let mut model = Self::new();
        for chain_cfg in &config.chains {
            model.load_chain(chain_cfg.to_chain()?);
        }
        Ok(model)
    }

    /// Store `chain`, replacing any table previously loaded for its kind.
    pub fn load_chain(&mut self, chain: DecayChain) {
        for iso in &chain.isotopes {
            tracing::info!(chain = %chain.kind, "Adding {}", iso.name);
        }
        self.chains.insert(chain.kind, chain);
    }

    pub fn is_loaded(&self, kind: DecayChainKind) -> bool {
        self.chains.get(&kind).is_some_and(|c| !c.is_empty())
    }

    pub fn chain(&self, kind: DecayChainKind) -> Option<&DecayChain> {
        self.chains.get(&kind)
    }

    /// Aggregated spectrum of one chain on `grid`.
    pub fn spectrum(&self, kind: DecayChainKind, grid: &EnergyGrid) -> SpectrumResult<ChainSpectrum> {
        let chain = self.chains.get(&kind).ok_or_else(|| {
            tracing::error!(chain = %kind, "no data loaded");
            SpectrumError::MissingData {
                chain: kind.to_string(),
            }
        })?;
        chain_spectrum(chain, grid)
    }

    pub fn u238_spectrum(&self, grid: &EnergyGrid) -> SpectrumResult<ChainSpectrum> {
        self.spectrum(DecayChainKind::U238, grid)
    }

    pub fn th232_spectrum(&self, grid: &EnergyGrid) -> SpectrumResult<ChainSpectrum> {
        self.spectrum(DecayChainKind::Th232, grid)
    }

    pub fn k40_spectrum(&self, grid: &EnergyGrid) -> SpectrumResult<ChainSpectrum> {
        self.spectrum(DecayChainKind::K40, grid)
    }
}
