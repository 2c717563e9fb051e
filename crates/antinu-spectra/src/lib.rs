// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Spectra
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Antineutrino spectrum engine.
//!
//! Allowed beta spectra with the relativistic Fermi function, branching-ratio
//! weighted decay-chain sums for U-238, Th-232 and K-40, and the four-isotope
//! reactor spectrum.

pub mod beta;
pub mod chain;
pub mod fermi;
pub mod geoneutrino;
pub mod reactor;
