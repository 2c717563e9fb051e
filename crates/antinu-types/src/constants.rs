// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Electron rest mass (MeV/c²).
pub const M_ELECTRON_MEV: f64 = 0.511;

/// Fine-structure constant, rounded to 1/137 as in the reference spectra.
pub const ALPHA_FINE: f64 = 1.0 / 137.0;

/// Largest atomic number with αZ < 1 (γ = √(1 − (αZ)²) stays real).
pub const MAX_ATOMIC_NUMBER: u32 = 136;

/// ħc (MeV·fm).
pub const HBAR_C_MEV_FM: f64 = 197.3;

/// Nuclear radius parameter r0 (fm), R = r0 · A^(1/3).
pub const NUCLEAR_RADIUS_R0_FM: f64 = 1.2;

/// Energy conversion (MeV/J).
pub const MEV_PER_JOULE: f64 = 6.242e12;

/// Default reactor thermal power (W).
pub const DEFAULT_REACTOR_POWER_W: f64 = 1e9;

pub const KEV_PER_MEV: f64 = 1.0e3;

pub const CM_PER_M: f64 = 100.0;
