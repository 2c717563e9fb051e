// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Fermi Function
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Coulomb correction for allowed beta decay.
//!
//! F(Z, W) = 4 (2pR/ħc)^(2γ−2) · exp(πη) · |Γ(γ + iη)|² / Γ(2γ + 1)²
//! with R = 1.2 A^(1/3) fm, η = αZW/p, γ = √(1 − (αZ)²).

use antinu_math::gamma::{ln_gamma, ln_gamma_complex};
use antinu_types::constants::{ALPHA_FINE, HBAR_C_MEV_FM, NUCLEAR_RADIUS_R0_FM};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Nuclear radius [fm] for mass number `a`.
pub fn nuclear_radius_fm(a: u32) -> f64 {
    NUCLEAR_RADIUS_R0_FM * f64::from(a).cbrt()
}

/// Relativistic Fermi function.
///
/// `z` is the atomic number of the daughter nucleus, `a` the mass number,
/// `w_e` the total electron energy [MeV] and `p_e` the electron momentum
/// [MeV/c]. Requires `w_e > 0`, `p_e > 0` and `αZ < 1`; callers guard the
/// kinematics with the end-point mask in [`crate::beta`].
///
/// exp(πη)·|Γ(γ+iη)|² is combined in log space: each factor alone overflows
/// once η reaches a few hundred, which happens within eV of the end-point.
pub fn fermi_function(z: u32, a: u32, w_e: f64, p_e: f64) -> f64 {
    let radius_fm = nuclear_radius_fm(a);
    let alpha_z = ALPHA_FINE * f64::from(z);
    let eta = alpha_z * w_e / p_e;
    let gamma = (1.0 - alpha_z * alpha_z).sqrt();

    let shape = (2.0 * p_e * radius_fm / HBAR_C_MEV_FM).powf(2.0 * gamma - 2.0);
    let ln_coulomb = PI * eta + 2.0 * ln_gamma_complex(Complex64::new(gamma, eta)).re
        - 2.0 * ln_gamma(2.0 * gamma + 1.0);

    4.0 * shape * ln_coulomb.exp()
}
