// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Allowed Beta Spectrum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Antineutrino spectrum of a single allowed beta transition.
//!
//! For an end-point Q the electron carries the kinetic energy left over by
//! the antineutrino, T_e = Q − E_ν, so
//!   W_e = Q − E_ν + m_e,   p_e = √(T_e (T_e + 2 m_e)),
//!   dN/dE_ν ∝ p_e W_e E_ν² F(Z, W_e).

use antinu_types::constants::M_ELECTRON_MEV;
use ndarray::Array1;

use crate::fermi::fermi_function;

/// Electron total energy and momentum for antineutrino energy `e_nu`.
///
/// Only meaningful for `e_nu < q`.
pub fn electron_kinematics(q_mev: f64, e_nu: f64) -> (f64, f64) {
    let t_e = q_mev - e_nu;
    let w_e = t_e + M_ELECTRON_MEV;
    let p_e = t_e.sqrt() * (t_e + 2.0 * M_ELECTRON_MEV).sqrt();
    (w_e, p_e)
}

/// True when `e_nu` is kinematically allowed for end-point `q_mev`.
///
/// E_ν ≥ Q is forbidden; E_ν ≤ 0 carries no rate (E_ν² = 0 at the origin)
/// and is masked too.
#[inline]
pub fn is_allowed(q_mev: f64, e_nu: f64) -> bool {
    e_nu > 0.0 && e_nu < q_mev
}

/// Unnormalized emission rate at a single antineutrino energy.
///
/// Returns exactly 0 outside the allowed window; the Fermi function is only
/// evaluated inside it.
pub fn beta_rate(q_mev: f64, a: u32, z: u32, e_nu: f64) -> f64 {
    if !is_allowed(q_mev, e_nu) {
        return 0.0;
    }
    let (w_e, p_e) = electron_kinematics(q_mev, e_nu);
    p_e * w_e * e_nu * e_nu * fermi_function(z, a, w_e, p_e)
}

/// Antineutrino spectrum of one beta branch on `energies` [MeV].
///
/// Output is aligned with `energies`; points at or above the end-point are
/// zero.
pub fn beta_spectrum(q_mev: f64, a: u32, z: u32, energies: &[f64]) -> Array1<f64> {
    energies
        .iter()
        .map(|&e_nu| beta_rate(q_mev, a, z, e_nu))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_mask_and_shape() {
        let grid = [0.0, 0.25, 0.5, 0.75, 0.99, 1.0, 1.25];
        let spec = beta_spectrum(1.0, 1, 1, &grid);

        assert_eq!(spec.len(), grid.len());
        assert_eq!(spec[5], 0.0, "E = Q must be masked");
        assert_eq!(spec[6], 0.0, "E > Q must be masked");
        assert_eq!(spec[0], 0.0, "E = 0 carries no rate");
        for i in 1..5 {
            assert!(spec[i] > 0.0, "spec[{i}] = {}", spec[i]);
        }
        // Rises then falls before the end-point.
        assert!(spec[1] < spec[2] && spec[2] < spec[3]);
        assert!(spec[4] < spec[3]);
    }

    #[test]
    fn test_negative_energy_is_masked() {
        assert!(!is_allowed(1.0, -1e-3));
        let spec = beta_spectrum(1.0, 1, 1, &[-0.5, -1e-3, 0.5]);
        assert_eq!(spec[0], 0.0);
        assert_eq!(spec[1], 0.0);
        assert!(spec[2] > 0.0);
    }

    #[test]
    fn test_kinematics() {
        let (w, p) = electron_kinematics(2.0, 0.5);
        assert!((w - (1.5 + M_ELECTRON_MEV)).abs() < 1e-12);
        // p² = W² − m²
        assert!((p * p - (w * w - M_ELECTRON_MEV * M_ELECTRON_MEV)).abs() < 1e-12);
    }

    #[test]
    fn test_endpoint_below_grid_is_zero() {
        let grid: Vec<f64> = (0..50).map(|i| 1.0 + 0.1 * i as f64).collect();
        let spec = beta_spectrum(0.8, 40, 20, &grid);
        assert!(spec.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_non_positive_endpoint() {
        let grid = [0.1, 0.2, 0.3];
        assert!(beta_spectrum(0.0, 40, 20, &grid).iter().all(|&v| v == 0.0));
        assert!(beta_spectrum(-1.0, 40, 20, &grid).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_high_z_finite_up_to_endpoint() {
        // Bi-214 main branch, sampled up to 1 eV below Q.
        let q = 3.270;
        let grid = [0.01, 1.0, 2.0, 3.0, 3.26, q - 1e-6];
        let spec = beta_spectrum(q, 214, 84, &grid);
        for (i, &v) in spec.iter().enumerate() {
            assert!(v.is_finite() && v > 0.0, "spec[{i}] = {v}");
        }
    }
}
