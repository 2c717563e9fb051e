// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Integrals of sampled spectra.

use ndarray::ArrayView1;

/// Rectangle rule `Σ f_i · dx`.
///
/// This is the normalization integral used for branch spectra, so that a
/// normalized spectrum sums back to exactly 1 with the same `dx`.
pub fn rectangle_sum(values: ArrayView1<f64>, dx: f64) -> f64 {
    values.sum() * dx
}

/// Trapezoid rule over (possibly non-uniform) abscissae `x`.
///
/// Lengths must match; extra samples in the longer input are ignored.
pub fn trapezoid(values: ArrayView1<f64>, x: ArrayView1<f64>) -> f64 {
    let n = values.len().min(x.len());
    let mut total = 0.0;
    for i in 0..n.saturating_sub(1) {
        total += 0.5 * (values[i] + values[i + 1]) * (x[i + 1] - x[i]);
    }
    total
}

/// True if any sample is strictly positive.
pub fn any_positive(values: ArrayView1<f64>) -> bool {
    values.iter().any(|&v| v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_rectangle_constant() {
        let f = Array1::from_elem(10, 2.0);
        assert!((rectangle_sum(f.view(), 0.5) - 10.0).abs() < 1e-14);
    }

    #[test]
    fn test_trapezoid_linear_exact() {
        // ∫_0^2 (3x + 1) dx = 8
        let x = Array1::linspace(0.0, 2.0, 21);
        let f = x.mapv(|v| 3.0 * v + 1.0);
        assert!((trapezoid(f.view(), x.view()) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_nonuniform() {
        let x = Array1::from(vec![0.0, 0.1, 0.5, 2.0]);
        let f = Array1::from_elem(4, 1.0);
        assert!((trapezoid(f.view(), x.view()) - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_any_positive() {
        assert!(!any_positive(Array1::<f64>::zeros(5).view()));
        assert!(any_positive(Array1::from(vec![0.0, 0.0, 1e-300]).view()));
        assert!(!any_positive(Array1::from(vec![-1.0, f64::NAN]).view()));
    }
}
