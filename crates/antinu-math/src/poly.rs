//! Polynomial evaluation.

/// Evaluate `Σ c_k x^k` by Horner's rule. Coefficients are ascending
/// (`coeffs[0]` is the constant term); an empty slice evaluates to 0.
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// `exp(Σ c_k x^k)`, the form of empirical log-spectrum fits.
pub fn exp_poly(coeffs: &[f64], x: f64) -> f64 {
    horner(coeffs, x).exp()
}
