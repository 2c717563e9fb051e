// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Energy Grid
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{SpectrumError, SpectrumResult};
use ndarray::Array1;

/// Minimum number of points: the bin width is read off points 1 and 2.
pub const MIN_GRID_POINTS: usize = 3;

/// Antineutrino energy grid [MeV], strictly increasing.
///
/// Spectra computed on the grid are aligned 1:1 with `energies`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyGrid {
    energies: Array1<f64>,
}

impl EnergyGrid {
    /// Wrap caller-supplied energies. Rejects short, non-finite or
    /// non-increasing input.
    pub fn new(energies: Vec<f64>) -> SpectrumResult<Self> {
        if energies.len() < MIN_GRID_POINTS {
            return Err(SpectrumError::InvalidGrid(format!(
                "need at least {MIN_GRID_POINTS} points, got {}",
                energies.len()
            )));
        }
        if let Some(bad) = energies.iter().position(|e| !e.is_finite()) {
            return Err(SpectrumError::InvalidGrid(format!(
                "non-finite energy at index {bad}"
            )));
        }
        if let Some(i) = energies.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SpectrumError::InvalidGrid(format!(
                "energies must be strictly increasing: e[{}]={} >= e[{}]={}",
                i,
                energies[i],
                i + 1,
                energies[i + 1]
            )));
        }
        Ok(EnergyGrid {
            energies: Array1::from(energies),
        })
    }

    /// Uniform grid, `np.linspace(e_min, e_max, points)`.
    pub fn linspace(e_min: f64, e_max: f64, points: usize) -> SpectrumResult<Self> {
        if e_min.is_nan() || e_max.is_nan() || e_max <= e_min {
            return Err(SpectrumError::InvalidGrid(format!(
                "e_max ({e_max}) must exceed e_min ({e_min})"
            )));
        }
        Self::new(Array1::linspace(e_min, e_max, points).to_vec())
    }

    pub fn energies(&self) -> &Array1<f64> {
        &self.energies
    }

    pub fn as_slice(&self) -> &[f64] {
        // Built from a Vec, so always contiguous.
        self.energies.as_slice().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.energies[0]
    }

    pub fn max(&self) -> f64 {
        self.energies[self.energies.len() - 1]
    }

    /// Bin width used for spectrum normalization: `E[2] - E[1]`.
    ///
    /// Assumes uniform spacing; on a non-uniform grid this is simply the
    /// width of the second interval.
    pub fn bin_width(&self) -> f64 {
        self.energies[2] - self.energies[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_grid() {
        let grid = EnergyGrid::linspace(0.0, 10.0, 101).unwrap();
        assert_eq!(grid.len(), 101);
        assert!((grid.bin_width() - 0.1).abs() < 1e-12);
        assert!((grid.min() - 0.0).abs() < 1e-15);
        assert!((grid.max() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_bin_width_uses_second_interval() {
        let grid = EnergyGrid::new(vec![0.0, 0.25, 0.5, 0.75, 0.99, 1.0, 1.25]).unwrap();
        assert!((grid.bin_width() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_short_grid() {
        let err = EnergyGrid::new(vec![0.1, 0.2]).unwrap_err();
        match err {
            SpectrumError::InvalidGrid(msg) => assert!(msg.contains("at least 3")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_unordered_grid() {
        assert!(EnergyGrid::new(vec![0.1, 0.3, 0.2, 0.4]).is_err());
        assert!(EnergyGrid::new(vec![0.1, 0.2, 0.2, 0.4]).is_err());
    }

    #[test]
    fn test_rejects_nan() {
        assert!(EnergyGrid::new(vec![0.1, f64::NAN, 0.3]).is_err());
        assert!(EnergyGrid::linspace(1.0, 1.0, 10).is_err());
    }
}
