// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Detector Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Far-field acceptance of a rectangular detector face.
//!
//! The detector is taken to be far enough from the source for the
//! small-angle approximation: the source emits isotropically over a sphere
//! of radius d, and the detector intercepts its face area h·w of it.

use std::f64::consts::PI;

use antinu_types::config::DetectorConfig;
use antinu_types::constants::CM_PER_M;
use antinu_types::error::{SpectrumError, SpectrumResult};
use ndarray::Array1;

use crate::material::TargetMaterial;

#[derive(Debug, Clone, PartialEq)]
pub struct Detector {
    pub material: TargetMaterial,
    /// Distance to the source (reactor core) [m].
    pub distance_m: f64,
    /// Target mass [kg].
    pub mass_kg: f64,
    pub height_m: f64,
    pub width_m: f64,
}

/// Geometric acceptance at the detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceptance {
    /// 1 / (4π d²) [cm⁻²].
    pub flux_factor_per_cm2: f64,
    /// Fraction of the full sphere subtended by the detector face.
    pub solid_angle_fraction: f64,
}

impl Detector {
    /// 1 t, 1 m × 1 m face, 100 m from the source.
    pub fn new(material: TargetMaterial) -> Self {
        Detector {
            material,
            distance_m: 100.0,
            mass_kg: 1000.0,
            height_m: 1.0,
            width_m: 1.0,
        }
    }

    pub fn from_config(config: &DetectorConfig) -> SpectrumResult<Self> {
        let detector = Detector {
            material: config.material.parse()?,
            distance_m: config.distance_m,
            mass_kg: config.mass_kg,
            height_m: config.height_m,
            width_m: config.width_m,
        };
        for (field, value) in [
            ("distance_m", detector.distance_m),
            ("mass_kg", detector.mass_kg),
            ("height_m", detector.height_m),
            ("width_m", detector.width_m),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SpectrumError::ConfigError(format!(
                    "detector {field} must be positive, got {value}"
                )));
            }
        }
        Ok(detector)
    }

    /// Area of the sphere through the detector [cm²].
    pub fn sphere_area_cm2(&self) -> f64 {
        let d_cm = self.distance_m * CM_PER_M;
        4.0 * PI * d_cm * d_cm
    }

    pub fn acceptance(&self) -> Acceptance {
        let sphere = self.sphere_area_cm2();
        let face_cm2 = (self.height_m * CM_PER_M) * (self.width_m * CM_PER_M);
        Acceptance {
            flux_factor_per_cm2: 1.0 / sphere,
            solid_angle_fraction: face_cm2 / sphere,
        }
    }

    /// Convert a source emission spectrum [ν/MeV/s] into flux at the
    /// detector [ν/cm²/MeV/s].
    pub fn incident_flux(&self, source: &Array1<f64>) -> Array1<f64> {
        source * self.acceptance().flux_factor_per_cm2
    }

    /// Emission rate intercepted by the detector face [ν/MeV/s].
    pub fn intercepted_rate(&self, source: &Array1<f64>) -> Array1<f64> {
        source * self.acceptance().solid_angle_fraction
    }
}
