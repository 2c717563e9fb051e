// ─────────────────────────────────────────────────────────────────────
// SCPN Antineutrino Backgrounds — Property-Based Tests (proptest) for antinu-spectra
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for antinu-spectra using proptest.
//!
//! Covers: end-point masking, non-negativity, Fermi function at Z = 0,
//! unit normalization of chain branches, reactor composition.

use antinu_math::quadrature::rectangle_sum;
use antinu_spectra::beta::beta_spectrum;
use antinu_spectra::chain::chain_spectrum;
use antinu_spectra::fermi::fermi_function;
use antinu_spectra::reactor::{FissileIsotope, ReactorModel};
use antinu_types::decay::{BetaTransition, ChainIsotope, DecayChain, DecayChainKind};
use antinu_types::grid::EnergyGrid;
use proptest::prelude::*;

// ── Single-Transition Spectrum ───────────────────────────────────────

proptest! {
    /// Every grid point at or above Q is exactly zero.
    #[test]
    fn endpoint_mask(
        q in 0.05f64..5.0,
        a in 1u32..250,
        z in 0u32..95,
        n in 3usize..300,
    ) {
        let grid = EnergyGrid::linspace(0.0, 6.0, n).unwrap();
        let spec = beta_spectrum(q, a, z, grid.as_slice());
        for (e, v) in grid.as_slice().iter().zip(spec.iter()) {
            if *e >= q {
                prop_assert_eq!(*v, 0.0, "E = {} >= Q = {}", e, q);
            }
        }
    }

    /// Output is finite and non-negative for grids inside (0, Q).
    #[test]
    fn non_negative(
        q in 0.05f64..5.0,
        a in 1u32..250,
        z in 0u32..95,
        n in 3usize..200,
    ) {
        let grid = EnergyGrid::linspace(q * 1e-3, q * 0.999, n).unwrap();
        let spec = beta_spectrum(q, a, z, grid.as_slice());
        for &v in spec.iter() {
            prop_assert!(v.is_finite(), "non-finite rate {}", v);
            prop_assert!(v > 0.0, "rate {} inside (0, Q)", v);
        }
    }

    /// Z = 0 removes the Coulomb correction entirely.
    #[test]
    fn fermi_z_zero(a in 1u32..250, t_e in 1e-4f64..10.0) {
        let w = t_e + 0.511;
        let p = (t_e * (t_e + 2.0 * 0.511)).sqrt();
        let f = fermi_function(0, a, w, p);
        prop_assert!((f - 1.0).abs() < 1e-10, "F(Z=0) = {}", f);
    }
}

// ── Chain Aggregation ────────────────────────────────────────────────

proptest! {
    /// Each normalized branch integrates to its scale factor.
    #[test]
    fn branch_unit_normalization(
        q in 0.2f64..3.5,
        z in 1u32..90,
        branching in 0.01f64..=1.0,
        intensity in 0.01f64..=1.0,
    ) {
        let mut chain = DecayChain::new(DecayChainKind::U238);
        chain.add_isotope(
            ChainIsotope {
                name: "X".into(),
                mass_number: 2 * z + 10,
                atomic_number: z,
                branching_fraction: branching,
            },
            vec![BetaTransition { endpoint_mev: q, intensity }],
        );
        let grid = EnergyGrid::linspace(0.0, 4.0, 401).unwrap();
        let result = chain_spectrum(&chain, &grid).unwrap();
        let branch = &result.branches[0];
        prop_assert!(branch.normalized);
        let area = rectangle_sum(branch.spectrum.view(), grid.bin_width()) / branch.scale;
        prop_assert!((area - 1.0).abs() < 1e-6, "area = {}", area);
        prop_assert!((branch.scale - branching * intensity).abs() < 1e-15);
    }
}

// ── Reactor Spectrum ─────────────────────────────────────────────────

proptest! {
    /// full_spectrum = Σ S_i · N_i at every energy, for any power.
    #[test]
    fn reactor_composition(power in 1e6f64..5e9, e in 1.8f64..9.0) {
        let model = ReactorModel::new(power).unwrap();
        let full = model.full_spectrum(&[e])[0];
        let expected: f64 = FissileIsotope::ALL
            .iter()
            .map(|&iso| model.fit(iso).spectrum_per_fission(e) * model.fission_rate(iso))
            .sum();
        prop_assert!((full - expected).abs() <= 1e-12 * expected.abs());
    }
}
