//! Mathematical primitives for antineutrino spectrum calculations.

pub mod gamma;
pub mod poly;
pub mod quadrature;
