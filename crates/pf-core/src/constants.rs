//! Physical constants (CODATA 2018, SI).

use crate::dimension::Dimension;
use crate::quantity::PhysicalQuantity;

/// Speed of light in vacuum [m/s].
pub const C: f64 = 299_792_458.0;
/// Vacuum magnetic permeability [N/A²].
pub const MU0: f64 = 1.256_637_062_12e-6;
/// Vacuum electric permittivity [F/m].
pub const EPS0: f64 = 8.854_187_812_8e-12;
/// Elementary charge [C].
pub const E: f64 = 1.602_176_634e-19;
/// Boltzmann constant [J/K].
pub const K_B: f64 = 1.380_649e-23;
/// Reduced Planck constant [J s].
pub const HBAR: f64 = 1.054_571_817e-34;
/// Atomic mass constant [kg].
pub const AMU: f64 = 1.660_539_066_60e-27;

/// Electron mass [kg].
pub const M_E: f64 = 9.109_383_701_5e-31;
/// Proton mass [kg].
pub const M_P: f64 = 1.672_621_923_69e-27;
/// Neutron mass [kg].
pub const M_N: f64 = 1.674_927_498_04e-27;
/// Deuteron mass [kg].
pub const M_D: f64 = 3.343_583_772_4e-27;
/// Triton mass [kg].
pub const M_T: f64 = 5.007_356_744_6e-27;
/// Alpha particle mass [kg].
pub const M_ALPHA: f64 = 6.644_657_335_7e-27;

pub fn c() -> PhysicalQuantity {
    PhysicalQuantity::from_si(C, Dimension::VELOCITY)
}

pub fn mu0() -> PhysicalQuantity {
    PhysicalQuantity::from_si(MU0, Dimension::PERMEABILITY)
}

pub fn eps0() -> PhysicalQuantity {
    PhysicalQuantity::from_si(EPS0, Dimension::PERMITTIVITY)
}

pub fn e() -> PhysicalQuantity {
    PhysicalQuantity::from_si(E, Dimension::CHARGE)
}

pub fn k_b() -> PhysicalQuantity {
    PhysicalQuantity::from_si(K_B, Dimension::ENTROPY)
}

pub fn hbar() -> PhysicalQuantity {
    PhysicalQuantity::from_si(HBAR, Dimension::ACTION)
}

pub fn m_e() -> PhysicalQuantity {
    PhysicalQuantity::from_si(M_E, Dimension::MASS)
}
