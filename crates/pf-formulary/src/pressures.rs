//! Pressures and energy densities.

use crate::error::FormularyResult;
use crate::validate::params;
use crate::warning::{Evaluation, Warnings};
use pf_core::constants::{k_b, mu0};
use pf_core::{Input, Unit};

/// Thermal pressure `p = n k_B T`.
pub fn thermal_pressure(t: impl Into<Input>, n: impl Into<Input>) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let t = params::TEMPERATURE.require("T", t, &mut warnings)?;
    let n = params::NUMBER_DENSITY.require("n", n, &mut warnings)?;

    let p = n.mul(&k_b())?.mul(&t)?;
    let p = params::PRESSURE
        .validate_return("thermal_pressure", p)?
        .to(Unit::PASCAL)?;
    Ok(Evaluation::new(p, warnings))
}

/// Magnetic pressure `p_B = B² / (2 μ0)`.
pub fn magnetic_pressure(b: impl Into<Input>) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let b = params::MAGNETIC_FIELD.require("B", b, &mut warnings)?;
    let p = b.powi(2).div(&mu0().scale(2.0))?;
    let p = params::PRESSURE
        .validate_return("magnetic_pressure", p)?
        .to(Unit::PASCAL)?;
    Ok(Evaluation::new(p, warnings))
}

/// Magnetic energy density `B² / (2 μ0)`, in J/m³.
pub fn magnetic_energy_density(b: impl Into<Input>) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let p = magnetic_pressure(b)?.absorb_into(&mut warnings);
    Ok(Evaluation::new(p.to(Unit::JOULE_PER_CUBIC_METER)?, warnings))
}
