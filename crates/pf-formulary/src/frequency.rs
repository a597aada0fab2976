//! Angular frequency and cycle frequency.

use crate::error::FormularyResult;
use pf_core::{Dimension, PhysicalQuantity, Unit};
use std::f64::consts::TAU;

/// One radian, for attaching the angle to a plain `s^-1` rate.
pub(crate) fn radian() -> PhysicalQuantity {
    PhysicalQuantity::from_si(1.0, Dimension::ANGLE)
}

/// Return `omega` in rad/s, or divided by 2π and labelled Hz when `to_hz`.
///
/// Only rad/s input is relabelled; the division is explicit so that Hz is
/// never produced by dropping the radian alone.
pub fn angular_to_hz(omega: PhysicalQuantity, to_hz: bool) -> FormularyResult<PhysicalQuantity> {
    omega.expect_dimension(Dimension::ANGULAR_FREQUENCY, "angular frequency")?;
    if !to_hz {
        return Ok(omega.to(Unit::RADIAN_PER_SECOND)?);
    }
    let cycles = omega.value().map(|w| w / TAU);
    Ok(PhysicalQuantity::new(cycles, Unit::HERTZ))
}
