//! Speed-of-light guard for formulas that return speeds.

use crate::error::{FormularyError, FormularyResult};
use crate::warning::{PlasmaWarning, Warnings};
use pf_core::constants::C;
use pf_core::{Dimension, PhysicalQuantity};
use tracing::debug;

/// Fraction of the speed of light above which a warning is raised.
pub const BETA_WARNING: f64 = 0.05;

/// Check a computed speed against the speed of light.
///
/// `beta = max |v| / c`. At or above 1 the call fails; at or above
/// [`BETA_WARNING`] a [`PlasmaWarning::Relativity`] is raised. NaN speeds fail
/// as invalid values.
pub fn check_relativistic(
    function: &'static str,
    speed: PhysicalQuantity,
    warnings: &mut Warnings,
) -> FormularyResult<PhysicalQuantity> {
    if speed.dimension() != Dimension::VELOCITY {
        return Err(FormularyError::Dimension {
            param: function,
            found: speed.dimension(),
            expected: Dimension::VELOCITY.to_string(),
        });
    }
    if speed.value().any(f64::is_nan) {
        return Err(FormularyError::InvalidValue { param: function });
    }

    let beta = speed.value().max_abs() / C;
    debug!(function, beta, "relativity check");
    if beta >= 1.0 {
        return Err(FormularyError::Relativity { function, beta });
    }
    if beta >= BETA_WARNING {
        warnings.push(PlasmaWarning::Relativity { function, beta });
    }
    Ok(speed)
}
