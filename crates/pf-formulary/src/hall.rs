//! Hall parameter.

use crate::collisions::{ClassicalCollisions, CollisionFrequencies};
use crate::error::FormularyResult;
use crate::frequencies::{GyrofrequencyOptions, gyrofrequency};
use crate::validate::params;
use crate::warning::{Evaluation, Warnings};
use pf_core::{Input, Unit};
use pf_particles::{ParticleResolver, ParticleTable};
use tracing::debug;

/// Optional arguments of [`hall_parameter`].
#[derive(Debug, Clone, PartialEq)]
pub struct HallParameterOptions<'a> {
    pub particle: &'a str,
    /// Fixed Coulomb logarithm; computed when absent.
    pub coulomb_log: Option<f64>,
    /// Relative speed; the thermal speed of the reduced mass when absent.
    pub v: Option<Input>,
    pub coulomb_log_method: &'a str,
}

impl Default for HallParameterOptions<'_> {
    fn default() -> Self {
        Self {
            particle: "e-",
            coulomb_log: None,
            v: None,
            coulomb_log_method: ClassicalCollisions::METHOD,
        }
    }
}

/// Ratio of gyrofrequency to collision frequency, `(ω_c / rad) / ν`, using
/// [`ClassicalCollisions`].
pub fn hall_parameter(
    n: impl Into<Input>,
    t: impl Into<Input>,
    b: impl Into<Input>,
    ion_particle: &str,
    options: HallParameterOptions<'_>,
) -> FormularyResult<Evaluation> {
    hall_parameter_with(&ClassicalCollisions, n, t, b, ion_particle, options)
}

/// [`hall_parameter`] with a caller-supplied collision model.
pub fn hall_parameter_with(
    collisions: &dyn CollisionFrequencies,
    n: impl Into<Input>,
    t: impl Into<Input>,
    b: impl Into<Input>,
    ion_particle: &str,
    options: HallParameterOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let n = params::NUMBER_DENSITY.require("n", n, &mut warnings)?;
    let t = params::TEMPERATURE.require("T", t, &mut warnings)?;
    let b = params::MAGNETIC_FIELD.require("B", b, &mut warnings)?;
    let v = params::SPEED.optional().validate("V", options.v, &mut warnings)?;

    let omega_c = gyrofrequency(
        &b,
        GyrofrequencyOptions {
            particle: options.particle,
            ..Default::default()
        },
    )?
    .absorb_into(&mut warnings)
    .without_angle();

    let nu = if ParticleTable.resolve(options.particle)?.is_electron() {
        debug!(ion_particle, "Hall parameter from electron collision frequency");
        collisions.electron_collision_frequency(
            &t,
            &n,
            ion_particle,
            options.coulomb_log,
            v.as_ref(),
            options.coulomb_log_method,
        )?
    } else {
        debug!(ion_particle, "Hall parameter from ion collision frequency");
        collisions.ion_collision_frequency(&t, &n, ion_particle, options.coulomb_log, v.as_ref())?
    };

    let ratio = omega_c.div(&nu)?;
    let ratio = params::DIMENSIONLESS
        .validate_return("hall_parameter", ratio)?
        .to(Unit::DIMENSIONLESS)?;
    Ok(Evaluation::new(ratio, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormularyError;
    use pf_core::units::{k, tesla};
    use pf_core::{Dimension, PhysicalQuantity};
    use std::sync::Mutex;

    /// Fixed-rate model that records which rate was asked for.
    #[derive(Default)]
    struct FixedRate {
        calls: Mutex<Vec<&'static str>>,
    }

    impl CollisionFrequencies for FixedRate {
        fn electron_collision_frequency(
            &self,
            _t: &PhysicalQuantity,
            _n: &PhysicalQuantity,
            _ion: &str,
            _coulomb_log: Option<f64>,
            _v: Option<&PhysicalQuantity>,
            _coulomb_log_method: &str,
        ) -> FormularyResult<PhysicalQuantity> {
            self.calls.lock().unwrap().push("electron");
            Ok(PhysicalQuantity::from_si(1e9, Dimension::FREQUENCY))
        }

        fn ion_collision_frequency(
            &self,
            _t: &PhysicalQuantity,
            _n: &PhysicalQuantity,
            _ion: &str,
            _coulomb_log: Option<f64>,
            _v: Option<&PhysicalQuantity>,
        ) -> FormularyResult<PhysicalQuantity> {
            self.calls.lock().unwrap().push("ion");
            Ok(PhysicalQuantity::from_si(1e6, Dimension::FREQUENCY))
        }
    }

    fn n() -> PhysicalQuantity {
        PhysicalQuantity::new(1e20, Unit::PER_CUBIC_METER)
    }

    #[test]
    fn electron_hall_parameter_uses_electron_rate() {
        let model = FixedRate::default();
        let h = hall_parameter_with(&model, n(), k(1e6), tesla(0.1), "p+", Default::default())
            .unwrap();
        let omega_ce = 1.602_176_634e-19 * 0.1 / 9.109_383_701_5e-31;
        assert!((h.scalar().unwrap() - omega_ce / 1e9).abs() < 1e-9);
        assert_eq!(h.quantity().dimension(), Dimension::DIMENSIONLESS);
        assert_eq!(*model.calls.lock().unwrap(), vec!["electron"]);
    }

    #[test]
    fn ion_hall_parameter_uses_ion_rate() {
        let model = FixedRate::default();
        let options = HallParameterOptions {
            particle: "p+",
            ..Default::default()
        };
        hall_parameter_with(&model, n(), k(1e6), tesla(0.1), "p+", options).unwrap();
        assert_eq!(*model.calls.lock().unwrap(), vec!["ion"]);
    }

    #[test]
    fn classical_model_gives_finite_positive_ratio() {
        let h = hall_parameter(n(), k(1e6), tesla(0.1), "p+", Default::default()).unwrap();
        let h = h.scalar().unwrap();
        assert!(h.is_finite() && h > 0.0);
    }

    #[test]
    fn rejects_negative_density() {
        let n = PhysicalQuantity::new(-1.0, Unit::PER_CUBIC_METER);
        assert!(matches!(
            hall_parameter(n, k(1e6), tesla(0.1), "p+", Default::default()),
            Err(FormularyError::NegativeValue { param: "n" })
        ));
    }
}
