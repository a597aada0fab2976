//! Characteristic lengths and dimensionless numbers.

use crate::error::{FormularyError, FormularyResult};
use crate::frequencies::{
    GyrofrequencyOptions, PlasmaFrequencyOptions, gyrofrequency, plasma_frequency,
};
use crate::speeds::{ThermalSpeedOptions, thermal_speed};
use crate::validate::{ValidationSpec, params};
use crate::warning::{Evaluation, Warnings};
use pf_core::constants::{c, e, eps0, k_b};
use pf_core::{Dimension, Input, PhysicalQuantity, Shape, Unit};
use pf_particles::{ParticleResolver, ParticleTable};
use std::f64::consts::PI;

const VPERP: ValidationSpec = ValidationSpec::new(&[Dimension::VELOCITY])
    .allowing_nan()
    .optional();

/// Debye length `λ_D = sqrt(ε0 k_B T_e / (n_e e²))`.
pub fn debye_length(t_e: impl Into<Input>, n_e: impl Into<Input>) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let t_e = params::TEMPERATURE.require("T_e", t_e, &mut warnings)?;
    let n_e = params::NUMBER_DENSITY.require("n_e", n_e, &mut warnings)?;

    let lambda = eps0()
        .mul(&k_b())?
        .mul(&t_e)?
        .div(&n_e.mul(&e().powi(2))?)?
        .sqrt()?;
    let lambda = params::LENGTH
        .validate_return("debye_length", lambda)?
        .to(Unit::METER)?;
    Ok(Evaluation::new(lambda, warnings))
}

/// Number of electrons in a Debye sphere, `N_D = (4π/3) n_e λ_D³`.
pub fn debye_number(t_e: impl Into<Input>, n_e: impl Into<Input>) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let t_e = params::TEMPERATURE.require("T_e", t_e, &mut warnings)?;
    let n_e = params::NUMBER_DENSITY.require("n_e", n_e, &mut warnings)?;

    let lambda = debye_length(&t_e, &n_e)?.absorb_into(&mut warnings);
    let number = n_e.mul(&lambda.powi(3))?.scale(4.0 * PI / 3.0);
    let number = params::DIMENSIONLESS
        .validate_return("debye_number", number)?
        .to(Unit::DIMENSIONLESS)?;
    Ok(Evaluation::new(number, warnings))
}

/// Inertial length `d = c / ω_p` of a charged species.
pub fn inertial_length(n: impl Into<Input>, particle: &str) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let n = params::NUMBER_DENSITY.require("n", n, &mut warnings)?;
    ParticleTable.resolve_charged(particle)?;

    let omega_p = plasma_frequency(
        &n,
        PlasmaFrequencyOptions {
            particle,
            ..Default::default()
        },
    )?
    .absorb_into(&mut warnings);
    let length = c().div(&omega_p)?;
    let length = params::LENGTH
        .validate_return("inertial_length", length)?
        .to(Unit::METER)?;
    Ok(Evaluation::new(length, warnings))
}

/// Optional arguments of [`gyroradius`]. Exactly one of `vperp`, `t_i`
/// must be finite at every index.
#[derive(Debug, Clone, PartialEq)]
pub struct GyroradiusOptions<'a> {
    pub particle: &'a str,
    /// Perpendicular speed; NaN marks "use temperature".
    pub vperp: Option<Input>,
    /// Temperature giving the most probable thermal speed; NaN marks "use
    /// speed".
    pub t_i: Option<Input>,
}

impl Default for GyroradiusOptions<'_> {
    fn default() -> Self {
        Self {
            particle: "e-",
            vperp: None,
            t_i: None,
        }
    }
}

/// Gyroradius `r_L = |V_perp| / ω_c`.
///
/// `V_perp` comes from the explicit speed where finite and from the most
/// probable thermal speed at `T_i` elsewhere. Scalar and sequence inputs may
/// be mixed; a scalar is broadcast.
pub fn gyroradius(
    b: impl Into<Input>,
    options: GyroradiusOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let b = params::MAGNETIC_FIELD.require("B", b, &mut warnings)?;
    let vperp = VPERP
        .validate("Vperp", options.vperp, &mut warnings)?
        .unwrap_or_else(|| PhysicalQuantity::from_si(f64::NAN, Dimension::VELOCITY));
    let t_i = params::TEMPERATURE
        .allowing_nan()
        .optional()
        .validate("T_i", options.t_i, &mut warnings)?
        .unwrap_or_else(|| PhysicalQuantity::from_si(f64::NAN, Dimension::TEMPERATURE));

    let exclusive = vperp
        .value()
        .zip_map(t_i.value(), "Vperp and T_i", |v, t| {
            if v.is_finite() != t.is_finite() { 1.0 } else { 0.0 }
        })?;
    if !exclusive.all(|x| x == 1.0) {
        return Err(FormularyError::InvalidArg {
            what: "must give Vperp or T_i, but not both".into(),
        });
    }

    let finite_scalar = |q: &PhysicalQuantity| q.value().as_scalar().is_some_and(f64::is_finite);
    let speed = match (vperp.value().shape(), t_i.value().shape()) {
        (Shape::Scalar, Shape::Scalar) => {
            if finite_scalar(&t_i) {
                thermal_vperp(&t_i, options.particle, &mut warnings)?
            } else {
                vperp
            }
        }
        (Shape::Scalar, Shape::Array(len)) => {
            if finite_scalar(&vperp) {
                broadcast(&vperp, len)
            } else {
                thermal_vperp(&t_i, options.particle, &mut warnings)?
            }
        }
        (Shape::Array(len), Shape::Scalar) => {
            if finite_scalar(&t_i) {
                broadcast(&thermal_vperp(&t_i, options.particle, &mut warnings)?, len)
            } else {
                vperp
            }
        }
        (Shape::Array(_), Shape::Array(_)) => {
            let mut merged = vperp.value().as_slice().to_vec();
            let from_t: Vec<usize> = t_i
                .value()
                .iter()
                .enumerate()
                .filter_map(|(i, t)| t.is_finite().then_some(i))
                .collect();
            if !from_t.is_empty() {
                let temps = t_i.value().as_slice();
                let temps: Vec<f64> = from_t.iter().map(|&i| temps[i]).collect();
                let temps = PhysicalQuantity::from_si(temps, Dimension::TEMPERATURE);
                let speeds = thermal_vperp(&temps, options.particle, &mut warnings)?;
                for (&i, v) in from_t.iter().zip(speeds.value().iter()) {
                    merged[i] = v;
                }
            }
            PhysicalQuantity::from_si(merged, Dimension::VELOCITY)
        }
    };

    let omega_c = gyrofrequency(
        &b,
        GyrofrequencyOptions {
            particle: options.particle,
            ..Default::default()
        },
    )?
    .absorb_into(&mut warnings);
    let radius = speed.abs().div(&omega_c)?;
    let radius = params::LENGTH
        .validate_return("gyroradius", radius)?
        .to(Unit::METER)?;
    Ok(Evaluation::new(radius, warnings))
}

fn thermal_vperp(
    t: &PhysicalQuantity,
    particle: &str,
    warnings: &mut Warnings,
) -> FormularyResult<PhysicalQuantity> {
    let options = ThermalSpeedOptions {
        particle,
        ..Default::default()
    };
    Ok(thermal_speed(t, options)?.absorb_into(warnings))
}

fn broadcast(q: &PhysicalQuantity, len: usize) -> PhysicalQuantity {
    PhysicalQuantity::from_si(q.value().broadcast_to(len), q.dimension())
}
