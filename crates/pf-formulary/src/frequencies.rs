//! Characteristic angular frequencies.
//!
//! All return rad/s, or Hz when `to_hz` is set.

use crate::error::FormularyResult;
use crate::frequency::{angular_to_hz, radian};
use crate::validate::params;
use crate::warning::{Evaluation, Warnings};
use pf_core::constants::{e, eps0};
use pf_core::{Input, PhysicalQuantity};
use pf_particles::{ParticleError, ParticleResolver, ParticleTable, merge_charge};
use tracing::debug;

/// Optional arguments of [`gyrofrequency`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyrofrequencyOptions<'a> {
    pub particle: &'a str,
    /// Keep the sign of the charge.
    pub signed: bool,
    /// Charge number overriding the particle's.
    pub z: Option<f64>,
    pub to_hz: bool,
}

impl Default for GyrofrequencyOptions<'_> {
    fn default() -> Self {
        Self {
            particle: "e-",
            signed: false,
            z: None,
            to_hz: false,
        }
    }
}

/// Gyrofrequency `ω_c = Z e |B| / m`, with `|Z|` unless `signed`.
pub fn gyrofrequency(
    b: impl Into<Input>,
    options: GyrofrequencyOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let b = params::MAGNETIC_FIELD.require("B", b, &mut warnings)?;
    let m = ParticleTable.resolve(options.particle)?.mass();
    let z = merge_charge(&ParticleTable, options.particle, options.z)?.value();
    let z = if options.signed { z } else { z.abs() };

    let omega = e().scale(z).mul(&b.abs())?.div(&m)?.mul(&radian())?;
    finish("gyrofrequency", omega, options.to_hz, warnings)
}

/// Optional arguments of [`plasma_frequency`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlasmaFrequencyOptions<'a> {
    pub particle: &'a str,
    /// Mean ionization overriding the particle's charge.
    pub z_mean: Option<f64>,
    pub to_hz: bool,
}

impl Default for PlasmaFrequencyOptions<'_> {
    fn default() -> Self {
        Self {
            particle: "e-",
            z_mean: None,
            to_hz: false,
        }
    }
}

/// Plasma frequency `ω_p = |Z| e sqrt(n / (ε0 m))`.
///
/// A particle with no charge information is taken as singly charged; an
/// unrecognized particle is an error.
pub fn plasma_frequency(
    n: impl Into<Input>,
    options: PlasmaFrequencyOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let n = params::NUMBER_DENSITY.require("n", n, &mut warnings)?;
    let m = ParticleTable.resolve(options.particle)?.mass();
    let z = match merge_charge(&ParticleTable, options.particle, options.z_mean) {
        Ok(z) => z.value(),
        Err(ParticleError::MissingCharge(_)) => {
            debug!(particle = options.particle, "no charge information, assuming Z = 1");
            1.0
        }
        Err(err) => return Err(err.into()),
    };

    let omega = n
        .div(&eps0().mul(&m)?)?
        .sqrt()?
        .mul(&e().scale(z.abs()))?
        .mul(&radian())?;
    finish("plasma_frequency", omega, options.to_hz, warnings)
}

/// Upper hybrid frequency `ω_uh = sqrt(ω_pe² + ω_ce²)`.
pub fn upper_hybrid_frequency(
    b: impl Into<Input>,
    n_e: impl Into<Input>,
    to_hz: bool,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let b = params::MAGNETIC_FIELD.require("B", b, &mut warnings)?;
    let n_e = params::NUMBER_DENSITY.require("n_e", n_e, &mut warnings)?;

    let omega_pe = plasma_frequency(&n_e, PlasmaFrequencyOptions::default())?
        .absorb_into(&mut warnings);
    let omega_ce =
        gyrofrequency(&b, GyrofrequencyOptions::default())?.absorb_into(&mut warnings);
    let omega = omega_pe.powi(2).add(&omega_ce.powi(2))?.sqrt()?;
    finish("upper_hybrid_frequency", omega, to_hz, warnings)
}

/// Optional arguments of [`lower_hybrid_frequency`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowerHybridFrequencyOptions<'a> {
    pub ion: &'a str,
    pub to_hz: bool,
}

impl Default for LowerHybridFrequencyOptions<'_> {
    fn default() -> Self {
        Self {
            ion: "p+",
            to_hz: false,
        }
    }
}

/// Lower hybrid frequency
/// `ω_lh = ((ω_ci ω_ce)^-1 + ω_pi^-2)^(-1/2)`.
pub fn lower_hybrid_frequency(
    b: impl Into<Input>,
    n_i: impl Into<Input>,
    options: LowerHybridFrequencyOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let b = params::MAGNETIC_FIELD.require("B", b, &mut warnings)?;
    let n_i = params::NUMBER_DENSITY.require("n_i", n_i, &mut warnings)?;
    ParticleTable.resolve(options.ion)?.integer_charge()?;

    let omega_ci = gyrofrequency(
        &b,
        GyrofrequencyOptions {
            particle: options.ion,
            ..Default::default()
        },
    )?
    .absorb_into(&mut warnings);
    let omega_pi = plasma_frequency(
        &n_i,
        PlasmaFrequencyOptions {
            particle: options.ion,
            ..Default::default()
        },
    )?
    .absorb_into(&mut warnings);
    let omega_ce =
        gyrofrequency(&b, GyrofrequencyOptions::default())?.absorb_into(&mut warnings);

    let omega = omega_ci
        .mul(&omega_ce)?
        .powi(-1)
        .add(&omega_pi.powi(-2))?
        .powi(-1)
        .sqrt()?;
    finish("lower_hybrid_frequency", omega, options.to_hz, warnings)
}

fn finish(
    function: &'static str,
    omega: PhysicalQuantity,
    to_hz: bool,
    warnings: Warnings,
) -> FormularyResult<Evaluation> {
    let omega = params::ANGULAR_FREQUENCY.validate_return(function, omega)?;
    Ok(Evaluation::new(angular_to_hz(omega, to_hz)?, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormularyError;
    use pf_core::units::tesla;
    use pf_core::{Tolerances, Unit, nearly_equal};

    fn close(a: f64, b: f64, rel: f64) -> bool {
        nearly_equal(a, b, Tolerances::relative(rel))
    }

    fn per_m3(n: f64) -> PhysicalQuantity {
        PhysicalQuantity::new(n, Unit::PER_CUBIC_METER)
    }

    #[test]
    fn electron_gyrofrequency() {
        let w = gyrofrequency(tesla(0.1), GyrofrequencyOptions::default()).unwrap();
        assert!(close(w.scalar().unwrap(), 1.758_820_010_8e10, 1e-9));
        assert_eq!(w.unit(), &Unit::RADIAN_PER_SECOND);

        let hz = GyrofrequencyOptions {
            to_hz: true,
            ..Default::default()
        };
        let f = gyrofrequency(tesla(0.1), hz).unwrap();
        assert!(close(f.scalar().unwrap(), 2.799_248_987e9, 1e-9));
        assert_eq!(f.unit(), &Unit::HERTZ);
    }

    #[test]
    fn signed_gyrofrequency_keeps_charge_sign() {
        let signed = GyrofrequencyOptions {
            signed: true,
            ..Default::default()
        };
        let w = gyrofrequency(tesla(0.1), signed).unwrap().scalar().unwrap();
        assert!(w < 0.0);
        let b = PhysicalQuantity::new(-0.1, Unit::TESLA);
        let unsigned = gyrofrequency(b, GyrofrequencyOptions::default()).unwrap();
        assert!(unsigned.scalar().unwrap() > 0.0);
    }

    #[test]
    fn proton_plasma_frequency() {
        let options = PlasmaFrequencyOptions {
            particle: "p",
            ..Default::default()
        };
        let w = plasma_frequency(per_m3(1e19), options).unwrap();
        assert!(close(w.scalar().unwrap(), 4.163_294_534e9, 1e-9));
    }

    #[test]
    fn plasma_frequency_assumes_single_charge() {
        let bare = PlasmaFrequencyOptions {
            particle: "He-4",
            ..Default::default()
        };
        let ion = PlasmaFrequencyOptions {
            particle: "He-4 1+",
            ..Default::default()
        };
        let w_bare = plasma_frequency(per_m3(1e19), bare).unwrap().scalar().unwrap();
        let w_ion = plasma_frequency(per_m3(1e19), ion).unwrap().scalar().unwrap();
        // Only the bound-electron mass differs.
        assert!(close(w_bare, w_ion, 1e-3));

        let unknown = PlasmaFrequencyOptions {
            particle: "unobtainium",
            ..Default::default()
        };
        assert!(matches!(
            plasma_frequency(per_m3(1e19), unknown),
            Err(FormularyError::InvalidParticle(_))
        ));
    }

    #[test]
    fn hybrid_frequencies() {
        let uh = upper_hybrid_frequency(tesla(0.2), per_m3(5e19), false).unwrap();
        assert!(close(uh.scalar().unwrap(), 4.004_594_197e11, 1e-8));

        let options = LowerHybridFrequencyOptions {
            ion: "D+",
            ..Default::default()
        };
        let lh = lower_hybrid_frequency(tesla(0.2), per_m3(5e19), options).unwrap();
        assert!(close(lh.scalar().unwrap(), 5.783_727_282e8, 1e-8));
    }

    #[test]
    fn lower_hybrid_needs_charged_ion() {
        let options = LowerHybridFrequencyOptions {
            ion: "He",
            ..Default::default()
        };
        assert!(matches!(
            lower_hybrid_frequency(tesla(0.2), per_m3(5e19), options),
            Err(FormularyError::InvalidParticle(_))
        ));
    }
}
