//! Characteristic speeds.

use crate::density::{MassDensityOptions, mass_density};
use crate::error::{FormularyError, FormularyResult};
use crate::lengths::debye_length;
use crate::relativity::check_relativistic;
use crate::validate::{ValidationSpec, params};
use crate::warning::{Evaluation, PlasmaWarning, Warnings};
use pf_core::constants::{k_b, mu0};
use pf_core::{Dimension, Input, PhysicalQuantity, Unit};
use pf_particles::{ParticleResolver, ParticleTable, merge_charge};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const WAVENUMBER: ValidationSpec = ValidationSpec::new(&[Dimension::WAVENUMBER])
    .non_negative()
    .optional();
const MASS_OVERRIDE: ValidationSpec = ValidationSpec::new(&[Dimension::MASS])
    .non_negative()
    .allowing_nan()
    .optional();

/// Which moment of the Maxwellian defines the thermal speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThermalSpeedMethod {
    /// `sqrt(2 k_B T / m)`
    #[default]
    MostProbable,
    /// `sqrt(3 k_B T / m)`
    Rms,
    /// `sqrt(8 k_B T / (π m))`
    MeanMagnitude,
}

impl ThermalSpeedMethod {
    fn coefficient(self) -> f64 {
        match self {
            Self::MostProbable => 2.0,
            Self::Rms => 3.0,
            Self::MeanMagnitude => 8.0 / PI,
        }
    }
}

impl FromStr for ThermalSpeedMethod {
    type Err = FormularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "most_probable" => Ok(Self::MostProbable),
            "rms" => Ok(Self::Rms),
            "mean_magnitude" => Ok(Self::MeanMagnitude),
            other => Err(FormularyError::Domain {
                what: format!(
                    "unknown thermal speed method '{other}'; expected most_probable, rms or mean_magnitude"
                ),
            }),
        }
    }
}

impl fmt::Display for ThermalSpeedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MostProbable => "most_probable",
            Self::Rms => "rms",
            Self::MeanMagnitude => "mean_magnitude",
        })
    }
}

/// Optional arguments of [`alfven_speed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlfvenSpeedOptions<'a> {
    pub ion: &'a str,
    pub z_mean: Option<f64>,
}

impl Default for AlfvenSpeedOptions<'_> {
    fn default() -> Self {
        Self {
            ion: "p+",
            z_mean: None,
        }
    }
}

/// Alfvén speed `V_A = |B| / sqrt(μ0 ρ)`.
///
/// `density` may be a mass density or a number density of `ion`.
pub fn alfven_speed(
    b: impl Into<Input>,
    density: impl Into<Input>,
    options: AlfvenSpeedOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let b = params::MAGNETIC_FIELD.require("B", b, &mut warnings)?;
    let rho = mass_density(
        density,
        MassDensityOptions {
            particle: Some(options.ion),
            z_mean: options.z_mean,
        },
    )?
    .absorb_into(&mut warnings);

    let v = b.abs().div(&mu0().mul(&rho)?.sqrt()?)?;
    let v = speed_result("alfven_speed", v, &mut warnings)?;
    Ok(Evaluation::new(v, warnings))
}

/// Optional arguments of [`ion_sound_speed`].
#[derive(Debug, Clone, PartialEq)]
pub struct IonSoundSpeedOptions<'a> {
    /// Electron number density; with `k`, enables the dispersion correction.
    pub n_e: Option<Input>,
    /// Wavenumber.
    pub k: Option<Input>,
    /// Electron adiabatic index, at least 1.
    pub gamma_e: f64,
    /// Ion adiabatic index, at least 1.
    pub gamma_i: f64,
    pub ion: &'a str,
    pub z_mean: Option<f64>,
}

impl Default for IonSoundSpeedOptions<'_> {
    fn default() -> Self {
        Self {
            n_e: None,
            k: None,
            gamma_e: 1.0,
            gamma_i: 3.0,
            ion: "p+",
            z_mean: None,
        }
    }
}

/// Ion sound speed
/// `V_S = sqrt((γ_e Z k_B T_e + γ_i k_B T_i) / (m_i (1 + k² λ_D²)))`.
///
/// The dispersion term is used only when both `n_e` and `k` are given; with
/// one of them alone it is dropped and [`PlasmaWarning::NonDispersiveLimit`]
/// is raised.
pub fn ion_sound_speed(
    t_e: impl Into<Input>,
    t_i: impl Into<Input>,
    options: IonSoundSpeedOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let t_e = params::TEMPERATURE.require("T_e", t_e, &mut warnings)?;
    let t_i = params::TEMPERATURE.require("T_i", t_i, &mut warnings)?;
    let n_e = params::NUMBER_DENSITY
        .optional()
        .validate("n_e", options.n_e, &mut warnings)?;
    let k = WAVENUMBER.validate("k", options.k, &mut warnings)?;

    let m_i = ParticleTable.resolve(options.ion)?.mass();
    let z = merge_charge(&ParticleTable, options.ion, options.z_mean)?.value();
    debug!(ion = options.ion, z, "ion sound speed charge state");

    for (gamma, species) in [(options.gamma_e, "electrons"), (options.gamma_i, "ions")] {
        if !(gamma >= 1.0) {
            return Err(FormularyError::Domain {
                what: format!("adiabatic index for {species} must be at least 1, got {gamma}"),
            });
        }
    }

    let k_lambda_sq = match (n_e, k) {
        (Some(n_e), Some(k)) => {
            let lambda_d = debye_length(&t_e, &n_e)?.absorb_into(&mut warnings);
            k.mul(&lambda_d)?.powi(2)
        }
        (None, None) => PhysicalQuantity::from_si(0.0, Dimension::DIMENSIONLESS),
        _ => {
            warnings.push(PlasmaWarning::NonDispersiveLimit);
            PhysicalQuantity::from_si(0.0, Dimension::DIMENSIONLESS)
        }
    };

    let pressure_like = k_b()
        .mul(&t_e)?
        .scale(options.gamma_e * z)
        .add(&k_b().mul(&t_i)?.scale(options.gamma_i))?;
    let inertia = k_lambda_sq.map(|x| 1.0 + x).mul(&m_i)?;
    let v = pressure_like.div(&inertia)?.sqrt()?;
    let v = speed_result("ion_sound_speed", v, &mut warnings)?;
    Ok(Evaluation::new(v, warnings))
}

/// Optional arguments of [`thermal_speed`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalSpeedOptions<'a> {
    pub particle: &'a str,
    pub method: ThermalSpeedMethod,
    /// Scalar mass replacing the particle's mass when finite.
    pub mass: Option<Input>,
}

impl Default for ThermalSpeedOptions<'_> {
    fn default() -> Self {
        Self {
            particle: "e-",
            method: ThermalSpeedMethod::default(),
            mass: None,
        }
    }
}

/// Thermal speed `sqrt(c k_B T / m)` with `c` set by the method.
pub fn thermal_speed(
    t: impl Into<Input>,
    options: ThermalSpeedOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let t = params::TEMPERATURE.require("T", t, &mut warnings)?;
    let v = maxwellian_speed(&t, options, &mut warnings)?;
    let v = speed_result("thermal_speed", v, &mut warnings)?;
    Ok(Evaluation::new(v, warnings))
}

/// Maxwellian thermal speed of a validated temperature, without the
/// relativistic guard.
pub(crate) fn maxwellian_speed(
    t: &PhysicalQuantity,
    options: ThermalSpeedOptions<'_>,
    warnings: &mut Warnings,
) -> FormularyResult<PhysicalQuantity> {
    let props = ParticleTable.resolve(options.particle)?;
    let mass = match MASS_OVERRIDE.validate("mass", options.mass, warnings)? {
        Some(m) if m.scalar("mass")?.is_finite() => m,
        _ => props.mass(),
    };

    Ok(k_b()
        .mul(t)?
        .scale(options.method.coefficient())
        .div(&mass)?
        .sqrt()?)
}

/// Optional arguments of [`kappa_thermal_speed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KappaThermalSpeedOptions<'a> {
    pub particle: &'a str,
    pub method: ThermalSpeedMethod,
}

impl Default for KappaThermalSpeedOptions<'_> {
    fn default() -> Self {
        Self {
            particle: "e-",
            method: ThermalSpeedMethod::default(),
        }
    }
}

/// Thermal speed of a kappa distribution.
///
/// The most probable speed is the Maxwellian one scaled by
/// `sqrt((κ - 3/2) / κ)`; the RMS and mean-magnitude speeds equal the
/// Maxwellian ones.
pub fn kappa_thermal_speed(
    t: impl Into<Input>,
    kappa: f64,
    options: KappaThermalSpeedOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let t = params::TEMPERATURE.require("T", t, &mut warnings)?;
    if !(kappa > 1.5 && kappa.is_finite()) {
        return Err(FormularyError::Domain {
            what: format!("kappa must be a finite number greater than 3/2, got {kappa}"),
        });
    }

    let maxwellian = maxwellian_speed(
        &t,
        ThermalSpeedOptions {
            particle: options.particle,
            method: options.method,
            mass: None,
        },
        &mut warnings,
    )?;

    let v = match options.method {
        ThermalSpeedMethod::MostProbable => maxwellian.scale(((kappa - 1.5) / kappa).sqrt()),
        ThermalSpeedMethod::Rms | ThermalSpeedMethod::MeanMagnitude => maxwellian,
    };
    let v = speed_result("kappa_thermal_speed", v, &mut warnings)?;
    Ok(Evaluation::new(v, warnings))
}

fn speed_result(
    function: &'static str,
    v: PhysicalQuantity,
    warnings: &mut Warnings,
) -> FormularyResult<PhysicalQuantity> {
    let v = params::SPEED.validate_return(function, v)?;
    check_relativistic(function, v.to(Unit::METER_PER_SECOND)?, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{ev, k};
    use pf_core::{Tolerances, Value, nearly_equal};

    fn close(a: f64, b: f64, rel: f64) -> bool {
        nearly_equal(a, b, Tolerances::relative(rel))
    }

    #[test]
    fn method_parsing() {
        assert_eq!("rms".parse::<ThermalSpeedMethod>().unwrap(), ThermalSpeedMethod::Rms);
        assert!(matches!(
            "fastest".parse::<ThermalSpeedMethod>(),
            Err(FormularyError::Domain { .. })
        ));
        assert_eq!(ThermalSpeedMethod::MeanMagnitude.to_string(), "mean_magnitude");
    }

    #[test]
    fn thermal_speed_proton() {
        let options = ThermalSpeedOptions {
            particle: "p",
            ..Default::default()
        };
        let v = thermal_speed(ev(5.0), options).unwrap();
        assert!(close(v.scalar().unwrap(), 30_949.690_073, 1e-6));
        assert!(v.warnings().is_empty());
    }

    #[test]
    fn mass_override_used_when_finite() {
        let heavy = ThermalSpeedOptions {
            particle: "p",
            mass: Some(PhysicalQuantity::new(4.0 * pf_core::constants::M_P, Unit::KILOGRAM).into()),
            ..Default::default()
        };
        let proton = ThermalSpeedOptions {
            particle: "p",
            ..Default::default()
        };
        let v_heavy = thermal_speed(k(1e6), heavy).unwrap().scalar().unwrap();
        let v_p = thermal_speed(k(1e6), proton).unwrap().scalar().unwrap();
        assert!(close(v_heavy, v_p / 2.0, 1e-12));

        let nan_mass = ThermalSpeedOptions {
            particle: "p",
            mass: Some(PhysicalQuantity::new(f64::NAN, Unit::KILOGRAM).into()),
            ..Default::default()
        };
        assert_eq!(thermal_speed(k(1e6), nan_mass).unwrap().scalar(), Some(v_p));
    }

    #[test]
    fn thermal_speed_array_input() {
        let t = PhysicalQuantity::new(vec![1e6, 4e6], Unit::KELVIN);
        let options = ThermalSpeedOptions {
            particle: "p",
            ..Default::default()
        };
        let v = thermal_speed(t, options).unwrap();
        let Value::Array(v) = v.value() else {
            panic!("expected array")
        };
        assert!(close(v[1], 2.0 * v[0], 1e-12));
    }

    #[test]
    fn kappa_requires_kappa_above_three_halves() {
        for kappa in [1.5, 1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                kappa_thermal_speed(ev(5.0), kappa, KappaThermalSpeedOptions::default()),
                Err(FormularyError::Domain { .. })
            ));
        }
    }

    #[test]
    fn kappa_relativity_warned_once() {
        use pf_core::constants::{C, K_B, M_E};
        let v = 0.06 * C;
        let t = v * v * M_E / (3.0 * K_B);
        let options = KappaThermalSpeedOptions {
            method: ThermalSpeedMethod::Rms,
            ..Default::default()
        };
        let out = kappa_thermal_speed(k(t), 4.0, options).unwrap();
        let relativity: Vec<_> = out
            .warnings()
            .iter()
            .filter(|w| matches!(w, PlasmaWarning::Relativity { .. }))
            .collect();
        assert_eq!(relativity.len(), 1);
        assert!(matches!(
            relativity[0],
            PlasmaWarning::Relativity {
                function: "kappa_thermal_speed",
                ..
            }
        ));
    }

    #[test]
    fn adiabatic_index_domain() {
        let options = IonSoundSpeedOptions {
            gamma_e: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            ion_sound_speed(k(5e6), k(0.0), options),
            Err(FormularyError::Domain { .. })
        ));
    }

    #[test]
    fn alfven_rejects_unknown_ion() {
        let options = AlfvenSpeedOptions {
            ion: "unobtainium",
            ..Default::default()
        };
        let n = PhysicalQuantity::new(5e19, Unit::PER_CUBIC_METER);
        assert!(matches!(
            alfven_speed(PhysicalQuantity::new(0.014, Unit::TESLA), n, options),
            Err(FormularyError::InvalidParticle(_))
        ));
    }
}
