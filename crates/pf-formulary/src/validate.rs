//! Declarative parameter validation.
//!
//! Every formula describes each of its quantity parameters with a
//! [`ValidationSpec`], applied to the raw caller input before any
//! arithmetic and, for returned quantities, to the computed result.

use crate::error::{FormularyError, FormularyResult};
use crate::warning::{PlasmaWarning, Warnings};
use pf_core::constants::k_b;
use pf_core::{Dimension, Input, PhysicalQuantity, Unit};

/// Extra unit conversions a parameter accepts beyond its declared dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equivalency {
    /// Energy is accepted for temperature via `T = E / k_B`.
    TemperatureEnergy,
    /// Radians may be added or dropped freely.
    DimensionlessAngles,
}

/// Validation rules for one parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationSpec {
    /// Accepted dimensions; the first is assumed for bare numbers.
    pub dimensions: &'static [Dimension],
    pub allow_negative: bool,
    pub allow_nan: bool,
    pub equivalencies: &'static [Equivalency],
    /// Absent input is allowed and passes through as `None`.
    pub none_shall_pass: bool,
}

impl ValidationSpec {
    pub const fn new(dimensions: &'static [Dimension]) -> Self {
        Self {
            dimensions,
            allow_negative: true,
            allow_nan: false,
            equivalencies: &[],
            none_shall_pass: false,
        }
    }

    pub const fn non_negative(self) -> Self {
        Self {
            allow_negative: false,
            ..self
        }
    }

    pub const fn allowing_nan(self) -> Self {
        Self {
            allow_nan: true,
            ..self
        }
    }

    pub const fn with_equivalencies(self, equivalencies: &'static [Equivalency]) -> Self {
        Self {
            equivalencies,
            ..self
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            none_shall_pass: true,
            ..self
        }
    }

    /// Validate a possibly absent input.
    ///
    /// Checks run in order: presence, dimension, sign, NaN. A bare number is
    /// taken to be in the SI unit of the first declared dimension and raises
    /// [`PlasmaWarning::UnitsAssumed`].
    pub fn validate(
        &self,
        param: &'static str,
        raw: Option<Input>,
        warnings: &mut Warnings,
    ) -> FormularyResult<Option<PhysicalQuantity>> {
        let Some(raw) = raw else {
            return if self.none_shall_pass {
                Ok(None)
            } else {
                Err(FormularyError::MissingParameter { param })
            };
        };

        let quantity = match raw {
            Input::Bare(value) => {
                let unit = Unit::preferred(self.dimensions[0]);
                warnings.push(PlasmaWarning::UnitsAssumed {
                    param,
                    unit: unit.clone(),
                });
                PhysicalQuantity::new(value, unit)
            }
            Input::Quantity(q) => self.coerce(param, q)?,
        };

        self.check_values(param, &quantity)?;
        Ok(Some(quantity))
    }

    /// Validate an input that must be present.
    pub fn require(
        &self,
        param: &'static str,
        raw: impl Into<Input>,
        warnings: &mut Warnings,
    ) -> FormularyResult<PhysicalQuantity> {
        self.validate(param, Some(raw.into()), warnings)?
            .ok_or(FormularyError::MissingParameter { param })
    }

    /// Validate a computed result, converting through the equivalencies.
    pub fn validate_return(
        &self,
        function: &'static str,
        result: PhysicalQuantity,
    ) -> FormularyResult<PhysicalQuantity> {
        let result = self.coerce(function, result)?;
        self.check_values(function, &result)?;
        Ok(result)
    }

    fn coerce(
        &self,
        param: &'static str,
        q: PhysicalQuantity,
    ) -> FormularyResult<PhysicalQuantity> {
        let dim = q.dimension();
        if self.dimensions.contains(&dim) {
            return Ok(q);
        }
        for eq in self.equivalencies {
            match eq {
                Equivalency::TemperatureEnergy
                    if dim == Dimension::ENERGY
                        && self.dimensions.contains(&Dimension::TEMPERATURE) =>
                {
                    return Ok(q.div(&k_b())?.to(Unit::KELVIN)?);
                }
                Equivalency::DimensionlessAngles
                    if self.dimensions.contains(&dim.without_angle()) =>
                {
                    return Ok(q.without_angle());
                }
                _ => {}
            }
        }
        Err(FormularyError::Dimension {
            param,
            found: dim,
            expected: self.expected(),
        })
    }

    fn check_values(&self, param: &'static str, q: &PhysicalQuantity) -> FormularyResult<()> {
        if !self.allow_negative && q.value().any(|x| x < 0.0) {
            return Err(FormularyError::NegativeValue { param });
        }
        if !self.allow_nan && q.value().any(f64::is_nan) {
            return Err(FormularyError::InvalidValue { param });
        }
        Ok(())
    }

    fn expected(&self) -> String {
        self.dimensions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Parameter rules shared across formulas.
pub mod params {
    use super::{Equivalency, ValidationSpec};
    use pf_core::Dimension;

    pub const MAGNETIC_FIELD: ValidationSpec = ValidationSpec::new(&[Dimension::MAGNETIC_FIELD]);

    pub const TEMPERATURE: ValidationSpec = ValidationSpec::new(&[Dimension::TEMPERATURE])
        .non_negative()
        .with_equivalencies(&[Equivalency::TemperatureEnergy]);

    pub const NUMBER_DENSITY: ValidationSpec =
        ValidationSpec::new(&[Dimension::NUMBER_DENSITY]).non_negative();

    pub const SPEED: ValidationSpec = ValidationSpec::new(&[Dimension::VELOCITY]).non_negative();

    pub const ANGULAR_FREQUENCY: ValidationSpec =
        ValidationSpec::new(&[Dimension::ANGULAR_FREQUENCY, Dimension::FREQUENCY]);

    pub const LENGTH: ValidationSpec = ValidationSpec::new(&[Dimension::LENGTH])
        .with_equivalencies(&[Equivalency::DimensionlessAngles]);

    pub const PRESSURE: ValidationSpec = ValidationSpec::new(&[Dimension::PRESSURE]);

    pub const DIMENSIONLESS: ValidationSpec = ValidationSpec::new(&[Dimension::DIMENSIONLESS])
        .with_equivalencies(&[Equivalency::DimensionlessAngles]);
}
