//! Physical quantities with runtime dimension checking.

use crate::dimension::Dimension;
use crate::error::{QuantityError, QuantityResult};
use crate::units::{Unit, parse_quantity};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// A value (scalar or sequence) in coherent SI, tagged with a display unit.
///
/// Arithmetic produces new instances; nothing is mutated in place. Products
/// and quotients combine dimensions, sums require equal dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalQuantity {
    value: Value,
    unit: Unit,
}

impl PhysicalQuantity {
    /// Build from a value expressed in `unit`.
    pub fn new(value: impl Into<Value>, unit: Unit) -> Self {
        let scale = unit.scale();
        let value = value.into();
        let value = if scale == 1.0 {
            value
        } else {
            value.map(|x| x * scale)
        };
        Self { value, unit }
    }

    /// Build from a value already in coherent SI.
    pub fn from_si(value: impl Into<Value>, dim: Dimension) -> Self {
        Self {
            value: value.into(),
            unit: Unit::coherent(dim),
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// SI value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn is_scalar(&self) -> bool {
        self.value.is_scalar()
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn expect_dimension(&self, dim: Dimension, what: &'static str) -> QuantityResult<()> {
        if self.dimension() == dim {
            Ok(())
        } else {
            Err(QuantityError::Incompatible {
                what,
                left: self.dimension(),
                right: dim,
            })
        }
    }

    /// SI scalar, or an error for sequences.
    pub fn scalar(&self, what: &'static str) -> QuantityResult<f64> {
        self.value.as_scalar().ok_or(QuantityError::NotScalar {
            what,
            len: self.value.len(),
        })
    }

    /// Value expressed in `unit`.
    pub fn value_in(&self, unit: &Unit) -> QuantityResult<Value> {
        self.expect_dimension(unit.dimension(), "unit conversion")?;
        let scale = unit.scale();
        Ok(self.value.map(|x| x / scale))
    }

    /// Same quantity, displayed in `unit`.
    pub fn to(&self, unit: Unit) -> QuantityResult<Self> {
        self.expect_dimension(unit.dimension(), "unit conversion")?;
        Ok(Self {
            value: self.value.clone(),
            unit,
        })
    }

    pub fn mul(&self, rhs: &PhysicalQuantity) -> QuantityResult<Self> {
        let value = self.value.zip_map(&rhs.value, "product", |a, b| a * b)?;
        Ok(Self::from_si(value, self.dimension().mul(rhs.dimension())))
    }

    pub fn div(&self, rhs: &PhysicalQuantity) -> QuantityResult<Self> {
        let value = self.value.zip_map(&rhs.value, "quotient", |a, b| a / b)?;
        Ok(Self::from_si(value, self.dimension().div(rhs.dimension())))
    }

    pub fn add(&self, rhs: &PhysicalQuantity) -> QuantityResult<Self> {
        self.same_dimension(rhs, "sum")?;
        let value = self.value.zip_map(&rhs.value, "sum", |a, b| a + b)?;
        Ok(Self::from_si(value, self.dimension()))
    }

    pub fn sub(&self, rhs: &PhysicalQuantity) -> QuantityResult<Self> {
        self.same_dimension(rhs, "difference")?;
        let value = self.value.zip_map(&rhs.value, "difference", |a, b| a - b)?;
        Ok(Self::from_si(value, self.dimension()))
    }

    /// Multiply by a dimensionless number.
    pub fn scale(&self, factor: f64) -> Self {
        Self::from_si(self.value.map(|x| x * factor), self.dimension())
    }

    pub fn powi(&self, n: i8) -> Self {
        let exp = i32::from(n);
        Self::from_si(self.value.map(|x| x.powi(exp)), self.dimension().powi(n))
    }

    pub fn sqrt(&self) -> QuantityResult<Self> {
        let dim = self
            .dimension()
            .sqrt()
            .ok_or(QuantityError::NonIntegralDimension {
                what: "square root",
                dim: self.dimension(),
            })?;
        Ok(Self::from_si(self.value.map(f64::sqrt), dim))
    }

    pub fn abs(&self) -> Self {
        Self::from_si(self.value.map(f64::abs), self.dimension())
    }

    /// Elementwise map that keeps the dimension.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        Self::from_si(self.value.map(f), self.dimension())
    }

    /// Drop the plane-angle exponent (radian is dimensionless in SI).
    pub fn without_angle(&self) -> Self {
        Self::from_si(self.value.clone(), self.dimension().without_angle())
    }

    fn same_dimension(&self, rhs: &PhysicalQuantity, what: &'static str) -> QuantityResult<()> {
        if self.dimension() == rhs.dimension() {
            Ok(())
        } else {
            Err(QuantityError::Incompatible {
                what,
                left: self.dimension(),
                right: rhs.dimension(),
            })
        }
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.unit.scale();
        match &self.value {
            Value::Scalar(x) => write!(f, "{}", x / scale)?,
            Value::Array(v) => {
                let shown: Vec<String> = v.iter().map(|x| format!("{}", x / scale)).collect();
                write!(f, "[{}]", shown.join(", "))?;
            }
        }
        if !self.unit.symbol().is_empty() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}

impl FromStr for PhysicalQuantity {
    type Err = QuantityError;

    /// Parse `"value unit"`; a unit is required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_quantity(s)? {
            Input::Quantity(q) => Ok(q),
            Input::Bare(_) => Err(QuantityError::Parse(format!("no unit given in '{s}'"))),
        }
    }
}

/// Raw caller input for a formula parameter: a bare number (or sequence) with
/// no unit, or a full quantity.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Bare(Value),
    Quantity(PhysicalQuantity),
}

impl Input {
    pub fn value(&self) -> &Value {
        match self {
            Input::Bare(v) => v,
            Input::Quantity(q) => q.value(),
        }
    }
}

impl FromStr for Input {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s)
    }
}

impl From<f64> for Input {
    fn from(x: f64) -> Self {
        Input::Bare(Value::Scalar(x))
    }
}

impl From<Vec<f64>> for Input {
    fn from(v: Vec<f64>) -> Self {
        Input::Bare(Value::Array(v))
    }
}

impl From<&[f64]> for Input {
    fn from(v: &[f64]) -> Self {
        Input::Bare(Value::from(v))
    }
}

impl<const N: usize> From<[f64; N]> for Input {
    fn from(v: [f64; N]) -> Self {
        Input::Bare(Value::from(v))
    }
}

impl From<Value> for Input {
    fn from(v: Value) -> Self {
        Input::Bare(v)
    }
}

impl From<PhysicalQuantity> for Input {
    fn from(q: PhysicalQuantity) -> Self {
        Input::Quantity(q)
    }
}

impl From<&PhysicalQuantity> for Input {
    fn from(q: &PhysicalQuantity) -> Self {
        Input::Quantity(q.clone())
    }
}
