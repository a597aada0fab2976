use crate::dimension::Dimension;
use thiserror::Error;

pub type QuantityResult<T> = Result<T, QuantityError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    #[error("Incompatible dimensions for {what}: {left} vs {right}")]
    Incompatible {
        what: &'static str,
        left: Dimension,
        right: Dimension,
    },

    #[error("Shape mismatch for {what}: lengths {left} and {right}")]
    ShapeMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Cannot take {what} of dimension {dim}")]
    NonIntegralDimension { what: &'static str, dim: Dimension },

    #[error("Expected a scalar for {what}, found {len} elements")]
    NotScalar { what: &'static str, len: usize },

    #[error("Could not parse quantity: {0}")]
    Parse(String),

    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
