//! Formulary errors.

use pf_core::{Dimension, QuantityError};
use pf_particles::ParticleError;
use thiserror::Error;

/// Result type for formula evaluation.
pub type FormularyResult<T> = Result<T, FormularyError>;

/// Fatal errors raised while evaluating a formula. No partial result is
/// returned alongside any of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormularyError {
    /// Input or output unit incompatible with the declared dimension.
    #[error("{param} has dimension {found}, expected {expected}")]
    Dimension {
        param: &'static str,
        found: Dimension,
        expected: String,
    },

    #[error("{param} must not contain negative values")]
    NegativeValue { param: &'static str },

    #[error("{param} must not contain NaN values")]
    InvalidValue { param: &'static str },

    #[error("Missing required parameter {param}")]
    MissingParameter { param: &'static str },

    #[error("Invalid particle: {0}")]
    InvalidParticle(#[from] ParticleError),

    /// Parameter outside the domain where the formula is defined.
    #[error("Domain error: {what}")]
    Domain { what: String },

    /// Computed speed at or above the speed of light.
    #[error("{function} is yielding a speed of {beta:.4}c, at or above the speed of light")]
    Relativity { function: &'static str, beta: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error(transparent)]
    Quantity(#[from] QuantityError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FormularyError::NegativeValue { param: "T_e" };
        assert!(err.to_string().contains("T_e"));

        let err = FormularyError::Relativity {
            function: "thermal_speed",
            beta: 1.5,
        };
        assert!(err.to_string().contains("1.5000c"));
    }

    #[test]
    fn particle_error_converts() {
        let err: FormularyError = ParticleError::Unknown("xyz".into()).into();
        assert!(matches!(err, FormularyError::InvalidParticle(_)));
    }
}
