//! Particle resolution errors.

use thiserror::Error;

/// Result type for particle operations.
pub type ParticleResult<T> = Result<T, ParticleError>;

/// Errors that can occur while resolving a species descriptor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParticleError {
    /// Descriptor does not name a known particle or element.
    #[error("Unrecognized particle descriptor '{0}'")]
    Unknown(String),

    /// Element is known but the requested isotope is not tabulated.
    #[error("Unknown isotope {symbol}-{mass_number}")]
    UnknownIsotope {
        symbol: &'static str,
        mass_number: u16,
    },

    /// Charge token could not be parsed.
    #[error("Invalid charge '{token}' in '{descriptor}'")]
    InvalidCharge { descriptor: String, token: String },

    /// Positive charge larger than the number of electrons available.
    #[error("Charge {charge} exceeds atomic number {atomic_number} in '{descriptor}'")]
    ChargeExceedsAtomicNumber {
        descriptor: String,
        charge: i32,
        atomic_number: u8,
    },

    /// Descriptor carries no charge information but a charge was required.
    #[error("No charge information for '{0}'")]
    MissingCharge(String),

    /// A charged species was required.
    #[error("Particle '{0}' is not charged")]
    Uncharged(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParticleError::Unknown("xyz".into());
        assert!(err.to_string().contains("xyz"));

        let err = ParticleError::UnknownIsotope {
            symbol: "He",
            mass_number: 9,
        };
        assert_eq!(err.to_string(), "Unknown isotope He-9");
    }
}
