//! pf-formulary: plasma parameter formulary for plasmaform.
//!
//! Each formula validates its inputs against declared dimensions and sign
//! rules, composes lower-level formulas where it needs them, and returns an
//! [`Evaluation`] holding the result quantity and any warnings raised.
//!
//! Contains:
//! - validate (declarative parameter/return validation)
//! - warning (warnings + `Evaluation`)
//! - relativity (speed-of-light guard)
//! - frequency (rad/s to Hz)
//! - collisions (collision-frequency collaborator)
//! - density, speeds, pressures, frequencies, lengths, hall (the formulas)
//!
//! # Example
//!
//! ```
//! use pf_core::units::tesla;
//! use pf_formulary::{GyrofrequencyOptions, gyrofrequency};
//!
//! let omega = gyrofrequency(tesla(0.1), GyrofrequencyOptions::default()).unwrap();
//! assert!((omega.scalar().unwrap() - 1.7588e10).abs() < 1e7);
//! assert!(omega.warnings().is_empty());
//! ```

pub mod collisions;
pub mod density;
pub mod error;
pub mod frequencies;
pub mod frequency;
pub mod hall;
pub mod lengths;
pub mod pressures;
pub mod relativity;
pub mod speeds;
pub mod validate;
pub mod warning;

pub use collisions::{ClassicalCollisions, CollisionFrequencies};
pub use density::{MassDensityOptions, mass_density};
pub use error::{FormularyError, FormularyResult};
pub use frequencies::{
    GyrofrequencyOptions, LowerHybridFrequencyOptions, PlasmaFrequencyOptions, gyrofrequency,
    lower_hybrid_frequency, plasma_frequency, upper_hybrid_frequency,
};
pub use frequency::angular_to_hz;
pub use hall::{HallParameterOptions, hall_parameter, hall_parameter_with};
pub use lengths::{GyroradiusOptions, debye_length, debye_number, gyroradius, inertial_length};
pub use pressures::{magnetic_energy_density, magnetic_pressure, thermal_pressure};
pub use relativity::{BETA_WARNING, check_relativistic};
pub use speeds::{
    AlfvenSpeedOptions, IonSoundSpeedOptions, KappaThermalSpeedOptions, ThermalSpeedMethod,
    ThermalSpeedOptions, alfven_speed, ion_sound_speed, kappa_thermal_speed, thermal_speed,
};
pub use validate::{Equivalency, ValidationSpec};
pub use warning::{Evaluation, PlasmaWarning, Warnings};
