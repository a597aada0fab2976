//! pf-particles: particle species data for plasmaform.
//!
//! Provides:
//! - Element and isotope reference masses
//! - Species descriptor parsing (`"p+"`, `"He-4 1+"`, `"Fe+++"`, `"alpha"`)
//! - `ParticleResolver` trait and the built-in `ParticleTable`
//! - Charge merging between mean ionization and intrinsic charge
//!
//! # Example
//!
//! ```
//! use pf_particles::{resolve, merge_charge, ParticleTable};
//!
//! let he = resolve("He-4 1+").unwrap();
//! assert_eq!(he.integer_charge().unwrap(), 1);
//!
//! let z = merge_charge(&ParticleTable, "He-4 1+", Some(1.3)).unwrap();
//! assert_eq!(z.value(), 1.3);
//! ```

pub mod charge;
pub mod element;
pub mod error;
pub mod particle;
pub mod resolver;

// Re-exports for ergonomics
pub use charge::{ChargeState, merge_charge};
pub use element::Element;
pub use error::{ParticleError, ParticleResult};
pub use particle::Particle;
pub use resolver::{ParticleProperties, ParticleResolver, ParticleTable, resolve, resolve_charged};
