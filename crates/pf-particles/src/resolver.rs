//! Particle resolution: descriptor to mass and charge.

use crate::error::{ParticleError, ParticleResult};
use crate::particle::Particle;
use pf_core::{Dimension, PhysicalQuantity};

/// Resolved properties of a particle species.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleProperties {
    pub particle: Particle,
    /// Rest mass [kg].
    pub mass_kg: f64,
    /// Integer charge number, `None` when the descriptor carried no charge.
    pub charge: Option<i32>,
}

impl ParticleProperties {
    pub fn mass(&self) -> PhysicalQuantity {
        PhysicalQuantity::from_si(self.mass_kg, Dimension::MASS)
    }

    /// Integer charge, or [`ParticleError::MissingCharge`] if unknown.
    pub fn integer_charge(&self) -> ParticleResult<i32> {
        self.charge
            .ok_or_else(|| ParticleError::MissingCharge(self.particle.symbol()))
    }

    pub fn is_charged(&self) -> bool {
        matches!(self.charge, Some(z) if z != 0)
    }

    pub fn is_electron(&self) -> bool {
        self.particle == Particle::Electron
    }
}

/// Source of particle data.
///
/// Implementations must be thread-safe and side-effect free: resolving the
/// same descriptor twice returns the same properties.
pub trait ParticleResolver: Send + Sync {
    /// Resolve a species descriptor.
    fn resolve(&self, descriptor: &str) -> ParticleResult<ParticleProperties>;

    /// Resolve a descriptor that must name a charged species.
    fn resolve_charged(&self, descriptor: &str) -> ParticleResult<ParticleProperties> {
        let props = self.resolve(descriptor)?;
        if props.is_charged() {
            Ok(props)
        } else {
            Err(ParticleError::Uncharged(descriptor.trim().to_string()))
        }
    }
}

/// Built-in resolver backed by the static element/isotope tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticleTable;

impl ParticleResolver for ParticleTable {
    fn resolve(&self, descriptor: &str) -> ParticleResult<ParticleProperties> {
        let particle: Particle = descriptor.parse()?;
        Ok(ParticleProperties {
            particle,
            mass_kg: particle.mass_kg()?,
            charge: particle.charge(),
        })
    }
}

/// Resolve against the built-in [`ParticleTable`].
pub fn resolve(descriptor: &str) -> ParticleResult<ParticleProperties> {
    ParticleTable.resolve(descriptor)
}

/// Resolve a charged species against the built-in [`ParticleTable`].
pub fn resolve_charged(descriptor: &str) -> ParticleResult<ParticleProperties> {
    ParticleTable.resolve_charged(descriptor)
}
