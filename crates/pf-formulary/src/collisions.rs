//! Collision frequencies used by the Hall parameter.

use crate::error::{FormularyError, FormularyResult};
use crate::lengths::debye_length;
use pf_core::constants::{e, eps0, hbar, k_b};
use pf_core::{Dimension, PhysicalQuantity, ensure_finite};
use pf_particles::{ParticleProperties, ParticleResolver, ParticleTable};
use std::f64::consts::PI;
use tracing::debug;

/// Source of binary collision frequencies.
///
/// Implementations must be thread-safe and side-effect free. Inputs are
/// already validated; `t` is a temperature and `n` a number density.
pub trait CollisionFrequencies: Send + Sync {
    /// Electron-ion collision frequency.
    fn electron_collision_frequency(
        &self,
        t: &PhysicalQuantity,
        n: &PhysicalQuantity,
        ion: &str,
        coulomb_log: Option<f64>,
        v: Option<&PhysicalQuantity>,
        coulomb_log_method: &str,
    ) -> FormularyResult<PhysicalQuantity>;

    /// Ion-ion collision frequency.
    fn ion_collision_frequency(
        &self,
        t: &PhysicalQuantity,
        n: &PhysicalQuantity,
        ion: &str,
        coulomb_log: Option<f64>,
        v: Option<&PhysicalQuantity>,
    ) -> FormularyResult<PhysicalQuantity>;
}

/// Classical binary Coulomb collisions.
///
/// `ν = n π (2 b⊥)² V ln Λ` with `b⊥ = |Z₁ Z₂| e² / (4π ε0 μ V²)`. When no
/// Coulomb logarithm is given, `ln Λ = ln(λ_D / max(b⊥, ħ / (2 μ V)))`. The
/// relative speed defaults to the most probable thermal speed of the reduced
/// mass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalCollisions;

impl ClassicalCollisions {
    pub const METHOD: &'static str = "classical";

    fn binary_rate(
        t: &PhysicalQuantity,
        n: &PhysicalQuantity,
        projectile: &ParticleProperties,
        target: &ParticleProperties,
        coulomb_log: Option<f64>,
        v: Option<&PhysicalQuantity>,
    ) -> FormularyResult<PhysicalQuantity> {
        let m1 = projectile.mass_kg;
        let m2 = target.mass_kg;
        let mu = PhysicalQuantity::from_si(m1 * m2 / (m1 + m2), Dimension::MASS);
        let z_product = f64::from(projectile.integer_charge()? * target.integer_charge()?).abs();

        let v = match v {
            Some(v) => v.clone(),
            None => k_b().mul(t)?.scale(2.0).div(&mu)?.sqrt()?,
        };

        let b_perp = e()
            .powi(2)
            .scale(z_product)
            .div(&eps0().scale(4.0 * PI).mul(&mu)?.mul(&v.powi(2))?)?;

        let ln_lambda = match coulomb_log {
            Some(ln_lambda) => PhysicalQuantity::from_si(
                ensure_finite(ln_lambda, "coulomb_log")?,
                Dimension::DIMENSIONLESS,
            ),
            None => {
                let de_broglie = hbar().div(&mu.scale(2.0).mul(&v)?)?;
                let b_min = b_perp.value().zip_map(de_broglie.value(), "impact parameters", f64::max)?;
                let b_min = PhysicalQuantity::from_si(b_min, Dimension::LENGTH);
                let b_max = debye_length(t, n)?.into_quantity();
                b_max.div(&b_min)?.map(f64::ln)
            }
        };

        let rate = n
            .mul(&b_perp.scale(2.0).powi(2))?
            .scale(PI)
            .mul(&v)?
            .mul(&ln_lambda)?;
        rate.expect_dimension(Dimension::FREQUENCY, "collision frequency")?;
        Ok(rate)
    }
}

impl CollisionFrequencies for ClassicalCollisions {
    fn electron_collision_frequency(
        &self,
        t: &PhysicalQuantity,
        n: &PhysicalQuantity,
        ion: &str,
        coulomb_log: Option<f64>,
        v: Option<&PhysicalQuantity>,
        coulomb_log_method: &str,
    ) -> FormularyResult<PhysicalQuantity> {
        if coulomb_log_method != Self::METHOD {
            return Err(FormularyError::Domain {
                what: format!(
                    "unknown Coulomb logarithm method '{coulomb_log_method}'; only '{}' is supported",
                    Self::METHOD
                ),
            });
        }
        debug!(ion, "electron-ion collision frequency");
        let electron = ParticleTable.resolve("e-")?;
        let target = ParticleTable.resolve(ion)?;
        Self::binary_rate(t, n, &electron, &target, coulomb_log, v)
    }

    fn ion_collision_frequency(
        &self,
        t: &PhysicalQuantity,
        n: &PhysicalQuantity,
        ion: &str,
        coulomb_log: Option<f64>,
        v: Option<&PhysicalQuantity>,
    ) -> FormularyResult<PhysicalQuantity> {
        debug!(ion, "ion-ion collision frequency");
        let ion = ParticleTable.resolve(ion)?;
        Self::binary_rate(t, n, &ion, &ion, coulomb_log, v)
    }
}
