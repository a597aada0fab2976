//! Mass density.

use crate::error::{FormularyError, FormularyResult};
use crate::validate::ValidationSpec;
use crate::warning::{Evaluation, Warnings};
use pf_core::constants::m_e;
use pf_core::{Dimension, Input, Unit};
use pf_particles::{ParticleResolver, ParticleTable, merge_charge};

const DENSITY: ValidationSpec =
    ValidationSpec::new(&[Dimension::NUMBER_DENSITY, Dimension::MASS_DENSITY]).non_negative();
const RETURN: ValidationSpec = ValidationSpec::new(&[Dimension::MASS_DENSITY]).non_negative();

/// Optional arguments of [`mass_density`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MassDensityOptions<'a> {
    /// Species, required when `density` is a number density.
    pub particle: Option<&'a str>,
    /// Mean ionization overriding the particle's charge.
    pub z_mean: Option<f64>,
}

/// Mass density `ρ = n (m + Z m_e)`, or `density` unchanged if it is
/// already a mass density.
pub fn mass_density(
    density: impl Into<Input>,
    options: MassDensityOptions<'_>,
) -> FormularyResult<Evaluation> {
    let mut warnings = Warnings::default();
    let density = DENSITY.require("density", density, &mut warnings)?;

    let rho = if density.dimension() == Dimension::MASS_DENSITY {
        density
    } else {
        let particle = options
            .particle
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| FormularyError::InvalidArg {
                what: "a particle is required to convert a number density to a mass density"
                    .into(),
            })?;
        let props = ParticleTable.resolve(particle)?;
        let z = merge_charge(&ParticleTable, particle, options.z_mean)?.value();
        let ions = density.mul(&props.mass())?;
        let electrons = density.mul(&m_e())?.scale(z);
        ions.add(&electrons)?
    };

    let rho = RETURN
        .validate_return("mass_density", rho)?
        .to(Unit::KILOGRAM_PER_CUBIC_METER)?;
    Ok(Evaluation::new(rho, warnings))
}
