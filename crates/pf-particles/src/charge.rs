//! Effective charge number: explicit mean ionization vs. intrinsic charge.

use crate::error::ParticleResult;
use crate::resolver::ParticleResolver;

/// Charge number used by a formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChargeState {
    /// Integer charge of the resolved particle.
    Resolved(i32),
    /// Caller-supplied mean ionization.
    MeanIonization(f64),
}

impl ChargeState {
    pub fn value(self) -> f64 {
        match self {
            ChargeState::Resolved(z) => f64::from(z),
            ChargeState::MeanIonization(z) => z,
        }
    }
}

/// Merge an optional mean ionization with a particle's intrinsic charge.
///
/// `z_mean`, when given, is returned verbatim (any sign, any fraction) and the
/// descriptor is not consulted. Otherwise the descriptor must resolve with a
/// known integer charge.
pub fn merge_charge(
    resolver: &dyn ParticleResolver,
    descriptor: &str,
    z_mean: Option<f64>,
) -> ParticleResult<ChargeState> {
    match z_mean {
        Some(z) => Ok(ChargeState::MeanIonization(z)),
        None => {
            let props = resolver.resolve(descriptor)?;
            Ok(ChargeState::Resolved(props.integer_charge()?))
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::resolver::ParticleTable;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn override_returned_verbatim(
            z in prop_oneof![-10.0_f64..10.0, Just(0.0), Just(-0.0), Just(2.5)],
            idx in 0usize..6,
        ) {
            let descriptors = ["p+", "e-", "He-4 1+", "Fe+++", "He", "bogus"];
            let merged = merge_charge(&ParticleTable, descriptors[idx], Some(z)).unwrap();
            prop_assert_eq!(merged, ChargeState::MeanIonization(z));
            prop_assert_eq!(merged.value().to_bits(), z.to_bits());
        }
    }
}
