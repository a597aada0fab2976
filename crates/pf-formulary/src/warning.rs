//! Non-fatal warnings and the evaluated result that carries them.

use pf_core::{PhysicalQuantity, Unit, Value};
use std::fmt;
use tracing::warn;

/// A condition worth reporting that does not stop the computation.
#[derive(Debug, Clone, PartialEq)]
pub enum PlasmaWarning {
    /// Input had no unit; SI `unit` was assumed.
    UnitsAssumed { param: &'static str, unit: Unit },
    /// Speed is a significant fraction of the speed of light.
    Relativity { function: &'static str, beta: f64 },
    /// Only one of `n_e`, `k` was given to the ion sound speed.
    NonDispersiveLimit,
}

impl fmt::Display for PlasmaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitsAssumed { param, unit } => {
                write!(f, "no units given for {param}, assuming {unit}")
            }
            Self::Relativity { function, beta } => write!(
                f,
                "{function} is yielding a speed of {beta:.4}c; relativistic effects may be significant"
            ),
            Self::NonDispersiveLimit => write!(
                f,
                "non-dispersive limit assumed; give both n_e and k to include dispersion"
            ),
        }
    }
}

/// Warnings collected over one formula call. Each is logged as it is raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Warnings(Vec<PlasmaWarning>);

impl Warnings {
    pub fn push(&mut self, warning: PlasmaWarning) {
        match &warning {
            PlasmaWarning::UnitsAssumed { param, unit } => {
                warn!(parameter = param, unit = %unit, "{warning}");
            }
            PlasmaWarning::Relativity { function, beta } => {
                warn!(function, beta, "{warning}");
            }
            PlasmaWarning::NonDispersiveLimit => warn!("{warning}"),
        }
        self.0.push(warning);
    }

    /// Take over warnings already raised (and logged) by a nested call.
    pub fn absorb(&mut self, nested: Vec<PlasmaWarning>) {
        self.0.extend(nested);
    }

    pub fn as_slice(&self) -> &[PlasmaWarning] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<PlasmaWarning> {
        self.0
    }
}

/// Result of a formula call: the quantity and any warnings raised.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    quantity: PhysicalQuantity,
    warnings: Vec<PlasmaWarning>,
}

impl Evaluation {
    pub fn new(quantity: PhysicalQuantity, warnings: Warnings) -> Self {
        Self {
            quantity,
            warnings: warnings.into_vec(),
        }
    }

    pub fn quantity(&self) -> &PhysicalQuantity {
        &self.quantity
    }

    /// SI value.
    pub fn value(&self) -> &Value {
        self.quantity.value()
    }

    /// SI scalar value, `None` for sequences.
    pub fn scalar(&self) -> Option<f64> {
        self.quantity.value().as_scalar()
    }

    pub fn unit(&self) -> &Unit {
        self.quantity.unit()
    }

    pub fn warnings(&self) -> &[PlasmaWarning] {
        &self.warnings
    }

    pub fn has_warning(&self, pred: impl Fn(&PlasmaWarning) -> bool) -> bool {
        self.warnings.iter().any(pred)
    }

    pub fn into_quantity(self) -> PhysicalQuantity {
        self.quantity
    }

    pub fn into_parts(self) -> (PhysicalQuantity, Vec<PlasmaWarning>) {
        (self.quantity, self.warnings)
    }

    /// Move this call's warnings into `warnings` and return the quantity.
    pub(crate) fn absorb_into(self, warnings: &mut Warnings) -> PhysicalQuantity {
        warnings.absorb(self.warnings);
        self.quantity
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quantity)
    }
}
