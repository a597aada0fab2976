//! pf-core: stable foundation for plasmaform.
//!
//! Contains:
//! - dimension (runtime SI dimension vectors)
//! - value (scalar-or-sequence payload with explicit broadcasting)
//! - quantity (PhysicalQuantity + raw caller Input)
//! - units (named units, text parsing, uom SI types + constructors)
//! - constants (CODATA 2018)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod constants;
pub mod dimension;
pub mod error;
pub mod numeric;
pub mod quantity;
pub mod units;
pub mod value;

// Re-exports: nice ergonomics for downstream crates
pub use dimension::Dimension;
pub use error::{QuantityError, QuantityResult};
pub use numeric::*;
pub use quantity::{Input, PhysicalQuantity};
pub use units::{Unit, lookup_unit, parse_quantity};
pub use value::{Shape, Value};
