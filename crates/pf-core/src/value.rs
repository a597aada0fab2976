//! Scalar-or-sequence numeric payload.
//!
//! Shape handling is explicit: a [`Value`] is resolved once into its tag and
//! binary operations broadcast a scalar against a sequence, or require two
//! sequences of equal length.

use crate::error::{QuantityError, QuantityResult};
use rayon::prelude::*;

/// Sequences at least this long are mapped on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Scalar(f64),
    Array(Vec<f64>),
}

/// Shape tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Array(usize),
}

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Value::Scalar(_) => Shape::Scalar,
            Value::Array(v) => Shape::Array(v.len()),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Array(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Array(v) if v.is_empty())
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(x) => Some(*x),
            Value::Array(_) => None,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            Value::Scalar(x) => std::slice::from_ref(x),
            Value::Array(v) => v,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }

    /// Elementwise map preserving shape.
    pub fn map<F>(&self, f: F) -> Value
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            Value::Scalar(x) => Value::Scalar(f(*x)),
            Value::Array(v) if v.len() >= PARALLEL_THRESHOLD => {
                Value::Array(v.par_iter().map(|x| f(*x)).collect())
            }
            Value::Array(v) => Value::Array(v.iter().map(|x| f(*x)).collect()),
        }
    }

    /// Elementwise binary map with scalar broadcasting.
    pub fn zip_map<F>(&self, other: &Value, what: &'static str, f: F) -> QuantityResult<Value>
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(f(*a, *b))),
            (Value::Scalar(a), Value::Array(_)) => {
                let a = *a;
                Ok(other.map(|b| f(a, b)))
            }
            (Value::Array(_), Value::Scalar(b)) => {
                let b = *b;
                Ok(self.map(|a| f(a, b)))
            }
            (Value::Array(a), Value::Array(b)) => {
                if a.len() != b.len() {
                    return Err(QuantityError::ShapeMismatch {
                        what,
                        left: a.len(),
                        right: b.len(),
                    });
                }
                let out = if a.len() >= PARALLEL_THRESHOLD {
                    a.par_iter().zip(b.par_iter()).map(|(x, y)| f(*x, *y)).collect()
                } else {
                    a.iter().zip(b).map(|(x, y)| f(*x, *y)).collect()
                };
                Ok(Value::Array(out))
            }
        }
    }

    /// Repeat a scalar `len` times; arrays are returned unchanged.
    pub fn broadcast_to(&self, len: usize) -> Value {
        match self {
            Value::Scalar(x) => Value::Array(vec![*x; len]),
            Value::Array(_) => self.clone(),
        }
    }

    pub fn any<P: Fn(f64) -> bool>(&self, pred: P) -> bool {
        self.iter().any(pred)
    }

    pub fn all<P: Fn(f64) -> bool>(&self, pred: P) -> bool {
        self.iter().all(pred)
    }

    /// Largest absolute value; NaN if any element is NaN.
    pub fn max_abs(&self) -> f64 {
        self.iter().fold(0.0_f64, |acc, x| {
            if x.is_nan() || acc.is_nan() {
                f64::NAN
            } else {
                acc.max(x.abs())
            }
        })
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(x)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Array(v)
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::Array(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(v: [f64; N]) -> Self {
        Value::Array(v.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_map_broadcasts_scalars() {
        let a = Value::Scalar(2.0);
        let b = Value::from(vec![1.0, 2.0, 3.0]);
        let out = a.zip_map(&b, "test", |x, y| x * y).unwrap();
        assert_eq!(out, Value::from(vec![2.0, 4.0, 6.0]));
        let out = b.zip_map(&a, "test", |x, y| x - y).unwrap();
        assert_eq!(out, Value::from(vec![-1.0, 0.0, 1.0]));
    }

    #[test]
    fn zip_map_rejects_mismatched_lengths() {
        let a = Value::from(vec![1.0, 2.0]);
        let b = Value::from(vec![1.0, 2.0, 3.0]);
        let err = a.zip_map(&b, "test", |x, y| x + y).unwrap_err();
        assert!(matches!(
            err,
            QuantityError::ShapeMismatch {
                left: 2,
                right: 3,
                ..
            }
        ));
    }

    #[test]
    fn parallel_map_matches_sequential() {
        let n = PARALLEL_THRESHOLD * 2 + 3;
        let data: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let v = Value::from(data.clone());
        let mapped = v.map(|x| x.sqrt());
        let expected: Vec<f64> = data.iter().map(|x| x.sqrt()).collect();
        assert_eq!(mapped, Value::Array(expected));
    }

    #[test]
    fn max_abs_propagates_nan() {
        assert_eq!(Value::from(vec![-3.0, 2.0]).max_abs(), 3.0);
        assert!(Value::from(vec![1.0, f64::NAN]).max_abs().is_nan());
    }

    #[test]
    fn broadcast_scalar() {
        assert_eq!(
            Value::Scalar(1.5).broadcast_to(3),
            Value::from(vec![1.5, 1.5, 1.5])
        );
    }
}
