//! Key types accepted by the tree
//!
//! Every operation is generic over [`TreeKey`]; any totally ordered scalar
//! qualifies. [`NumericKey`] covers drivers that hand us raw floats and
//! need NaN rejected before it reaches a comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::EngineError;

/// Bound shared by every key the engine stores
pub trait TreeKey: Ord + Clone + fmt::Display + fmt::Debug {}

impl<T> TreeKey for T where T: Ord + Clone + fmt::Display + fmt::Debug {}

/// Floating-point key with a total order
///
/// NaN is refused at construction and `-0.0` is folded into `0.0`, so
/// equality and ordering agree for every value that gets through.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NumericKey(f64);

impl NumericKey {
    /// Wrap a float, failing for NaN
    pub fn new(value: f64) -> Result<Self, EngineError> {
        if value.is_nan() {
            return Err(EngineError::UnorderedKey(value.to_string()));
        }
        // folds -0.0 as well, since -0.0 == 0.0
        let value = if value == 0.0 { 0.0 } else { value };
        Ok(Self(value))
    }

    /// Underlying float
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for NumericKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NumericKey {}

impl PartialOrd for NumericKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumericKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<i32> for NumericKey {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl TryFrom<f64> for NumericKey {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for NumericKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| EngineError::InvalidKey(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for NumericKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
