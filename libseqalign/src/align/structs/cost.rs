use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("cost value {value} is reserved for the infinite cost")]
pub struct CostOutOfRangeError {
    pub value: i64,
}

/// An alignment cost. Lower is better.
///
/// `Cost::INFINITY` marks a cell (or a whole alignment) that can't be reached.
/// It absorbs addition, so extending an unreachable path never produces a finite cost.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<i64>", into = "Option<i64>")]
pub struct Cost(i64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const INFINITY: Cost = Cost(i64::MAX);

    /// A finite cost. `i64::MAX` is reserved for `Cost::INFINITY`.
    pub fn new(value: i64) -> Self {
        debug_assert!(value != i64::MAX);
        Cost(value)
    }

    pub fn is_infinite(&self) -> bool {
        *self == Cost::INFINITY
    }

    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    /// The numeric value of the cost, or `None` if it is infinite.
    pub fn value(&self) -> Option<i64> {
        match self.is_infinite() {
            true => None,
            false => Some(self.0),
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::ZERO
    }
}

impl std::ops::Add<i64> for Cost {
    type Output = Cost;

    fn add(self, rhs: i64) -> Self::Output {
        if self.is_infinite() {
            return Cost::INFINITY;
        }

        // saturate just below the sentinel
        Cost(self.0.saturating_add(rhs).min(i64::MAX - 1))
    }
}

impl From<Cost> for Option<i64> {
    fn from(cost: Cost) -> Self {
        cost.value()
    }
}

impl TryFrom<Option<i64>> for Cost {
    type Error = CostOutOfRangeError;

    fn try_from(value: Option<i64>) -> Result<Self, Self::Error> {
        match value {
            Some(i64::MAX) => Err(CostOutOfRangeError { value: i64::MAX }),
            Some(value) => Ok(Cost(value)),
            None => Ok(Cost::INFINITY),
        }
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "inf"),
        }
    }
}

impl std::fmt::Debug for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cost({self})")
    }
}
