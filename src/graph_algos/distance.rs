use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Distance from the source: a finite cost or unreachable
/// Variant order gives `Finite(_) < Infinite`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distance<C> {
    Finite(C),
    Infinite,
}

impl<C> Distance<C> {

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite cost, or None if unreachable
    pub fn finite(self) -> Option<C> {
        match self {
            Distance::Finite(cost) => Some(cost),
            Distance::Infinite => None,
        }
    }
}

impl<C> From<C> for Distance<C> {
    fn from(cost: C) -> Self {
        Distance::Finite(cost)
    }
}

impl<C: fmt::Display> fmt::Display for Distance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(cost) => write!(f, "{cost}"),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}
