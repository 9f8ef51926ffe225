use serde::{Deserialize, Serialize};

use keel_core::{Component, ValueObject, impl_value_equality};

/// A single coordinate value.
///
/// Structural equality is exact (after folding `-0.0` into `0.0`), which keeps
/// it consistent with hashing. Tolerant comparison is explicit via
/// [`Ordinate::approx_eq`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ordinate(f64);

impl Ordinate {
    pub const ORIGIN: Ordinate = Ordinate(0.0);

    /// Default tolerance for [`Ordinate::is_close`].
    pub const EPSILON: f64 = 1e-9;

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// True if both ordinates are within `epsilon` of each other.
    pub fn approx_eq(self, other: Ordinate, epsilon: f64) -> bool {
        self.0 == other.0 || (self.0 - other.0).abs() < epsilon
    }

    pub fn is_close(self, other: Ordinate) -> bool {
        self.approx_eq(other, Self::EPSILON)
    }
}

impl Default for Ordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<f64> for Ordinate {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Ordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Ordinate {
    fn components(&self) -> Vec<Component<'_>> {
        vec![self.0.into()]
    }
}

impl_value_equality!(Ordinate);
