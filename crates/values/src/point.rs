use serde::{Deserialize, Serialize};

use keel_core::{Component, ValueObject, impl_value_equality};

use crate::ordinate::Ordinate;

/// A point in the plane.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    x: Ordinate,
    y: Ordinate,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_ordinates(Ordinate::new(x), Ordinate::new(y))
    }

    pub const fn from_ordinates(x: Ordinate, y: Ordinate) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self::from_ordinates(Ordinate::ORIGIN, Ordinate::ORIGIN)
    }

    pub fn x(&self) -> Ordinate {
        self.x
    }

    pub fn y(&self) -> Ordinate {
        self.y
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl ValueObject for Point {
    fn components(&self) -> Vec<Component<'_>> {
        vec![Component::nested(&self.x), Component::nested(&self.y)]
    }
}

impl_value_equality!(Point);

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::ValueObjectExt;
    use std::collections::HashSet;

    #[test]
    fn compares_by_both_ordinates() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
        assert_eq!(
            Point::new(1.0, 2.0).structural_hash(),
            Point::from_ordinates(Ordinate::new(1.0), Ordinate::new(2.0)).structural_hash()
        );
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::default(), Point::origin());
        assert_eq!(Point::origin(), Point::new(0.0, 0.0));
    }

    #[test]
    fn copy_is_equal_to_source() {
        let p = Point::new(3.5, -1.0);
        let copy = p.clone();
        assert_eq!(copy, p);
        assert_eq!(copy.x(), Ordinate::new(3.5));
        assert_eq!(copy.y(), Ordinate::new(-1.0));
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn is_not_equal_to_a_bare_ordinate() {
        assert!(!Point::origin().equals_any(&Ordinate::ORIGIN));
    }

    #[test]
    fn dedups_in_hash_sets() {
        let set: HashSet<Point> = [Point::new(1.0, 1.0), Point::new(1.0, 1.0), Point::origin()]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
