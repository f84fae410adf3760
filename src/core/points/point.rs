use std::fmt::{self, Display, Formatter};

use crate::core::points::Region;

/// Centre of the circle inscribed in the unit square.
pub const CENTER: (f64, f64) = (0.5, 0.5);

/// Radius of the inscribed circle.
pub const RADIUS: f64 = 0.5;

/// A sample drawn from the unit square `[0, 1] × [0, 1]`.
///
/// Points are immutable once generated; the coordinates are only exposed
/// through accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance from [`CENTER`].
    #[inline]
    pub fn squared_distance_from_center(&self) -> f64 {
        let dx = self.x - CENTER.0;
        let dy = self.y - CENTER.1;
        dx * dx + dy * dy
    }

    /// Inside iff the distance from the centre is at most [`RADIUS`].
    ///
    /// Compared on squared distances so a point exactly on the circle
    /// counts as inside.
    #[inline]
    pub fn region(&self) -> Region {
        if self.squared_distance_from_center() <= RADIUS * RADIUS {
            Region::Inside
        } else {
            Region::Outside
        }
    }

    #[inline]
    pub fn classify(self) -> ClassifiedPoint {
        ClassifiedPoint {
            point: self,
            region: self.region(),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// A point together with the region it fell into, as handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedPoint {
    pub point: Point,
    pub region: Region,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn center_is_inside() {
        assert_eq!(Point::new(0.5, 0.5).region(), Region::Inside);
        assert_eq!(Point::new(0.5, 0.5).squared_distance_from_center(), 0.0);
    }

    #[test]
    fn corner_is_outside() {
        let p = Point::new(0.0, 0.0);
        assert!((p.squared_distance_from_center().sqrt() - 0.5f64.hypot(0.5)).abs() < 1e-12);
        assert_eq!(p.region(), Region::Outside);
    }

    #[test]
    fn boundary_counts_as_inside() {
        for p in [
            Point::new(1.0, 0.5),
            Point::new(0.0, 0.5),
            Point::new(0.5, 1.0),
            Point::new(0.5, 0.0),
        ] {
            assert_eq!(p.squared_distance_from_center(), 0.25, "p={p}");
            assert_eq!(p.region(), Region::Inside, "p={p}");
        }
    }

    #[test]
    fn classify_keeps_coordinates() {
        let c = Point::new(0.1, 0.9).classify();
        assert_eq!(c.point.x(), 0.1);
        assert_eq!(c.point.y(), 0.9);
        assert_eq!(c.region, Region::Outside);
    }

    #[test]
    fn display_is_fixed_precision() {
        assert_eq!(Point::new(0.25, 1.0).to_string(), "(0.250000, 1.000000)");
    }

    proptest! {
        #[test]
        fn classification_is_deterministic(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
            let p = Point::new(x, y);
            prop_assert_eq!(p.region(), Point::new(x, y).region());
            prop_assert_eq!(p.region(), p.classify().region);
        }

        #[test]
        fn classification_matches_distance(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
            let inside = (x - 0.5).powi(2) + (y - 0.5).powi(2) <= 0.25;
            prop_assert_eq!(Point::new(x, y).region().is_inside(), inside);
        }
    }
}
