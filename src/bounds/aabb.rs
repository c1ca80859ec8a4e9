//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates the smallest AABB containing every point.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::new(first, first), |aabb, p| Self {
            min: Point2::new(aabb.min.x.min(p.x), aabb.min.y.min(p.y)),
            max: Point2::new(aabb.max.x.max(p.x), aabb.max.y.max(p.y)),
        }))
    }

    /// Size along x.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Size along y.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Length of the longer side.
    #[inline]
    pub fn extent(self) -> F {
        self.width().max(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min, Point2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));
    }

    #[test]
    fn test_from_points_empty() {
        let aabb: Option<Aabb2<f64>> = Aabb2::from_points(Vec::new());
        assert!(aabb.is_none());
    }

    #[test]
    fn test_dimensions() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 4.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 4.0);
        assert_eq!(aabb.extent(), 10.0);
    }
}
