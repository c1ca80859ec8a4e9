//! Convex hull of a point set.
//!
//! The triangulation engines cover exactly this region, so the hull is what
//! triangulation results are checked against: hull vertex count fixes the
//! triangle count, and hull area equals the total triangle area.
//!
//! # Example
//!
//! ```
//! use delaunay2d::hull::{convex_hull, polygon_area};
//! use delaunay2d::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(1.0, 1.0), // Interior point
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let hull = convex_hull(&points);
//! assert_eq!(hull.len(), 4);
//! assert!((polygon_area(&hull) - 4.0).abs() < 1e-12);
//! ```

use crate::predicates::orient2d;
use crate::primitives::Point2;
use num_traits::Float;

/// Computes the indices of the convex hull vertices using Andrew's monotone chain.
///
/// Indices refer to `points` and are in counter-clockwise order, starting
/// from the lexicographically smallest point. Collinear boundary points and
/// duplicates are excluded. Fewer than 3 points are returned as-is (deduplicated).
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
pub fn convex_hull_indices<F: Float>(points: &[Point2<F>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].lexicographic_cmp(&points[b]));
    order.dedup_by(|a, b| points[*a] == points[*b]);

    if order.len() < 3 {
        return order;
    }

    let turns_left = |chain: &[usize], p: usize| {
        let n = chain.len();
        orient2d(points[chain[n - 2]], points[chain[n - 1]], points[p]) > F::zero()
    };

    // Lower hull, left to right
    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while lower.len() >= 2 && !turns_left(&lower, i) {
            lower.pop();
        }
        lower.push(i);
    }

    // Upper hull, right to left
    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order.iter().rev() {
        while upper.len() >= 2 && !turns_left(&upper, i) {
            upper.pop();
        }
        upper.push(i);
    }

    // Each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Computes the convex hull vertices in counter-clockwise order.
///
/// See [`convex_hull_indices`] for the ordering and degenerate cases.
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    convex_hull_indices(points)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Area of a simple polygon given by its vertices in order (CCW or CW).
///
/// Uses the shoelace formula. Returns 0 for fewer than 3 vertices.
pub fn polygon_area<F: Float>(polygon: &[Point2<F>]) -> F {
    if polygon.len() < 3 {
        return F::zero();
    }

    let origin = polygon[0];
    let twice_area = polygon
        .windows(2)
        .skip(1)
        .fold(F::zero(), |acc, w| acc + orient2d(origin, w[0], w[1]));

    twice_area.abs() / (F::one() + F::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convex_hull_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(convex_hull(&points).is_empty());
    }

    #[test]
    fn test_convex_hull_two_points() {
        let points = vec![Point2::new(1.0_f64, 0.0), Point2::new(0.0, 0.0)];
        assert_eq!(convex_hull_indices(&points), vec![1, 0]);
    }

    #[test]
    fn test_convex_hull_with_interior() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.5),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let indices = convex_hull_indices(&points);
        assert_eq!(indices, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_convex_hull_drops_collinear_boundary_points() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 2.0),
        ];
        let indices = convex_hull_indices(&points);
        assert_eq!(indices.len(), 3);
        assert!(!indices.contains(&1));
    }

    #[test]
    fn test_convex_hull_duplicate_points() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        assert_eq!(convex_hull(&points).len(), 3);
    }

    #[test]
    fn test_convex_hull_ccw_order() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 0.0),
        ];
        let hull = convex_hull(&points);
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            let c = hull[(i + 2) % hull.len()];
            assert!(orient2d(a, b, c) > 0.0);
        }
    }

    #[test]
    fn test_polygon_area() {
        let square: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(0.0, 3.0),
        ];
        assert_relative_eq!(polygon_area(&square), 9.0, epsilon = 1e-12);

        let mut clockwise = square.clone();
        clockwise.reverse();
        assert_relative_eq!(polygon_area(&clockwise), 9.0, epsilon = 1e-12);

        assert_eq!(polygon_area(&square[..2]), 0.0);
    }
}
