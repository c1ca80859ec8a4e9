//! Geometric predicates for planar triangulation.
//!
//! All predicates are evaluated directly in floating point. There is no
//! exact-arithmetic fallback: near-collinear or near-cocircular inputs can
//! produce sign flips, and callers treat a zero result as a regular outcome.
//!
//! Orientation follows the usual y-up convention: a positive signed area
//! means the points wind counter-clockwise.

use crate::primitives::Point2;
use num_traits::Float;

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// To the left of `origin → destination` (counter-clockwise turn).
    Left,
    /// To the right of `origin → destination` (clockwise turn).
    Right,
    /// On the line through `origin` and `destination`.
    Collinear,
}

/// Twice the signed area of triangle `abc`.
///
/// Positive if `a, b, c` are counter-clockwise, negative if clockwise,
/// zero if collinear.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Classifies `point` against the directed edge `origin → destination`.
///
/// Evaluated as the cross product of `destination - point` and
/// `origin - point`; a negative value puts the point on the left.
///
/// # Example
///
/// ```
/// use delaunay2d::predicates::{orientation, Side};
/// use delaunay2d::Point2;
///
/// let o = Point2::new(0.0_f64, 0.0);
/// let d = Point2::new(10.0, 0.0);
/// assert_eq!(orientation(Point2::new(5.0, 1.0), o, d), Side::Left);
/// assert_eq!(orientation(Point2::new(5.0, -1.0), o, d), Side::Right);
/// assert_eq!(orientation(Point2::new(20.0, 0.0), o, d), Side::Collinear);
/// ```
#[inline]
pub fn orientation<F: Float>(point: Point2<F>, origin: Point2<F>, destination: Point2<F>) -> Side {
    let det = (destination - point).cross(origin - point);
    if det < F::zero() {
        Side::Left
    } else if det > F::zero() {
        Side::Right
    } else {
        Side::Collinear
    }
}

/// Tests if `d` lies strictly inside the circle through `a`, `b`, `c`.
///
/// `a, b, c` must be counter-clockwise. The test is the sign of the 3x3
/// determinant of the lifted points `(x, y, x² + y²)` taken relative to `d`,
/// so it is winding-sensitive: for a clockwise triple the answer is inverted,
/// and swapping any two of `a, b, c` flips the determinant sign. Points on
/// the circle are not inside.
///
/// # Example
///
/// ```
/// use delaunay2d::predicates::in_circumcircle;
/// use delaunay2d::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
///
/// assert!(in_circumcircle(a, b, c, Point2::new(0.5, 0.5)));
/// assert!(!in_circumcircle(a, b, c, Point2::new(2.0, 2.0)));
/// ```
#[inline]
pub fn in_circumcircle<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, d: Point2<F>) -> bool {
    incircle_det(a, b, c, d) > F::zero()
}

/// Lifted-point determinant behind [`in_circumcircle`].
///
/// | ax-dx  ay-dy  (ax-dx)²+(ay-dy)² |
/// | bx-dx  by-dy  (bx-dx)²+(by-dy)² |
/// | cx-dx  cy-dy  (cx-dx)²+(cy-dy)² |
#[inline]
pub fn incircle_det<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, d: Point2<F>) -> F {
    let ad = a - d;
    let bd = b - d;
    let cd = c - d;

    let aa = ad.magnitude_squared();
    let bb = bd.magnitude_squared();
    let cc = cd.magnitude_squared();

    aa * bd.cross(cd) + bb * cd.cross(ad) + cc * ad.cross(bd)
}

/// Barycentric coordinates of `p` with respect to triangle `abc`.
///
/// Returns `None` for a degenerate (zero-area) triangle. The coordinates
/// keep the sign of each sub-triangle's area relative to the whole, which
/// makes them agree with [`orient2d`] on which side of each edge `p` lies.
#[inline]
pub fn barycentric<F: Float>(
    p: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
) -> Option<[F; 3]> {
    let area = orient2d(a, b, c);
    if area == F::zero() {
        return None;
    }
    Some([
        orient2d(b, c, p) / area,
        orient2d(c, a, p) / area,
        orient2d(a, b, p) / area,
    ])
}

/// Tests if `p` lies strictly inside triangle `abc` (either winding).
///
/// Points on an edge or a vertex are not inside, and a degenerate triangle
/// contains nothing.
///
/// # Example
///
/// ```
/// use delaunay2d::predicates::point_in_triangle;
/// use delaunay2d::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(10.0, 0.0);
/// let c = Point2::new(5.0, 10.0);
///
/// assert!(point_in_triangle(Point2::new(5.0, 3.0), a, b, c));
/// assert!(!point_in_triangle(Point2::new(5.0, 0.0), a, b, c)); // on edge
/// ```
#[inline]
pub fn point_in_triangle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    match barycentric(p, a, b, c) {
        Some(coords) => coords.iter().all(|&w| w > F::zero()),
        None => false,
    }
}

/// Unsigned angle at vertex `b` between the rays `b → a` and `b → c`, in degrees.
///
/// The result is in `[0, 180]`. A zero-length ray yields 0.
#[inline]
pub fn angle_between<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (a - b).angle_to(c - b).to_degrees()
}
