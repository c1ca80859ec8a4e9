//! Delaunay triangulation by divide and conquer (Guibas–Stolfi).
//!
//! # Algorithm
//!
//! 1. Sort the points by `(x, y)` and drop exact duplicates
//! 2. Split the sorted run at its midpoint and triangulate both halves
//!    recursively; runs of two or three points are built directly
//! 3. Merge two halves:
//!    - walk both hulls down to the lower common tangent and connect it as
//!      the base edge
//!    - repeatedly pick the next cross edge above the base from the left or
//!      right candidate, deleting edges whose circumcircle test fails
//!    - stop once neither candidate lies above the base
//!
//! Each call to the recursive step returns the counter-clockwise hull edge
//! leaving the leftmost vertex and the clockwise hull edge leaving the
//! rightmost vertex, which is all the merge needs to find the tangent.
//!
//! # Complexity
//!
//! - Time: O(n log n)
//! - Space: O(n)
//! - Recursion depth: O(log n)
//!
//! # Example
//!
//! ```
//! use delaunay2d::triangulation::divide_and_conquer_delaunay;
//! use delaunay2d::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ];
//!
//! let dt = divide_and_conquer_delaunay(&points).unwrap();
//! assert_eq!(dt.edge_count(), 8);
//! assert_eq!(dt.triangles().len(), 4);
//! assert_eq!(dt.hull().len(), 4);
//! ```

use super::quad_edge::{EdgeId, QuadEdgeMesh};
use super::triangle::Triangle;
use super::{all_collinear, distinct_sorted};
use crate::error::TriangulationError;
use crate::predicates::{in_circumcircle, orient2d, orientation, Side};
use crate::primitives::Point2;
use num_traits::Float;
use tracing::{debug, trace};

/// One undirected edge of an [`EdgeTriangulation`], in the direction it was
/// created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    /// Handle into [`EdgeTriangulation::mesh`].
    pub id: EdgeId,
    /// Index of the start point.
    pub origin: usize,
    /// Index of the end point.
    pub destination: usize,
}

/// Result of [`divide_and_conquer_delaunay`]: the input points and the
/// quad-edge arena connecting them.
///
/// Vertex indices in the arena refer to the input slice. Exact duplicates
/// appear once, under the index of their first occurrence.
#[derive(Debug, Clone)]
pub struct EdgeTriangulation<F> {
    points: Vec<Point2<F>>,
    mesh: QuadEdgeMesh,
    hull_edge: EdgeId,
}

impl<F: Float> EdgeTriangulation<F> {
    /// The input points, including any duplicates.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// The underlying arena, for ring-level traversal.
    #[inline]
    pub fn mesh(&self) -> &QuadEdgeMesh {
        &self.mesh
    }

    /// Number of edges in the triangulation.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.mesh.live_edges().count()
    }

    /// All edges of the triangulation, one direction each.
    pub fn edges(&self) -> Vec<DirectedEdge> {
        self.mesh
            .live_edges()
            .map(|id| DirectedEdge {
                id,
                origin: self.mesh.origin(id),
                destination: self.mesh.destination(id),
            })
            .collect()
    }

    /// Coordinates of the endpoints of `edge`, origin first.
    #[inline]
    pub fn segment(&self, edge: EdgeId) -> (Point2<F>, Point2<F>) {
        (
            self.points[self.mesh.origin(edge)],
            self.points[self.mesh.destination(edge)],
        )
    }

    /// Triangular faces, counter-clockwise, recovered from the edge rings.
    ///
    /// A face is reported once for each closed three-edge cycle under
    /// `lnext` with positive area, which leaves out the outer face.
    pub fn triangles(&self) -> Vec<Triangle> {
        let mesh = &self.mesh;
        let mut triangles = Vec::new();
        for e in mesh.live_edges().flat_map(|e| [e, e.sym()]) {
            let e1 = mesh.lnext(e);
            let e2 = mesh.lnext(e1);
            // Report each face from its smallest edge handle only.
            if mesh.lnext(e2) != e || e1 < e || e2 < e {
                continue;
            }
            let tri = Triangle::new(mesh.origin(e), mesh.origin(e1), mesh.origin(e2));
            let [a, b, c] = tri.points(&self.points);
            if orient2d(a, b, c) > F::zero() {
                triangles.push(tri);
            }
        }
        triangles
    }

    /// Vertex indices on the convex hull in counter-clockwise order.
    ///
    /// Points lying on a hull edge are included, since the triangulation
    /// connects them along the boundary.
    pub fn hull(&self) -> Vec<usize> {
        let mesh = &self.mesh;
        // The reverse of the stored hull edge has the outer face on its left,
        // so following lnext walks the boundary clockwise.
        let start = self.hull_edge.sym();
        let mut hull = vec![mesh.origin(start)];
        let mut e = mesh.lnext(start);
        while e != start && hull.len() <= mesh.edge_count() {
            hull.push(mesh.origin(e));
            e = mesh.lnext(e);
        }
        hull.reverse();
        hull
    }
}

/// Computes the Delaunay triangulation of a set of points by divide and
/// conquer over a quad-edge arena.
///
/// Accepts two distinct points (a single edge) or more. The recursion splits
/// the sorted points at their midpoint, so its depth grows as `log₂ n`.
///
/// # Errors
///
/// - [`TriangulationError::NonFinite`] if a coordinate is NaN or infinite
/// - [`TriangulationError::TooFewPoints`] for fewer than 2 distinct points
/// - [`TriangulationError::Collinear`] if three or more distinct points all
///   lie on one line
///
/// # Example
///
/// ```
/// use delaunay2d::triangulation::divide_and_conquer_delaunay;
/// use delaunay2d::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(5.0, 10.0),
/// ];
///
/// let dt = divide_and_conquer_delaunay(&points).unwrap();
/// for edge in dt.edges() {
///     let (start, end) = dt.segment(edge.id);
///     assert!(start.distance(end) > 0.0);
/// }
/// assert_eq!(dt.edges().len(), 3);
/// ```
pub fn divide_and_conquer_delaunay<F: Float>(
    points: &[Point2<F>],
) -> Result<EdgeTriangulation<F>, TriangulationError> {
    let order = distinct_sorted(points)?;
    if order.len() < 2 {
        return Err(TriangulationError::TooFewPoints {
            required: 2,
            found: order.len(),
        });
    }
    if order.len() >= 3 && all_collinear(points, &order) {
        return Err(TriangulationError::Collinear);
    }

    let mut mesh = QuadEdgeMesh::with_capacity(3 * order.len());
    let (hull_edge, _) = triangulate(points, &order, &mut mesh);

    let edges = mesh.live_edges().count();
    debug!(
        points = points.len(),
        duplicates = points.len() - order.len(),
        edges,
        deleted = mesh.edge_count() - edges,
        "divide and conquer triangulation finished"
    );

    Ok(EdgeTriangulation {
        points: points.to_vec(),
        mesh,
        hull_edge,
    })
}

/// Triangulates the sorted, distinct run `order`.
///
/// Returns `(ldo, rdo)`: the counter-clockwise hull edge leaving the leftmost
/// vertex and the clockwise hull edge leaving the rightmost vertex.
fn triangulate<F: Float>(
    points: &[Point2<F>],
    order: &[usize],
    mesh: &mut QuadEdgeMesh,
) -> (EdgeId, EdgeId) {
    match *order {
        [s0, s1] => {
            let a = mesh.make_edge(s0, s1);
            (a, a.sym())
        }
        [s0, s1, s2] => {
            let a = mesh.make_edge(s0, s1);
            let b = mesh.make_edge(s1, s2);
            mesh.splice(a.sym(), b);

            match orientation(points[s2], points[s0], points[s1]) {
                Side::Left => {
                    mesh.connect(b, a);
                    (a, b.sym())
                }
                Side::Right => {
                    let c = mesh.connect(b, a);
                    (c.sym(), c)
                }
                Side::Collinear => (a, b.sym()),
            }
        }
        _ => {
            let (left, right) = order.split_at(order.len() / 2);
            let (ldo, ldi) = triangulate(points, left, mesh);
            let (rdi, rdo) = triangulate(points, right, mesh);
            merge(points, mesh, ldo, ldi, rdi, rdo)
        }
    }
}

/// Stitches two adjacent triangulations into one.
///
/// `ldi` and `rdi` are the inner hull edges facing each other: the clockwise
/// hull edge out of the left half's rightmost vertex and the counter-clockwise
/// hull edge out of the right half's leftmost vertex.
fn merge<F: Float>(
    points: &[Point2<F>],
    mesh: &mut QuadEdgeMesh,
    mut ldo: EdgeId,
    mut ldi: EdgeId,
    mut rdi: EdgeId,
    mut rdo: EdgeId,
) -> (EdgeId, EdgeId) {
    let at = |v: usize| points[v];
    let left_of = |mesh: &QuadEdgeMesh, v: usize, e: EdgeId| {
        orientation(at(v), at(mesh.origin(e)), at(mesh.destination(e))) == Side::Left
    };
    let right_of = |mesh: &QuadEdgeMesh, v: usize, e: EdgeId| {
        orientation(at(v), at(mesh.origin(e)), at(mesh.destination(e))) == Side::Right
    };

    // Lower common tangent
    loop {
        if left_of(mesh, mesh.origin(rdi), ldi) {
            ldi = mesh.lnext(ldi);
        } else if right_of(mesh, mesh.origin(ldi), rdi) {
            rdi = mesh.rprev(rdi);
        } else {
            break;
        }
    }

    let mut basel = mesh.connect(rdi.sym(), ldi);
    trace!(
        left = mesh.destination(basel),
        right = mesh.origin(basel),
        "merging along lower tangent"
    );
    if mesh.origin(ldi) == mesh.origin(ldo) {
        ldo = basel.sym();
    }
    if mesh.origin(rdi) == mesh.origin(rdo) {
        rdo = basel;
    }

    loop {
        let valid =
            |mesh: &QuadEdgeMesh, e: EdgeId, basel: EdgeId| right_of(mesh, mesh.destination(e), basel);
        let base_circle = |mesh: &QuadEdgeMesh, basel: EdgeId, e: EdgeId, next: EdgeId| {
            in_circumcircle(
                at(mesh.destination(basel)),
                at(mesh.origin(basel)),
                at(mesh.destination(e)),
                at(mesh.destination(next)),
            )
        };

        // Left candidate, rotating counter-clockwise around the base's left end.
        let mut lcand = mesh.next_ccw(basel.sym());
        if valid(mesh, lcand, basel) {
            loop {
                let next = mesh.next_ccw(lcand);
                if !valid(mesh, next, basel) || !base_circle(mesh, basel, lcand, next) {
                    break;
                }
                trace!(
                    origin = mesh.origin(lcand),
                    destination = mesh.destination(lcand),
                    "deleting left edge"
                );
                mesh.delete(lcand);
                lcand = next;
            }
        }

        // Right candidate, rotating clockwise around the base's right end.
        let mut rcand = mesh.next_cw(basel);
        if valid(mesh, rcand, basel) {
            loop {
                let next = mesh.next_cw(rcand);
                if !valid(mesh, next, basel) || !base_circle(mesh, basel, rcand, next) {
                    break;
                }
                trace!(
                    origin = mesh.origin(rcand),
                    destination = mesh.destination(rcand),
                    "deleting right edge"
                );
                mesh.delete(rcand);
                rcand = next;
            }
        }

        let left_valid = valid(mesh, lcand, basel);
        let right_valid = valid(mesh, rcand, basel);
        if !left_valid && !right_valid {
            break;
        }

        let take_right = !left_valid
            || (right_valid
                && in_circumcircle(
                    at(mesh.destination(lcand)),
                    at(mesh.origin(lcand)),
                    at(mesh.origin(rcand)),
                    at(mesh.destination(rcand)),
                ));
        basel = if take_right {
            mesh.connect(rcand, basel.sym())
        } else {
            mesh.connect(basel.sym(), lcand.sym())
        };
    }

    (ldo, rdo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::{convex_hull_indices, polygon_area};
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point2<f64>> {
        coords.iter().map(|&c| Point2::from(c)).collect()
    }

    fn assert_delaunay(dt: &EdgeTriangulation<f64>) {
        let points = dt.points();
        for tri in dt.triangles() {
            let [a, b, c] = tri.points(points);
            for (i, &p) in points.iter().enumerate() {
                if !tri.contains_vertex(i) {
                    assert!(
                        !in_circumcircle(a, b, c, p),
                        "Point {} is inside circumcircle of triangle ({}, {}, {})",
                        i,
                        tri.a,
                        tri.b,
                        tri.c
                    );
                }
            }
        }
    }

    #[test]
    fn test_two_points() {
        let points = pts(&[[1.0, 1.0], [0.0, 0.0]]);
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        assert_eq!(dt.edge_count(), 1);
        assert!(dt.triangles().is_empty());

        let edge = dt.edges()[0];
        let ends: HashSet<usize> = [edge.origin, edge.destination].into();
        assert_eq!(ends, HashSet::from([0, 1]));
    }

    #[test]
    fn test_single_triangle() {
        let points = pts(&[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]]);
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        assert_eq!(dt.edge_count(), 3);

        let triangles = dt.triangles();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].sorted(), [0, 1, 2]);
        assert_eq!(dt.hull().len(), 3);
        assert!(dt.mesh().check_rings().is_ok());
    }

    #[test]
    fn test_clockwise_triple() {
        // Sorted order turns right, exercising the other winding of the base case.
        let points = pts(&[[0.0, 0.0], [5.0, 10.0], [10.0, 0.0]]);
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        assert_eq!(dt.edge_count(), 3);
        assert_eq!(dt.triangles().len(), 1);
        assert!(dt.mesh().check_rings().is_ok());
    }

    #[test]
    fn test_square() {
        let points = pts(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        assert_eq!(dt.edge_count(), 5);

        let triangles = dt.triangles();
        assert_eq!(triangles.len(), 2);
        let area: f64 = triangles.iter().map(|t| t.area(dt.points())).sum();
        assert_relative_eq!(area, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_collinear_is_rejected() {
        let points = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
        assert!(matches!(
            divide_and_conquer_delaunay(&points),
            Err(TriangulationError::Collinear)
        ));
    }

    #[test]
    fn test_too_few_points() {
        let points = pts(&[[3.0, 3.0], [3.0, 3.0]]);
        assert!(matches!(
            divide_and_conquer_delaunay(&points),
            Err(TriangulationError::TooFewPoints {
                required: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let points = pts(&[[0.0, 0.0], [f64::INFINITY, 0.0], [1.0, 1.0]]);
        assert!(matches!(
            divide_and_conquer_delaunay(&points),
            Err(TriangulationError::NonFinite { index: 1 })
        ));
    }

    #[test]
    fn test_duplicates_use_first_index() {
        let points = pts(&[[0.0, 0.0], [4.0, 0.0], [0.0, 0.0], [0.0, 4.0], [4.0, 0.0]]);
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        assert_eq!(dt.edge_count(), 3);
        let used: HashSet<usize> = dt
            .edges()
            .iter()
            .flat_map(|e| [e.origin, e.destination])
            .collect();
        assert_eq!(used, HashSet::from([0, 1, 3]));
    }

    #[test]
    fn test_collinear_subsets_merge() {
        // Both halves of the first split are vertical segments.
        let points = pts(&[
            [0.0, 0.0],
            [0.0, 1.0],
            [0.0, 2.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [1.0, 2.0],
        ]);
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        assert!(dt.mesh().check_rings().is_ok());

        // 2x1 grid of unit squares, all six points on the hull boundary
        let triangles = dt.triangles();
        assert_eq!(triangles.len(), 4);
        let area: f64 = triangles.iter().map(|t| t.area(dt.points())).sum();
        assert_relative_eq!(area, 2.0, epsilon = 1e-9);
        assert_eq!(dt.hull().len(), 6);
        assert_delaunay(&dt);
    }

    #[test]
    fn test_counts_match_euler() {
        let points = pts(&[
            [0.1, 0.2],
            [0.8, 0.1],
            [0.9, 0.9],
            [0.2, 0.85],
            [0.5, 0.5],
            [0.3, 0.3],
            [0.7, 0.6],
            [0.4, 0.8],
            [0.65, 0.25],
        ]);
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        let n = points.len();
        let h = convex_hull_indices(&points).len();

        assert_eq!(dt.edge_count(), 3 * n - 3 - h);
        assert_eq!(dt.triangles().len(), 2 * n - 2 - h);
        assert!(dt.mesh().check_rings().is_ok());
        assert_delaunay(&dt);
    }

    #[test]
    fn test_hull_is_ccw_and_matches_area() {
        let points = pts(&[
            [0.1, 0.2],
            [0.8, 0.1],
            [0.9, 0.9],
            [0.2, 0.85],
            [0.5, 0.5],
            [0.3, 0.3],
        ]);
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        let hull = dt.hull();

        let expected: HashSet<usize> = convex_hull_indices(&points).into_iter().collect();
        assert_eq!(hull.iter().copied().collect::<HashSet<_>>(), expected);

        let polygon: Vec<Point2<f64>> = hull.iter().map(|&i| points[i]).collect();
        for i in 0..polygon.len() {
            let a = polygon[i];
            let b = polygon[(i + 1) % polygon.len()];
            let c = polygon[(i + 2) % polygon.len()];
            assert!(orient2d(a, b, c) > 0.0);
        }

        let area: f64 = dt.triangles().iter().map(|t| t.area(&points)).sum();
        assert_relative_eq!(area, polygon_area(&polygon), epsilon = 1e-9);
    }

    #[test]
    fn test_triangles_are_ccw() {
        let points = pts(&[[0.0, 0.0], [3.0, 1.0], [1.0, 3.0], [4.0, 4.0], [2.0, 1.5]]);
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        for tri in dt.triangles() {
            let [a, b, c] = tri.points(&points);
            assert!(orient2d(a, b, c) > 0.0);
        }
    }

    #[test]
    fn test_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
            Point2::new(0.5, 0.4),
        ];
        let dt = divide_and_conquer_delaunay(&points).unwrap();
        assert_eq!(dt.triangles().len(), 3);
    }
}
