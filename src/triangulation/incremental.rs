//! Delaunay triangulation by incremental insertion and edge flipping.
//!
//! # Algorithm
//!
//! 1. Start with one triangle that strictly contains every input point, its
//!    vertices placed at symbolic infinity
//! 2. Insert points one at a time, in input order:
//!    - locate the triangle containing the point (linear scan)
//!    - split it into three, or split the two triangles sharing the edge the
//!      point lies on into four
//!    - legalize every edge opposite the new point, flipping it and recursing
//!      on the two edges it exposes whenever it fails the legality test
//! 3. Remove triangles connected to the bounding triangle's vertices
//!
//! Neighbours are found by scanning the working triangle list, so there is
//! no adjacency structure to keep in sync with the flips.
//!
//! # Complexity
//!
//! - Time: O(n²) (linear point location and neighbour lookup)
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use delaunay2d::triangulation::incremental_delaunay;
//! use delaunay2d::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let triangles = incremental_delaunay(&points).unwrap();
//! assert_eq!(triangles.len(), 3);
//!
//! for tri in &triangles {
//!     assert!(tri.a < points.len());
//!     assert!(tri.b < points.len());
//!     assert!(tri.c < points.len());
//! }
//! ```

use super::config::{IncrementalConfig, LegalityTest};
use super::symbolic::SymbolicFrame;
use super::triangle::Triangle;
use super::{all_collinear, distinct_sorted};
use crate::error::TriangulationError;
use crate::predicates::{angle_between, in_circumcircle, orient2d};
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Computes the Delaunay triangulation of a set of points with the default
/// [`IncrementalConfig`].
///
/// # Returns
///
/// Counter-clockwise triangles whose indices refer to `points`. Exact
/// duplicate points are inserted once; the output uses the index of their
/// first occurrence.
///
/// # Errors
///
/// - [`TriangulationError::NonFinite`] if a coordinate is NaN or infinite
/// - [`TriangulationError::TooFewPoints`] for fewer than 3 distinct points
/// - [`TriangulationError::Collinear`] if all points lie on one line
/// - [`TriangulationError::LocationFailed`] if a point cannot be located
/// - [`TriangulationError::FlipLimitExceeded`] if legalization does not settle
///
/// # Example
///
/// ```
/// use delaunay2d::triangulation::incremental_delaunay;
/// use delaunay2d::Point2;
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let triangles = incremental_delaunay(&points).unwrap();
/// assert_eq!(triangles.len(), 4);
/// ```
pub fn incremental_delaunay<F: Float>(
    points: &[Point2<F>],
) -> Result<Vec<Triangle>, TriangulationError> {
    incremental_delaunay_with(points, &IncrementalConfig::default())
}

/// Computes the Delaunay triangulation of a set of points by incremental
/// insertion, using `config` for the flip criterion and flip budget.
///
/// See [`incremental_delaunay`] for the output and errors.
pub fn incremental_delaunay_with<F: Float>(
    points: &[Point2<F>],
    config: &IncrementalConfig,
) -> Result<Vec<Triangle>, TriangulationError> {
    let order = distinct_sorted(points)?;
    if order.len() < 3 {
        return Err(TriangulationError::TooFewPoints {
            required: 3,
            found: order.len(),
        });
    }
    if all_collinear(points, &order) {
        return Err(TriangulationError::Collinear);
    }

    let mut distinct = vec![false; points.len()];
    for &i in &order {
        distinct[i] = true;
    }

    let mut workspace = Workspace::new(points, config);
    for (index, &is_distinct) in distinct.iter().enumerate() {
        if is_distinct {
            workspace.insert(index)?;
        } else {
            trace!(index, "skipping duplicate point");
        }
    }

    let flips = workspace.total_flips;
    let triangles = workspace.finish();
    debug!(
        points = points.len(),
        duplicates = points.len() - order.len(),
        flips,
        triangles = triangles.len(),
        "incremental triangulation finished"
    );
    Ok(triangles)
}

/// Where a point falls in the current triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    /// Strictly inside the triangle at this position.
    Inside(usize),
    /// On the edge `uv` of the triangle at `triangle`, away from its vertices.
    OnEdge { triangle: usize, u: usize, v: usize },
}

/// Mutable state of one incremental run.
///
/// Triangle indices below `points.len()` are input points; the three above
/// are the synthetic vertices of the [`SymbolicFrame`].
struct Workspace<'a, F> {
    frame: SymbolicFrame<'a, F>,
    triangles: Vec<Triangle>,
    legality: LegalityTest,
    flip_budget: usize,
    flips_left: usize,
    total_flips: usize,
}

impl<'a, F: Float> Workspace<'a, F> {
    fn new(points: &'a [Point2<F>], config: &IncrementalConfig) -> Self {
        let frame = SymbolicFrame::new(points);
        let flip_budget = config.flip_budget(frame.vertex_count());
        Self {
            frame,
            triangles: vec![frame.bounding_triangle()],
            legality: config.legality,
            flip_budget,
            flips_left: flip_budget,
            total_flips: 0,
        }
    }

    /// Inserts the point at `index` and restores the Delaunay property around it.
    fn insert(&mut self, index: usize) -> Result<(), TriangulationError> {
        self.flips_left = self.flip_budget;

        match self
            .locate(index)
            .ok_or(TriangulationError::LocationFailed { index })?
        {
            Location::Inside(t) => {
                let host = self.triangles.swap_remove(t);
                let edges = host.edges();
                self.triangles
                    .extend(edges.map(|(u, v)| Triangle::new(u, v, index)));
                for (u, v) in edges {
                    self.legalize(index, u, v)?;
                }
            }
            Location::OnEdge { triangle, u, v } => {
                let failed = TriangulationError::LocationFailed { index };
                let w = self.triangles[triangle].third_vertex(u, v).ok_or(failed.clone())?;
                let across = self.neighbor(u, v, w).ok_or(failed.clone())?;
                let x = self.triangles[across].third_vertex(u, v).ok_or(failed)?;
                trace!(index, u, v, "point lies on an edge, splitting both sides");

                self.remove_pair(triangle, across);
                let edges = [(w, u), (v, w), (u, x), (x, v)];
                self.triangles
                    .extend(edges.map(|(s, t)| Triangle::new(s, t, index)));
                for (s, t) in edges {
                    self.legalize(index, s, t)?;
                }
            }
        }
        Ok(())
    }

    /// Finds the triangle strictly containing the point at `index`, or
    /// failing that an edge it lies on.
    ///
    /// Orientations against synthetic vertices are never zero, so the edge
    /// found always joins two input points.
    fn locate(&self, index: usize) -> Option<Location> {
        let mut on_edge = None;
        for (i, t) in self.triangles.iter().enumerate() {
            let winding = self.frame.orientation(t.a, t.b, t.c);
            if winding == Ordering::Equal {
                continue;
            }
            let sides = t
                .edges()
                .map(|(u, v)| self.frame.orientation(u, v, index));
            if sides.iter().all(|&s| s == winding) {
                return Some(Location::Inside(i));
            }

            let zeros = sides.iter().filter(|&&s| s == Ordering::Equal).count();
            let agreeing = sides.iter().filter(|&&s| s == winding).count();
            if on_edge.is_none() && zeros == 1 && agreeing == 2 {
                on_edge = t
                    .edges()
                    .into_iter()
                    .zip(sides)
                    .find(|&(_, s)| s == Ordering::Equal)
                    .map(|((u, v), _)| Location::OnEdge { triangle: i, u, v });
            }
        }
        on_edge
    }

    /// Position of the triangle on the other side of edge `uv` from vertex `apex`.
    fn neighbor(&self, u: usize, v: usize, apex: usize) -> Option<usize> {
        self.triangles
            .iter()
            .position(|t| t.has_edge(u, v) && !t.contains_vertex(apex))
    }

    /// Removes two triangles by position, whatever their order.
    fn remove_pair(&mut self, i: usize, j: usize) {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        self.triangles.swap_remove(hi);
        self.triangles.swap_remove(lo);
    }

    /// Checks the edge `uv` of the triangle `(p, u, v)` and flips it if illegal.
    ///
    /// After a flip the two edges of the new quadrilateral that face `p`
    /// are checked in turn.
    fn legalize(&mut self, p: usize, u: usize, v: usize) -> Result<(), TriangulationError> {
        let mut own = None;
        let mut across = None;
        for (i, t) in self.triangles.iter().enumerate() {
            if t.has_edge(u, v) {
                if t.contains_vertex(p) {
                    own = Some(i);
                } else {
                    across = Some(i);
                }
            }
        }
        // Edges of the bounding triangle have nothing across them.
        let (Some(own), Some(across)) = (own, across) else {
            return Ok(());
        };
        let Some(d) = self.triangles[across].third_vertex(u, v) else {
            return Ok(());
        };

        if !self.is_illegal(p, u, v, d) {
            return Ok(());
        }
        if self.flips_left == 0 {
            return Err(TriangulationError::FlipLimitExceeded {
                index: p,
                limit: self.flip_budget,
            });
        }
        self.flips_left -= 1;
        self.total_flips += 1;
        trace!(p, u, v, d, "flipping edge");

        self.remove_pair(own, across);
        self.triangles
            .extend([Triangle::new(u, d, p), Triangle::new(d, v, p)]);

        self.legalize(p, u, d)?;
        self.legalize(p, d, v)
    }

    /// Whether edge `uv`, shared by triangles `(p, u, v)` and `(u, v, d)`,
    /// must be flipped.
    ///
    /// Quadrilaterals with a synthetic vertex are decided symbolically; the
    /// configured test only ever sees input points.
    fn is_illegal(&self, p: usize, u: usize, v: usize, d: usize) -> bool {
        if let Some(decision) = self.frame.flip_decision(p, u, v, d) {
            return decision;
        }
        let [pp, pu, pv, pd] = [p, u, v, d].map(|i| self.frame.points()[i]);
        match self.legality {
            LegalityTest::InCircle => {
                if orient2d(pp, pu, pv) > F::zero() {
                    in_circumcircle(pp, pu, pv, pd)
                } else {
                    in_circumcircle(pp, pv, pu, pd)
                }
            }
            LegalityTest::AngleSum => {
                let straight = F::from(180.0).unwrap_or_else(F::infinity);
                angle_between(pu, pp, pv) + angle_between(pu, pd, pv) > straight
            }
        }
    }

    /// Drops triangles touching the synthetic vertices and orients the rest CCW.
    fn finish(self) -> Vec<Triangle> {
        let frame = self.frame;
        self.triangles
            .into_iter()
            .filter(|t| !frame.touches_synthetic(t))
            .map(|t| t.to_ccw(frame.points()))
            .collect()
    }
}
