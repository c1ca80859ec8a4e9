//! Bounding triangle whose vertices sit at symbolic infinity.
//!
//! The incremental engine seeds its triangulation with three synthetic
//! vertices that have no coordinates. Index `n` (the number of input points)
//! is *far right*: below every input point and infinitely far to the right.
//! Index `n + 1` is *far left*: above every input point and infinitely far to
//! the left. Index `n + 2` is *far top*: infinitely far up, leaning right.
//! Each is infinitely further out than the one before it.
//!
//! Predicates involving these vertices are decided in the limit of that
//! configuration, using only comparisons of input coordinates:
//!
//! - every input point lies strictly inside the triangle
//! - an input point is never collinear with a synthetic vertex and another
//!   vertex
//! - a synthetic vertex never lies inside the circumcircle of three input
//!   points, however close one of them is to the hull
//!
//! The same construction with two synthetic vertices and the highest input
//! point is described in de Berg et al., *Computational Geometry*, §9.3.

use super::triangle::Triangle;
use crate::predicates::orient2d;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Synthetic vertices, nearest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Far {
    Right,
    Left,
    Top,
}

impl Far {
    /// The next vertex counter-clockwise around the bounding triangle.
    fn next(self) -> Self {
        match self {
            Far::Top => Far::Left,
            Far::Left => Far::Right,
            Far::Right => Far::Top,
        }
    }

    /// Orientation of `(self, b, c)` for input points `b` and `c`.
    fn turn<F: Float>(self, b: Point2<F>, c: Point2<F>) -> Ordering {
        let ccw = match self {
            // The line towards a vertex far to the right descends slightly,
            // so points at equal height are ordered by x.
            Far::Right => height_cmp(b, c) == Ordering::Greater,
            Far::Left => height_cmp(c, b) == Ordering::Greater,
            Far::Top => sweep_cmp(c, b) == Ordering::Greater,
        };
        if ccw {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

/// Orders by y, then by x.
fn height_cmp<F: Float>(a: Point2<F>, b: Point2<F>) -> Ordering {
    a.y.partial_cmp(&b.y)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Orders by x, then by descending y.
fn sweep_cmp<F: Float>(a: Point2<F>, b: Point2<F>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal))
}

#[derive(Debug, Clone, Copy)]
enum Vertex<F> {
    Input(Point2<F>),
    Synthetic(Far),
}

/// The input points extended by the three synthetic vertices.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SymbolicFrame<'a, F> {
    points: &'a [Point2<F>],
}

impl<'a, F: Float> SymbolicFrame<'a, F> {
    pub(crate) fn new(points: &'a [Point2<F>]) -> Self {
        Self { points }
    }

    pub(crate) fn points(&self) -> &'a [Point2<F>] {
        self.points
    }

    /// Number of vertices, synthetic ones included.
    pub(crate) fn vertex_count(&self) -> usize {
        self.points.len() + 3
    }

    /// The synthetic triangle in CCW order.
    pub(crate) fn bounding_triangle(&self) -> Triangle {
        let n = self.points.len();
        Triangle::new(n + 2, n + 1, n)
    }

    pub(crate) fn is_synthetic(&self, v: usize) -> bool {
        v >= self.points.len()
    }

    pub(crate) fn touches_synthetic(&self, t: &Triangle) -> bool {
        self.is_synthetic(t.a) || self.is_synthetic(t.b) || self.is_synthetic(t.c)
    }

    fn far(&self, v: usize) -> Option<Far> {
        match v.checked_sub(self.points.len())? {
            0 => Some(Far::Right),
            1 => Some(Far::Left),
            _ => Some(Far::Top),
        }
    }

    fn vertex(&self, v: usize) -> Vertex<F> {
        match self.far(v) {
            Some(far) => Vertex::Synthetic(far),
            None => Vertex::Input(self.points[v]),
        }
    }

    /// Orientation of `(a, b, c)`: `Greater` for counter-clockwise, `Less`
    /// for clockwise and `Equal` only for three collinear input points.
    pub(crate) fn orientation(&self, a: usize, b: usize, c: usize) -> Ordering {
        use Vertex::{Input, Synthetic};

        match (self.vertex(a), self.vertex(b), self.vertex(c)) {
            (Input(a), Input(b), Input(c)) => orient2d(a, b, c)
                .partial_cmp(&F::zero())
                .unwrap_or(Ordering::Equal),
            (Synthetic(far), Input(b), Input(c)) => far.turn(b, c),
            (Input(a), Synthetic(far), Input(c)) => far.turn(c, a),
            (Input(a), Input(b), Synthetic(far)) => far.turn(a, b),
            // Every input point is inside the bounding triangle, so it turns
            // the same way as the triangle's third vertex.
            (Synthetic(x), Synthetic(y), Input(_))
            | (Input(_), Synthetic(x), Synthetic(y))
            | (Synthetic(y), Input(_), Synthetic(x)) => {
                if y == x.next() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (Synthetic(x), Synthetic(y), Synthetic(z)) => {
                if x == y || y == z || z == x {
                    Ordering::Equal
                } else if y == x.next() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    }

    /// Decides whether edge `uv`, shared by triangles `(p, u, v)` and
    /// `(u, v, d)` with `p` an input point, must be flipped.
    ///
    /// Returns `None` when `u`, `v` and `d` are all input points, leaving the
    /// decision to a coordinate test.
    pub(crate) fn flip_decision(&self, p: usize, u: usize, v: usize, d: usize) -> Option<bool> {
        match (self.far(u), self.far(v)) {
            (None, None) => self.far(d).map(|_| false),
            (Some(_), Some(_)) => Some(false),
            (Some(far), None) => Some(self.crosses_toward(p, v, u, far, d)),
            (None, Some(far)) => Some(self.crosses_toward(p, u, v, far, d)),
        }
    }

    /// Edge from input point `real` to synthetic vertex `far_index`.
    ///
    /// The circumcircle of `p`, `real` and a vertex at infinity is the open
    /// half-plane of line `p real` on that vertex's side. A nearer synthetic
    /// vertex is measured against the same half-plane, and a further one is
    /// always outside.
    fn crosses_toward(&self, p: usize, real: usize, far_index: usize, far: Far, d: usize) -> bool {
        let side = self.orientation(p, real, far_index);
        match self.far(d) {
            Some(other) if other > far => false,
            _ => self.orientation(p, real, d) == side,
        }
    }
}
