//! Index triangle shared by both engines.

use crate::predicates::orient2d;
use crate::primitives::Point2;
use num_traits::Float;

/// A triangle represented by indices into a point array.
///
/// The three indices are distinct. Both engines report triangles in
/// counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Checks if `u` and `v` are both vertices, i.e. `uv` is an edge.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.contains_vertex(u) && self.contains_vertex(v)
    }

    /// The vertex that is neither `u` nor `v`, if `uv` is an edge.
    #[inline]
    pub fn third_vertex(&self, u: usize, v: usize) -> Option<usize> {
        if !self.has_edge(u, v) {
            return None;
        }
        [self.a, self.b, self.c]
            .into_iter()
            .find(|&w| w != u && w != v)
    }

    /// Vertex indices in ascending order, for comparing triangles as sets.
    #[inline]
    pub fn sorted(&self) -> [usize; 3] {
        let mut v = [self.a, self.b, self.c];
        v.sort_unstable();
        v
    }

    /// Resolves the indices against `points`.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `points`.
    #[inline]
    pub fn points<F: Float>(&self, points: &[Point2<F>]) -> [Point2<F>; 3] {
        [points[self.a], points[self.b], points[self.c]]
    }

    /// Unsigned area of the triangle.
    #[inline]
    pub fn area<F: Float>(&self, points: &[Point2<F>]) -> F {
        let [a, b, c] = self.points(points);
        orient2d(a, b, c).abs() / (F::one() + F::one())
    }

    /// Same triangle with its vertices in counter-clockwise order.
    #[inline]
    pub fn to_ccw<F: Float>(self, points: &[Point2<F>]) -> Self {
        let [a, b, c] = self.points(points);
        if orient2d(a, b, c) < F::zero() {
            Self::new(self.a, self.c, self.b)
        } else {
            self
        }
    }
}
