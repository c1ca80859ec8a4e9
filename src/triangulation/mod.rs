//! Delaunay triangulation of planar point sets.
//!
//! Two engines compute the same triangulation:
//!
//! - [`incremental_delaunay`]: insertion with edge flipping inside a
//!   bounding triangle at symbolic infinity, returning a list of [`Triangle`]s
//! - [`divide_and_conquer_delaunay`]: Guibas–Stolfi over a [`QuadEdgeMesh`],
//!   returning an [`EdgeTriangulation`]
//!
//! Both reject non-finite coordinates and collinear inputs, and both insert
//! exact duplicate points once.

mod config;
mod divide_conquer;
mod incremental;
mod quad_edge;
mod symbolic;
mod triangle;

pub use config::{IncrementalConfig, LegalityTest};
pub use divide_conquer::{divide_and_conquer_delaunay, DirectedEdge, EdgeTriangulation};
pub use incremental::{incremental_delaunay, incremental_delaunay_with};
pub use quad_edge::{EdgeId, QuadEdgeMesh, Ring, RingDefect};
pub use triangle::Triangle;

use crate::error::TriangulationError;
use crate::predicates::orient2d;
use crate::primitives::Point2;
use num_traits::Float;

/// Indices of the distinct points, sorted by `(x, y)`.
///
/// Of each group of exact duplicates, the one with the lowest index is kept.
fn distinct_sorted<F: Float>(points: &[Point2<F>]) -> Result<Vec<usize>, TriangulationError> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(TriangulationError::NonFinite { index });
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].lexicographic_cmp(&points[b]));
    order.dedup_by(|a, b| points[*a] == points[*b]);
    Ok(order)
}

/// True if every point in `order` lies on the line through its first and
/// last entries. `order` must be sorted and hold at least two distinct points.
fn all_collinear<F: Float>(points: &[Point2<F>], order: &[usize]) -> bool {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return true;
    };
    let (a, b) = (points[first], points[last]);
    order
        .iter()
        .all(|&i| orient2d(a, b, points[i]) == F::zero())
}
