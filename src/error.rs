//! Error types for triangulation.

use thiserror::Error;

/// Errors reported by the triangulation engines.
///
/// Every failure is returned to the caller as-is; the engines never hand
/// back a partial triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Not enough distinct points for the requested engine.
    #[error("need at least {required} distinct points, found {found}")]
    TooFewPoints {
        /// Minimum number of distinct points the engine accepts.
        required: usize,
        /// Number of distinct points supplied.
        found: usize,
    },

    /// Every input point lies on one line, so there is no triangle to form.
    #[error("all input points are collinear")]
    Collinear,

    /// An input coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite {
        /// Index of the offending point in the input slice.
        index: usize,
    },

    /// Point location found no triangle containing the point.
    #[error("no triangle contains point {index}")]
    LocationFailed {
        /// Index of the point being inserted.
        index: usize,
    },

    /// Edge legalization did not settle within the flip budget.
    #[error("legalization of point {index} exceeded {limit} flips")]
    FlipLimitExceeded {
        /// Index of the point being inserted.
        index: usize,
        /// The flip budget that was exhausted.
        limit: usize,
    },
}
