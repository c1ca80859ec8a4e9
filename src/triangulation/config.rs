//! Tunables for the incremental engine.

/// Criterion used to decide whether an edge must be flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegalityTest {
    /// Flip when the opposite apex lies strictly inside the circumcircle of
    /// the triangle formed by the new point and the edge.
    #[default]
    InCircle,
    /// Flip when the two angles subtended by the edge at the opposite apexes
    /// sum to more than 180 degrees.
    ///
    /// Equivalent to [`LegalityTest::InCircle`] for convex quadrilaterals,
    /// but goes through `atan2`, so near-cocircular configurations can be
    /// decided differently.
    AngleSum,
}

/// Configuration for [`incremental_delaunay_with`](super::incremental_delaunay_with).
///
/// # Example
///
/// ```
/// use delaunay2d::triangulation::{IncrementalConfig, LegalityTest};
///
/// let config = IncrementalConfig::default()
///     .with_legality(LegalityTest::AngleSum)
///     .with_flip_limit(500);
/// assert_eq!(config.legality, LegalityTest::AngleSum);
/// assert_eq!(config.max_flips_per_insertion, Some(500));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IncrementalConfig {
    /// Edge flip criterion for quadrilaterals of input points.
    pub legality: LegalityTest,
    /// Maximum number of flips allowed while legalizing a single insertion.
    ///
    /// `None` uses a bound proportional to the number of points.
    pub max_flips_per_insertion: Option<usize>,
}

impl IncrementalConfig {
    /// Sets the edge flip criterion.
    #[must_use]
    pub fn with_legality(mut self, legality: LegalityTest) -> Self {
        self.legality = legality;
        self
    }

    /// Caps the flips allowed while legalizing one insertion.
    #[must_use]
    pub fn with_flip_limit(mut self, limit: usize) -> Self {
        self.max_flips_per_insertion = Some(limit);
        self
    }

    /// Flip budget for one insertion into a triangulation of `vertex_count` vertices.
    ///
    /// In exact arithmetic an insertion flips at most one edge per vertex
    /// that ends up adjacent to the new point.
    pub(crate) fn flip_budget(&self, vertex_count: usize) -> usize {
        self.max_flips_per_insertion
            .unwrap_or_else(|| 4 * vertex_count + 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = IncrementalConfig::default();
        assert_eq!(config.legality, LegalityTest::InCircle);
        assert_eq!(config.max_flips_per_insertion, None);
    }

    #[test]
    fn test_flip_budget() {
        assert_eq!(IncrementalConfig::default().flip_budget(10), 56);
        assert_eq!(
            IncrementalConfig::default().with_flip_limit(3).flip_budget(10),
            3
        );
    }
}
