//! delaunay2d - Planar Delaunay triangulation
//!
//! Two engines over the same floating-point predicates: incremental insertion
//! with edge flipping, and Guibas–Stolfi divide and conquer on a quad-edge
//! arena. Both are generic over `f32` and `f64`.
//!
//! # Example
//!
//! ```
//! use delaunay2d::{divide_and_conquer_delaunay, incremental_delaunay, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//!     Point2::new(4.0, 6.0),
//! ];
//!
//! let triangles = incremental_delaunay(&points).unwrap();
//! let dt = divide_and_conquer_delaunay(&points).unwrap();
//! assert_eq!(triangles.len(), dt.triangles().len());
//! ```

pub mod bounds;
pub mod error;
pub mod hull;
pub mod predicates;
pub mod primitives;
pub mod triangulation;

pub use error::TriangulationError;
pub use predicates::{in_circumcircle, orient2d, orientation, Side};
pub use primitives::{Point2, Vec2};
pub use triangulation::{
    divide_and_conquer_delaunay, incremental_delaunay, incremental_delaunay_with,
    EdgeTriangulation, IncrementalConfig, Triangle,
};
