//! Visual center search (pole of inaccessibility).
//!
//! The bounding rectangle of the polygon is tiled into square cells. Each cell
//! carries the signed distance from its center to the boundary and an upper
//! bound for any point inside it. Cells are refined best-bound-first until no
//! remaining cell can beat the best answer by more than the requested
//! precision.
//!
//! # Example
//!
//! ```
//! use polepoint::pole::{visual_center_with_options, PoleOptions};
//! use polepoint::Point2;
//!
//! // An L-shaped polygon: its area centroid is close to the inner corner.
//! let l_shape = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(30.0, 0.0),
//!     Point2::new(30.0, 10.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(10.0, 30.0),
//!     Point2::new(0.0, 30.0),
//! ];
//!
//! let found = visual_center_with_options(&l_shape, &PoleOptions::with_precision(0.1)).unwrap();
//! assert!(found.distance >= 5.0 - 0.1);
//! ```

mod cell;
mod options;
mod queue;
mod search;

pub use cell::Cell;
pub use options::PoleOptions;
pub use queue::CellQueue;
pub use search::{visual_center, visual_center_with_options, SearchStats, VisualCenter};

#[cfg(feature = "simd")]
pub(crate) use cell::CellScorer;
#[cfg(feature = "simd")]
pub(crate) use search::run_search;
