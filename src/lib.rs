//! polepoint - Visual centers of polygons
//!
//! Finds the pole of inaccessibility of a polygon: the interior point farthest
//! from the boundary, to a caller-chosen precision. It is the usual anchor for
//! placing a label inside an irregular or concave shape, where the area
//! centroid may fall outside.
//!
//! ```
//! use polepoint::{visual_center, Point2};
//!
//! let hexagon: Vec<Point2<f64>> = (0..6)
//!     .map(|i| {
//!         let a = std::f64::consts::PI / 3.0 * i as f64;
//!         Point2::new(10.0 * a.cos(), 10.0 * a.sin())
//!     })
//!     .collect();
//!
//! let center = visual_center(&hexagon, 0.5).unwrap();
//! assert!(center.distance(Point2::new(0.0, 0.0)) < 1.0);
//! ```

pub mod bounds;
pub mod error;
pub mod pole;
pub mod polygon;
pub mod primitives;
#[cfg(feature = "simd")]
pub mod simd;

pub use bounds::Rect2;
pub use error::{PoleError, Result};
pub use pole::{visual_center, visual_center_with_options, PoleOptions, VisualCenter};
pub use polygon::Polygon;
pub use primitives::{Point2, Segment2, Size2, Vec2};
