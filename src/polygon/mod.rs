//! Polygon rings: validation, area, centroid, containment and signed distance.
//!
//! # Example
//!
//! ```
//! use polepoint::polygon::{polygon_signed_distance, Polygon};
//! use polepoint::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! assert!(square.contains(Point2::new(1.0, 1.0)));
//! assert_eq!(polygon_signed_distance(&square.vertices, Point2::new(1.0, 2.0), 1e-10), 1.0);
//! assert_eq!(polygon_signed_distance(&square.vertices, Point2::new(6.0, 2.0), 1e-10), -2.0);
//! ```

mod core;
mod distance;

pub use self::core::{
    polygon_centroid_or_first, polygon_contains, polygon_signed_area, validate_ring, Polygon,
};
pub use distance::{polygon_boundary_distance, polygon_signed_distance};

#[cfg(feature = "simd")]
pub(crate) use self::core::crosses_ray;
