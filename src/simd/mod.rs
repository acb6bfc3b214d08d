//! SIMD-accelerated visual center search.
//!
//! Splitting a cell yields four children; this module scores them in one
//! `f64x4` batch instead of four scalar passes over the polygon edges.
//!
//! Enable with the `simd` feature flag:
//! ```toml
//! polepoint = { version = "0.1", features = ["simd"] }
//! ```

mod distance;

pub use distance::{polygon_signed_distance_x4, visual_center_simd};
