//! Error types for polepoint operations.

use num_traits::Float;
use thiserror::Error;

/// Errors raised for invalid input.
///
/// Degenerate geometry (zero-area polygons, collapsed bounding boxes) is not an
/// error: the search falls back to a well-defined point instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoleError {
    /// The polygon ring has too few vertices to enclose any area.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending vertex in the ring.
        index: usize,
    },

    /// A rectangle or size was given a negative width or height.
    #[error("negative extent: width {width}, height {height}")]
    NegativeExtent {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// The vertices are finite but their bounding box is too large to represent.
    #[error("bounding box extent overflows: width {width}, height {height}")]
    ExtentOverflow {
        /// Computed bounding box width.
        width: f64,
        /// Computed bounding box height.
        height: f64,
    },

    /// A search parameter is out of range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl PoleError {
    pub(crate) fn negative_extent<F: Float>(width: F, height: F) -> Self {
        PoleError::NegativeExtent {
            width: width.to_f64().unwrap_or(f64::NAN),
            height: height.to_f64().unwrap_or(f64::NAN),
        }
    }

    pub(crate) fn extent_overflow<F: Float>(width: F, height: F) -> Self {
        PoleError::ExtentOverflow {
            width: width.to_f64().unwrap_or(f64::NAN),
            height: height.to_f64().unwrap_or(f64::NAN),
        }
    }

    pub(crate) fn invalid_parameter<F: Float>(name: &'static str, value: F) -> Self {
        PoleError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PoleError>;
