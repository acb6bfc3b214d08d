//! Search parameters.

use crate::error::{PoleError, Result};
use num_traits::Float;

/// Parameters for the visual center search.
#[derive(Debug, Clone, Copy)]
pub struct PoleOptions<F> {
    /// Largest accepted gap between the returned point's boundary distance
    /// and the true maximum, in coordinate units.
    pub precision: F,
    /// Threshold below which extents, edges and areas count as degenerate.
    pub tolerance: F,
    /// Upper limit on dequeued cells. `None` runs until the bound is proven.
    pub max_iterations: Option<usize>,
}

impl<F: Float> Default for PoleOptions<F> {
    fn default() -> Self {
        Self {
            precision: F::one(),
            tolerance: F::from(1e-10).unwrap(),
            max_iterations: None,
        }
    }
}

impl<F: Float> PoleOptions<F> {
    /// Creates options with the specified precision.
    pub fn with_precision(precision: F) -> Self {
        Self {
            precision,
            ..Default::default()
        }
    }

    /// Replaces the degenerate-geometry tolerance.
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Caps the number of cells the search may dequeue.
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Checks that precision and tolerance are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.precision.is_finite() || self.precision <= F::zero() {
            return Err(PoleError::invalid_parameter("precision", self.precision));
        }
        if !self.tolerance.is_finite() || self.tolerance <= F::zero() {
            return Err(PoleError::invalid_parameter("tolerance", self.tolerance));
        }
        Ok(())
    }
}
