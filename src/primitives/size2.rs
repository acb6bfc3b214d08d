//! Non-negative 2D extent.

use crate::error::{PoleError, Result};
use num_traits::Float;

/// A width/height pair. Both components are always `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size2<F> {
    width: F,
    height: F,
}

impl<F: Float> Size2<F> {
    /// Creates a size, rejecting negative (or NaN) components.
    pub fn new(width: F, height: F) -> Result<Self> {
        if width.is_nan() || height.is_nan() || width < F::zero() || height < F::zero() {
            return Err(PoleError::negative_extent(width, height));
        }
        Ok(Self { width, height })
    }

    /// The empty `0 x 0` size.
    #[inline]
    pub fn zero() -> Self {
        Self {
            width: F::zero(),
            height: F::zero(),
        }
    }

    #[inline]
    pub fn width(self) -> F {
        self.width
    }

    #[inline]
    pub fn height(self) -> F {
        self.height
    }

    /// The shorter of the two sides.
    #[inline]
    pub fn min_side(self) -> F {
        self.width.min(self.height)
    }

    /// The longer of the two sides.
    #[inline]
    pub fn max_side(self) -> F {
        self.width.max(self.height)
    }

    /// Returns `true` if either side is zero.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == F::zero() || self.height == F::zero()
    }
}

impl<F: Float> Default for Size2<F> {
    fn default() -> Self {
        Self::zero()
    }
}
