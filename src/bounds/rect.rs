//! Axis-aligned bounding rectangle.

use crate::error::Result;
use crate::primitives::{Point2, Size2};
use num_traits::Float;

/// An axis-aligned rectangle given by its minimum corner and a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2<F> {
    min: Point2<F>,
    size: Size2<F>,
}

impl<F: Float> Rect2<F> {
    /// Creates a rectangle from its left/bottom corner and extent.
    ///
    /// Fails with [`PoleError::NegativeExtent`](crate::PoleError::NegativeExtent)
    /// if `width` or `height` is negative.
    pub fn new(left: F, bottom: F, width: F, height: F) -> Result<Self> {
        let size = Size2::new(width, height)?;
        Ok(Self::from_position_size(Point2::new(left, bottom), size))
    }

    /// Creates a rectangle from a position (minimum corner) and a size.
    ///
    /// [`Size2`] is validated on construction, so this cannot fail.
    #[inline]
    pub fn from_position_size(position: Point2<F>, size: Size2<F>) -> Self {
        Self {
            min: position,
            size,
        }
    }

    /// The zero-sized rectangle at the origin.
    #[inline]
    pub fn zero() -> Self {
        Self {
            min: Point2::origin(),
            size: Size2::zero(),
        }
    }

    /// Computes the bounding rectangle of a point set in one pass.
    ///
    /// An empty slice yields [`Rect2::zero`].
    pub fn from_points(points: &[Point2<F>]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::zero();
        };

        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Self {
            min,
            // max >= min by construction, so the extent cannot be negative.
            size: Size2::new(max.x - min.x, max.y - min.y).unwrap_or_else(|_| Size2::zero()),
        }
    }

    /// Minimum (left/bottom) corner.
    #[inline]
    pub fn min(self) -> Point2<F> {
        self.min
    }

    /// Maximum (right/top) corner.
    #[inline]
    pub fn max(self) -> Point2<F> {
        Point2::new(self.min.x + self.size.width(), self.min.y + self.size.height())
    }

    #[inline]
    pub fn width(self) -> F {
        self.size.width()
    }

    #[inline]
    pub fn height(self) -> F {
        self.size.height()
    }

    #[inline]
    pub fn size(self) -> Size2<F> {
        self.size
    }

    /// Returns the exact geometric center.
    #[inline]
    pub fn center(self) -> Point2<F> {
        let two = F::one() + F::one();
        Point2::new(
            self.min.x + self.size.width() / two,
            self.min.y + self.size.height() / two,
        )
    }

    /// Length of the shorter side.
    #[inline]
    pub fn short_side(self) -> F {
        self.size.min_side()
    }

    /// Returns `true` if `p` lies inside or on the rectangle.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

impl<F: Float> Default for Rect2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PoleError;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let r: Rect2<f64> = Rect2::from_points(&points);
        assert_eq!(r.min(), Point2::new(-3.0, -1.0));
        assert_eq!(r.max(), Point2::new(4.0, 5.0));
        assert_eq!(r.width(), 7.0);
        assert_eq!(r.height(), 6.0);
        assert_eq!(r.short_side(), 6.0);
    }

    #[test]
    fn test_from_points_empty_is_zero_rect() {
        let r: Rect2<f64> = Rect2::from_points(&[]);
        assert_eq!(r, Rect2::zero());
        assert_eq!(r.min(), Point2::origin());
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
    }

    #[test]
    fn test_from_single_point() {
        let r: Rect2<f64> = Rect2::from_points(&[Point2::new(7.0, -2.0)]);
        assert_eq!(r.min(), Point2::new(7.0, -2.0));
        assert!(r.size().is_empty());
    }

    #[test]
    fn test_new_rejects_negative_extent() {
        assert_eq!(
            Rect2::new(0.0_f64, 0.0, -1.0, 3.0).unwrap_err(),
            PoleError::NegativeExtent {
                width: -1.0,
                height: 3.0
            }
        );
        assert!(Rect2::new(0.0_f64, 0.0, 1.0, -3.0).is_err());
    }

    #[test]
    fn test_from_position_size() {
        let r = Rect2::from_position_size(
            Point2::new(2.0_f64, 3.0),
            Size2::new(4.0, 10.0).unwrap(),
        );
        assert_eq!(r.center(), Point2::new(4.0, 8.0));
        assert_eq!(r.max(), Point2::new(6.0, 13.0));
        assert_eq!(r, Rect2::new(2.0, 3.0, 4.0, 10.0).unwrap());
    }

    #[test]
    fn test_contains_point() {
        let r: Rect2<f64> = Rect2::new(0.0, 0.0, 10.0, 5.0).unwrap();
        assert!(r.contains_point(Point2::new(0.0, 0.0)));
        assert!(r.contains_point(Point2::new(10.0, 5.0)));
        assert!(r.contains_point(Point2::new(3.0, 2.0)));
        assert!(!r.contains_point(Point2::new(10.5, 2.0)));
        assert!(!r.contains_point(Point2::new(3.0, -0.1)));
    }
}
