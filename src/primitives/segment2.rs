//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns `true` if both the x- and y-extent of the segment are below `tolerance`.
    #[inline]
    pub fn is_degenerate(self, tolerance: F) -> bool {
        let d = self.direction();
        d.x.abs() < tolerance && d.y.abs() < tolerance
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// The projection parameter is clamped to `[0, 1]`. A degenerate segment
    /// (see [`is_degenerate`](Self::is_degenerate)) collapses to its start point.
    pub fn closest_point_with_tolerance(self, p: Point2<F>, tolerance: F) -> Point2<F> {
        if self.is_degenerate(tolerance) {
            return self.start;
        }

        let v = self.direction();
        let t = (p - self.start).dot(v) / v.magnitude_squared();

        if t > F::one() {
            self.end
        } else if t > F::zero() {
            self.start + v * t
        } else {
            self.start
        }
    }

    /// Squared distance from `p` to the segment, treating segments shorter than
    /// `tolerance` on both axes as a single point.
    #[inline]
    pub fn distance_squared_to_point_with_tolerance(self, p: Point2<F>, tolerance: F) -> F {
        p.distance_squared(self.closest_point_with_tolerance(p, tolerance))
    }

    /// Distance from `p` to the segment.
    ///
    /// Only exactly zero-length segments are treated as points.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point_with_tolerance(p, F::min_positive_value())
            .sqrt()
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
