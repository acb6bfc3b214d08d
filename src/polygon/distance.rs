//! Signed distance from a point to a polygon boundary.

use super::core::crosses_ray;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Signed distance from `p` to the boundary of the ring.
///
/// Positive inside, negative outside, zero on the boundary. Inside/outside is
/// decided by even-odd ray casting; the magnitude is the distance to the
/// nearest edge. Edges shorter than `tolerance` on both axes are measured to
/// their start vertex.
///
/// Returns negative infinity for an empty ring.
pub fn polygon_signed_distance<F: Float>(vertices: &[Point2<F>], p: Point2<F>, tolerance: F) -> F {
    let (inside, min_dist_sq) = ring_scan(vertices, p, tolerance);
    let dist = min_dist_sq.sqrt();
    if inside {
        dist
    } else {
        -dist
    }
}

/// Unsigned distance from `p` to the nearest edge of the ring.
pub fn polygon_boundary_distance<F: Float>(vertices: &[Point2<F>], p: Point2<F>, tolerance: F) -> F {
    ring_scan(vertices, p, tolerance).1.sqrt()
}

/// Single pass over the edges computing parity and minimum squared edge distance.
fn ring_scan<F: Float>(vertices: &[Point2<F>], p: Point2<F>, tolerance: F) -> (bool, F) {
    let mut inside = false;
    let mut min_dist_sq = F::infinity();

    let Some(&last) = vertices.last() else {
        return (inside, min_dist_sq);
    };

    let mut b = last;
    for &a in vertices {
        if crosses_ray(a, b, p) {
            inside = !inside;
        }
        let d = Segment2::new(a, b).distance_squared_to_point_with_tolerance(p, tolerance);
        if d < min_dist_sq {
            min_dist_sq = d;
        }
        b = a;
    }

    (inside, min_dist_sq)
}
