//! SIMD-accelerated polygon distance for batches of 4 query points.

use wide::f64x4;

use crate::error::Result;
use crate::pole::{run_search, CellScorer, PoleOptions, VisualCenter};
use crate::polygon::{crosses_ray, polygon_signed_distance};
use crate::primitives::Point2;

/// Computes signed distances from 4 points to a polygon boundary at once.
///
/// Positive inside, negative outside, like
/// [`polygon_signed_distance`](crate::polygon::polygon_signed_distance).
/// Results agree with the scalar version up to rounding.
pub fn polygon_signed_distance_x4(
    vertices: &[Point2<f64>],
    points: [Point2<f64>; 4],
    tolerance: f64,
) -> [f64; 4] {
    let Some(&last) = vertices.last() else {
        return [f64::NEG_INFINITY; 4];
    };

    let px = f64x4::new(points.map(|p| p.x));
    let py = f64x4::new(points.map(|p| p.y));
    let zero = f64x4::splat(0.0);
    let one = f64x4::splat(1.0);

    let mut min_dist_sq = f64x4::splat(f64::INFINITY);
    let mut inside = [false; 4];

    let mut b = last;
    for &a in vertices {
        // Parity is a per-lane branchy test; keep it scalar.
        for (lane, &p) in points.iter().enumerate() {
            if crosses_ray(a, b, p) {
                inside[lane] = !inside[lane];
            }
        }

        let vx = b.x - a.x;
        let vy = b.y - a.y;
        let ax = f64x4::splat(a.x);
        let ay = f64x4::splat(a.y);

        let dist_sq = if vx.abs() < tolerance && vy.abs() < tolerance {
            // Degenerate edge - measure to its start vertex
            let dx = px - ax;
            let dy = py - ay;
            dx * dx + dy * dy
        } else {
            let inv_len_sq = f64x4::splat(1.0 / (vx * vx + vy * vy));
            let vx4 = f64x4::splat(vx);
            let vy4 = f64x4::splat(vy);

            let t = ((px - ax) * vx4 + (py - ay) * vy4) * inv_len_sq;
            let t = t.max(zero).min(one);

            let dx = px - (ax + vx4 * t);
            let dy = py - (ay + vy4 * t);
            dx * dx + dy * dy
        };

        min_dist_sq = min_dist_sq.min(dist_sq);
        b = a;
    }

    let dist = min_dist_sq.sqrt().to_array();
    [0, 1, 2, 3].map(|i| if inside[i] { dist[i] } else { -dist[i] })
}

/// Scorer that evaluates the children of a split cell in one SIMD batch.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RingScorerX4<'a> {
    vertices: &'a [Point2<f64>],
    tolerance: f64,
}

impl CellScorer<f64> for RingScorerX4<'_> {
    #[inline]
    fn score(&self, p: Point2<f64>) -> f64 {
        polygon_signed_distance(self.vertices, p, self.tolerance)
    }

    #[inline]
    fn score4(&self, points: [Point2<f64>; 4]) -> [f64; 4] {
        polygon_signed_distance_x4(self.vertices, points, self.tolerance)
    }
}

/// Finds the visual center using batched distance evaluation.
///
/// Same contract as [`visual_center_with_options`](crate::pole::visual_center_with_options).
pub fn visual_center_simd(
    vertices: &[Point2<f64>],
    options: &PoleOptions<f64>,
) -> Result<VisualCenter<f64>> {
    let scorer = RingScorerX4 {
        vertices,
        tolerance: options.tolerance,
    };
    run_search(vertices, options, &scorer, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pole::visual_center_with_options;
    use approx::assert_relative_eq;

    fn comb() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(30.0, 0.0),
            Point2::new(30.0, 20.0),
            Point2::new(25.0, 20.0),
            Point2::new(25.0, 5.0),
            Point2::new(15.0, 5.0),
            Point2::new(15.0, 20.0),
            Point2::new(10.0, 20.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 20.0),
            Point2::new(0.0, 20.0),
        ]
    }

    #[test]
    fn test_matches_scalar() {
        let ring = comb();
        let points = [
            Point2::new(2.5, 10.0),
            Point2::new(7.5, 10.0),
            Point2::new(40.0, -3.0),
            Point2::new(20.0, 2.0),
        ];
        let batch = polygon_signed_distance_x4(&ring, points, 1e-10);
        for (p, d) in points.iter().zip(batch) {
            assert_relative_eq!(d, polygon_signed_distance(&ring, *p, 1e-10), epsilon = 1e-12);
        }
        assert!(batch[0] > 0.0);
        assert!(batch[1] < 0.0);
    }

    #[test]
    fn test_degenerate_edges() {
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let batch = polygon_signed_distance_x4(&ring, [Point2::new(1.0, 2.0); 4], 1e-10);
        assert_eq!(batch, [1.0; 4]);
        assert_eq!(
            polygon_signed_distance_x4(&[], [Point2::origin(); 4], 1e-10),
            [f64::NEG_INFINITY; 4]
        );
    }

    #[test]
    fn test_visual_center_simd_agrees() {
        let ring = comb();
        let options = PoleOptions::with_precision(0.01);
        let scalar = visual_center_with_options(&ring, &options).unwrap();
        let simd = visual_center_simd(&ring, &options).unwrap();
        assert_relative_eq!(simd.distance, scalar.distance, epsilon = 0.01);
        assert!(simd.distance >= 2.5 - 0.01);
    }
}
