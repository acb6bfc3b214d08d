//! Square search cells and the scoring seam they are built through.

use crate::polygon::polygon_signed_distance;
use crate::primitives::Point2;
use num_traits::Float;

/// Scores query points by signed distance to a boundary.
///
/// `score4` scores the four children of a split cell at once; the default
/// calls `score` per point, batched implementations override it.
pub(crate) trait CellScorer<F: Float> {
    fn score(&self, p: Point2<F>) -> F;

    fn score4(&self, points: [Point2<F>; 4]) -> [F; 4] {
        points.map(|p| self.score(p))
    }
}

/// Scalar scorer over a polygon ring.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RingScorer<'a, F> {
    vertices: &'a [Point2<F>],
    tolerance: F,
}

impl<'a, F: Float> RingScorer<'a, F> {
    pub(crate) fn new(vertices: &'a [Point2<F>], tolerance: F) -> Self {
        Self {
            vertices,
            tolerance,
        }
    }
}

impl<F: Float> CellScorer<F> for RingScorer<'_, F> {
    #[inline]
    fn score(&self, p: Point2<F>) -> F {
        polygon_signed_distance(self.vertices, p, self.tolerance)
    }
}

/// A square region of the search space.
///
/// Immutable once built: `distance` is the signed distance from `center` to
/// the polygon boundary and `potential = distance + half * sqrt(2)` bounds the
/// distance any point inside the cell can reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<F> {
    center: Point2<F>,
    half: F,
    distance: F,
    potential: F,
}

impl<F: Float> Cell<F> {
    /// Builds a cell scored against a polygon ring.
    ///
    /// Edges shorter than `tolerance` on both axes are treated as points.
    pub fn new(center: Point2<F>, half: F, vertices: &[Point2<F>], tolerance: F) -> Self {
        Self::scored(center, half, &RingScorer::new(vertices, tolerance))
    }

    pub(crate) fn scored<S: CellScorer<F>>(center: Point2<F>, half: F, scorer: &S) -> Self {
        Self::with_distance(center, half, scorer.score(center))
    }

    fn with_distance(center: Point2<F>, half: F, distance: F) -> Self {
        Self {
            center,
            half,
            distance,
            potential: distance + half * sqrt_2(),
        }
    }

    /// Center point of the cell.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.center
    }

    /// Half of the cell's side length. Zero for point probes.
    #[inline]
    pub fn half(&self) -> F {
        self.half
    }

    /// Signed distance from the center to the polygon boundary.
    #[inline]
    pub fn distance(&self) -> F {
        self.distance
    }

    /// Upper bound on the boundary distance of any point in the cell.
    #[inline]
    pub fn potential(&self) -> F {
        self.potential
    }

    /// Centers of the four quadrants, ordered (-,-), (+,-), (-,+), (+,+).
    pub fn quadrant_centers(&self) -> [Point2<F>; 4] {
        let q = self.half / (F::one() + F::one());
        let c = self.center;
        [
            Point2::new(c.x - q, c.y - q),
            Point2::new(c.x + q, c.y - q),
            Point2::new(c.x - q, c.y + q),
            Point2::new(c.x + q, c.y + q),
        ]
    }

    /// Splits into four scored quadrant cells of half the size.
    pub(crate) fn split<S: CellScorer<F>>(&self, scorer: &S) -> [Self; 4] {
        let half = self.half / (F::one() + F::one());
        let centers = self.quadrant_centers();
        let distances = scorer.score4(centers);
        [0, 1, 2, 3].map(|i| Self::with_distance(centers[i], half, distances[i]))
    }
}

/// `sqrt(2)`: the center-to-corner distance of a cell with unit half-size.
#[inline]
fn sqrt_2<F: Float>() -> F {
    F::from(std::f64::consts::SQRT_2).unwrap()
}
