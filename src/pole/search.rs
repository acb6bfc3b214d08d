//! Cell-priority search for the visual center of a polygon.

use super::cell::{Cell, CellScorer, RingScorer};
use super::options::PoleOptions;
use super::queue::CellQueue;
use crate::bounds::Rect2;
use crate::error::{PoleError, Result};
use crate::polygon::{polygon_centroid_or_first, validate_ring, Polygon};
use crate::primitives::Point2;
use num_traits::Float;
use tracing::{debug, trace};

/// Counters describing how much work a search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells created by tiling the bounding rectangle.
    pub initial_cells: usize,
    /// Points whose signed distance was evaluated.
    pub probes: usize,
    /// Cells that were split into quadrants.
    pub splits: usize,
    /// Cells taken off the queue.
    pub iterations: usize,
    /// `true` if `max_iterations` stopped the search before the bound was proven.
    pub truncated: bool,
}

/// Result of a visual center search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualCenter<F> {
    /// The most distant interior point found.
    pub point: Point2<F>,
    /// Signed distance from `point` to the polygon boundary.
    pub distance: F,
    /// Work done by the search.
    pub stats: SearchStats,
}

/// Finds the visual center (pole of inaccessibility) of a polygon ring.
///
/// The returned point's distance to the boundary is within `precision` of the
/// largest distance any point of the polygon reaches. Uses the default
/// degenerate-geometry tolerance of `1e-10`.
///
/// # Errors
///
/// Fails if the ring has fewer than 3 vertices, contains non-finite
/// coordinates, spans a bounding box too large to represent, or `precision`
/// is not a finite positive number.
///
/// # Example
///
/// ```
/// use polepoint::{visual_center, Point2};
///
/// let square = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ];
///
/// let center = visual_center(&square, 1.0).unwrap();
/// assert_eq!(center, Point2::new(5.0, 5.0));
/// ```
pub fn visual_center<F: Float>(vertices: &[Point2<F>], precision: F) -> Result<Point2<F>> {
    let options = PoleOptions::with_precision(precision);
    visual_center_with_options(vertices, &options).map(|found| found.point)
}

/// Finds the visual center with explicit options, reporting distance and statistics.
pub fn visual_center_with_options<F: Float>(
    vertices: &[Point2<F>],
    options: &PoleOptions<F>,
) -> Result<VisualCenter<F>> {
    let scorer = RingScorer::new(vertices, options.tolerance);
    run_search(vertices, options, &scorer, |_| {})
}

impl<F: Float> Polygon<F> {
    /// Finds the visual center of this polygon. See [`visual_center`].
    pub fn visual_center(&self, precision: F) -> Result<Point2<F>> {
        visual_center(&self.vertices, precision)
    }
}

/// Runs the search with a given scorer.
///
/// `on_improve` sees every cell that becomes the new best answer, in order.
pub(crate) fn run_search<F, S, O>(
    vertices: &[Point2<F>],
    options: &PoleOptions<F>,
    scorer: &S,
    mut on_improve: O,
) -> Result<VisualCenter<F>>
where
    F: Float,
    S: CellScorer<F>,
    O: FnMut(&Cell<F>),
{
    validate_ring(vertices)?;
    options.validate()?;

    let precision = options.precision;
    let tolerance = options.tolerance;
    let mut stats = SearchStats::default();

    let bounds = Rect2::from_points(vertices);
    if !bounds.width().is_finite() || !bounds.height().is_finite() {
        return Err(PoleError::extent_overflow(bounds.width(), bounds.height()));
    }
    let cell_size = bounds.short_side();

    if cell_size.abs() < tolerance {
        let corner = bounds.min();
        debug!(
            vertices = vertices.len(),
            width = as_f64(bounds.width()),
            height = as_f64(bounds.height()),
            "degenerate bounding rectangle, returning min corner"
        );
        stats.probes = 1;
        return Ok(VisualCenter {
            point: corner,
            distance: scorer.score(corner),
            stats,
        });
    }

    debug!(
        vertices = vertices.len(),
        width = as_f64(bounds.width()),
        height = as_f64(bounds.height()),
        cell_size = as_f64(cell_size),
        precision = as_f64(precision),
        "starting visual center search"
    );

    let mut queue = CellQueue::new();
    let half = cell_size / (F::one() + F::one());
    let max = bounds.max();
    let origin = bounds.min();

    let mut i = 0usize;
    loop {
        let x = origin.x + cell_size * F::from(i).unwrap();
        if !x.is_finite() || x >= max.x {
            break;
        }
        let mut j = 0usize;
        loop {
            let y = origin.y + cell_size * F::from(j).unwrap();
            if !y.is_finite() || y >= max.y {
                break;
            }
            queue.push(Cell::scored(Point2::new(x + half, y + half), half, scorer));
            j += 1;
        }
        i += 1;
    }
    stats.initial_cells = queue.len();
    stats.probes = stats.initial_cells;

    let centroid = polygon_centroid_or_first(vertices, tolerance);
    let mut best = Cell::scored(centroid, F::zero(), scorer);
    on_improve(&best);

    let bbox_cell = Cell::scored(bounds.center(), F::zero(), scorer);
    stats.probes += 2;
    if bbox_cell.distance() > best.distance() {
        best = bbox_cell;
        on_improve(&best);
    }

    while !queue.is_empty() {
        if options
            .max_iterations
            .is_some_and(|limit| stats.iterations >= limit)
        {
            stats.truncated = true;
            break;
        }
        let Some(cell) = queue.pop() else {
            break;
        };
        stats.iterations += 1;

        if cell.distance() > best.distance() {
            best = cell;
            trace!(
                x = as_f64(best.center().x),
                y = as_f64(best.center().y),
                distance = as_f64(best.distance()),
                "improved best cell"
            );
            on_improve(&best);
        }

        if cell.potential() - best.distance() <= precision {
            continue;
        }

        queue.extend(cell.split(scorer));
        stats.splits += 1;
        stats.probes += 4;
    }

    debug!(
        x = as_f64(best.center().x),
        y = as_f64(best.center().y),
        distance = as_f64(best.distance()),
        initial_cells = stats.initial_cells,
        iterations = stats.iterations,
        splits = stats.splits,
        probes = stats.probes,
        truncated = stats.truncated,
        "visual center search finished"
    );

    Ok(VisualCenter {
        point: best.center(),
        distance: best.distance(),
        stats,
    })
}

#[inline]
fn as_f64<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
