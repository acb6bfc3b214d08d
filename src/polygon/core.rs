//! Core polygon ring type and area-based operations.

use crate::bounds::Rect2;
use crate::error::{PoleError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// A simple polygon represented as a ring of vertices.
///
/// The ring is implicitly closed (the last vertex connects to the first).
/// Either winding order is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the ring.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Checks that the ring is usable for a search.
    pub fn validate(&self) -> Result<()> {
        validate_ring(&self.vertices)
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Area centroid, or the first vertex when the area is below `tolerance`.
    pub fn centroid_or_first(&self, tolerance: F) -> Point2<F> {
        polygon_centroid_or_first(&self.vertices, tolerance)
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the bounding rectangle of the vertices.
    pub fn bounding_rect(&self) -> Rect2<F> {
        Rect2::from_points(&self.vertices)
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Rejects rings with fewer than 3 vertices or non-finite coordinates.
pub fn validate_ring<F: Float>(vertices: &[Point2<F>]) -> Result<()> {
    if vertices.len() < 3 {
        return Err(PoleError::TooFewVertices {
            count: vertices.len(),
        });
    }
    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(PoleError::NonFiniteCoordinate { index });
    }
    Ok(())
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        area = area + (vj.x * vi.y - vi.x * vj.y);
        j = i;
    }

    area / F::from(2.0).unwrap()
}

/// Computes the area centroid of a polygon.
///
/// Falls back to the first vertex when the absolute area is below `tolerance`
/// (collinear or collapsed rings) or the result is not finite, and to the
/// origin for an empty ring.
pub fn polygon_centroid_or_first<F: Float>(vertices: &[Point2<F>], tolerance: F) -> Point2<F> {
    let Some(&first) = vertices.first() else {
        return Point2::origin();
    };

    let area = polygon_signed_area(vertices);
    if area.abs() < tolerance {
        return first;
    }

    let mut cx = F::zero();
    let mut cy = F::zero();
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        let cross = vj.x * vi.y - vi.x * vj.y;
        cx = cx + (vj.x + vi.x) * cross;
        cy = cy + (vj.y + vi.y) * cross;
        j = i;
    }

    let six_area = F::from(6.0).unwrap() * area;
    let centroid = Point2::new(cx / six_area, cy / six_area);
    // Products of very large coordinates can overflow even when every vertex is finite.
    if centroid.is_finite() {
        centroid
    } else {
        first
    }
}

/// Tests if a point is inside a polygon using ray-casting parity.
///
/// Points on the boundary may return either true or false. Self-intersecting
/// rings follow the even-odd rule.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, &vi) in vertices.iter().enumerate() {
        if crosses_ray(vi, vertices[j], point) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Returns `true` if the horizontal ray from `p` towards +x crosses edge `a`-`b`.
#[inline]
pub(crate) fn crosses_ray<F: Float>(a: Point2<F>, b: Point2<F>, p: Point2<F>) -> bool {
    ((a.y > p.y) != (b.y > p.y)) && (p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(size: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ])
    }

    #[test]
    fn test_validate() {
        assert!(square(1.0).validate().is_ok());

        let short: Polygon<f64> = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert_eq!(
            short.validate().unwrap_err(),
            PoleError::TooFewVertices { count: 2 }
        );

        let mut bad = square(1.0);
        bad.vertices[2].y = f64::NAN;
        assert_eq!(
            bad.validate().unwrap_err(),
            PoleError::NonFiniteCoordinate { index: 2 }
        );

        let mut inf = square(1.0);
        inf.vertices[0].x = f64::INFINITY;
        assert_eq!(
            inf.validate().unwrap_err(),
            PoleError::NonFiniteCoordinate { index: 0 }
        );
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = square(2.0);
        assert_relative_eq!(ccw.signed_area(), 4.0, epsilon = 1e-12);

        let mut cw = square(2.0);
        cw.vertices.reverse();
        assert_relative_eq!(cw.signed_area(), -4.0, epsilon = 1e-12);
        assert_relative_eq!(cw.area(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_square_either_winding() {
        let c = square(2.0).centroid_or_first(1e-10);
        assert_relative_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);

        let mut cw = square(2.0);
        cw.vertices.reverse();
        let c = cw.centroid_or_first(1e-10);
        assert_relative_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_l_shape() {
        // Union of [0,2]x[0,1] and [0,1]x[1,2]: centroid at (5/6, 5/6).
        let l = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        let c = l.centroid_or_first(1e-10);
        assert_relative_eq!(c.x, 5.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 5.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_degenerate_uses_first_vertex() {
        let line = Polygon::new(vec![
            Point2::new(1.0_f64, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        ]);
        assert_eq!(line.centroid_or_first(1e-10), Point2::new(1.0, 1.0));
        assert_eq!(
            polygon_centroid_or_first::<f64>(&[], 1e-10),
            Point2::origin()
        );
    }

    #[test]
    fn test_centroid_overflow_uses_first_vertex() {
        let huge = Polygon::new(vec![
            Point2::new(-1e150_f64, -1e150),
            Point2::new(1e150, -1e150),
            Point2::new(1e150, 1e150),
            Point2::new(-1e150, 1e150),
        ]);
        assert_eq!(huge.centroid_or_first(1e-10), Point2::new(-1e150, -1e150));
    }

    #[test]
    fn test_contains() {
        let sq = square(2.0);
        assert!(sq.contains(Point2::new(1.0, 1.0)));
        assert!(sq.contains(Point2::new(0.5, 1.5)));
        assert!(!sq.contains(Point2::new(3.0, 1.0)));
        assert!(!sq.contains(Point2::new(-1.0, 1.0)));
        assert!(!polygon_contains(&sq.vertices[..2], Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_contains_closing_vertex_repeated() {
        let mut sq = square(2.0);
        sq.vertices.push(Point2::new(0.0, 0.0));
        assert!(sq.contains(Point2::new(1.0, 1.0)));
        assert!(!sq.contains(Point2::new(2.5, 1.0)));
        assert_relative_eq!(sq.area(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounding_rect() {
        let poly = Polygon::new(vec![
            Point2::new(1.0_f64, 2.0),
            Point2::new(3.0, 1.0),
            Point2::new(4.0, 3.0),
            Point2::new(2.0, 4.0),
        ]);
        let r = poly.bounding_rect();
        assert_eq!(r.min(), Point2::new(1.0, 1.0));
        assert_eq!(r.max(), Point2::new(4.0, 4.0));
    }

    #[test]
    fn test_polygon_f32() {
        let poly: Polygon<f32> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        assert!((poly.area() - 1.0).abs() < 0.001);
        assert!(poly.contains(Point2::new(0.5, 0.5)));
    }
}
