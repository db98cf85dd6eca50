//! Polygon capture and label placement.
//!
//! The lasso tool accumulates clicked screen points into a pending polygon;
//! finalizing it anchors a text label at a point guaranteed to lie inside
//! the outline. Only geometry lives here — the render layer rebuilds the
//! on-screen preview from the point data each frame.

use geo::{Contains, Coord, InteriorPoint, LineString, Polygon};

use crate::constants::lasso;
use crate::error::SessionError;

/// A text label anchored to an image-space pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Label text; never empty.
    pub text: String,
    /// Anchor position in image-space pixel coordinates. Stored in image
    /// space so the render layer can re-project it through whatever view
    /// state is current, without drift.
    pub anchor: (i32, i32),
}

impl Label {
    /// Create a label at the given image-space anchor.
    pub fn new(text: impl Into<String>, anchor: (i32, i32)) -> Self {
        Self {
            text: text.into(),
            anchor,
        }
    }
}

/// The screen-space polygon being captured in lasso mode.
///
/// At most one capture exists at a time. The first click starts it with a
/// single point, each further click appends one, and it terminates exactly
/// once — by finalize, cancel, or an undo forcing it inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingPolygon {
    /// Clicked points in screen space, in click order.
    pub points: Vec<(f32, f32)>,
    /// True while a capture is in progress.
    active: bool,
}

impl PendingPolygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a capture is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a capture with its first point, replacing any leftover points.
    pub fn start(&mut self, point: (f32, f32)) {
        self.points.clear();
        self.points.push(point);
        self.active = true;
    }

    /// Append a point to the outline.
    pub fn push(&mut self, point: (f32, f32)) {
        self.points.push(point);
    }

    /// Discard the capture and its points.
    pub fn cancel(&mut self) {
        self.points.clear();
        self.active = false;
    }

    /// Drop out of the active state while keeping the point data.
    ///
    /// Used when undo restores points as data; a restored capture never
    /// resumes live.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Compute a point strictly inside the polygon described by `points`.
///
/// The geometric centroid of a non-convex outline can fall outside it, so
/// this delegates to the geometry backend's interior-point algorithm.
/// Outlines with fewer than three vertices cannot enclose anything and are
/// rejected before the backend sees them.
pub fn interior_point(points: &[(f32, f32)]) -> Result<(f32, f32), SessionError> {
    if points.len() < lasso::MIN_VERTICES {
        return Err(SessionError::DegeneratePolygon {
            actual: points.len(),
            min: lasso::MIN_VERTICES,
        });
    }

    let ring: Vec<Coord<f64>> = points
        .iter()
        .map(|&(x, y)| Coord {
            x: f64::from(x),
            y: f64::from(y),
        })
        .collect();
    let polygon = Polygon::new(LineString::new(ring), vec![]);
    let inside = polygon
        .interior_point()
        .ok_or(SessionError::NoInteriorPoint)?;
    Ok((inside.x() as f32, inside.y() as f32))
}

/// True when `point` lies inside the polygon described by `points`.
/// Render layers use this for label hit testing.
pub fn polygon_contains(points: &[(f32, f32)], point: (f32, f32)) -> bool {
    if points.len() < lasso::MIN_VERTICES {
        return false;
    }
    let ring: Vec<Coord<f64>> = points
        .iter()
        .map(|&(x, y)| Coord {
            x: f64::from(x),
            y: f64::from(y),
        })
        .collect();
    let polygon = Polygon::new(LineString::new(ring), vec![]);
    polygon.contains(&geo::Point::new(f64::from(point.0), f64::from(point.1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_lifecycle() {
        let mut pending = PendingPolygon::new();
        assert!(!pending.is_active());

        pending.start((1.0, 2.0));
        assert!(pending.is_active());
        assert_eq!(pending.len(), 1);

        pending.push((3.0, 4.0));
        pending.push((5.0, 6.0));
        assert_eq!(pending.len(), 3);

        pending.cancel();
        assert!(!pending.is_active());
        assert!(pending.is_empty());
    }

    #[test]
    fn test_start_replaces_leftover_points() {
        let mut pending = PendingPolygon::new();
        pending.start((0.0, 0.0));
        pending.push((1.0, 1.0));
        pending.deactivate();

        pending.start((9.0, 9.0));
        assert_eq!(pending.points, vec![(9.0, 9.0)]);
    }

    #[test]
    fn test_deactivate_keeps_points() {
        let mut pending = PendingPolygon::new();
        pending.start((0.0, 0.0));
        pending.push((1.0, 0.0));
        pending.deactivate();
        assert!(!pending.is_active());
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_interior_point_of_square() {
        let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let (x, y) = interior_point(&square).unwrap();
        assert!(x > 0.0 && x < 10.0);
        assert!(y > 0.0 && y < 10.0);
    }

    #[test]
    fn test_interior_point_of_concave_outline() {
        // A "U" shape whose centroid falls in the open notch; the interior
        // point must still land inside the outline.
        let u_shape = [
            (0.0, 0.0),
            (30.0, 0.0),
            (30.0, 30.0),
            (20.0, 30.0),
            (20.0, 10.0),
            (10.0, 10.0),
            (10.0, 30.0),
            (0.0, 30.0),
        ];
        let inside = interior_point(&u_shape).unwrap();
        assert!(polygon_contains(&u_shape, inside));
    }

    #[test]
    fn test_too_few_points_is_an_error() {
        assert!(matches!(
            interior_point(&[(0.0, 0.0)]),
            Err(SessionError::DegeneratePolygon { actual: 1, .. })
        ));
        assert!(matches!(
            interior_point(&[(0.0, 0.0), (5.0, 5.0)]),
            Err(SessionError::DegeneratePolygon { actual: 2, .. })
        ));
    }

    #[test]
    fn test_polygon_contains() {
        let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        assert!(polygon_contains(&square, (5.0, 5.0)));
        assert!(!polygon_contains(&square, (15.0, 5.0)));
    }
}
