//! Corner lists for the polygonal shapes. These are the ideal outlines the pen
//! chases; they are never drawn directly.
use geo_types::Point;
use std::f64::consts::PI;

/// Vertices of a regular polygon in regular mathematical orientation, radians.
/// The first vertex sits at `rotation`. Not closed; the caller decides that.
pub fn regular_poly(sides: usize, x: f64, y: f64, radius: f64, rotation: f64) -> Vec<Point<f64>> {
    (0..sides)
        .map(|i| {
            let angle = rotation + (i as f64 / sides as f64) * (2.0 * PI);
            Point::new(x + angle.cos() * radius, y + angle.sin() * radius)
        })
        .collect()
}

/// Rectangle corners in drawing order: top-left, top-right, bottom-right,
/// bottom-left. Closing back to the first corner gives the left side.
pub fn rect_corners(x0: f64, y0: f64, w: f64, h: f64) -> Vec<Point<f64>> {
    vec![
        Point::new(x0, y0),
        Point::new(x0 + w, y0),
        Point::new(x0 + w, y0 + h),
        Point::new(x0, y0 + h),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_types::PointDistance;

    #[test]
    fn test_regular_poly() {
        let hex = regular_poly(6, 10.0, 10.0, 5.0, 0.0);
        assert_eq!(hex.len(), 6);
        assert!(hex[0].distance(&Point::new(15.0, 10.0)) < 1e-9);
        for p in &hex {
            assert!((p.distance(&Point::new(10.0, 10.0)) - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rect_corners() {
        let corners = rect_corners(1.0, 2.0, 10.0, 20.0);
        assert_eq!(corners[2], Point::new(11.0, 22.0));
        assert_eq!(corners[3], Point::new(1.0, 22.0));
    }
}
