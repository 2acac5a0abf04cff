use geo_types::{CoordNum, LineString, Point};
use num_traits::real::Real;

/// Vertex generators for the polygonal shapes the pen can scribble.
pub mod shapes;

/// Trait that implements a distance function between two [`geo_types::Point`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Point`]
/// as if it were a Vector.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;
}

impl<T> PointDistance<T> for Point<T>
where
    T: CoordNum,
    T: Real,
{
    fn distance(&self, other: &Point<T>) -> T {
        let p = *self - *other;
        p.length()
    }

    fn length(&self) -> T {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }
}

/// Lengths of every segment in a point list, plus the closing segment
/// (last back to first) when `closed` is set.
pub fn segment_lengths(points: &[Point<f64>], closed: bool) -> Vec<f64> {
    let mut lengths: Vec<f64> = points
        .windows(2)
        .map(|pair| pair[0].distance(&pair[1]))
        .collect();
    if closed {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            lengths.push(last.distance(first));
        }
    }
    lengths
}

/// Split a [`LineString`] into its points and whether it closes on itself.
/// A closed line string loses its repeated final point.
pub fn open_points(line: &LineString<f64>) -> (Vec<Point<f64>>, bool) {
    let mut points: Vec<Point<f64>> = line.points().collect();
    let closed = points.len() > 2 && line.is_closed();
    if closed {
        points.pop();
    }
    (points, closed)
}
