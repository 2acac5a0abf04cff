//! Shape scribbling on top of [`Pen`]. Each shape is turned into a run of
//! target points; the pen is pulled toward each one in turn and stepped once
//! per target.
use geo_types::{LineString, Point};

use crate::errors::{ensure_extent, ensure_finite, ensure_radius, ScribbleError};
use crate::geo_types::{open_points, segment_lengths, shapes};
use crate::pen::{Pen, RandomSource};

pub mod allocation;
pub mod targets;

use allocation::allocate;

/// Scribbled versions of the usual drawing primitives.
///
/// Every shape relocates the pen to its starting point first, so each call
/// opens exactly one new stroke. `count` is the number of simulation steps
/// spent on the shape; a count of 0 leaves just the starting point behind.
/// Composite shapes (rectangles, polygons, paths) share their count out
/// between their sides in proportion to side length.
///
/// # Example
///
/// ```rust
/// use aoer_scribble::pen::Pen;
/// use aoer_scribble::scribble::Scribble;
///
/// let mut pen = Pen::with_seed(0.0, 0.0, 7);
/// pen.line(80.0, 100.0, 80.0, 700.0, 5000).unwrap()
///     .circle(600.0, 200.0, 100.0, 5000).unwrap()
///     .rectangle(500.0, 400.0, 200.0, 300.0, 5000).unwrap();
/// assert_eq!(pen.strokes().len(), 3);
/// assert_eq!(pen.strokes()[0].len(), 5001);
/// ```
pub trait Scribble {
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, count: usize)
        -> Result<&mut Self, ScribbleError>;
    fn circle(&mut self, xc: f64, yc: f64, radius: f64, count: usize)
        -> Result<&mut Self, ScribbleError>;
    fn ellipse(&mut self, xc: f64, yc: f64, rx: f64, ry: f64, count: usize)
        -> Result<&mut Self, ScribbleError>;
    #[allow(clippy::too_many_arguments)]
    fn arc(
        &mut self,
        xc: f64,
        yc: f64,
        radius: f64,
        start: f64,
        end: f64,
        ccw: bool,
        count: usize,
    ) -> Result<&mut Self, ScribbleError>;
    fn rectangle(&mut self, x0: f64, y0: f64, w: f64, h: f64, count: usize)
        -> Result<&mut Self, ScribbleError>;
    #[allow(clippy::too_many_arguments)]
    fn triangle(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        count: usize,
    ) -> Result<&mut Self, ScribbleError>;
    fn regular_poly(
        &mut self,
        sides: usize,
        x: f64,
        y: f64,
        radius: f64,
        rotation: f64,
        count: usize,
    ) -> Result<&mut Self, ScribbleError>;
    fn path(&mut self, points: &[Point<f64>], closed: bool, count: usize)
        -> Result<&mut Self, ScribbleError>;
    fn linestring(&mut self, line: &LineString<f64>, count: usize)
        -> Result<&mut Self, ScribbleError>;
    fn dot(&mut self, x: f64, y: f64, count: usize) -> Result<&mut Self, ScribbleError>;
}

/// Pull the pen toward each target in turn, stepping once per target.
fn chase<R, I>(pen: &mut Pen<R>, targets: I)
where
    R: RandomSource,
    I: Iterator<Item = Point<f64>>,
{
    for target in targets {
        pen.move_towards(target.x(), target.y());
        pen.update();
    }
}

/// Trace a polyline into a single stroke starting at its first point.
/// Each segment is started from its own vertex so drift does not carry
/// around corners. Returns silently for an empty point list; callers reject
/// that earlier.
fn trace_path<R: RandomSource>(
    pen: &mut Pen<R>,
    points: &[Point<f64>],
    closed: bool,
    count: usize,
) {
    let Some(first) = points.first() else {
        return;
    };
    let counts = allocate(&segment_lengths(points, closed), count);
    pen.move_to(first.x(), first.y());
    pen.reserve(counts.iter().sum());
    for (i, segment_count) in counts.into_iter().enumerate() {
        let from = points[i];
        let to = points[(i + 1) % points.len()];
        if i > 0 && segment_count > 0 {
            pen.set_position(from.x(), from.y());
        }
        chase(pen, targets::line(from, to, segment_count));
    }
}

impl<R: RandomSource> Scribble for Pen<R> {
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, count: usize)
        -> Result<&mut Self, ScribbleError> {
        ensure_finite("line endpoints", &[x0, y0, x1, y1])?;
        log::trace!("line ({}, {}) -> ({}, {}) x{}", x0, y0, x1, y1, count);
        self.move_to(x0, y0);
        self.reserve(count);
        chase(self, targets::line(Point::new(x0, y0), Point::new(x1, y1), count));
        Ok(self)
    }

    fn circle(&mut self, xc: f64, yc: f64, radius: f64, count: usize)
        -> Result<&mut Self, ScribbleError> {
        ensure_finite("circle center", &[xc, yc])?;
        ensure_radius(radius)?;
        ensure_extent("circle", xc, yc, radius, radius)?;
        log::trace!("circle ({}, {}) r{} x{}", xc, yc, radius, count);
        self.move_to(xc + radius, yc);
        self.reserve(count);
        chase(self, targets::circle(Point::new(xc, yc), radius, count));
        Ok(self)
    }

    fn ellipse(&mut self, xc: f64, yc: f64, rx: f64, ry: f64, count: usize)
        -> Result<&mut Self, ScribbleError> {
        ensure_finite("ellipse center", &[xc, yc])?;
        ensure_radius(rx)?;
        ensure_radius(ry)?;
        ensure_extent("ellipse", xc, yc, rx, ry)?;
        log::trace!("ellipse ({}, {}) r{}x{} x{}", xc, yc, rx, ry, count);
        self.move_to(xc + rx, yc);
        self.reserve(count);
        chase(self, targets::ellipse(Point::new(xc, yc), rx, ry, count));
        Ok(self)
    }

    fn arc(
        &mut self,
        xc: f64,
        yc: f64,
        radius: f64,
        start: f64,
        end: f64,
        ccw: bool,
        count: usize,
    ) -> Result<&mut Self, ScribbleError> {
        ensure_finite("arc center", &[xc, yc])?;
        ensure_finite("arc angles", &[start, end])?;
        ensure_radius(radius)?;
        ensure_extent("arc", xc, yc, radius, radius)?;
        log::trace!(
            "arc ({}, {}) r{} {}..{} ccw={} x{}",
            xc,
            yc,
            radius,
            start,
            end,
            ccw,
            count
        );
        self.move_to(xc + start.cos() * radius, yc + start.sin() * radius);
        self.reserve(count);
        chase(self, targets::arc(Point::new(xc, yc), radius, start, end, ccw, count));
        Ok(self)
    }

    fn rectangle(&mut self, x0: f64, y0: f64, w: f64, h: f64, count: usize)
        -> Result<&mut Self, ScribbleError> {
        ensure_finite("rectangle", &[x0, y0, w, h])?;
        let corners = shapes::rect_corners(x0, y0, w, h);
        if !corners.iter().all(|p| p.x().is_finite() && p.y().is_finite()) {
            return Err(ScribbleError::NonFinite("rectangle corners"));
        }
        log::trace!("rectangle ({}, {}) {}x{} x{}", x0, y0, w, h, count);
        trace_path(self, &corners, true, count);
        Ok(self)
    }

    fn triangle(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        count: usize,
    ) -> Result<&mut Self, ScribbleError> {
        ensure_finite("triangle", &[x0, y0, x1, y1, x2, y2])?;
        log::trace!(
            "triangle ({}, {}) ({}, {}) ({}, {}) x{}",
            x0,
            y0,
            x1,
            y1,
            x2,
            y2,
            count
        );
        let corners = [Point::new(x0, y0), Point::new(x1, y1), Point::new(x2, y2)];
        trace_path(self, &corners, true, count);
        Ok(self)
    }

    fn regular_poly(
        &mut self,
        sides: usize,
        x: f64,
        y: f64,
        radius: f64,
        rotation: f64,
        count: usize,
    ) -> Result<&mut Self, ScribbleError> {
        ensure_finite("polygon", &[x, y, rotation])?;
        ensure_radius(radius)?;
        ensure_extent("polygon", x, y, radius, radius)?;
        if sides < 3 {
            return self.dot(x, y, count);
        }
        log::trace!("regular_poly {} sides at ({}, {}) r{} x{}", sides, x, y, radius, count);
        trace_path(self, &shapes::regular_poly(sides, x, y, radius, rotation), true, count);
        Ok(self)
    }

    fn path(&mut self, points: &[Point<f64>], closed: bool, count: usize)
        -> Result<&mut Self, ScribbleError> {
        if points.is_empty() {
            return Err(ScribbleError::EmptyPath);
        }
        if !points.iter().all(|p| p.x().is_finite() && p.y().is_finite()) {
            return Err(ScribbleError::NonFinite("path points"));
        }
        log::trace!("path of {} points closed={} x{}", points.len(), closed, count);
        trace_path(self, points, closed, count);
        Ok(self)
    }

    fn linestring(&mut self, line: &LineString<f64>, count: usize)
        -> Result<&mut Self, ScribbleError> {
        let (points, closed) = open_points(line);
        self.path(&points, closed, count)
    }

    fn dot(&mut self, x: f64, y: f64, count: usize) -> Result<&mut Self, ScribbleError> {
        ensure_finite("dot", &[x, y])?;
        log::trace!("dot ({}, {}) x{}", x, y, count);
        self.move_to(x, y);
        self.reserve(count);
        chase(self, std::iter::repeat(Point::new(x, y)).take(count));
        Ok(self)
    }
}
