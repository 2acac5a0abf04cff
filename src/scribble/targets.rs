//! Target sequences: the ideal points a pen is pulled toward, one per
//! iteration. Target `i` of `count` sits at fraction `i / count` along the
//! shape, so the final target stops one step short of the end.
use geo_types::Point;
use std::f64::consts::TAU;

use crate::util::lerp;

/// Straight line from `p0` toward `p1`.
pub fn line(p0: Point<f64>, p1: Point<f64>, count: usize) -> impl Iterator<Item = Point<f64>> {
    let countf = count as f64;
    (0..count).map(move |i| {
        let t = i as f64 / countf;
        Point::new(lerp(p0.x(), p1.x(), t), lerp(p0.y(), p1.y(), t))
    })
}

/// Full turn around an axis-aligned ellipse, starting at angle 0.
pub fn ellipse(
    center: Point<f64>,
    rx: f64,
    ry: f64,
    count: usize,
) -> impl Iterator<Item = Point<f64>> {
    sweep(center, rx, ry, 0.0, TAU, count)
}

/// Full turn around a circle, starting at angle 0.
pub fn circle(center: Point<f64>, radius: f64, count: usize) -> impl Iterator<Item = Point<f64>> {
    ellipse(center, radius, radius, count)
}

/// Part of a circle. Both angles are wrapped into `[0, 2PI)` and the sweep runs
/// from `start` to `end`, increasing when `ccw` is set and decreasing
/// otherwise. Angles more than a full turn apart give a full turn.
pub fn arc(
    center: Point<f64>,
    radius: f64,
    start: f64,
    end: f64,
    ccw: bool,
    count: usize,
) -> impl Iterator<Item = Point<f64>> {
    let start_norm = start.rem_euclid(TAU);
    sweep(center, radius, radius, start_norm, arc_sweep(start, end, ccw), count)
}

/// Signed angle swept by [`arc`].
pub fn arc_sweep(start: f64, end: f64, ccw: bool) -> f64 {
    if (end - start).abs() >= TAU {
        return if ccw { TAU } else { -TAU };
    }
    let start = start.rem_euclid(TAU);
    let end = end.rem_euclid(TAU);
    if ccw {
        (end - start).rem_euclid(TAU)
    } else {
        -(start - end).rem_euclid(TAU)
    }
}

fn sweep(
    center: Point<f64>,
    rx: f64,
    ry: f64,
    start: f64,
    sweep: f64,
    count: usize,
) -> impl Iterator<Item = Point<f64>> {
    let countf = count as f64;
    (0..count).map(move |i| {
        let a = start + i as f64 / countf * sweep;
        Point::new(center.x() + a.cos() * rx, center.y() + a.sin() * ry)
    })
}
