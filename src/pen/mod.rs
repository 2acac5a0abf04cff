//! The [`Pen`] is a tiny particle simulation: a point with a velocity and a
//! wandering heading, tugged toward whatever target it is given. Every
//! integration step leaves a point behind, and those points are the scribble.
use geo_types::{LineString, MultiLineString, Point};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::f64::consts::PI;

use crate::util::map_range;

pub mod config;
pub mod random;

pub use config::PenConfig;
pub use random::{CycleSource, RandomSource};

/// # Pen
///
/// Holds the simulation state and everything drawn so far. Relocating the pen
/// with [`Pen::move_to`] starts a new stroke; each [`Pen::update`] appends one
/// point to the current stroke.
///
/// # Example
///
/// ```rust
/// use aoer_scribble::pen::Pen;
///
/// let mut pen = Pen::with_seed(0.0, 0.0, 42);
/// pen.move_to(10.0, 10.0);
/// for _ in 0..100 {
///     pen.move_towards(50.0, 10.0);
///     pen.update();
/// }
/// assert_eq!(pen.strokes().len(), 1);
/// assert_eq!(pen.strokes()[0].len(), 101);
/// ```
#[derive(Clone, Debug)]
pub struct Pen<R: RandomSource = SmallRng> {
    position: Point<f64>,
    velocity: Point<f64>,
    heading: f64,
    damp: f64,
    step: f64,
    curl: f64,
    pull: f64,
    reverse: f64,
    strokes: Vec<Vec<Point<f64>>>,
    rng: R,
}

impl Pen<SmallRng> {
    /// A pen with default settings and an entropy-seeded random source.
    pub fn new(x: f64, y: f64) -> Self {
        Pen::with_rng(x, y, SmallRng::from_entropy())
    }

    /// A pen with default settings whose wobble is reproducible.
    pub fn with_seed(x: f64, y: f64, seed: u64) -> Self {
        Pen::with_rng(x, y, SmallRng::seed_from_u64(seed))
    }

    /// Build a pen from a [`PenConfig`], seeding from `config.seed` if present.
    pub fn from_config(x: f64, y: f64, config: &PenConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut pen = Pen::with_rng(x, y, rng);
        pen.apply_config(config);
        pen
    }
}

impl<R: RandomSource> Pen<R> {
    /// A pen with default settings using the given random source.
    pub fn with_rng(x: f64, y: f64, rng: R) -> Self {
        let mut pen = Pen {
            position: Point::new(x, y),
            velocity: Point::new(0.0, 0.0),
            heading: 0.0,
            damp: config::DEFAULT_DAMP,
            step: config::DEFAULT_STEP,
            curl: 0.0,
            pull: 0.0,
            reverse: config::DEFAULT_REVERSE,
            strokes: vec![],
            rng,
        };
        pen.set_curl(config::DEFAULT_CURL).set_pull(config::DEFAULT_PULL);
        pen
    }

    /// Push every parameter in `config` into the pen. The seed is ignored;
    /// the random source is fixed at construction.
    pub fn apply_config(&mut self, config: &PenConfig) -> &mut Self {
        self.set_curl(config.curl)
            .set_pull(config.pull)
            .set_damp(config.damp)
            .set_step(config.step)
            .set_reverse(config.reverse)
    }

    pub fn position(&self) -> Point<f64> {
        self.position
    }

    pub fn velocity(&self) -> Point<f64> {
        self.velocity
    }

    /// Accumulated heading, radians. Not wrapped.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Maximum angular kick per step, radians.
    pub fn curl(&self) -> f64 {
        self.curl
    }

    /// Attraction strength, already mapped onto 0-0.5.
    pub fn pull(&self) -> f64 {
        self.pull
    }

    pub fn damp(&self) -> f64 {
        self.damp
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn reverse(&self) -> f64 {
        self.reverse
    }

    /// How much curl the scribbles have. Suggested range 0-100, default 30,
    /// mapped onto 0-PI radians.
    pub fn set_curl(&mut self, curl: f64) -> &mut Self {
        self.curl = map_range(curl, 0.0, 100.0, 0.0, PI);
        self
    }

    /// How hard the pen is drawn to its targets. Suggested range 0-100,
    /// default 30, mapped onto 0-0.5.
    pub fn set_pull(&mut self, pull: f64) -> &mut Self {
        self.pull = map_range(pull, 0.0, 100.0, 0.0, 0.5);
        self
    }

    /// Velocity kept per step. 0 is full damping, 1 is none. Values above 1
    /// make the pen speed up instead, which is sometimes what you want.
    pub fn set_damp(&mut self, damp: f64) -> &mut Self {
        self.damp = damp;
        self
    }

    /// Distance travelled per step. Higher is chunkier. Suggested 0.5-5, default 1.
    pub fn set_step(&mut self, step: f64) -> &mut Self {
        self.step = step;
        self
    }

    /// Negative share of the random curl. The random kick is drawn from
    /// `[-curl * reverse, curl]`: 0 only ever turns one way (tight loops),
    /// 1 is symmetric (meandering). Default 0.5.
    pub fn set_reverse(&mut self, reverse: f64) -> &mut Self {
        self.reverse = reverse;
        self
    }

    /// Relocate the pen without drawing, starting a new stroke at `(x, y)`.
    /// Velocity and heading carry over.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.position = Point::new(x, y);
        self.strokes.push(vec![self.position]);
        self
    }

    /// Put the pen at `(x, y)` without starting a new stroke. Nothing is
    /// recorded until the next [`Pen::update`], which draws on from here.
    pub fn set_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.position = Point::new(x, y);
        self
    }

    /// Nudge the velocity toward `(x, y)` by `pull`. Calls accumulate until
    /// the next [`Pen::update`], so several targets blend into an average pull.
    pub fn move_towards(&mut self, x: f64, y: f64) -> &mut Self {
        let angle = (y - self.position.y()).atan2(x - self.position.x());
        self.velocity = self.velocity + Point::new(angle.cos(), angle.sin()) * self.pull;
        self
    }

    /// Advance the simulation one step and record the new position.
    pub fn update(&mut self) -> &mut Self {
        if self.strokes.is_empty() {
            self.strokes.push(vec![self.position]);
        }
        self.position = self.position + self.velocity;
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(self.position);
        }

        self.heading += self.rng.float_range(-self.curl * self.reverse, self.curl);
        self.velocity = (self.velocity
            + Point::new(self.heading.cos(), self.heading.sin()) * self.step)
            * self.damp;
        self
    }

    /// Make room for `additional` more points in the current stroke.
    pub(crate) fn reserve(&mut self, additional: usize) {
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.reserve(additional);
        }
    }

    /// Every stroke drawn so far, oldest first.
    pub fn strokes(&self) -> &[Vec<Point<f64>>] {
        &self.strokes
    }

    /// Hand over the strokes, leaving the pen with none.
    pub fn take_strokes(&mut self) -> Vec<Vec<Point<f64>>> {
        std::mem::take(&mut self.strokes)
    }

    /// Forget everything drawn. Position, velocity and heading stay put.
    pub fn clear(&mut self) -> &mut Self {
        self.strokes.clear();
        self
    }

    /// Strokes as a [`MultiLineString`], one open line string per stroke.
    pub fn to_multiline(&self) -> MultiLineString<f64> {
        self.strokes
            .iter()
            .map(|stroke| LineString::from(stroke.clone()))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_types::PointDistance;

    fn still_pen() -> Pen<CycleSource> {
        let mut pen = Pen::with_rng(0.0, 0.0, CycleSource::new(vec![0.5]));
        pen.set_curl(0.0);
        pen
    }

    #[test]
    fn test_defaults() {
        let pen = Pen::with_seed(1.0, 2.0, 0);
        assert_eq!(pen.position(), Point::new(1.0, 2.0));
        assert_eq!(pen.velocity(), Point::new(0.0, 0.0));
        assert_eq!(pen.damp(), 0.7);
        assert_eq!(pen.step(), 1.0);
        assert_eq!(pen.reverse(), 0.5);
        assert!((pen.curl() - 0.3 * PI).abs() < 1e-12);
        assert!((pen.pull() - 0.15).abs() < 1e-12);
        assert!(pen.strokes().is_empty());
    }

    #[test]
    fn test_move_to_starts_stroke() {
        let mut pen = still_pen();
        pen.move_to(5.0, 5.0).update().update();
        pen.move_to(-5.0, 0.0);
        assert_eq!(pen.strokes().len(), 2);
        assert_eq!(pen.strokes()[0].len(), 3);
        assert_eq!(pen.strokes()[0][0], Point::new(5.0, 5.0));
        assert_eq!(pen.strokes()[1], vec![Point::new(-5.0, 0.0)]);
    }

    #[test]
    fn test_move_to_keeps_velocity() {
        let mut pen = still_pen();
        pen.move_to(0.0, 0.0).update();
        let v = pen.velocity();
        pen.move_to(100.0, 100.0);
        assert_eq!(pen.velocity(), v);
    }

    #[test]
    fn test_update_records_post_step_position() {
        let mut pen = still_pen();
        pen.move_to(0.0, 0.0).move_towards(10.0, 0.0).update();
        // Pull of 0.15 along +x, then recorded after moving.
        let recorded = pen.strokes()[0][1];
        assert!(recorded.distance(&Point::new(0.15, 0.0)) < 1e-12);
        assert_eq!(pen.position(), recorded);
        // Heading 0, so step adds (1, 0) before damping.
        assert!(pen.velocity().distance(&Point::new((0.15 + 1.0) * 0.7, 0.0)) < 1e-12);
    }

    #[test]
    fn test_update_without_move_to() {
        let mut pen = still_pen();
        pen.update();
        assert_eq!(pen.strokes().len(), 1);
        assert_eq!(pen.strokes()[0].len(), 2);
        assert_eq!(pen.strokes()[0][0], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_heading_kick_range() {
        // Unit sample 0 lands on -curl * reverse, 1 would land on +curl.
        let mut pen = Pen::with_rng(0.0, 0.0, CycleSource::new(vec![0.0]));
        pen.set_curl(100.0).set_reverse(0.5);
        pen.update();
        assert!((pen.heading() + PI * 0.5).abs() < 1e-12);

        let mut pen = Pen::with_rng(0.0, 0.0, CycleSource::new(vec![0.0]));
        pen.set_curl(100.0).set_reverse(0.0);
        pen.update();
        assert_eq!(pen.heading(), 0.0);
    }

    #[test]
    fn test_attraction_accumulates() {
        let mut pen = still_pen();
        pen.move_to(0.0, 0.0)
            .move_towards(10.0, 0.0)
            .move_towards(0.0, 10.0);
        let v = pen.velocity();
        assert!((v.x() - 0.15).abs() < 1e-12);
        assert!((v.y() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_damped_attraction_settles() {
        // No curl and no step: only the pull drives the pen.
        let mut pen = still_pen();
        pen.set_step(0.0);
        pen.move_to(0.0, 0.0);
        let target = Point::new(100.0, 0.0);
        let mut last = pen.position().distance(&target);
        for _ in 0..150 {
            pen.move_towards(target.x(), target.y()).update();
            let d = pen.position().distance(&target);
            assert!(d <= last);
            last = d;
        }
        for _ in 0..2000 {
            pen.move_towards(target.x(), target.y()).update();
        }
        assert!(pen.position().distance(&target) < 1.0);
        assert!(pen.velocity().length() < 0.5);
    }

    #[test]
    fn test_set_position_keeps_stroke() {
        let mut pen = still_pen();
        pen.set_pull(0.0).set_step(0.0);
        pen.move_to(0.0, 0.0).update();
        pen.set_position(10.0, 0.0);
        assert_eq!(pen.strokes()[0].len(), 2);
        pen.update();
        assert_eq!(pen.strokes().len(), 1);
        assert_eq!(pen.strokes()[0][2], Point::new(10.0, 0.0));
    }

    #[test]
    fn test_clear_keeps_state() {
        let mut pen = Pen::with_seed(0.0, 0.0, 3);
        pen.move_to(0.0, 0.0);
        for _ in 0..10 {
            pen.move_towards(10.0, 10.0).update();
        }
        let (p, v, h) = (pen.position(), pen.velocity(), pen.heading());
        pen.clear();
        assert!(pen.strokes().is_empty());
        assert_eq!((pen.position(), pen.velocity(), pen.heading()), (p, v, h));
    }

    #[test]
    fn test_take_strokes_and_multiline() {
        let mut pen = still_pen();
        pen.move_to(0.0, 0.0).update();
        pen.move_to(1.0, 1.0);
        let mls = pen.to_multiline();
        assert_eq!(mls.0.len(), 2);
        assert_eq!(mls.0[0].0.len(), 2);
        let taken = pen.take_strokes();
        assert_eq!(taken.len(), 2);
        assert!(pen.strokes().is_empty());
    }

    #[test]
    fn test_apply_config() {
        let cfg = PenConfig {
            curl: 100.0,
            pull: 100.0,
            damp: 0.5,
            step: 2.0,
            reverse: 1.0,
            seed: Some(1),
        };
        let pen = Pen::from_config(0.0, 0.0, &cfg);
        assert!((pen.curl() - PI).abs() < 1e-12);
        assert!((pen.pull() - 0.5).abs() < 1e-12);
        assert_eq!(pen.damp(), 0.5);
        assert_eq!(pen.step(), 2.0);
        assert_eq!(pen.reverse(), 1.0);
    }
}
