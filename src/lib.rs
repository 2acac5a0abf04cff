//! Scribbled, hand-drawn looking shapes for pen-plotter art.
//!
//! A [`pen::Pen`] is a little damped particle that wanders with a random curl
//! while being pulled toward target points. Ask it for a line, circle, ellipse,
//! arc, rectangle or arbitrary path through the [`scribble::Scribble`] trait
//! and it leaves behind a pile of short jittery segments that loosely follow the
//! shape. What you get back is plain point lists (or a geo_types
//! `MultiLineString`); rendering them is up to you.
//!
//! ```rust
//! use aoer_scribble::prelude::*;
//!
//! let mut pen = Pen::with_seed(0.0, 0.0, 1);
//! pen.set_curl(45.0).set_reverse(0.8);
//! pen.ellipse(300.0, 400.0, 120.0, 300.0, 10_000).unwrap();
//! let lines = pen.to_multiline();
//! assert_eq!(lines.0.len(), 1);
//! ```

/// Error type shared by the whole crate.
pub mod errors;

/// Extensions for geo_types points and the vertex lists of polygonal shapes.
pub mod geo_types;

/// The pen simulation, its configuration and random sources.
pub mod pen;

/// Shape scribbling built on the pen, plus the iteration allocation policy.
pub mod scribble;

/// Small numeric helpers.
pub mod util;

/// Import prelude::* and get the pen, the shape trait and the error type.
pub mod prelude {
    pub use crate::errors::ScribbleError;
    pub use crate::geo_types::PointDistance;
    pub use crate::pen::{CycleSource, Pen, PenConfig, RandomSource};
    pub use crate::scribble::Scribble;
}
