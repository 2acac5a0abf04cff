use crate::errors::ScribbleError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURL: f64 = 30.0;
pub const DEFAULT_PULL: f64 = 30.0;
pub const DEFAULT_DAMP: f64 = 0.7;
pub const DEFAULT_STEP: f64 = 1.0;
pub const DEFAULT_REVERSE: f64 = 0.5;

/// Pen tuning, in the public scales the setters take: `curl` and `pull` run
/// 0-100, `damp` and `reverse` 0-1, `step` roughly 0.5-5.
///
/// Any missing field falls back to its default, so a config file only needs
/// the knobs it changes:
///
/// ```rust
/// use aoer_scribble::pen::PenConfig;
///
/// let cfg = PenConfig::from_ron("(curl: 60.0, seed: Some(7))").unwrap();
/// assert_eq!(cfg.curl, 60.0);
/// assert_eq!(cfg.damp, 0.7);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PenConfig {
    pub curl: f64,
    pub pull: f64,
    pub damp: f64,
    pub step: f64,
    pub reverse: f64,
    /// Seed for the pen's random source. None seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            curl: DEFAULT_CURL,
            pull: DEFAULT_PULL,
            damp: DEFAULT_DAMP,
            step: DEFAULT_STEP,
            reverse: DEFAULT_REVERSE,
            seed: None,
        }
    }
}

impl PenConfig {
    pub fn from_ron(data: &str) -> Result<PenConfig, ScribbleError> {
        Ok(ron::from_str(data)?)
    }

    pub fn to_ron(&self) -> Result<String, ScribbleError> {
        Ok(ron::to_string(self)?)
    }
}
