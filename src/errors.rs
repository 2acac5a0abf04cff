use thiserror::Error;

/// Everything that can go wrong when asking a pen to scribble something.
///
/// The pen itself never fails; these are all rejected inputs.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScribbleError {
    #[error("Radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("Non-finite value passed as {0}")]
    NonFinite(&'static str),

    #[error("A path needs at least one point")]
    EmptyPath,

    #[error("Invalid pen config: {0}")]
    Config(String),
}

impl From<ron::error::SpannedError> for ScribbleError {
    fn from(error: ron::error::SpannedError) -> Self {
        ScribbleError::Config(error.to_string())
    }
}

impl From<ron::Error> for ScribbleError {
    fn from(error: ron::Error) -> Self {
        ScribbleError::Config(error.to_string())
    }
}

/// Bail out with [`ScribbleError::NonFinite`] unless every value is finite.
pub(crate) fn ensure_finite(what: &'static str, values: &[f64]) -> Result<(), ScribbleError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ScribbleError::NonFinite(what))
    }
}

/// Radii must be finite and non-negative.
pub(crate) fn ensure_radius(radius: f64) -> Result<(), ScribbleError> {
    ensure_finite("radius", &[radius])?;
    if radius < 0.0 {
        Err(ScribbleError::NegativeRadius(radius))
    } else {
        Ok(())
    }
}

/// Every point within `rx`/`ry` of the center must be representable, or the
/// targets would overflow to infinity partway round.
pub(crate) fn ensure_extent(
    what: &'static str,
    xc: f64,
    yc: f64,
    rx: f64,
    ry: f64,
) -> Result<(), ScribbleError> {
    ensure_finite(what, &[xc - rx, xc + rx, yc - ry, yc + ry])
}
