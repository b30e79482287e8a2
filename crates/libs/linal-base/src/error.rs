//! Errors of the few fallible operations of the crate.

/// Error raised when parsing textual representations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The angle has no unit suffix.
    #[error("No unit found in angle string '{0}'")]
    MissingAngleUnit(String),

    /// The numeric part of the angle could not be parsed.
    #[error("Invalid angle value '{0}'")]
    InvalidAngleValue(String),

    /// The unit suffix is neither radians nor degrees.
    #[error("Unknown angle unit '{0}'")]
    UnknownAngleUnit(String),

    /// No color display mode has this name.
    #[error("Unknown color display mode '{0}', expected one of: rgba, hsva, hsva-deg")]
    UnknownDisplayMode(String),
}
