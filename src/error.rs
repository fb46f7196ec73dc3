//! Crate-level error types.

use std::fmt;

use glam::Vec3;

/// Errors produced by the freelook crate.
#[derive(Debug)]
pub enum FreelookError {
    /// The look target coincides with the camera position, so no view
    /// direction can be derived.
    DegenerateDirection {
        /// Camera position at the time of the request.
        position: Vec3,
        /// Requested look target.
        target: Vec3,
    },
    /// The up vector is not close to one of the positive world axes.
    UnsupportedUpAxis(Vec3),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FreelookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateDirection { position, target } => write!(
                f,
                "look target {target} coincides with camera position \
                 {position}"
            ),
            Self::UnsupportedUpAxis(up) => write!(
                f,
                "up vector {up} is not aligned with +X, +Y or +Z"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FreelookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FreelookError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
