//! Errors for everything in Swatchpick that can actually fail. The conversion functions never do:
//! they are total over well-formed input, and well-formedness is checked once, when a
//! [`ColorCoordinate`](../coord/struct.ColorCoordinate.html) is built. What remains is parsing,
//! configuration, swatch bookkeeping and export.

use thiserror::Error;

use crate::swatch::SwatchId;

/// Result type alias used throughout Swatchpick.
pub type Result<T> = std::result::Result<T, PickerError>;

/// Every error Swatchpick can report.
#[derive(Error, Debug)]
pub enum PickerError {
    /// A coordinate component was NaN or infinite. Clamping can't repair those, so they are
    /// rejected before they can reach any formatted output.
    #[error("{component} must be finite, got {value}")]
    NonFiniteComponent {
        /// Which component was bad: `"hue"`, `"saturation"`, `"value"`, `"x"` or `"y"`.
        component: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A string was not a `#rgb` or `#rrggbb` hex code.
    #[error("invalid hex code: {0:?}")]
    InvalidHexCode(String),

    /// A string was not of the form `hsv(h, s%, v%)`.
    #[error("invalid HSV coordinate: {0:?}")]
    InvalidCoordinateSyntax(String),

    /// A string did not name one of the six notations.
    #[error("unknown color representation: {0:?}")]
    UnknownRepresentation(String),

    /// The picking surface must have a finite, positive size.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurface {
        /// Surface width, in pointer units.
        width: f64,
        /// Surface height, in pointer units.
        height: f64,
    },

    /// No swatch with this id exists in the list.
    #[error("no swatch with id {0}")]
    SwatchNotFound(SwatchId),

    /// JSON (de)serialization of a configuration or swatch list failed.
    #[error("JSON error: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing CSV failed.
    #[error("CSV export error: {0}")]
    Export(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_messages() {
        let err = PickerError::NonFiniteComponent {
            component: "hue",
            value: std::f64::NAN,
        };
        assert_eq!(err.to_string(), "hue must be finite, got NaN");
        let err = PickerError::InvalidHexCode("#12".to_string());
        assert_eq!(err.to_string(), "invalid hex code: \"#12\"");
        let err = PickerError::InvalidSurface {
            width: 0.,
            height: 10.,
        };
        assert_eq!(err.to_string(), "invalid surface size 0x10");
    }
}
