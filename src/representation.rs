//! This module names the six notations a picker can show, as the closed enum [`Representation`],
//! and pairs a notation with its formatted text as [`ColorRepresentation`]. Because the set is
//! closed, anything that dispatches on a notation is checked for exhaustiveness by the compiler.

use std::fmt;
use std::str::FromStr;

use crate::error::{PickerError, Result};

/// One of the six supported color notations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Rounded channels, e.g. `255, 128, 0`.
    Rgb,
    /// A CSS hex code, e.g. `#ff8000`.
    Hex,
    /// CIELAB against D65, e.g. `67.05, 42.83, 74.03`.
    Lab,
    /// Naive CMYK percentages, e.g. `0.0%, 49.8%, 100.0%, 0.0%`.
    Cmyk,
    /// HSL, e.g. `30, 100%, 50%`.
    Hsl,
    /// HSB (HSV), e.g. `30, 100%, 100%`.
    Hsb,
}

/// Every notation, in the order a picker cycles through them.
pub static REPRESENTATIONS: [Representation; 6] = [
    Representation::Rgb,
    Representation::Hex,
    Representation::Lab,
    Representation::Cmyk,
    Representation::Hsl,
    Representation::Hsb,
];

impl Representation {
    /// The stable lowercase tag: `"rgb"`, `"hex"`, `"lab"`, `"cmyk"`, `"hsl"` or `"hsb"`.
    pub fn name(self) -> &'static str {
        match self {
            Representation::Rgb => "rgb",
            Representation::Hex => "hex",
            Representation::Lab => "lab",
            Representation::Cmyk => "cmyk",
            Representation::Hsl => "hsl",
            Representation::Hsb => "hsb",
        }
    }

    /// The uppercase tag used as a heading over the displayed value, e.g. `"CMYK"`.
    pub fn title(self) -> String {
        self.name().to_uppercase()
    }

    /// The notation after this one, wrapping from HSB back to RGB.
    pub fn next(self) -> Representation {
        match self {
            Representation::Rgb => Representation::Hex,
            Representation::Hex => Representation::Lab,
            Representation::Lab => Representation::Cmyk,
            Representation::Cmyk => Representation::Hsl,
            Representation::Hsl => Representation::Hsb,
            Representation::Hsb => Representation::Rgb,
        }
    }
}

impl Default for Representation {
    /// Hex, the notation a picker starts on.
    fn default() -> Representation {
        Representation::Hex
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Representation {
    type Err = PickerError;

    /// Parses a tag, ignoring case.
    fn from_str(s: &str) -> Result<Representation> {
        let lower = s.trim().to_lowercase();
        REPRESENTATIONS
            .iter()
            .cloned()
            .find(|rep| rep.name() == lower)
            .ok_or_else(|| PickerError::UnknownRepresentation(s.to_string()))
    }
}

/// A color in one notation: which notation, and the formatted text. The text, not the numbers
/// behind it, is what gets shown and stored, so its rounding and punctuation are fixed once it is
/// made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorRepresentation {
    /// Which notation `color` is in.
    pub name: Representation,
    /// The formatted value, e.g. `#ff8000` or `30, 100%, 50%`.
    pub color: String,
}

impl ColorRepresentation {
    /// Pairs a notation with its text.
    pub fn new(name: Representation, color: String) -> ColorRepresentation {
        ColorRepresentation { name, color }
    }

    /// The text as it appears on a swatch: wrapped in the notation's functional syntax, like
    /// `hsl(30, 100%, 50%)`, except for hex codes, which stand on their own.
    pub fn label(&self) -> String {
        match self.name {
            Representation::Hex => self.color.clone(),
            _ => format!("{}({})", self.name.name(), self.color),
        }
    }
}

impl fmt::Display for ColorRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
