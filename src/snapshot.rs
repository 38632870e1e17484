//! A [`ColorSnapshot`] is one color in all six notations at once, computed in a single call from a
//! single [`RGBTriple`]. It is a plain value: cloning it is a deep copy, and nothing about it changes
//! after it is built. A picker rebuilds its snapshot on every move; a swatch keeps the clone it was
//! saved with.
//!
//! [`RGBTriple`]: ../color/struct.RGBTriple.html

use std::collections::BTreeMap;

use crate::color::RGBTriple;
use crate::colors::{CMYKColor, HSBColor, HSLColor, LabColor};
use crate::coord::ColorCoordinate;
use crate::representation::{ColorRepresentation, Representation};

/// The same color in every supported notation.
///
/// # Example
/// ```
/// # use swatchpick::prelude::*;
/// let snapshot = ColorSnapshot::from_rgb(&RGBTriple { r: 0., g: 0., b: 0. });
/// assert_eq!(snapshot.get(Representation::Cmyk).color, "0, 0, 0, 100");
/// assert_eq!(snapshot.get(Representation::Rgb).label(), "rgb(0, 0, 0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSnapshot {
    rgb: ColorRepresentation,
    hex: ColorRepresentation,
    lab: ColorRepresentation,
    cmyk: ColorRepresentation,
    hsl: ColorRepresentation,
    hsb: ColorRepresentation,
}

impl ColorSnapshot {
    /// Formats `rgb` in every notation. Each derived notation comes from `rgb` itself, never from
    /// whatever HSV coordinate produced it.
    pub fn from_rgb(rgb: &RGBTriple) -> ColorSnapshot {
        let rep = ColorRepresentation::new;
        ColorSnapshot {
            rgb: rep(Representation::Rgb, rgb.to_string()),
            hex: rep(Representation::Hex, rgb.to_hex_string()),
            lab: rep(Representation::Lab, LabColor::from_rgb(rgb).to_string()),
            cmyk: rep(Representation::Cmyk, CMYKColor::from_rgb(rgb).to_string()),
            hsl: rep(Representation::Hsl, HSLColor::from_rgb(rgb).to_string()),
            hsb: rep(Representation::Hsb, HSBColor::from_rgb(rgb).to_string()),
        }
    }

    /// Converts a picked coordinate to RGB once, then formats it in every notation.
    pub fn from_coordinate(coord: &ColorCoordinate) -> ColorSnapshot {
        ColorSnapshot::from_rgb(&RGBTriple::from_coordinate(coord))
    }

    /// The color in one notation.
    pub fn get(&self, rep: Representation) -> &ColorRepresentation {
        match rep {
            Representation::Rgb => &self.rgb,
            Representation::Hex => &self.hex,
            Representation::Lab => &self.lab,
            Representation::Cmyk => &self.cmyk,
            Representation::Hsl => &self.hsl,
            Representation::Hsb => &self.hsb,
        }
    }

    /// The hex code, which is always the notation used to paint previews.
    pub fn hex(&self) -> &str {
        &self.hex.color
    }

    /// All six notations in cycling order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorRepresentation> {
        vec![&self.rgb, &self.hex, &self.lab, &self.cmyk, &self.hsl, &self.hsb].into_iter()
    }

    /// The snapshot as a map from tag (`"rgb"`, `"hex"`, ...) to text, for callers that want to
    /// look notations up by name.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        btreemap! {
            "rgb" => self.rgb.color.clone(),
            "hex" => self.hex.color.clone(),
            "lab" => self.lab.color.clone(),
            "cmyk" => self.cmyk.color.clone(),
            "hsl" => self.hsl.color.clone(),
            "hsb" => self.hsb.color.clone(),
        }
    }
}

impl Default for ColorSnapshot {
    /// Black.
    fn default() -> ColorSnapshot {
        ColorSnapshot::from_coordinate(&ColorCoordinate::default())
    }
}
