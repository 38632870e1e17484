//! This file defines [`RGBTriple`], the pivot of the whole conversion pipeline. A picked
//! [`ColorCoordinate`] is converted to RGB exactly once, and every other notation is derived from
//! the resulting triple rather than from HSV directly. Channels are kept as unrounded `f64` values
//! between 0 and 255: rounding happens only at the last moment, when a notation is formatted for
//! display, so that one notation's rounding can't leak into another's.
//!
//! [`ColorCoordinate`]: ../coord/struct.ColorCoordinate.html

use std::fmt;
use std::str::FromStr;

use float_cmp::ApproxEqUlps;
use regex::Regex;

use crate::coord::ColorCoordinate;
use crate::error::{PickerError, Result};

lazy_static! {
    static ref HEX_CODE: Regex = Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

/// Rounds half away from zero to `places` decimals and formats with exactly that many, like a web
/// page's `toFixed`. Unlike `format!("{:.2}")` on its own, this never rounds half to even. It parts
/// ways with `toFixed` on small negatives: those print as `0.00`, never as `-0.00`.
pub(crate) fn to_fixed(x: f64, places: usize) -> String {
    let factor = 10f64.powi(places as i32);
    let mut rounded = (x * factor).round() / factor;
    if rounded == 0.0 {
        // gets rid of -0
        rounded = 0.0;
    }
    format!("{:.*}", places, rounded)
}

/// A color as three sRGB channels, each between 0 and 255 and not necessarily integral.
///
/// # Example
/// ```
/// # use swatchpick::color::RGBTriple;
/// let orange = RGBTriple::from_hsv(30., 1., 1.);
/// assert_eq!(orange.to_hex_string(), "#ff8000");
/// assert_eq!(orange.to_string(), "255, 128, 0");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBTriple {
    /// The red channel, between 0 and 255.
    pub r: f64,
    /// The green channel, between 0 and 255.
    pub g: f64,
    /// The blue channel, between 0 and 255.
    pub b: f64,
}

impl RGBTriple {
    /// Converts a hue in degrees and saturation and value in [0, 1] to RGB. Each channel sits at a
    /// different offset on the six-sector hue hexagon (red at sector 5, green at 3, blue at 1); the
    /// channel is at full value within two sectors of its peak, ramps linearly over the next sector
    /// on either side, and is at `value * (1 - saturation)` elsewhere.
    ///
    /// The hue is taken modulo 360, so this is periodic in hue. At zero saturation all three
    /// channels equal `255 * value`; at zero value all three are 0.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> RGBTriple {
        let channel = |n: f64| {
            let k = (n + hue / 60.0).rem_euclid(6.0);
            let ramp = k.min(4.0 - k).min(1.0).max(0.0);
            (value - value * saturation * ramp) * 255.0
        };
        RGBTriple {
            r: channel(5.0),
            g: channel(3.0),
            b: channel(1.0),
        }
    }

    /// Converts an already-validated [`ColorCoordinate`] to RGB.
    ///
    /// [`ColorCoordinate`]: ../coord/struct.ColorCoordinate.html
    pub fn from_coordinate(coord: &ColorCoordinate) -> RGBTriple {
        RGBTriple::from_hsv(coord.hue(), coord.saturation(), coord.value())
    }

    /// The three channels rounded to the nearest integer, half away from zero.
    pub fn rounded(&self) -> [u8; 3] {
        // channels are in [0, 255] by contract, so the casts can't wrap
        [
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
        ]
    }

    /// Formats as a lowercase `#rrggbb` hex code, directly usable as a CSS color. Each channel is
    /// rounded first and then zero-padded to two digits.
    pub fn to_hex_string(&self) -> String {
        let [r, g, b] = self.rounded();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Parses a hex code with or without the leading `#`, in either the six-digit or the
    /// three-digit shorthand form. Case is ignored.
    /// # Errors
    /// Returns `PickerError::InvalidHexCode` for anything else.
    pub fn from_hex_code(hex: &str) -> Result<RGBTriple> {
        let invalid = || PickerError::InvalidHexCode(hex.to_string());
        let caps = HEX_CODE.captures(hex.trim()).ok_or_else(invalid)?;
        let digits = &caps[1];
        // expand shorthand so that #abc is #aabbcc
        let full: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| vec![c, c]).collect()
        } else {
            digits.to_string()
        };
        let num = u32::from_str_radix(&full, 16).map_err(|_| invalid())?;
        Ok(RGBTriple {
            r: f64::from((num >> 16) & 0xff),
            g: f64::from((num >> 8) & 0xff),
            b: f64::from(num & 0xff),
        })
    }

    /// The largest and smallest channel, in that order.
    pub(crate) fn max_min(&self) -> (f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        (max, min)
    }

    /// Returns `true` if every channel matches `other`'s to within a handful of ULPs. This is
    /// stricter than any display rounding and is meant for checking that two computations agree,
    /// not that two colors look alike.
    pub fn approx_eq(&self, other: &RGBTriple) -> bool {
        self.r.approx_eq_ulps(&other.r, 4)
            && self.g.approx_eq_ulps(&other.g, 4)
            && self.b.approx_eq_ulps(&other.b, 4)
    }
}

impl From<ColorCoordinate> for RGBTriple {
    fn from(coord: ColorCoordinate) -> RGBTriple {
        RGBTriple::from_coordinate(&coord)
    }
}

impl fmt::Display for RGBTriple {
    /// The RGB notation shown to users: rounded channels separated by commas, e.g. `255, 128, 0`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [r, g, b] = self.rounded();
        write!(f, "{}, {}, {}", r, g, b)
    }
}

impl FromStr for RGBTriple {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<RGBTriple> {
        RGBTriple::from_hex_code(s)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn assert_close(rgb: RGBTriple, expected: (f64, f64, f64)) {
        assert!((rgb.r - expected.0).abs() <= 1e-9, "{:?} vs {:?}", rgb, expected);
        assert!((rgb.g - expected.1).abs() <= 1e-9, "{:?} vs {:?}", rgb, expected);
        assert!((rgb.b - expected.2).abs() <= 1e-9, "{:?} vs {:?}", rgb, expected);
    }

    #[test]
    fn test_primaries() {
        assert_close(RGBTriple::from_hsv(0., 1., 1.), (255., 0., 0.));
        assert_close(RGBTriple::from_hsv(120., 1., 1.), (0., 255., 0.));
        assert_close(RGBTriple::from_hsv(240., 1., 1.), (0., 0., 255.));
        assert_close(RGBTriple::from_hsv(60., 1., 1.), (255., 255., 0.));
        assert_close(RGBTriple::from_hsv(300., 1., 1.), (255., 0., 255.));
    }

    #[test]
    fn test_achromatic_and_black() {
        assert_close(RGBTriple::from_hsv(77., 0., 0.4), (102., 102., 102.));
        assert_close(RGBTriple::from_hsv(200., 0.8, 0.), (0., 0., 0.));
    }

    #[test]
    fn test_hue_periodicity() {
        let a = RGBTriple::from_hsv(45., 0.6, 0.9);
        let b = RGBTriple::from_hsv(405., 0.6, 0.9);
        let c = RGBTriple::from_hsv(-315., 0.6, 0.9);
        assert!((a.r - b.r).abs() <= 1e-9 && (a.g - b.g).abs() <= 1e-9 && (a.b - b.b).abs() <= 1e-9);
        assert!((a.r - c.r).abs() <= 1e-9 && (a.g - c.g).abs() <= 1e-9 && (a.b - c.b).abs() <= 1e-9);
    }

    #[test]
    fn test_hex_formatting() {
        let red = RGBTriple { r: 255., g: 0., b: 0. };
        assert_eq!(red.to_hex_string(), "#ff0000");
        let black = RGBTriple { r: 0., g: 0., b: 0. };
        assert_eq!(black.to_hex_string(), "#000000");
        let white = RGBTriple { r: 255., g: 255., b: 255. };
        assert_eq!(white.to_hex_string(), "#ffffff");
        // rounding happens before formatting
        let odd = RGBTriple { r: 10.5, g: 10.49, b: 0.4 };
        assert_eq!(odd.to_hex_string(), "#0b0a00");
    }

    #[test]
    fn test_rgb_display() {
        let rgb = RGBTriple { r: 12.5, g: 200.2, b: 254.6 };
        assert_eq!(rgb.to_string(), "13, 200, 255");
    }

    #[test]
    fn test_hex_parsing() {
        let teal = RGBTriple::from_hex_code("#008080").unwrap();
        assert_eq!(teal, RGBTriple { r: 0., g: 128., b: 128. });
        let short: RGBTriple = "FaB".parse().unwrap();
        assert_eq!(short.to_hex_string(), "#ffaabb");
        assert!(RGBTriple::from_hex_code("#12345").is_err());
        assert!(RGBTriple::from_hex_code("#gggggg").is_err());
        assert!(RGBTriple::from_hex_code("").is_err());
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(-0.001, 2), "0.00");
        assert_eq!(to_fixed(-12.345678, 2), "-12.35");
        assert_eq!(to_fixed(100., 1), "100.0");
    }

    #[test]
    fn test_approx_eq() {
        let a = RGBTriple::from_hsv(10., 0.5, 0.5);
        let b = RGBTriple::from_coordinate(&ColorCoordinate::new(10., 0.5, 0.5).unwrap());
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&RGBTriple { r: a.r + 1., g: a.g, b: a.b }));
    }
}
