//! This module implements HSB, better known as HSV. Brightness (value) is the largest channel, so
//! it goes from black to the fully saturated hue, and saturation is chroma relative to brightness.
//! It is the space a picker's gradient surface is laid out in, so converting the picked RGB back to
//! HSB gives (up to rounding) the coordinate the user pointed at, with one caveat: grays report a
//! hue of 0 whatever the slider says.
//!
//! This works directly on the 0-255 channels. The hue comes out the same as HSL's.

use std::fmt;

use super::hue_sector;
use crate::color::{to_fixed, RGBTriple};

/// A color in HSB (HSV) space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSBColor {
    /// The hue in degrees, between 0 and 360.
    pub h: f64,
    /// The saturation, between 0 and 1.
    pub s: f64,
    /// The brightness, between 0 and 1: the largest channel, scaled.
    pub b: f64,
}

impl HSBColor {
    /// Converts an sRGB color with channels in [0, 255] to HSB.
    pub fn from_rgb(rgb: &RGBTriple) -> HSBColor {
        let (max, min) = rgb.max_min();
        let s = if max == 0.0 { 0.0 } else { (max - min) / max };
        let h = match hue_sector(rgb.r, rgb.g, rgb.b) {
            Some(sector) => sector * 60.0,
            None => 0.0,
        };
        HSBColor { h, s, b: max / 255.0 }
    }
}

impl fmt::Display for HSBColor {
    /// `h, s%, b%`, everything rounded to an integer.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, {}%, {}%",
            to_fixed(self.h, 0),
            to_fixed(self.s * 100.0, 0),
            to_fixed(self.b * 100.0, 0)
        )
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colors::HSLColor;

    #[test]
    fn test_hsb_rgb_conversion() {
        let red = HSBColor::from_rgb(&RGBTriple { r: 255., g: 0., b: 0. });
        assert_eq!(red.to_string(), "0, 100%, 100%");
        let teal = HSBColor::from_rgb(&RGBTriple {
            r: 0.,
            g: 128.,
            b: 128.,
        });
        assert_eq!(teal.to_string(), "180, 100%, 50%");
    }

    #[test]
    fn test_black_and_gray() {
        let black = HSBColor::from_rgb(&RGBTriple { r: 0., g: 0., b: 0. });
        assert_eq!(black.to_string(), "0, 0%, 0%");
        let gray = HSBColor::from_rgb(&RGBTriple {
            r: 51.,
            g: 51.,
            b: 51.,
        });
        assert_eq!(gray.to_string(), "0, 0%, 20%");
    }

    #[test]
    fn test_recovers_picked_coordinate() {
        let rgb = RGBTriple::from_hsv(210., 0.4, 0.8);
        let hsb = HSBColor::from_rgb(&rgb);
        assert!((hsb.h - 210.).abs() <= 1e-9);
        assert!((hsb.s - 0.4).abs() <= 1e-9);
        assert!((hsb.b - 0.8).abs() <= 1e-9);
    }

    #[test]
    fn test_same_hue_as_hsl() {
        let rgb = RGBTriple {
            r: 37.,
            g: 201.,
            b: 90.,
        };
        let hsb = HSBColor::from_rgb(&rgb);
        let hsl = HSLColor::from_rgb(&rgb);
        assert!((hsb.h - hsl.h).abs() <= 1e-9);
    }
}
