//! This file implements HSL, a cylindrical rearrangement of sRGB. Lightness is the average of the
//! largest and smallest channel, so it runs from black through the fully saturated hue in the
//! middle to white at the top. This makes the space a double hexcone, and makes HSL saturation a
//! poor guide to perceived colorfulness near white and black. It is nonetheless what CSS speaks, and
//! so what people want to copy out of a picker.
//!
//! Grays have no hue. Here they get a hue of 0 and a saturation of 0, as an explicit branch.

use std::fmt;

use super::hue_sector;
use crate::color::{to_fixed, RGBTriple};

/// A color in HSL space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue in degrees, between 0 and 360. The same as the hue of HSB up to rounding.
    pub h: f64,
    /// The saturation, between 0 and 1, relative to the largest chroma available at this
    /// lightness.
    pub s: f64,
    /// The lightness, between 0 and 1.
    pub l: f64,
}

impl HSLColor {
    /// Converts an sRGB color with channels in [0, 255] to HSL.
    pub fn from_rgb(rgb: &RGBTriple) -> HSLColor {
        let r = rgb.r / 255.0;
        let g = rgb.g / 255.0;
        let b = rgb.b / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        match hue_sector(r, g, b) {
            None => HSLColor { h: 0.0, s: 0.0, l },
            Some(sector) => {
                let d = max - min;
                // the chroma available shrinks towards both ends of the lightness axis
                let s = if l > 0.5 {
                    d / (2.0 - max - min)
                } else {
                    d / (max + min)
                };
                HSLColor {
                    h: sector / 6.0 * 360.0,
                    s,
                    l,
                }
            }
        }
    }
}

impl fmt::Display for HSLColor {
    /// `h, s%, l%`, everything rounded to an integer.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, {}%, {}%",
            to_fixed(self.h, 0),
            to_fixed(self.s * 100.0, 0),
            to_fixed(self.l * 100.0, 0)
        )
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsl_rgb_conversion() {
        let red = HSLColor::from_rgb(&RGBTriple { r: 255., g: 0., b: 0. });
        assert!(red.h.abs() <= 0.0001);
        assert!((red.s - 1.0).abs() <= 0.0001);
        assert!((red.l - 0.5).abs() <= 0.0001);
        assert_eq!(red.to_string(), "0, 100%, 50%");
        let teal = HSLColor::from_rgb(&RGBTriple {
            r: 0.,
            g: 128.,
            b: 128.,
        });
        assert_eq!(teal.to_string(), "180, 100%, 25%");
        let pink = HSLColor::from_rgb(&RGBTriple {
            r: 255.,
            g: 192.,
            b: 203.,
        });
        assert_eq!(pink.to_string(), "350, 100%, 88%");
    }

    #[test]
    fn test_grays() {
        let white = HSLColor::from_rgb(&RGBTriple {
            r: 255.,
            g: 255.,
            b: 255.,
        });
        assert_eq!(white.to_string(), "0, 0%, 100%");
        let gray = HSLColor::from_rgb(&RGBTriple {
            r: 102.,
            g: 102.,
            b: 102.,
        });
        assert_eq!(gray.h, 0.);
        assert_eq!(gray.s, 0.);
        assert_eq!(gray.to_string(), "0, 0%, 40%");
    }

    #[test]
    fn test_half_degree_hue_rounds_from_normalized_channels() {
        // exactly 167.5 degrees on paper, a hair under it after normalizing
        let green = HSLColor::from_rgb(&RGBTriple {
            r: 0.,
            g: 216.,
            b: 171.,
        });
        assert_eq!(green.to_string(), "167, 100%, 42%");
        let lime = HSLColor::from_rgb(&RGBTriple { r: 0., g: 240., b: 6. });
        assert_eq!(lime.to_string(), "121, 100%, 47%");
    }
}
