//! The conversion engine as six flat functions, one per operation a picker needs. Each takes plain
//! numbers and returns either an [`RGBTriple`] or a ready-to-display string, so callers that don't
//! care about the typed color structs in [`colors`] can use these directly.
//!
//! Every `rgb_to_*` function expects channels in [0, 255]. None of them clamp or validate: that is
//! the caller's job, and is done for you if you start from a
//! [`ColorCoordinate`](../coord/struct.ColorCoordinate.html).
//!
//! # Example
//! ```
//! # use swatchpick::convert::*;
//! let rgb = hsv_to_rgb(240., 1., 1.);
//! assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b), "#0000ff");
//! assert_eq!(rgb_to_cmyk(rgb.r, rgb.g, rgb.b), "100.0%, 100.0%, 0.0%, 0.0%");
//! assert_eq!(rgb_to_hsb(rgb.r, rgb.g, rgb.b), "240, 100%, 100%");
//! ```
//!
//! [`RGBTriple`]: ../color/struct.RGBTriple.html
//! [`colors`]: ../colors/index.html

use crate::color::RGBTriple;
use crate::colors::{CMYKColor, HSBColor, HSLColor, LabColor};

/// Hue in degrees (any finite value; it is taken modulo 360), saturation and value in [0, 1], to
/// RGB channels in [0, 255].
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> RGBTriple {
    RGBTriple::from_hsv(hue, saturation, value)
}

/// `#rrggbb`, lowercase, each channel rounded and then zero-padded.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    RGBTriple { r, g, b }.to_hex_string()
}

/// CIELAB against D65, as `L, a, b` with two decimals each.
pub fn rgb_to_lab(r: f64, g: f64, b: f64) -> String {
    LabColor::from_rgb(&RGBTriple { r, g, b }).to_string()
}

/// CMYK as `c%, m%, y%, k%` with one decimal each, or exactly `0, 0, 0, 100` for black.
pub fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> String {
    CMYKColor::from_rgb(&RGBTriple { r, g, b }).to_string()
}

/// HSL as `h, s%, l%`, all integers.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> String {
    HSLColor::from_rgb(&RGBTriple { r, g, b }).to_string()
}

/// HSB as `h, s%, b%`, all integers.
pub fn rgb_to_hsb(r: f64, g: f64, b: f64) -> String {
    HSBColor::from_rgb(&RGBTriple { r, g, b }).to_string()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_fixed_points() {
        assert_eq!(rgb_to_hex(255., 0., 0.), "#ff0000");
        assert_eq!(rgb_to_hex(0., 0., 0.), "#000000");
        assert_eq!(rgb_to_hex(255., 255., 255.), "#ffffff");
    }

    #[test]
    fn test_cmyk_black() {
        assert_eq!(rgb_to_cmyk(0., 0., 0.), "0, 0, 0, 100");
    }

    #[test]
    fn test_lab_fixed_points() {
        assert_eq!(rgb_to_lab(0., 0., 0.), "0.00, 0.00, 0.00");
        // the rounded four-digit matrix puts white a hair off the neutral axis
        assert_eq!(rgb_to_lab(255., 255., 255.), "100.00, 0.01, -0.01");
    }

    #[test]
    fn test_hsv_primaries() {
        let red = hsv_to_rgb(0., 1., 1.);
        assert_eq!(rgb_to_hex(red.r, red.g, red.b), "#ff0000");
        let green = hsv_to_rgb(120., 1., 1.);
        assert_eq!(rgb_to_hex(green.r, green.g, green.b), "#00ff00");
        let blue = hsv_to_rgb(240., 1., 1.);
        assert_eq!(rgb_to_hex(blue.r, blue.g, blue.b), "#0000ff");
    }

    #[test]
    fn test_hsl_and_hsb_agree_on_hue() {
        for &(r, g, b) in &[(12., 200., 99.), (250., 3., 77.), (64., 64., 200.), (90., 90., 90.)] {
            let hsl = rgb_to_hsl(r, g, b);
            let hsb = rgb_to_hsb(r, g, b);
            let hue = |s: &str| -> i32 { s.split(", ").next().unwrap().parse().unwrap() };
            let diff = (hue(&hsl) - hue(&hsb)).rem_euclid(360);
            assert!(diff.min(360 - diff) <= 1, "{} vs {}", hsl, hsb);
        }
    }

    #[test]
    fn test_hsl_half_degree() {
        assert_eq!(rgb_to_hsl(0., 216., 171.), "167, 100%, 42%");
    }

    #[test]
    fn test_mid_picker_color() {
        let rgb = hsv_to_rgb(30., 0.5, 0.8);
        assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b), "#cc9966");
        assert_eq!(rgb_to_hsl(rgb.r, rgb.g, rgb.b), "30, 50%, 60%");
        assert_eq!(rgb_to_hsb(rgb.r, rgb.g, rgb.b), "30, 50%, 80%");
        assert_eq!(rgb_to_cmyk(rgb.r, rgb.g, rgb.b), "0.0%, 25.0%, 50.0%, 20.0%");
    }
}
