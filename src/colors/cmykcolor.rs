//! This module implements naive CMYK: the subtractive complement of sRGB with the shared gray
//! component pulled out into a key (black) channel. No ink or paper profile is involved, so this is
//! the same CMYK that design tools show for screen colors, not a prediction of what a printer will
//! produce.

use std::fmt;

use crate::color::{to_fixed, RGBTriple};

/// A color as cyan, magenta, yellow and key fractions, each between 0 and 1. Cyan, magenta and
/// yellow are relative to the non-black part of the color, so a pure gray has all three at 0
/// whatever its key.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    /// Cyan, between 0 and 1.
    pub c: f64,
    /// Magenta, between 0 and 1.
    pub m: f64,
    /// Yellow, between 0 and 1.
    pub y: f64,
    /// Key (black), between 0 and 1.
    pub k: f64,
}

impl CMYKColor {
    /// Converts an sRGB color with channels in [0, 255] to CMYK.
    pub fn from_rgb(rgb: &RGBTriple) -> CMYKColor {
        let c = 1.0 - rgb.r / 255.0;
        let m = 1.0 - rgb.g / 255.0;
        let y = 1.0 - rgb.b / 255.0;
        let k = c.min(m).min(y);
        if k == 1.0 {
            // pure black: the chromatic part is 0/0, so say it's 0
            return CMYKColor {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }
        CMYKColor {
            c: (c - k) / (1.0 - k),
            m: (m - k) / (1.0 - k),
            y: (y - k) / (1.0 - k),
            k,
        }
    }

    /// Returns `true` for pure black, the one color shown without decimals.
    pub fn is_black(&self) -> bool {
        self.k == 1.0
    }
}

impl fmt::Display for CMYKColor {
    /// `c%, m%, y%, k%`, each percentage to one decimal place. Pure black is shown as the literal
    /// `0, 0, 0, 100`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_black() {
            return write!(f, "0, 0, 0, 100");
        }
        write!(
            f,
            "{}%, {}%, {}%, {}%",
            to_fixed(self.c * 100.0, 1),
            to_fixed(self.m * 100.0, 1),
            to_fixed(self.y * 100.0, 1),
            to_fixed(self.k * 100.0, 1)
        )
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_black_is_literal() {
        let black = CMYKColor::from_rgb(&RGBTriple { r: 0., g: 0., b: 0. });
        assert!(black.is_black());
        assert_eq!(black.to_string(), "0, 0, 0, 100");
    }

    #[test]
    fn test_primaries() {
        let red = CMYKColor::from_rgb(&RGBTriple { r: 255., g: 0., b: 0. });
        assert_eq!(red.to_string(), "0.0%, 100.0%, 100.0%, 0.0%");
        let white = CMYKColor::from_rgb(&RGBTriple {
            r: 255.,
            g: 255.,
            b: 255.,
        });
        assert_eq!(white.to_string(), "0.0%, 0.0%, 0.0%, 0.0%");
    }

    #[test]
    fn test_key_extraction() {
        let brown = CMYKColor::from_rgb(&RGBTriple {
            r: 128.,
            g: 64.,
            b: 32.,
        });
        assert!(brown.c.abs() <= 1e-12);
        assert!((brown.m - 0.5).abs() <= 1e-12);
        assert!((brown.y - 0.75).abs() <= 1e-12);
        assert_eq!(brown.to_string(), "0.0%, 50.0%, 75.0%, 49.8%");
    }

    #[test]
    fn test_near_black_is_not_literal() {
        let almost = CMYKColor::from_rgb(&RGBTriple { r: 1., g: 0., b: 0. });
        assert!(!almost.is_black());
        assert_eq!(almost.to_string(), "0.0%, 100.0%, 100.0%, 99.6%");
    }
}
