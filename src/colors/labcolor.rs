//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). CIELAB is device-independent: it has
//! an L value for lightness and two opponent color axes, `a` (green to magenta) and `b` (blue to
//! yellow). Formally the three values are called L\*, a\* and b\*, but for convenience they are just
//! `l`, `a` and `b` here.
//!
//! The conversion from sRGB goes through three stages: undoing the sRGB transfer curve to get linear
//! light, a matrix to CIE 1931 XYZ normalized by the D65 white point, and finally the CIE cube-root
//! compression that makes Lab roughly perceptually uniform. D65 is used throughout, with no chromatic
//! adaptation, which matches what web-based pickers report.

use std::fmt;

use rulinalg::vector::Vector;

use crate::color::{to_fixed, RGBTriple};
use crate::consts::{
    CIE_EPSILON, CIE_KAPPA_SLOPE, D65_WHITE_POINT, SRGB_LINEAR_THRESHOLD, SRGB_TO_XYZ,
};

/// A color in the CIELAB color space, relative to the D65 white point.
///
/// # Example
/// ```
/// # use swatchpick::color::RGBTriple;
/// # use swatchpick::colors::LabColor;
/// let black = LabColor::from_rgb(&RGBTriple { r: 0., g: 0., b: 0. });
/// assert_eq!(black.to_string(), "0.00, 0.00, 0.00");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    /// The lightness. 0 is black and 100 is diffuse white.
    pub l: f64,
    /// The first opponent axis: negative is green, positive is magenta.
    pub a: f64,
    /// The second opponent axis: negative is blue, positive is yellow.
    pub b: f64,
}

/// Undoes sRGB gamma for one channel in [0, 1].
fn linearize(n: f64) -> f64 {
    if n > SRGB_LINEAR_THRESHOLD {
        ((n + 0.055) / 1.055).powf(2.4)
    } else {
        n / 12.92
    }
}

/// The CIE compression function. Cube root above the threshold, a straight line below it so that
/// the slope stays finite near black.
fn lab_pivot(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        CIE_KAPPA_SLOPE * t + 16.0 / 116.0
    }
}

impl LabColor {
    /// Converts an sRGB color with channels in [0, 255] to CIELAB.
    pub fn from_rgb(rgb: &RGBTriple) -> LabColor {
        let linear = Vector::new(vec![
            linearize(rgb.r / 255.0),
            linearize(rgb.g / 255.0),
            linearize(rgb.b / 255.0),
        ]);
        let xyz = &*SRGB_TO_XYZ * linear;

        let fx = lab_pivot(xyz[0] / D65_WHITE_POINT[0]);
        let fy = lab_pivot(xyz[1] / D65_WHITE_POINT[1]);
        let fz = lab_pivot(xyz[2] / D65_WHITE_POINT[2]);

        // note how a and b are opponent axes: each is a difference of two compressed components
        LabColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl fmt::Display for LabColor {
    /// `L, a, b`, each to two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            to_fixed(self.l, 2),
            to_fixed(self.a, 2),
            to_fixed(self.b, 2)
        )
    }
}
