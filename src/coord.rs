//! This module contains [`ColorCoordinate`], the input to the whole conversion pipeline: a hue angle
//! plus a saturation/value pair, as read off a picker's hue slider and its two-dimensional gradient
//! surface. A `ColorCoordinate` is always well-formed. Hue lies in [0, 360), saturation and value lie
//! in [0, 1], and nothing is NaN or infinite, so the converters downstream never need to check.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{PickerError, Result};

lazy_static! {
    static ref HSV_FUNCTION: Regex = Regex::new(
        r"^\s*hsv\(\s*([+-]?\d+(?:\.\d+)?)(?:deg)?\s*,\s*([+-]?\d+(?:\.\d+)?)%\s*,\s*([+-]?\d+(?:\.\d+)?)%\s*\)\s*$"
    ).unwrap();
}

/// A point in HSV space, as produced by a color picker.
///
/// # Example
/// Out-of-range input is brought back into range rather than rejected: hue wraps around the color
/// wheel, while saturation and value are clamped.
///
/// ```
/// # use swatchpick::coord::ColorCoordinate;
/// let coord = ColorCoordinate::new(-30., 1.4, 0.5).unwrap();
/// assert_eq!(coord.hue(), 330.);
/// assert_eq!(coord.saturation(), 1.);
/// assert_eq!(coord.value(), 0.5);
/// assert!(ColorCoordinate::new(std::f64::NAN, 0.5, 0.5).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct ColorCoordinate {
    hue: f64,
    saturation: f64,
    value: f64,
}

/// The serialized shape of a [`ColorCoordinate`], before it has been checked.
#[derive(Deserialize)]
struct RawCoordinate {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl TryFrom<RawCoordinate> for ColorCoordinate {
    type Error = PickerError;

    fn try_from(raw: RawCoordinate) -> Result<ColorCoordinate> {
        ColorCoordinate::new(raw.hue, raw.saturation, raw.value)
    }
}

/// Wraps any finite angle into [0, 360).
pub(crate) fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Rejects NaN and infinities, naming the component at fault.
pub(crate) fn check_finite(component: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PickerError::NonFiniteComponent { component, value })
    }
}

impl ColorCoordinate {
    /// Builds a coordinate from a hue in degrees and saturation and value between 0 and 1. The hue
    /// is taken modulo 360 and the other two components are clamped to [0, 1].
    /// # Errors
    /// Returns `PickerError::NonFiniteComponent` if any component is NaN or infinite.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<ColorCoordinate> {
        let hue = check_finite("hue", hue)?;
        let saturation = check_finite("saturation", saturation)?;
        let value = check_finite("value", value)?;
        Ok(ColorCoordinate::from_finite(hue, saturation, value))
    }

    /// Like [`new`](#method.new), for components the caller already knows are finite.
    pub(crate) fn from_finite(hue: f64, saturation: f64, value: f64) -> ColorCoordinate {
        debug_assert!(hue.is_finite() && saturation.is_finite() && value.is_finite());
        ColorCoordinate {
            hue: wrap_hue(hue),
            saturation: num::clamp(saturation, 0.0, 1.0),
            value: num::clamp(value, 0.0, 1.0),
        }
    }

    /// The hue, in degrees, in [0, 360).
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// The saturation, in [0, 1]. 0 is gray, 1 is the fully saturated hue.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// The value, in [0, 1]. 0 is black regardless of the other two components.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns a copy with a different hue, keeping saturation and value. Mirrors moving the hue
    /// slider while the selector stays put.
    /// # Errors
    /// Returns `PickerError::NonFiniteComponent` if `hue` is NaN or infinite.
    pub fn with_hue(&self, hue: f64) -> Result<ColorCoordinate> {
        ColorCoordinate::new(hue, self.saturation, self.value)
    }
}

impl Default for ColorCoordinate {
    /// Black, at hue 0.
    fn default() -> ColorCoordinate {
        ColorCoordinate {
            hue: 0.0,
            saturation: 0.0,
            value: 0.0,
        }
    }
}

impl fmt::Display for ColorCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "hsv({}, {}%, {}%)",
            self.hue,
            self.saturation * 100.0,
            self.value * 100.0
        )
    }
}

impl FromStr for ColorCoordinate {
    type Err = PickerError;

    /// Parses CSS-like functional notation, `hsv(h, s%, v%)`. The hue may carry a `deg` suffix;
    /// saturation and value must be percentages. The same wrapping and clamping as
    /// [`ColorCoordinate::new`] applies.
    fn from_str(s: &str) -> Result<ColorCoordinate> {
        let invalid = || PickerError::InvalidCoordinateSyntax(s.to_string());
        let caps = HSV_FUNCTION.captures(s).ok_or_else(invalid)?;
        let mut nums = [0.0; 3];
        for (i, num) in nums.iter_mut().enumerate() {
            *num = caps[i + 1].parse::<f64>().map_err(|_| invalid())?;
        }
        ColorCoordinate::new(nums[0], nums[1] / 100.0, nums[2] / 100.0)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hue_wrapping() {
        assert_eq!(ColorCoordinate::new(360., 0.5, 0.5).unwrap().hue(), 0.);
        assert_eq!(ColorCoordinate::new(725., 0.5, 0.5).unwrap().hue(), 5.);
        assert_eq!(ColorCoordinate::new(-90., 0.5, 0.5).unwrap().hue(), 270.);
        let tiny = ColorCoordinate::new(-1e-20, 0.5, 0.5).unwrap().hue();
        assert!(tiny >= 0. && tiny < 360.);
    }

    #[test]
    fn test_clamping() {
        let coord = ColorCoordinate::new(10., -0.2, 3.).unwrap();
        assert_eq!(coord.saturation(), 0.);
        assert_eq!(coord.value(), 1.);
    }

    #[test]
    fn test_non_finite_rejected() {
        match ColorCoordinate::new(0., std::f64::INFINITY, 0.5) {
            Err(PickerError::NonFiniteComponent { component, .. }) => {
                assert_eq!(component, "saturation")
            }
            other => panic!("expected non-finite error, got {:?}", other),
        }
        assert!(ColorCoordinate::new(0., 0.5, std::f64::NAN).is_err());
    }

    #[test]
    fn test_from_finite_matches_new() {
        let a = ColorCoordinate::from_finite(-30., 1.4, -0.5);
        assert_eq!(a, ColorCoordinate::new(-30., 1.4, -0.5).unwrap());
        assert_eq!(a.hue(), 330.);
        assert_eq!(a.saturation(), 1.);
        assert_eq!(a.value(), 0.);
    }

    #[test]
    fn test_deserialize_wraps_and_clamps() {
        let coord: ColorCoordinate =
            serde_json::from_str(r#"{"hue":1000.0,"saturation":5.0,"value":-2.0}"#).unwrap();
        assert_eq!(coord.hue(), 280.);
        assert_eq!(coord.saturation(), 1.);
        assert_eq!(coord.value(), 0.);
        let json = serde_json::to_string(&ColorCoordinate::new(90., 0.25, 0.5).unwrap()).unwrap();
        assert_eq!(json, r#"{"hue":90.0,"saturation":0.25,"value":0.5}"#);
        let back: ColorCoordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorCoordinate::new(90., 0.25, 0.5).unwrap());
        assert!(serde_json::from_str::<ColorCoordinate>(r#"{"hue":1.0}"#).is_err());
    }

    #[test]
    fn test_with_hue() {
        let coord = ColorCoordinate::new(10., 0.3, 0.7).unwrap();
        let moved = coord.with_hue(400.).unwrap();
        assert_eq!(moved.hue(), 40.);
        assert_eq!(moved.saturation(), 0.3);
        assert_eq!(moved.value(), 0.7);
    }

    #[test]
    fn test_hsv_string_parsing() {
        let red: ColorCoordinate = "hsv(0, 100%, 100%)".parse().unwrap();
        assert_eq!(red, ColorCoordinate::new(0., 1., 1.).unwrap());
        let teal: ColorCoordinate = " hsv(180deg, 50%, 25.5%) ".parse().unwrap();
        assert_eq!(teal.hue(), 180.);
        assert!((teal.saturation() - 0.5).abs() <= 1e-12);
        assert!((teal.value() - 0.255).abs() <= 1e-12);
        let wrapped: ColorCoordinate = "hsv(-445, 24%, 1000%)".parse().unwrap();
        assert_eq!(wrapped.hue(), 275.);
        assert_eq!(wrapped.value(), 1.);
        // test errors
        assert!("hsv(254%, 0%, 0%)".parse::<ColorCoordinate>().is_err());
        assert!("hsl(0, 0%, 0%)".parse::<ColorCoordinate>().is_err());
        assert!("hsv(0, 0, 0)".parse::<ColorCoordinate>().is_err());
    }

    #[test]
    fn test_display() {
        let coord = ColorCoordinate::new(200., 0.25, 0.5).unwrap();
        assert_eq!(coord.to_string(), "hsv(200, 25%, 50%)");
    }
}
