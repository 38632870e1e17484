//! This module contains one type per notation derived from an [`RGBTriple`]: [`LabColor`],
//! [`CMYKColor`], [`HSLColor`] and [`HSBColor`]. Each has a `from_rgb` constructor holding the
//! numeric conversion and a `Display` implementation holding the exact display format, which is
//! part of the contract: it is what users see and what swatches store. For convenience, each main
//! type is imported into this module's namespace directly.
//!
//! [`RGBTriple`]: ../color/struct.RGBTriple.html
pub mod cmykcolor;
pub mod hsbcolor;
pub mod hslcolor;
pub mod labcolor;

// for convenience, use this namespace for the color objects
pub use self::cmykcolor::CMYKColor;
pub use self::hsbcolor::HSBColor;
pub use self::hslcolor::HSLColor;
pub use self::labcolor::LabColor;

/// The position of a color on the hue hexagon, in sectors: 0 is red, 2 green, 4 blue, and the
/// result is in [0, 6). The channels may be on any common scale, since only ratios of differences
/// matter. Returns `None` for grays, whose hue is undefined: callers decide what to show for them.
///
/// Ties for the largest channel go to red, then green, then blue.
pub(crate) fn hue_sector(r: f64, g: f64, b: f64) -> Option<f64> {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return None;
    }
    let d = max - min;
    let sector = if max == r {
        // the offset keeps magenta-ish reds at the top of the range instead of going negative
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    Some(sector)
}
