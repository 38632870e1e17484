//! Swatchpick is a library for turning a point on a hue/saturation/value picker into every color
//! notation a person might want to copy out of it. The underlying philosophy is that a color picker
//! has exactly one source of numeric truth: the RGB triple obtained from the picked HSV coordinate.
//! Every other notation (hex, CIELAB, CMYK, HSL and HSB) is derived from that triple and nothing
//! else, so that two notations shown side by side can never disagree because they took different
//! routes.
//!
//! The crate is split in two layers. The conversion layer ([`color`], [`colors`], [`convert`] and
//! [`snapshot`]) is pure: it has no state, performs no I/O, and always produces the same formatted
//! strings for the same input. The session layer ([`picker`], [`swatch`] and [`config`]) owns the
//! small amount of state a picker widget needs: where the selector sits, which notation is on
//! display, and which swatches have been saved.
//!
//! # Example
//! ```
//! # use swatchpick::prelude::*;
//! let coord = ColorCoordinate::new(120., 1., 1.).unwrap();
//! let snapshot = ColorSnapshot::from_coordinate(&coord);
//! assert_eq!(snapshot.get(Representation::Hex).color, "#00ff00");
//! assert_eq!(snapshot.get(Representation::Hsl).color, "120, 100%, 50%");
//! ```

#![doc(html_root_url = "https://docs.rs/swatchpick/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare 0.95047 with 0.950_47
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate rulinalg;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod color;
pub mod colors;
pub mod config;
mod consts;
pub mod convert;
pub mod coord;
pub mod error;
pub mod picker;
pub mod prelude;
pub mod representation;
pub mod snapshot;
pub mod swatch;

pub use crate::error::{PickerError, Result};
