//! This module brings the most common Swatchpick functionality under a single namespace, to
//! prevent excessive imports: the coordinate and RGB types, the snapshot and its notations, the
//! picker with its configuration and swatches, and the error type. The individual color space
//! structs in [`colors`](../colors/index.html) and the free functions in
//! [`convert`](../convert/index.html) are not included.

pub use crate::color::RGBTriple;
pub use crate::config::PickerConfig;
pub use crate::coord::ColorCoordinate;
pub use crate::error::{PickerError, Result};
pub use crate::picker::Picker;
pub use crate::representation::{ColorRepresentation, Representation};
pub use crate::snapshot::ColorSnapshot;
pub use crate::swatch::{Swatch, SwatchId, SwatchList};
