//! Configuration for a [`Picker`](../picker/struct.Picker.html): how large its gradient surface is,
//! and where the hue slider, the selector and the notation display start out. Every field has a
//! default, so a configuration file only needs to mention what it changes.
//!
//! ```
//! # use swatchpick::config::PickerConfig;
//! # use swatchpick::representation::Representation;
//! let config = PickerConfig::from_json_str(r#"{"initial_hue": 200, "initial_representation": "hsl"}"#)?;
//! assert_eq!(config.initial_hue, 200.);
//! assert_eq!(config.initial_representation, Representation::Hsl);
//! assert_eq!(config.surface_width, 256.);
//! # Ok::<(), swatchpick::PickerError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PickerError, Result};
use crate::representation::Representation;

/// Settings for a new picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Width of the gradient surface, in pointer units. Saturation grows from 0 at the left edge
    /// to 1 at the right.
    pub surface_width: f64,
    /// Height of the gradient surface, in pointer units. Value shrinks from 1 at the top edge to
    /// 0 at the bottom.
    pub surface_height: f64,
    /// Where the hue slider starts, in degrees.
    pub initial_hue: f64,
    /// Where the selector starts on the surface, as `[x, y]`.
    pub initial_selector: [f64; 2],
    /// Which notation is on display at first.
    pub initial_representation: Representation,
}

impl Default for PickerConfig {
    fn default() -> PickerConfig {
        PickerConfig {
            surface_width: 256.0,
            surface_height: 256.0,
            initial_hue: 0.0,
            initial_selector: [10.0, 10.0],
            initial_representation: Representation::Hex,
        }
    }
}

impl PickerConfig {
    /// Parses a configuration from JSON and validates it.
    /// # Errors
    /// Returns `PickerError::Config` on malformed JSON and `PickerError::InvalidSurface` for a
    /// bad surface size.
    pub fn from_json_str(json: &str) -> Result<PickerConfig> {
        let config: PickerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    /// # Errors
    /// As [`from_json_str`](#method.from_json_str), plus `PickerError::Io` if the file can't be
    /// read.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<PickerConfig> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = PickerConfig::from_json_str(&contents)?;
        debug!(path = %path.display(), ?config, "loaded picker config");
        Ok(config)
    }

    /// Checks that the surface has a finite, positive size. Everything else is brought into range
    /// when the picker uses it.
    /// # Errors
    /// Returns `PickerError::InvalidSurface` otherwise.
    pub fn validate(&self) -> Result<()> {
        let ok = |d: f64| d.is_finite() && d > 0.0;
        if ok(self.surface_width) && ok(self.surface_height) {
            Ok(())
        } else {
            Err(PickerError::InvalidSurface {
                width: self.surface_width,
                height: self.surface_height,
            })
        }
    }

    /// The configuration as pretty-printed JSON.
    /// # Errors
    /// Returns `PickerError::Config` if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
