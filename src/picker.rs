//! The state behind a color picker widget, held in one place. A [`Picker`] owns the current
//! coordinate and the snapshot computed from it, the selector's position on the gradient surface,
//! which notation is on display, and the session's swatches. Every change goes through a method
//! call that recomputes the snapshot in full before returning, so a caller never sees a coordinate
//! and a snapshot that disagree.
//!
//! Rendering the gradient and turning pointer events into surface positions is up to the UI layer.
//!
//! # Example
//! ```
//! # use swatchpick::prelude::*;
//! let mut picker = Picker::new();
//! picker.set_hue(120.)?;
//! picker.select_at(256., 0.)?;
//! assert_eq!(picker.preview_color(), "#00ff00");
//! assert_eq!(picker.output_title(), "HEX");
//! picker.cycle_representation();
//! picker.cycle_representation();
//! assert_eq!(picker.output_title(), "CMYK");
//! let id = picker.save_swatch("Leaf").id.clone();
//! assert_eq!(picker.swatches().len(), 1);
//! picker.delete_swatch(&id)?;
//! assert!(picker.swatches().is_empty());
//! # Ok::<(), PickerError>(())
//! ```

use tracing::{debug, info, warn};

use crate::color::RGBTriple;
use crate::config::PickerConfig;
use crate::coord::{check_finite, ColorCoordinate};
use crate::error::Result;
use crate::representation::Representation;
use crate::snapshot::ColorSnapshot;
use crate::swatch::{Swatch, SwatchId, SwatchList};

/// A color picker's complete state.
#[derive(Debug, Clone)]
pub struct Picker {
    config: PickerConfig,
    selector: [f64; 2],
    coordinate: ColorCoordinate,
    snapshot: ColorSnapshot,
    selected: Representation,
    swatches: SwatchList,
}

impl Default for Picker {
    fn default() -> Picker {
        Picker::new()
    }
}

impl Picker {
    /// A picker with the default configuration: a 256x256 surface, hue 0, the selector at
    /// (10, 10), and hex on display.
    pub fn new() -> Picker {
        let config = PickerConfig::default();
        let selector = config.initial_selector;
        let coordinate = Picker::coordinate_at(&config, config.initial_hue, selector);
        Picker::assemble(config, selector, coordinate)
    }

    /// A picker set up from `config`, with its first snapshot already computed.
    /// # Errors
    /// Returns `PickerError::InvalidSurface` for a bad surface size and
    /// `PickerError::NonFiniteComponent` for a NaN or infinite hue or selector position.
    pub fn with_config(config: PickerConfig) -> Result<Picker> {
        config.validate()?;
        let hue = check_finite("hue", config.initial_hue)?;
        let x = check_finite("x", config.initial_selector[0])?;
        let y = check_finite("y", config.initial_selector[1])?;
        let selector = Picker::clamp_to_surface(&config, x, y);
        let coordinate = Picker::coordinate_at(&config, hue, selector);
        Ok(Picker::assemble(config, selector, coordinate))
    }

    fn assemble(config: PickerConfig, selector: [f64; 2], coordinate: ColorCoordinate) -> Picker {
        Picker {
            selected: config.initial_representation,
            config,
            selector,
            coordinate,
            snapshot: ColorSnapshot::from_coordinate(&coordinate),
            swatches: SwatchList::new(),
        }
    }

    fn clamp_to_surface(config: &PickerConfig, x: f64, y: f64) -> [f64; 2] {
        [
            num::clamp(x, 0.0, config.surface_width),
            num::clamp(y, 0.0, config.surface_height),
        ]
    }

    /// Saturation grows left to right, value shrinks top to bottom. `hue` must be finite,
    /// `selector` must already be on the surface, and the surface must have passed validation.
    fn coordinate_at(config: &PickerConfig, hue: f64, selector: [f64; 2]) -> ColorCoordinate {
        let saturation = selector[0] / config.surface_width;
        let value = 1.0 - selector[1] / config.surface_height;
        ColorCoordinate::from_finite(hue, saturation, value)
    }

    /// Moves the selector to `(x, y)` on the gradient surface and recomputes the color there.
    /// Positions off the surface are pulled back to its nearest edge, as happens while dragging past
    /// it.
    /// # Errors
    /// Returns `PickerError::NonFiniteComponent` if `x` or `y` is NaN or infinite, leaving the
    /// picker unchanged.
    pub fn select_at(&mut self, x: f64, y: f64) -> Result<&ColorSnapshot> {
        let x = check_finite("x", x)?;
        let y = check_finite("y", y)?;
        self.selector = Picker::clamp_to_surface(&self.config, x, y);
        let coordinate = Picker::coordinate_at(&self.config, self.coordinate.hue(), self.selector);
        self.update(coordinate);
        Ok(&self.snapshot)
    }

    /// Moves the hue slider and recomputes the color under the selector, which stays where it is.
    /// # Errors
    /// Returns `PickerError::NonFiniteComponent` if `hue` is NaN or infinite, leaving the picker
    /// unchanged.
    pub fn set_hue(&mut self, hue: f64) -> Result<&ColorSnapshot> {
        let coordinate = self.coordinate.with_hue(hue)?;
        self.update(coordinate);
        Ok(&self.snapshot)
    }

    fn update(&mut self, coordinate: ColorCoordinate) {
        self.coordinate = coordinate;
        self.snapshot = ColorSnapshot::from_coordinate(&coordinate);
        debug!(
            coordinate = %self.coordinate,
            hex = self.snapshot.hex(),
            "picked color"
        );
    }

    /// Shows the next notation, wrapping from HSB back to RGB, and returns it.
    pub fn cycle_representation(&mut self) -> Representation {
        self.selected = self.selected.next();
        debug!(representation = %self.selected, "switched notation");
        self.selected
    }

    /// Shows a particular notation.
    pub fn select_representation(&mut self, rep: Representation) {
        self.selected = rep;
    }

    /// The notation on display.
    pub fn selected(&self) -> Representation {
        self.selected
    }

    /// Heading for the displayed value, e.g. `"HSL"`.
    pub fn output_title(&self) -> String {
        self.selected.title()
    }

    /// The displayed value, in the selected notation.
    pub fn output_value(&self) -> &str {
        &self.snapshot.get(self.selected).color
    }

    /// The hex code to paint the preview with, whatever notation is on display.
    pub fn preview_color(&self) -> &str {
        self.snapshot.hex()
    }

    /// The hex code of the current hue at full saturation and value, for the hue slider's thumb
    /// and the base layer of the gradient surface.
    pub fn hue_thumb_color(&self) -> String {
        RGBTriple::from_hsv(self.coordinate.hue(), 1.0, 1.0).to_hex_string()
    }

    /// The current coordinate.
    pub fn coordinate(&self) -> ColorCoordinate {
        self.coordinate
    }

    /// The current hue, in degrees.
    pub fn hue(&self) -> f64 {
        self.coordinate.hue()
    }

    /// The current color in every notation.
    pub fn snapshot(&self) -> &ColorSnapshot {
        &self.snapshot
    }

    /// Where the selector sits on the surface, as `[x, y]`.
    pub fn selector(&self) -> [f64; 2] {
        self.selector
    }

    /// The configuration this picker was built from.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Saves the current color as a swatch, labelled in the notation on display. A blank title
    /// means no title.
    pub fn save_swatch(&mut self, title: &str) -> &Swatch {
        let swatch = self.swatches.add(title, self.selected, &self.snapshot);
        info!(id = %swatch.id, label = %swatch.label(), "saved swatch");
        swatch
    }

    /// Deletes a swatch and returns it.
    /// # Errors
    /// Returns `PickerError::SwatchNotFound` if no swatch has this id.
    pub fn delete_swatch(&mut self, id: &SwatchId) -> Result<Swatch> {
        match self.swatches.remove(id) {
            Ok(swatch) => {
                info!(id = %swatch.id, "deleted swatch");
                Ok(swatch)
            }
            Err(e) => {
                warn!(id = %id, "tried to delete a swatch that doesn't exist");
                Err(e)
            }
        }
    }

    /// The swatches saved so far, oldest first.
    pub fn swatches(&self) -> &SwatchList {
        &self.swatches
    }
}
