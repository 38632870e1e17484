//! Swatches are saved colors. A [`Swatch`] holds its own copy of the snapshot it was saved from,
//! plus which notation was on display at the time, so later picking never changes it. The
//! session's swatches live in a [`SwatchList`], which keeps them in the order they were saved,
//! hands out ids, and can export itself as CSV or JSON.

use std::fmt;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{PickerError, Result};
use crate::representation::{ColorRepresentation, Representation};
use crate::snapshot::ColorSnapshot;

/// Identifies one swatch within a list, e.g. `SWATCH-KB2X9Q1C-3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SwatchId(String);

impl SwatchId {
    /// Wraps an existing id, as read back from storage or from a UI element.
    pub fn new<S: Into<String>>(id: S) -> SwatchId {
        SwatchId(id.into())
    }

    /// The id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SwatchId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a number in base 36, lowercase, the way `Number.prototype.toString(36)` does.
fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = vec![];
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// A saved color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swatch {
    /// Unique within the list that made it.
    pub id: SwatchId,
    /// What the user called it, if anything.
    pub title: Option<String>,
    /// The notation on display when the swatch was saved.
    pub selected: ColorRepresentation,
    /// The color in every notation, as it was when the swatch was saved.
    pub colors: ColorSnapshot,
}

impl Swatch {
    /// The hex code to paint this swatch's preview with.
    pub fn preview_color(&self) -> &str {
        self.colors.hex()
    }

    /// The swatch's text, e.g. `hsl(30, 100%, 50%)`, or a bare hex code.
    pub fn label(&self) -> String {
        self.selected.label()
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.title {
            Some(ref title) => write!(f, "{} {}", self.label(), title),
            None => write!(f, "{}", self.label()),
        }
    }
}

/// One CSV row. Field order is column order.
#[derive(Serialize)]
struct SwatchRecord<'a> {
    id: &'a str,
    title: &'a str,
    selected: &'a str,
    rgb: &'a str,
    hex: &'a str,
    lab: &'a str,
    cmyk: &'a str,
    hsl: &'a str,
    hsb: &'a str,
}

impl<'a> From<&'a Swatch> for SwatchRecord<'a> {
    fn from(swatch: &'a Swatch) -> SwatchRecord<'a> {
        let color = move |rep: Representation| swatch.colors.get(rep).color.as_str();
        SwatchRecord {
            id: swatch.id.as_str(),
            title: swatch.title.as_ref().map_or("", |t| t.as_str()),
            selected: swatch.selected.name.name(),
            rgb: color(Representation::Rgb),
            hex: color(Representation::Hex),
            lab: color(Representation::Lab),
            cmyk: color(Representation::Cmyk),
            hsl: color(Representation::Hsl),
            hsb: color(Representation::Hsb),
        }
    }
}

/// The swatches saved during one session, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwatchList {
    swatches: Vec<Swatch>,
    #[serde(default)]
    next_seq: u64,
}

impl SwatchList {
    /// An empty list.
    pub fn new() -> SwatchList {
        SwatchList::default()
    }

    /// Makes an id from the current time and a per-list counter, skipping any that are taken.
    fn next_id(&mut self) -> SwatchId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        loop {
            let id = SwatchId(
                format!("SWATCH-{}-{}", to_base36(millis), to_base36(u128::from(self.next_seq)))
                    .to_uppercase(),
            );
            self.next_seq += 1;
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Saves a copy of `snapshot` with `selected` as its displayed notation, and returns the new
    /// swatch. A blank title is stored as no title.
    pub fn add(
        &mut self,
        title: &str,
        selected: Representation,
        snapshot: &ColorSnapshot,
    ) -> &Swatch {
        let id = self.next_id();
        let title = title.trim();
        let swatch = Swatch {
            id,
            title: if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            },
            selected: snapshot.get(selected).clone(),
            colors: snapshot.clone(),
        };
        self.swatches.push(swatch);
        &self.swatches[self.swatches.len() - 1]
    }

    /// Removes and returns the swatch with this id.
    /// # Errors
    /// Returns `PickerError::SwatchNotFound` if there is none.
    pub fn remove(&mut self, id: &SwatchId) -> Result<Swatch> {
        match self.swatches.iter().position(|s| &s.id == id) {
            Some(idx) => Ok(self.swatches.remove(idx)),
            None => Err(PickerError::SwatchNotFound(id.clone())),
        }
    }

    /// The swatch with this id, if any.
    pub fn get(&self, id: &SwatchId) -> Option<&Swatch> {
        self.swatches.iter().find(|s| &s.id == id)
    }

    /// The swatches, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Swatch> {
        self.swatches.iter()
    }

    /// How many swatches there are.
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Whether there are no swatches.
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Writes the list as CSV with a header row: id, title, the selected notation's tag, then one
    /// column per notation.
    /// # Errors
    /// Returns `PickerError::Export` if writing fails.
    pub fn to_csv_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for swatch in &self.swatches {
            wtr.serialize(SwatchRecord::from(swatch))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Like [`to_csv_writer`](#method.to_csv_writer), into a string.
    /// # Errors
    /// Returns `PickerError::Export` if serialization fails.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = vec![];
        self.to_csv_writer(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// The whole list as JSON, ids and counters included.
    /// # Errors
    /// Returns `PickerError::Config` if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads back a list written by [`to_json_string`](#method.to_json_string).
    /// # Errors
    /// Returns `PickerError::Config` on malformed JSON.
    pub fn from_json_str(json: &str) -> Result<SwatchList> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a SwatchList {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> std::slice::Iter<'a, Swatch> {
        self.swatches.iter()
    }
}
