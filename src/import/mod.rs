//! Format importers for reading stories.
//!
//! - [`parse_twine`]: Twine 2 published-story HTML
//! - [`parse_json`]: JSON backups written by [`crate::export::JsonExporter`]
//!
//! Both return `None` when the input is not usable; the `try_` variants
//! return the [`Error`] explaining why.

mod backup;
mod twine;

pub use backup::{parse_json, try_parse_json};
pub use twine::{DEFAULT_TITLE, grid_position, parse_twine, story_from_dom, try_parse_twine};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::dom::parse_document_bytes;
use crate::error::{Error, Result};
use crate::format::Format;
use crate::model::Story;

impl Story {
    /// Read a story from a file, choosing the importer by extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;

        debug!(path = %path.display(), ?format, "opening story");
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes, format)
    }

    /// Read a story from raw bytes in the given format.
    pub fn from_bytes(bytes: &[u8], format: Format) -> Result<Self> {
        match format {
            Format::Twine => story_from_dom(&parse_document_bytes(bytes)),
            Format::Json => try_parse_json(&String::from_utf8_lossy(bytes)),
            Format::Html => Err(Error::UnsupportedFormat(
                "playable documents cannot be imported".into(),
            )),
        }
    }

    /// Read a story from text in the given format.
    pub fn from_str_with_format(text: &str, format: Format) -> Result<Self> {
        match format {
            Format::Twine => try_parse_twine(text),
            _ => Self::from_bytes(text.as_bytes(), format),
        }
    }
}
