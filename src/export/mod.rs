//! Export module for writing stories to various formats.
//!
//! Provides the `Exporter` trait and format-specific implementations.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! [`export_as_html`] and [`export_as_json`] render a story and hand the
//! result to a [`SaveTarget`] under the name `<title>.<ext>`.
//!
//! # Example
//!
//! ```
//! use storyweave::export::{Exporter, JsonExporter};
//! use storyweave::Story;
//!
//! let story = Story::new("Cave");
//! let mut out = Vec::new();
//! JsonExporter::new().export(&story, &mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("\"title\": \"Cave\""));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};

use tracing::info;

use crate::error::Result;
use crate::format::Format;
use crate::model::Story;
use crate::save::SaveTarget;

mod backup;
mod playable;

pub use crate::escape::escape_html;
pub use backup::{JsonConfig, JsonExporter};
pub use playable::{HtmlConfig, HtmlExporter, render_playable_document};

/// Trait for exporting stories to specific formats.
pub trait Exporter {
    /// The format this exporter writes.
    fn format(&self) -> Format;

    /// Export the story to the provided writer.
    fn export<W: Write>(&self, story: &Story, writer: &mut W) -> io::Result<()>;

    /// File name the export is saved under: `<title>.<ext>`.
    fn file_name(&self, story: &Story) -> String {
        format!("{}.{}", story.title, self.format().extension())
    }

    /// Export the story and save it through `target`, returning the file name used.
    fn save_to<T: SaveTarget + ?Sized>(&self, story: &Story, target: &mut T) -> Result<String> {
        let mut content = Vec::new();
        self.export(story, &mut content)?;

        let name = self.file_name(story);
        target.save(&name, &content)?;
        info!(file = %name, bytes = content.len(), "saved export");
        Ok(name)
    }
}

/// Save the story as a playable document named `<title>.html`.
pub fn export_as_html<T: SaveTarget + ?Sized>(story: &Story, target: &mut T) -> Result<String> {
    HtmlExporter::new().save_to(story, target)
}

/// Save the story as a JSON backup named `<title>.json`.
pub fn export_as_json<T: SaveTarget + ?Sized>(story: &Story, target: &mut T) -> Result<String> {
    JsonExporter::new().save_to(story, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::MemoryTarget;

    #[test]
    fn test_export_as_html_file_name() {
        let mut target = MemoryTarget::new();
        let name = export_as_html(&Story::new("Cave"), &mut target).unwrap();
        assert_eq!(name, "Cave.html");
        assert!(target.get("Cave.html").unwrap().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_export_as_json_file_name() {
        let mut target = MemoryTarget::new();
        let name = export_as_json(&Story::new("Cave"), &mut target).unwrap();
        assert_eq!(name, "Cave.json");
        assert_eq!(target.files().len(), 1);
    }
}
