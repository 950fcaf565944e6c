//! # storyweave
//!
//! Converters for interactive fiction stories built in Twine.
//!
//! ## Features
//!
//! - Import Twine 2 published-story HTML
//! - Export a standalone playable HTML page with built-in link navigation
//! - Back up and restore stories as JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use storyweave::Story;
//! use storyweave::export::export_as_html;
//! use storyweave::save::DirectoryTarget;
//!
//! let story = Story::open("my_story.html")?;
//! export_as_html(&story, &mut DirectoryTarget::new("out"))?;
//! # Ok::<(), storyweave::Error>(())
//! ```
//!
//! ## Working with Stories
//!
//! The [`Story`] struct is the central data type. It maps passage names to
//! [`Passage`]s and names the passage shown first:
//!
//! ```
//! use storyweave::{Passage, Story};
//! use storyweave::import::parse_json;
//! use storyweave::export::{Exporter, JsonExporter};
//!
//! let mut story = Story::new("Cave").with_start_passage("Entrance");
//! story.add_passage(Passage::new("Entrance", "It is dark. [[Go in|Hall]]"));
//! story.add_passage(Passage::new("Hall", "A long hall."));
//!
//! let mut backup = Vec::new();
//! JsonExporter::new().export(&story, &mut backup).unwrap();
//!
//! let restored = parse_json(&String::from_utf8(backup).unwrap()).unwrap();
//! assert_eq!(restored, story);
//! ```

pub mod dom;
pub mod error;
pub mod export;
pub mod format;
pub mod import;
pub mod model;
pub mod player;
pub mod save;

mod escape;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use escape::escape_html;
pub use format::Format;
pub use import::{parse_json, parse_twine};
pub use model::{Link, Passage, Story};
