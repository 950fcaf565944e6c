//! Core data model for story graphs.
//!
//! This module contains:
//! - [`Story`] and [`Passage`], the format-agnostic story representation
//! - Link markup parsing ([`Link`], [`find_links`])

mod links;
mod story;

pub use links::{Link, LinkSpan, find_links, replace_links};
pub use story::{DEFAULT_START_PASSAGE, Passage, Story};
