//! HTML parsing into an arena DOM.
//!
//! Story exports are HTML documents with custom elements (`tw-storydata`,
//! `tw-passagedata`). They are parsed with html5ever, which copes with the
//! unclosed tags and stray markup hand-edited exports tend to contain.
//!
//! # Example
//!
//! ```
//! use storyweave::dom::parse_document;
//!
//! let dom = parse_document("<tw-storydata name='Cave'></tw-storydata>");
//! let story = dom.find_by_tag("tw-storydata").unwrap();
//! assert_eq!(dom.get_attr(story, "name"), Some("Cave"));
//! ```

mod arena;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute};

use html5ever::driver::ParseOpts;
use html5ever::parse_document as html5ever_parse;
use html5ever::tendril::TendrilSink;

use tree_sink::ArenaSink;

/// Parse an HTML document into an [`ArenaDom`].
///
/// Never fails: malformed markup is recovered the way a browser would.
pub fn parse_document(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    html5ever_parse(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse HTML bytes, detecting the text encoding first.
pub fn parse_document_bytes(html: &[u8]) -> ArenaDom {
    let text = crate::util::decode_text(html);
    parse_document(&text)
}
