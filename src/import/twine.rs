//! Twine 2 story export importer.
//!
//! A published Twine story is an HTML document holding one `tw-storydata`
//! element with a `tw-passagedata` child per passage:
//!
//! ```html
//! <tw-storydata name="Cave" startnode="1">
//!   <tw-passagedata pid="1" name="Entrance" position="100,100">
//!     It is dark. [[Go in|Hall]]
//!   </tw-passagedata>
//! </tw-storydata>
//! ```
//!
//! Passage text is taken verbatim; link markup is left for the player.

use tracing::{debug, warn};

use crate::dom::{ArenaDom, ArenaNodeId, parse_document};
use crate::error::{Error, Result};
use crate::model::{DEFAULT_START_PASSAGE, Passage, Story};
use crate::util::parse_leading_int;

const STORY_TAG: &str = "tw-storydata";
const PASSAGE_TAG: &str = "tw-passagedata";

/// Title used when the export does not name the story.
pub const DEFAULT_TITLE: &str = "Imported";

/// Passages without a usable position are laid out on a grid this many columns wide.
const GRID_COLUMNS: usize = 4;
const GRID_ORIGIN: f64 = 100.0;
const GRID_STEP_X: f64 = 200.0;
const GRID_STEP_Y: f64 = 150.0;

/// Parse a Twine export, returning `None` if it is not one.
///
/// # Example
///
/// ```
/// use storyweave::import::parse_twine;
///
/// let html = r#"<tw-storydata name="Cave" startnode="1">
///   <tw-passagedata pid="1" name="Entrance">Hello</tw-passagedata>
/// </tw-storydata>"#;
///
/// let story = parse_twine(html).unwrap();
/// assert_eq!(story.title, "Cave");
/// assert_eq!(story.start_passage, "Entrance");
///
/// assert!(parse_twine("<p>just a page</p>").is_none());
/// ```
pub fn parse_twine(html: &str) -> Option<Story> {
    match try_parse_twine(html) {
        Ok(story) => Some(story),
        Err(e) => {
            warn!("twine import rejected: {e}");
            None
        }
    }
}

/// Parse a Twine export, reporting why it was rejected.
pub fn try_parse_twine(html: &str) -> Result<Story> {
    story_from_dom(&parse_document(html))
}

/// Build a story from an already parsed document.
pub fn story_from_dom(dom: &ArenaDom) -> Result<Story> {
    let story_el = dom
        .find_by_tag(STORY_TAG)
        .ok_or_else(|| Error::FormatNotRecognized(format!("no <{STORY_TAG}> element")))?;

    let title = match dom.get_attr(story_el, "name") {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_TITLE,
    };
    let start_node = dom.get_attr(story_el, "startnode");

    let mut story = Story::new(title).with_start_passage(DEFAULT_START_PASSAGE);

    for (index, el) in dom.elements_by_tag(PASSAGE_TAG).into_iter().enumerate() {
        let Some(passage) = read_passage(dom, el, index) else {
            warn!(index, "skipping passage without a name");
            continue;
        };

        if dom.get_attr(el, "pid") == start_node {
            debug!(name = %passage.name, "start passage");
            story.start_passage = passage.name.clone();
        }

        story.add_passage(passage);
    }

    debug!(
        title = %story.title,
        passages = story.passage_count(),
        "parsed twine story"
    );
    Ok(story)
}

fn read_passage(dom: &ArenaDom, el: ArenaNodeId, index: usize) -> Option<Passage> {
    let name = dom.get_attr(el, "name")?;
    let (x, y) = position(dom.get_attr(el, "position"), index);

    Some(Passage::new(name, dom.text_content(el)).at(x, y))
}

/// Resolve a `position="x,y"` attribute.
///
/// Each coordinate that is missing or unparsable falls back to its own grid
/// value, so a half-valid attribute keeps the half that parsed.
fn position(attr: Option<&str>, index: usize) -> (f64, f64) {
    let (fallback_x, fallback_y) = grid_position(index);
    let mut parts = attr.map(|a| a.split(',')).into_iter().flatten();

    let mut coordinate = |fallback: f64| {
        parts
            .next()
            .and_then(parse_leading_int)
            .map_or(fallback, |v| v as f64)
    };

    let x = coordinate(fallback_x);
    let y = coordinate(fallback_y);
    (x, y)
}

/// Default layout position of the `index`th passage.
pub fn grid_position(index: usize) -> (f64, f64) {
    let column_offset = index as f64 * GRID_STEP_X;
    let row = (index / GRID_COLUMNS) as f64;
    (GRID_ORIGIN + column_offset, GRID_ORIGIN + row * GRID_STEP_Y)
}
