//! Map rendered HTML to session-grouped image URLs
//!
//! Elements are visited in document order while a single "current session"
//! accumulator tracks the most recent `Session {n}` text seen. A heading's
//! scope only ends at the next heading; leaving the section that contains it
//! does not reset the current session.

mod image;

use std::sync::LazyLock;

use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::core::{SessionImageMap, SessionRange};

use image::best_image_src;

static SESSION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSession\s+([0-9]+)\b").expect("valid session regex"));

/// Text inside these elements is left out of their ancestors' text, but
/// still counts when the element itself is checked
const NESTED_TEXT_EXCLUDED: &[&str] = &["script", "style", "template"];

/// Session number from the first `Session {n}` occurrence in `text`
///
/// Only the first occurrence is considered. A number too large for `u32`
/// yields `None`, leaving the current session unchanged.
pub(crate) fn session_number_from_text(text: &str) -> Option<u32> {
    let caps = SESSION_HEADING.captures(text)?;
    let digits = caps.get(1)?.as_str();
    match digits.parse() {
        Ok(n) => Some(n),
        Err(e) => {
            debug!(digits, error = %e, "session number out of range, ignoring heading");
            None
        }
    }
}

/// Concatenated, per-node trimmed text of an element's descendants
fn element_text(element: ElementRef<'_>) -> String {
    let root = element.id();
    let mut text = String::new();
    for node in element.descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };
        let ignored = node
            .ancestors()
            .take_while(|ancestor| ancestor.id() != root)
            .filter_map(ElementRef::wrap)
            .any(|el| NESTED_TEXT_EXCLUDED.contains(&el.value().name()));
        if !ignored {
            text.push_str(fragment.trim());
        }
    }
    text
}

/// Collect image URLs grouped by the session heading that precedes them
pub(crate) fn collect_images_by_session(html: &str, range: SessionRange) -> SessionImageMap {
    let document = Html::parse_document(html);
    let mut images = SessionImageMap::default();
    let mut current_session: Option<u32> = None;
    let mut skipped_unsessioned = 0usize;

    for element in document.root_element().descendants().filter_map(ElementRef::wrap) {
        let text = element_text(element);
        if !text.is_empty()
            && let Some(session) = session_number_from_text(&text)
        {
            current_session = Some(session);
        }

        if element.value().name() != "img" {
            continue;
        }
        let Some(src) = best_image_src(element) else {
            continue;
        };
        match current_session {
            Some(session) if range.contains(session) => images.push(session, src),
            Some(_) => {}
            None => skipped_unsessioned += 1,
        }
    }

    debug!(
        sessions = images.len(),
        images = images.total_images(),
        skipped_unsessioned,
        "collected images from rendered html"
    );
    images
}
