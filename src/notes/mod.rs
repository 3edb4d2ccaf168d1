//! Session notes written as markdown
//!
//! Each `## Session N <title>` heading opens a note whose body runs until the
//! next such heading. The line right after a heading always belongs to the
//! body, even when it is itself a session heading. Bodies are tidied for display: bullets become `• `,
//! blank lines are dropped, images and sub-headings are kept as written.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s*Session\s+(\d+)(.*)$").expect("valid heading regex"));
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*]\s+").expect("valid bullet regex"));
static VERBATIM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(!\[|#+\s)").expect("valid verbatim regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SessionNote {
    pub(crate) number: u32,
    pub(crate) title: String,
    pub(crate) content: String,
}

/// Parse markdown into notes, newest session first
pub(crate) fn parse_notes(markdown: &str) -> Vec<SessionNote> {
    let src = markdown.replace('\u{FEFF}', "").replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = src.split('\n').collect();

    let mut notes = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let Some((number, rest)) = heading(lines[i]) else {
            i += 1;
            continue;
        };
        // A heading must be followed by a newline to open a note
        if i + 1 >= lines.len() {
            break;
        }
        let body_start = i + 1;
        let mut body_end = body_start + 1;
        while body_end < lines.len() && heading(lines[body_end]).is_none() {
            body_end += 1;
        }
        if let Some(number) = number {
            notes.push(SessionNote {
                number,
                title: clean_title(rest),
                content: clean_body(&lines[body_start..body_end]),
            });
        }
        i = body_end;
    }

    notes.sort_by(|a, b| b.number.cmp(&a.number));
    notes
}

/// `(number, rest of line)` for a heading line; the number is `None` when it overflows
fn heading(line: &str) -> Option<(Option<u32>, &str)> {
    let caps = HEADING.captures(line)?;
    let number = caps.get(1)?.as_str().parse().ok();
    let rest = caps.get(2).map_or("", |m| m.as_str());
    Some((number, rest))
}

fn clean_title(rest: &str) -> String {
    rest.trim()
        .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '–' | '—' | '-'))
        .trim()
        .to_string()
}

fn clean_body(lines: &[&str]) -> String {
    let joined = lines.join("\n");
    joined
        .trim()
        .split('\n')
        .map(|line| {
            if VERBATIM.is_match(line) {
                line.to_string()
            } else if BULLET.is_match(line) {
                format!("• {}", BULLET.replace(line, ""))
            } else {
                line.to_string()
            }
        })
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
