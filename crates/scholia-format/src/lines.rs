//! Line-structure classification: bullets, numbered items, plain lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::inline;
use crate::segment::Segment;

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s(.+)$").expect("valid regex"));
static CLOSING_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Let me know|Please let me know).*clarification.*questions")
        .expect("valid regex")
});

/// Classify every line of `chunk` and append the resulting segments.
/// Whitespace-only lines produce nothing.
pub(crate) fn classify(chunk: &str, segments: &mut Vec<Segment>) {
    for line in chunk.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(text) = bullet_text(trimmed) {
            segments.push(Segment::Bullet {
                spans: inline::scan(text),
            });
        } else if let Some((index, text)) = numbered(trimmed) {
            segments.push(Segment::Numbered {
                index,
                spans: inline::scan(text),
            });
        } else {
            // Plain lines keep their original indentation.
            segments.push(Segment::Line {
                spans: inline::scan(line),
                spaced: CLOSING_PHRASE.is_match(trimmed),
            });
        }
    }
}

/// The payload of a bullet line, or `None` if `line` is not one.
fn bullet_text(line: &str) -> Option<&str> {
    line.strip_prefix("• ")
        .or_else(|| line.strip_prefix("- "))
        .or_else(|| line.strip_prefix("* "))
}

/// The index and payload of a numbered line, or `None`. An index too large
/// for `u64` degrades to a plain line.
fn numbered(line: &str) -> Option<(u64, &str)> {
    let caps = NUMBERED.captures(line)?;
    let index = caps.get(1)?.as_str().parse().ok()?;
    let text = caps.get(2)?.as_str();
    Some((index, text))
}
