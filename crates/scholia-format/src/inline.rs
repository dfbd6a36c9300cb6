//! Single left-to-right inline scan over a line's text payload.
//!
//! First match wins, in the order code-block, inline code, bold, italic.
//! A `` ` `` or `*` that does not open a valid span is emitted as a literal
//! character and the scan advances past it, so the function terminates on
//! any input.

use std::sync::LazyLock;

use regex::Regex;

use crate::segment::Span;

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```([^`]+)```").expect("valid regex"));
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^`([^`]+)`").expect("valid regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*([^*]+)\*\*").expect("valid regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*([^*]+)\*").expect("valid regex"));

/// Scan `text` into inline spans. Adjacent literal characters coalesce into
/// a single `Text` span.
pub(crate) fn scan(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((span, len)) = match_span(rest) {
            flush(&mut literal, &mut spans);
            spans.push(span);
            rest = &rest[len..];
            continue;
        }

        if rest.starts_with('`') || rest.starts_with('*') {
            // Marker with no closing partner: keep it as literal text.
            literal.push_str(&rest[..1]);
            rest = &rest[1..];
        } else {
            let next = rest.find(['`', '*']).unwrap_or(rest.len());
            literal.push_str(&rest[..next]);
            rest = &rest[next..];
        }
    }

    flush(&mut literal, &mut spans);
    spans
}

/// Try each span pattern at the start of `rest`; first match wins. The
/// italic pattern cannot fire on `**` because its inner class excludes `*`.
fn match_span(rest: &str) -> Option<(Span, usize)> {
    let capture = |re: &Regex, make: fn(String) -> Span| {
        re.captures(rest)
            .map(|c| (make(c[1].to_string()), c[0].len()))
    };

    capture(&CODE_BLOCK, Span::CodeBlock)
        .or_else(|| capture(&CODE, Span::Code))
        .or_else(|| capture(&BOLD, Span::Bold))
        .or_else(|| capture(&ITALIC, Span::Italic))
}

fn flush(literal: &mut String, spans: &mut Vec<Span>) {
    if !literal.is_empty() {
        spans.push(Span::Text(std::mem::take(literal)));
    }
}
