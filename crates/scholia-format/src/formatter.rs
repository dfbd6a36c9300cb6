//! Top-level formatting: the link-token pass and route resolution.

use std::sync::LazyLock;

use regex::Regex;

use crate::lines;
use crate::segment::Segment;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(LINK|LINK_EXTERNAL):([^\]]+)\]").expect("valid regex"));

/// Format one message's raw content into display segments.
///
/// Link tokens are matched first, non-overlapping and left-to-right; the
/// text around them goes through line classification and the inline scan.
/// Total over any input — malformed or partial tokens degrade to plain
/// text.
pub fn format(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in LINK.captures_iter(content) {
        let Some(token) = caps.get(0) else { continue };
        if token.start() > last {
            lines::classify(&content[last..token.start()], &mut segments);
        }

        let payload = &caps[2];
        if &caps[1] == "LINK_EXTERNAL" {
            segments.push(Segment::ExternalLink {
                url: payload.to_string(),
            });
        } else {
            segments.push(Segment::InternalLink {
                path: resolve_route(payload),
            });
        }
        last = token.end();
    }

    if last < content.len() {
        lines::classify(&content[last..], &mut segments);
    }

    segments
}

/// Resolve a `[LINK:…]` payload to an in-app route.
///
/// Backend link payloads are phrased against the web app's `/app` mount
/// point; the leading `/app` is stripped so `/app/gpa` resolves to `/gpa`.
/// An empty result defaults to `/`.
pub fn resolve_route(raw: &str) -> String {
    if raw.is_empty() {
        return "/".to_string();
    }
    match raw.strip_prefix("/app/") {
        Some("") => "/".to_string(),
        Some(rest) => format!("/{rest}"),
        None => raw.to_string(),
    }
}
