//! scholia-format
//!
//! Rich-text formatting of chat messages. Converts one message's raw
//! content into an ordered sequence of typed display segments: navigation
//! link tokens, bullet/numbered/plain lines, and inline bold/italic/code
//! spans.
//!
//! # Grammar
//!
//! Two independent token layers, applied in order:
//!
//! 1. **Link tokens** over the whole string: `[LINK:<payload>]` resolves to
//!    an in-app route (a leading `/app` is stripped), and
//!    `[LINK_EXTERNAL:<payload>]` is a verbatim URL. Anything that does not
//!    match the exact grammar stays text.
//! 2. **Line structure** over the remaining text, split on `\n`: bullet
//!    lines (`• `, `- `, `* `), numbered lines (`1. `), and plain lines.
//!    The payload of each line gets a single left-to-right inline scan for
//!    triple-backtick blocks, `` `code` ``, `**bold**`, and `*italic*`;
//!    a marker with no closing partner is kept as literal text.
//!
//! [`format`] is total: any input, however malformed, yields a best-effort
//! plain-text rendering. The scan is single-pass and non-recursive — the
//! text inside a styled span is not parsed further.

mod formatter;
mod inline;
mod lines;
pub mod segment;

pub use formatter::{format, resolve_route};
pub use segment::{Segment, Span};
