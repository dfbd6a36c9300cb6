use serde::{Deserialize, Serialize};

/// One block-level unit of formatted output.
///
/// Segments appear in content order. Line-shaped segments own the inline
/// spans produced from their text payload; link segments stand alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// An ordinary line of text. `spaced` is a presentation hint: closing
    /// phrases ("Let me know … questions") render with extra top margin.
    Line { spans: Vec<Span>, spaced: bool },
    /// A bullet list line, prefix stripped.
    Bullet { spans: Vec<Span> },
    /// A numbered list line, e.g. `3. text` with `index = 3`.
    Numbered { index: u64, spans: Vec<Span> },
    /// An in-app navigation link; `path` is already resolved.
    InternalLink { path: String },
    /// An external URL, used verbatim.
    ExternalLink { url: String },
}

/// One inline span inside a line. Span text is plain — markers inside a
/// styled span are not parsed further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    /// Single-backtick inline code.
    Code(String),
    /// Triple-backtick code, rendered block-style.
    CodeBlock(String),
}

impl Span {
    /// The textual content of the span, styling ignored.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(t) | Self::Bold(t) | Self::Italic(t) | Self::Code(t) | Self::CodeBlock(t) => {
                t
            }
        }
    }
}

impl Segment {
    /// The inline spans of a line-shaped segment; empty for links.
    pub fn spans(&self) -> &[Span] {
        match self {
            Self::Line { spans, .. } | Self::Bullet { spans } | Self::Numbered { spans, .. } => {
                spans
            }
            Self::InternalLink { .. } | Self::ExternalLink { .. } => &[],
        }
    }

    /// The textual content of the segment, styling ignored. Links yield
    /// their resolved path or URL.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Line { spans, .. } | Self::Bullet { spans } | Self::Numbered { spans, .. } => {
                spans.iter().map(Span::text).collect()
            }
            Self::InternalLink { path } => path.clone(),
            Self::ExternalLink { url } => url.clone(),
        }
    }
}
