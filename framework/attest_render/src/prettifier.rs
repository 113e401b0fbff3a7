use std::fmt;

/// Renders values for diagnostic messages.
///
/// A `Prettifier` turns an arbitrary `Debug` value into the string that
/// appears in a failure message. The default prettifier renders values
/// verbatim; `truncating` caps the rendering at a character budget so a
/// ten-thousand-element vector does not swamp the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Prettifier {
    /// Maximum characters in a rendering, `None` for unlimited.
    max_chars: Option<usize>,
}

impl Prettifier {
    /// Prettifier that renders values without truncation.
    pub fn new() -> Self {
        Prettifier::default()
    }

    /// Prettifier that truncates renderings longer than `max_chars`
    /// characters, appending `...`.
    pub fn truncating(max_chars: usize) -> Self {
        Prettifier {
            max_chars: Some(max_chars),
        }
    }

    /// Render a value for inclusion in a message.
    pub fn apply(&self, value: &dyn fmt::Debug) -> String {
        self.clip(format!("{value:?}"))
    }

    /// Apply this prettifier's presentation policy to an already
    /// rendered value.
    ///
    /// For values that cannot be captured by ownership (unsized
    /// operands rendered at apply time); truncation still happens at
    /// read time.
    pub fn clip(&self, rendered: String) -> String {
        match self.max_chars {
            Some(limit) => truncate(rendered, limit),
            None => rendered,
        }
    }
}

/// Truncate to at most `limit` characters, appending `...`.
///
/// Cuts on a char boundary, never mid-codepoint.
fn truncate(rendered: String, limit: usize) -> String {
    let byte_end = rendered
        .char_indices()
        .nth(limit)
        .map_or(rendered.len(), |(idx, _)| idx);
    if byte_end == rendered.len() {
        return rendered;
    }
    let mut out = rendered;
    out.truncate(byte_end);
    out.push_str("...");
    out
}
