use super::pos::Position;

/// A piece of scanned input, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Reference(RawReference),
}

impl Segment {
    /// The exact input text this segment was scanned from.
    pub fn source(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Reference(reference) => &reference.span,
        }
    }
}

/// An unparsed `$NAME` or `${...}` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReference {
    /// Source text, sigil and braces included.
    pub span: String,
    pub braced: bool,
    /// Position of the sigil.
    pub position: Position,
}

impl RawReference {
    pub fn new(span: String, braced: bool, position: Position) -> Self {
        Self {
            span,
            braced,
            position,
        }
    }

    /// The reference without its sigil and braces: `FOO` for `$FOO`,
    /// `FOO:-x` for `${FOO:-x}`.
    pub fn body(&self) -> &str {
        let start = self.span.chars().next().map_or(0, char::len_utf8);
        let end = if self.braced {
            self.span.len().saturating_sub(1)
        } else {
            self.span.len()
        };
        let start = if self.braced { start + 1 } else { start };
        self.span.get(start..end).unwrap_or_default()
    }
}
