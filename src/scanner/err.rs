use thiserror::Error;

use super::pos::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `${` with no closing `}`.
    UnterminatedExpansion,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedExpansion => f.write_str("bad substitution"),
        }
    }
}

/// A malformed reference found while scanning.
///
/// The message matches the one shells print for the same input; the position
/// of the offending sigil is available through [`SyntaxError::position`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    kind: ErrorKind,
    position: Position,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind.clone()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}
