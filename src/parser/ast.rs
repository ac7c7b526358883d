/// A parsed variable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub name: String,
    pub operator: Operator,
}

impl Expansion {
    pub fn new(name: String, operator: Operator) -> Self {
        Self { name, operator }
    }

    pub fn plain(name: String) -> Self {
        Self::new(name, Operator::Plain)
    }
}

/// The modifier following a variable name inside `${...}`.
///
/// Variants carrying a `String` hold the unexpanded word after the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    /// `$NAME`, `${NAME}`
    Plain,
    /// `${NAME-word}`
    IfUnset(String),
    /// `${NAME:-word}`
    IfUnsetOrNull(String),
    /// `${NAME+word}`
    IfSet(String),
    /// `${NAME:+word}`
    IfSetAndNotNull(String),
    /// `${NAME=word}`
    AssignIfUnset(String),
    /// `${NAME:=word}`
    AssignIfUnsetOrNull(String),
    /// `${NAME?word}`
    ErrorIfUnset(String),
    /// `${NAME:?word}`
    ErrorIfUnsetOrNull(String),
    /// `${NAME:offset}`, `${NAME:offset:length}`
    Substring(Slice),
}

impl Operator {
    /// Builds the word operator written as `symbol`, preceded by a colon or not.
    pub fn from_symbol(symbol: char, colon: bool, word: String) -> Option<Self> {
        let operator = match (symbol, colon) {
            ('-', false) => Self::IfUnset(word),
            ('-', true) => Self::IfUnsetOrNull(word),
            ('+', false) => Self::IfSet(word),
            ('+', true) => Self::IfSetAndNotNull(word),
            ('=', false) => Self::AssignIfUnset(word),
            ('=', true) => Self::AssignIfUnsetOrNull(word),
            ('?', false) => Self::ErrorIfUnset(word),
            ('?', true) => Self::ErrorIfUnsetOrNull(word),
            _ => return None,
        };
        Some(operator)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::IfUnset(_) => "-",
            Self::IfUnsetOrNull(_) => ":-",
            Self::IfSet(_) => "+",
            Self::IfSetAndNotNull(_) => ":+",
            Self::AssignIfUnset(_) => "=",
            Self::AssignIfUnsetOrNull(_) => ":=",
            Self::ErrorIfUnset(_) => "?",
            Self::ErrorIfUnsetOrNull(_) => ":?",
            Self::Substring(_) => ":",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub offset: RawToken,
    pub length: Option<RawToken>,
}

impl Slice {
    pub fn new(offset: RawToken, length: Option<RawToken>) -> Self {
        Self { offset, length }
    }
}

/// Offset or length text, kept verbatim until evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken(String);

impl RawToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
