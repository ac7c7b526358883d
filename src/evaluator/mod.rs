use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    env::EnvProvider,
    expander::Options,
    parser::{
        ast::{Expansion, Operator, RawToken, Slice},
        parse_reference, ParseError,
    },
    scanner::{is_identifier_char, segment::Segment, Scanner},
    ExpandResult,
};


#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("{name}: {token}: syntax error: operand expected (error token is {})", quote_token(.token))]
    Operand { name: String, token: String },
    #[error("{0}: substring expression < 0")]
    NegativeLength(String),
    #[error("{0}: unbound variable")]
    Unbound(String),
    #[error("{name}: {message}")]
    Requested { name: String, message: String },
}

/// Offset or length operand, once its raw text has been judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Int(i64),
    Empty,
    /// An identifier, e.g. `${FOO:bar}`.
    Word,
}

impl Operand {
    /// Classifies a raw token, returning the trimmed token when it is garbage.
    fn classify(token: &RawToken) -> Result<Self, &str> {
        let token = token.as_str().trim();
        if token.is_empty() {
            return Ok(Self::Empty);
        }
        if let Ok(n) = token.parse::<i64>() {
            return Ok(Self::Int(n));
        }
        let mut chars = token.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() && chars.all(is_identifier_char) => Ok(Self::Word),
            _ => Err(token),
        }
    }
}

pub(crate) struct Evaluator<'a, E>
where
    E: EnvProvider + ?Sized,
{
    env: &'a mut E,
    options: &'a Options,
}

impl<'a, E> Evaluator<'a, E>
where
    E: EnvProvider + ?Sized,
{
    pub fn new(env: &'a mut E, options: &'a Options) -> Self {
        Self { env, options }
    }

    /// Expands every reference in `input`, failing on the first error.
    pub fn evaluate(&mut self, input: &str) -> ExpandResult<String> {
        let mut result = String::with_capacity(input.len());
        for segment in Scanner::new(input.chars(), self.options.var_symbol) {
            match segment.map_err(ParseError::from)? {
                Segment::Literal(text) => result.push_str(&text),
                Segment::Reference(reference) => {
                    let expansion = parse_reference(&reference)?;
                    result.push_str(&self.evaluate_expansion(expansion)?);
                }
            }
        }
        Ok(result)
    }

    fn evaluate_expansion(&mut self, expr: Expansion) -> ExpandResult<String> {
        let Expansion { name, operator } = expr;
        let value = self.env.get_var(&name);
        trace!(%name, operator = operator.symbol(), set = value.is_some(), "evaluating expansion");
        let result = match operator {
            Operator::Plain => match value {
                Some(v) => v,
                None => self.unset(&name)?,
            },
            Operator::IfUnset(word) => match value {
                Some(v) => v,
                None => self.evaluate(&word)?,
            },
            Operator::IfUnsetOrNull(word) => match value {
                Some(v) if !v.is_empty() => v,
                _ => self.evaluate(&word)?,
            },
            Operator::IfSet(word) => match value {
                Some(_) => self.evaluate(&word)?,
                None => String::new(),
            },
            Operator::IfSetAndNotNull(word) => match value {
                Some(v) if !v.is_empty() => self.evaluate(&word)?,
                _ => String::new(),
            },
            Operator::AssignIfUnset(word) => match value {
                Some(v) => v,
                None => self.assign_op(&name, &word)?,
            },
            Operator::AssignIfUnsetOrNull(word) => match value {
                Some(v) if !v.is_empty() => v,
                _ => self.assign_op(&name, &word)?,
            },
            Operator::ErrorIfUnset(word) => match value {
                Some(v) => v,
                None => self.error_op(&name, &word, "parameter not set")?,
            },
            Operator::ErrorIfUnsetOrNull(word) => match value {
                Some(v) if !v.is_empty() => v,
                _ => self.error_op(&name, &word, "parameter null or not set")?,
            },
            Operator::Substring(slice) => {
                let value = match value {
                    Some(v) => v,
                    None => self.unset(&name)?,
                };
                substring(&name, &value, &slice)?
            }
        };
        Ok(result)
    }

    fn unset(&self, name: &str) -> ExpandResult<String> {
        if self.options.nounset {
            Err(EvaluationError::Unbound(name.to_owned()).into())
        } else {
            Ok(String::new())
        }
    }

    fn assign_op(&mut self, name: &str, word: &str) -> ExpandResult<String> {
        let value = self.evaluate(word)?;
        debug!(%name, "assigning default value");
        self.env.set_var(name, &value);
        Ok(value)
    }

    fn error_op(&mut self, name: &str, word: &str, default: &str) -> ExpandResult<String> {
        let message = self.evaluate(word)?;
        if let Some(recovered) = &self.options.recover_null {
            debug!(%name, "substituting recovery value for missing parameter");
            return Ok(recovered.clone());
        }
        let message = if message.is_empty() {
            default.to_owned()
        } else {
            message
        };
        Err(EvaluationError::Requested {
            name: name.to_owned(),
            message,
        }
        .into())
    }
}

/// Extracts `${name:offset:length}` from `value`, counting characters.
///
/// Operand errors are reported before anything depends on the value. An
/// identifier offset yields the value unchanged; an empty or identifier length
/// yields nothing. A negative offset counts back from the end of the value.
fn substring(name: &str, value: &str, slice: &Slice) -> Result<String, EvaluationError> {
    let offset = Operand::classify(&slice.offset).map_err(|token| operand_error(name, token))?;
    let length = match slice.length.as_ref().map(Operand::classify).transpose() {
        Err(token) => return Err(operand_error(name, token)),
        Ok(Some(Operand::Int(n))) if n < 0 => {
            let token = slice.length.as_ref().map_or("", |t| t.as_str().trim());
            return Err(EvaluationError::NegativeLength(token.to_owned()));
        }
        Ok(Some(Operand::Int(n))) => Some(clamp(n)),
        Ok(Some(Operand::Empty | Operand::Word)) => Some(0),
        Ok(None) => None,
    };
    let start = match offset {
        Operand::Word => return Ok(value.to_owned()),
        Operand::Empty => 0,
        Operand::Int(n) if n < 0 => value.chars().count().saturating_sub(clamp(n)),
        Operand::Int(n) => clamp(n),
    };
    Ok(value
        .chars()
        .skip(start)
        .take(length.unwrap_or(usize::MAX))
        .collect())
}

fn clamp(n: i64) -> usize {
    usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX)
}

fn operand_error(name: &str, token: &str) -> EvaluationError {
    EvaluationError::Operand {
        name: name.to_owned(),
        token: token.to_owned(),
    }
}

/// Quotes a token for diagnostics, in single quotes unless the token holds a
/// single quote and no double quote.
fn quote_token(token: &str) -> String {
    let quote = if token.contains('\'') && !token.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push(quote);
    for c in token.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}
