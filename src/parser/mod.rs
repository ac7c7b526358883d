pub mod ast;

use std::{iter::Peekable, str::CharIndices};

use thiserror::Error;

use crate::scanner::{
    err::SyntaxError, is_identifier_char, is_identifier_start, segment::RawReference,
};

use self::ast::*;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body of a `${...}` reference is malformed.
    #[error("bad substitution")]
    BadSubstitution(String),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a scanned reference.
pub fn parse_reference(reference: &RawReference) -> ParseResult<Expansion> {
    if reference.braced {
        parse(reference.body())
    } else {
        Ok(Expansion::plain(reference.body().to_owned()))
    }
}

/// Parses the body of a `${...}` reference, i.e. the text between the braces.
pub fn parse(body: &str) -> ParseResult<Expansion> {
    Parser::new(body).parse()
}

#[inline(always)]
fn is_operator(ch: char) -> bool {
    matches!(ch, '-' | '=' | '+' | '?')
}

struct Parser<'a> {
    body: &'a str,
    symbols: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(body: &'a str) -> Self {
        Self {
            body,
            symbols: body.char_indices().peekable(),
        }
    }

    fn parse(mut self) -> ParseResult<Expansion> {
        let name = self.parse_identifier()?;
        let operator = match self.symbols.next() {
            None => Operator::Plain,
            Some((_, ':')) => self.parse_colon_operator()?,
            Some((_, c)) => {
                let word = self.rest().to_owned();
                Operator::from_symbol(c, false, word).ok_or_else(|| self.bad_substitution())?
            }
        };
        Ok(Expansion::new(name, operator))
    }

    fn parse_identifier(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(c) if is_identifier_start(c) => (),
            _ => return Err(self.bad_substitution()),
        }
        let mut identifier = String::new();
        while let Some(c) = self.peek() {
            if !is_identifier_char(c) {
                break;
            }
            identifier.push(c);
            self.symbols.next();
        }
        Ok(identifier)
    }

    fn parse_colon_operator(&mut self) -> ParseResult<Operator> {
        match self.peek() {
            None => Err(self.bad_substitution()),
            Some(c) if is_operator(c) => {
                self.symbols.next();
                let word = self.rest().to_owned();
                Operator::from_symbol(c, true, word).ok_or_else(|| self.bad_substitution())
            }
            Some(_) => Ok(self.parse_substring()),
        }
    }

    fn parse_substring(&mut self) -> Operator {
        let slice = match self.rest().split_once(':') {
            Some((offset, length)) => Slice::new(RawToken::new(offset), Some(RawToken::new(length))),
            None => Slice::new(RawToken::new(self.rest()), None),
        };
        Operator::Substring(slice)
    }

    fn peek(&mut self) -> Option<char> {
        self.symbols.peek().map(|&(_, c)| c)
    }

    /// Everything from the current symbol to the end of the body.
    fn rest(&mut self) -> &'a str {
        match self.symbols.peek() {
            Some(&(i, _)) => &self.body[i..],
            None => "",
        }
    }

    fn bad_substitution(&self) -> ParseError {
        ParseError::BadSubstitution(self.body.to_owned())
    }
}
