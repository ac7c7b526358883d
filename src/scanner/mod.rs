use std::collections::VecDeque;

use self::{
    err::{ErrorKind, SyntaxError},
    pos::Position,
    segment::*,
};

pub mod err;
pub mod pos;
pub mod segment;
#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Literal,
    Sigil,
    SimpleExpansion,
    ComplexExpansion,
}

pub type ScannerResult = Result<Segment, SyntaxError>;

#[inline(always)]
pub(crate) fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[inline(always)]
pub(crate) fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Splits the input into literal text and variable references.
///
/// A sigil that does not start a reference is kept as literal text, so the
/// concatenated [`Segment::source`]s always reproduce the input. Unbraced
/// references only start a word: in `B$AR` the sigil is literal, while
/// `B${AR}` holds a reference.
pub fn scan(input: &str, sigil: char) -> Result<Vec<Segment>, SyntaxError> {
    Scanner::new(input.chars(), sigil).collect()
}

#[derive(Debug)]
pub struct Scanner<I>
where
    I: Iterator<Item = char>,
{
    input: I,
    sigil: char,
    done: bool,
    state: State,
    queue: VecDeque<Segment>,
    buf: String,
    cc: Option<char>,
    reconsume: bool,
    line: usize,
    column: usize,
    reference_pos: Position,
    /// The sigil follows an identifier character of literal text.
    glued: bool,
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator<Item = char>,
{
    type Item = ScannerResult;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(segment) = self.queue.pop_front() {
                return Some(Ok(segment));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.run() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

impl<I> Scanner<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(input: I, sigil: char) -> Self {
        Self {
            input,
            sigil,
            done: false,
            state: State::Literal,
            queue: VecDeque::with_capacity(4),
            buf: String::with_capacity(64),
            cc: None,
            reconsume: false,
            line: 1,
            column: 0,
            reference_pos: Position::new(0, 0),
            glued: false,
        }
    }

    #[allow(clippy::unit_arg)]
    fn run(&mut self) -> Result<(), SyntaxError> {
        match self.state {
            State::Literal => loop {
                match self.consume_the_next_character() {
                    None => {
                        self.flush_literal();
                        return Ok(self.finish());
                    }
                    Some(c) if c == self.sigil => {
                        self.reference_pos = self.cur_pos();
                        self.glued = self.buf.chars().last().is_some_and(is_identifier_char);
                        return Ok(self.switch_to(State::Sigil));
                    }
                    Some(c) => self.buffer(c),
                }
            },
            State::Sigil => match self.consume_the_next_character() {
                Some('{') => {
                    self.start_reference('{');
                    Ok(self.switch_to(State::ComplexExpansion))
                }
                Some(c) if is_identifier_start(c) && !self.glued => {
                    self.start_reference(c);
                    Ok(self.switch_to(State::SimpleExpansion))
                }
                Some(_) | None => {
                    self.buffer(self.sigil);
                    Ok(self.reconsume_in(State::Literal))
                }
            },
            State::SimpleExpansion => match self.consume_the_next_character() {
                Some(c) if is_identifier_char(c) => Ok(self.buffer(c)),
                _ => {
                    self.emit_reference(false);
                    Ok(self.reconsume_in(State::Literal))
                }
            },
            State::ComplexExpansion => loop {
                match self.consume_the_next_character() {
                    None => return self.unterminated_expansion(),
                    Some('}') => {
                        self.buffer('}');
                        self.emit_reference(true);
                        return Ok(self.switch_to(State::Literal));
                    }
                    Some(c) => self.buffer(c),
                }
            },
        }
    }

    fn switch_to(&mut self, state: State) {
        self.state = state;
    }

    fn reconsume_in(&mut self, state: State) {
        self.reconsume = true;
        self.state = state;
    }

    fn consume_the_next_character(&mut self) -> Option<char> {
        if self.reconsume {
            self.reconsume = false;
        } else {
            self.cc = self.input.next().map(|c| {
                if c == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }
                c
            });
        }
        self.cc
    }

    fn start_reference(&mut self, c: char) {
        self.flush_literal();
        self.buf.push(self.sigil);
        self.buf.push(c);
    }

    fn emit_reference(&mut self, braced: bool) {
        let span = std::mem::take(&mut self.buf);
        self.queue.push_back(Segment::Reference(RawReference::new(
            span,
            braced,
            self.reference_pos,
        )));
    }

    fn flush_literal(&mut self) {
        if !self.buf.is_empty() {
            let text = std::mem::take(&mut self.buf);
            self.queue.push_back(Segment::Literal(text));
        }
    }

    fn finish(&mut self) {
        self.done = true;
    }

    fn buffer(&mut self, c: char) {
        self.buf.push(c);
    }

    fn cur_pos(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn unterminated_expansion(&mut self) -> Result<(), SyntaxError> {
        self.buf.clear();
        Err(SyntaxError::new(
            ErrorKind::UnterminatedExpansion,
            self.reference_pos,
        ))
    }
}
