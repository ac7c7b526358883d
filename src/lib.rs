//! Shell-style variable expansion.
//!
//! Supports `$NAME`, `${NAME}`, the POSIX `-`, `=`, `+` and `?` operators
//! (with and without a leading colon) and `${NAME:offset:length}` substrings.
//!
//! ```
//! use expandvars::{expand_with, HashMapProvider};
//!
//! let mut env: HashMapProvider = [("FOO", "damnbigfoobar")].into_iter().collect();
//! assert_eq!("big", expand_with("${FOO:4:3}", &mut env).unwrap());
//! assert_eq!("fallback", expand_with("${BAR:=fallback}", &mut env).unwrap());
//! assert_eq!("fallback", expand_with("$BAR", &mut env).unwrap());
//! ```

use thiserror::Error;

pub use env::{EnvProvider, HashMapProvider, ProcessEnvProvider};
pub use evaluator::EvaluationError;
pub use expander::{Expander, Options, RECOVER_NULL_VAR};
pub use parser::ParseError;
pub use scanner::err::SyntaxError;

mod env;
mod evaluator;
mod expander;
pub mod parser;
pub mod scanner;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    EvaluationError(#[from] EvaluationError),
}

impl From<SyntaxError> for ExpandError {
    fn from(value: SyntaxError) -> Self {
        Self::ParseError(value.into())
    }
}

pub type ExpandResult<T> = Result<T, ExpandError>;

/// Expands `input` against the process environment.
///
/// `${NAME:=word}` exports `NAME` into the process environment.
pub fn expand(input: &str) -> ExpandResult<String> {
    Expander::from_env().expand(input, &mut ProcessEnvProvider)
}

/// Expands `input` against `env` with default options.
pub fn expand_with<E>(input: &str, env: &mut E) -> ExpandResult<String>
where
    E: EnvProvider + ?Sized,
{
    Expander::default().expand(input, env)
}
