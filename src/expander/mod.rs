
use crate::{env::EnvProvider, evaluator::Evaluator, ExpandResult};

/// Environment variable holding the text substituted for failed
/// `${NAME:?message}` references.
pub const RECOVER_NULL_VAR: &str = "EXPANDVARS_RECOVER_NULL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Fail on references to unset variables instead of expanding them to
    /// nothing.
    pub nounset: bool,
    /// Character introducing a reference.
    pub var_symbol: char,
    /// When set, `${NAME?}` and `${NAME:?}` expand to this instead of failing.
    pub recover_null: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            nounset: false,
            var_symbol: '$',
            recover_null: None,
        }
    }
}

impl Options {
    /// Default options, with `recover_null` taken from `EXPANDVARS_RECOVER_NULL`.
    pub fn from_env() -> Self {
        Self {
            recover_null: std::env::var(RECOVER_NULL_VAR).ok(),
            ..Self::default()
        }
    }
}

/// Expands variable references in strings.
///
/// ```
/// use expandvars::{Expander, HashMapProvider};
///
/// let mut env: HashMapProvider = [("USER", "ada")].into_iter().collect();
/// let expander = Expander::default();
/// assert_eq!("hi ada!", expander.expand("hi ${USER:-nobody}!", &mut env).unwrap());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Expander {
    options: Options,
}

impl Expander {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn from_env() -> Self {
        Self::new(Options::from_env())
    }

    pub fn nounset(mut self, nounset: bool) -> Self {
        self.options.nounset = nounset;
        self
    }

    pub fn var_symbol(mut self, var_symbol: char) -> Self {
        self.options.var_symbol = var_symbol;
        self
    }

    pub fn recover_null(mut self, value: impl Into<String>) -> Self {
        self.options.recover_null = Some(value.into());
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Expands every reference in `input` against `env`.
    ///
    /// Assignments made by `${NAME:=word}` are written to `env` immediately and
    /// are visible to the references that follow. On error nothing is
    /// returned, although assignments made before the failing reference stay
    /// in `env`.
    #[tracing::instrument(level = "debug", skip_all, fields(input_len = input.len()), err)]
    pub fn expand<E>(&self, input: &str, env: &mut E) -> ExpandResult<String>
    where
        E: EnvProvider + ?Sized,
    {
        Evaluator::new(env, &self.options).evaluate(input)
    }
}
