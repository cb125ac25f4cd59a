use crate::machine::modes::Mode;
use crate::types::*;

use thiserror::Error;

use std::fmt;

/// A (line, column) position in program text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The line number.
    pub line: usize,
    /// The column number.
    pub col: usize,
}

impl Location {
    #[inline]
    pub fn new(line: usize, col: usize) -> Self {
        Location { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl From<(usize, usize)> for Location {
    #[inline]
    fn from((line, col): (usize, usize)) -> Self {
        Location { line, col }
    }
}

struct At(Option<Location>);

impl fmt::Display for At {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(location) => write!(f, " at position {}", location),
            None => Ok(()),
        }
    }
}

#[inline]
fn at(location: &Option<Location>) -> At {
    At(*location)
}

/// Maps call-site markers to positions in the consulted program.
///
/// This is how errors raised by built-ins get decorated with a position;
/// the resolution engine supplies it.
pub trait LocationProvider {
    /// The position of the call site `marker`, if known.
    fn lineno(&self, marker: usize) -> Option<Location>;
}

impl<F> LocationProvider for F
where
    F: Fn(usize) -> Option<Location>,
{
    #[inline]
    fn lineno(&self, marker: usize) -> Option<Location> {
        self(marker)
    }
}

/// The arguments of a built-in call matched none of its accepted modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid argument types for call{}{}: arguments: ({}){}.",
    to_scope(.scope),
    at(.location),
    .received,
    expectation(.expected, .message)
)]
pub struct CallModeError {
    /// `name/arity` of the predicate, if known.
    pub scope: Option<String>,
    /// The received arguments, rendered.
    pub received: String,
    /// Each rejected mode, rendered as its tag names.
    pub expected: Vec<String>,
    /// A free-form description of what was expected, for checks that are not
    /// mode tables.
    pub message: Option<String>,
    /// Where the call happened.
    pub location: Option<Location>,
}

impl CallModeError {
    /// An error listing the rejected modes.
    pub fn new(
        functor: Option<&str>,
        args: &[Term],
        accepted: &[&str],
        location: Option<Location>,
    ) -> Self {
        CallModeError {
            scope: functor.map(|name| format!("{}/{}", name, args.len())),
            received: show_args(args),
            expected: accepted.iter().map(|mode| show_mode(mode)).collect(),
            message: None,
            location,
        }
    }

    /// An error explaining the expectation in words.
    pub fn with_message(
        functor: Option<&str>,
        args: &[Term],
        message: impl Into<String>,
        location: Option<Location>,
    ) -> Self {
        CallModeError {
            scope: functor.map(|name| format!("{}/{}", name, args.len())),
            received: show_args(args),
            expected: vec![],
            message: Some(message.into()),
            location,
        }
    }
}

fn show_args(args: &[Term]) -> String {
    args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn show_mode(pattern: &str) -> String {
    match pattern.parse::<Mode>() {
        Ok(mode) => mode.to_string(),
        Err(_) => pattern.to_owned(),
    }
}

fn to_scope(scope: &Option<String>) -> String {
    match scope {
        Some(scope) => format!(" to '{}'", scope),
        None => String::new(),
    }
}

fn expectation(expected: &[String], message: &Option<String>) -> String {
    match message {
        _ if !expected.is_empty() => format!(", expected: ({})", expected.join(") or (")),
        Some(message) => format!(", expected: {}", message),
        None => String::new(),
    }
}

/// The user-facing errors of grounding a program.
///
/// Built-ins raise `CallMode` and `VariableUnification`. The remaining
/// variants are raised by the resolution engine and live here so that all
/// failures are reported the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroundingError {
    /// See [`CallModeError`].
    #[error(transparent)]
    CallMode(#[from] CallModeError),
    /// Two wholly unbound variables were given where one side must carry
    /// structure.
    #[error("Unification of unbound variables not supported{}.", at(.location))]
    VariableUnification {
        /// Where the call happened.
        location: Option<Location>,
    },
    /// A call to a predicate with no clauses.
    #[error("No clauses found for '{signature}'{}.", at(.location))]
    UnknownClause {
        /// `name/arity` of the called predicate.
        signature: String,
        /// Where the call happened.
        location: Option<Location>,
    },
    /// A probabilistic clause whose head is not ground after grounding.
    #[error("Encountered non-ground probabilistic clause{}.", at(.location))]
    NonGroundProbabilisticClause {
        /// Where the clause is.
        location: Option<Location>,
    },
    /// A built-in was asked to generate more terms than
    /// [`Flags::max_generated`](crate::machine::Flags::max_generated) allows.
    #[error(
        "Call to '{scope}' would generate {requested} terms, more than the limit of {limit}{}.",
        at(.location)
    )]
    SizeLimit {
        /// `name/arity` of the built-in.
        scope: String,
        /// How many terms the call asked for.
        requested: i128,
        /// The configured limit.
        limit: usize,
        /// Where the call happened.
        location: Option<Location>,
    },
    /// Loading a program failed.
    #[error("{message}{}.", at(.location))]
    Consult {
        /// What went wrong.
        message: String,
        /// Where it went wrong.
        location: Option<Location>,
    },
}

impl GroundingError {
    /// The position the error is attached to, if any.
    pub fn location(&self) -> Option<Location> {
        match self {
            GroundingError::CallMode(err) => err.location,
            GroundingError::VariableUnification { location }
            | GroundingError::UnknownClause { location, .. }
            | GroundingError::NonGroundProbabilisticClause { location }
            | GroundingError::SizeLimit { location, .. }
            | GroundingError::Consult { location, .. } => *location,
        }
    }
}
