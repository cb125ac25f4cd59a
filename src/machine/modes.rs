//! Call modes: per-argument instantiation and type patterns.
//!
//! A mode is written as a string with one tag character per argument, e.g.
//! `"vaI"` for `functor/3` called with an unbound term, an atom name and a
//! non-negative arity. A built-in lists its accepted modes in priority
//! order; [`check_mode`] picks the first one that fits.

use crate::machine::machine_errors::*;
use crate::types::*;

use tracing::trace;

use std::fmt;
use std::str::FromStr;

/// The argument classes a mode can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeTag {
    /// `i`: an integer, possibly negative.
    Integer,
    /// `I`: a non-negative integer constant.
    PositiveInteger,
    /// `v`: an unbound variable.
    Var,
    /// `n`: anything but an unbound variable.
    NonVar,
    /// `l`: a proper or partial list.
    List,
    /// `L`: a proper list.
    FixedList,
    /// `*`: anything.
    Any,
    /// `<`: one of the atoms `<`, `=`, `>`.
    Compare,
    /// `g`: a ground term.
    Ground,
    /// `a`: an atom.
    Atom,
    /// `c`: an atom or compound.
    Callable,
}

impl ModeTag {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(ModeTag::Integer),
            'I' => Some(ModeTag::PositiveInteger),
            'v' => Some(ModeTag::Var),
            'n' => Some(ModeTag::NonVar),
            'l' => Some(ModeTag::List),
            'L' => Some(ModeTag::FixedList),
            '*' => Some(ModeTag::Any),
            '<' => Some(ModeTag::Compare),
            'g' => Some(ModeTag::Ground),
            'a' => Some(ModeTag::Atom),
            'c' => Some(ModeTag::Callable),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ModeTag::Integer => 'i',
            ModeTag::PositiveInteger => 'I',
            ModeTag::Var => 'v',
            ModeTag::NonVar => 'n',
            ModeTag::List => 'l',
            ModeTag::FixedList => 'L',
            ModeTag::Any => '*',
            ModeTag::Compare => '<',
            ModeTag::Ground => 'g',
            ModeTag::Atom => 'a',
            ModeTag::Callable => 'c',
        }
    }

    /// The name shown in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ModeTag::Integer => "integer",
            ModeTag::PositiveInteger => "positive_integer",
            ModeTag::Var => "var",
            ModeTag::NonVar => "nonvar",
            ModeTag::List => "list",
            ModeTag::FixedList => "fixed_list",
            ModeTag::Any => "any",
            ModeTag::Compare => "compare",
            ModeTag::Ground => "ground",
            ModeTag::Atom => "atom",
            ModeTag::Callable => "callable",
        }
    }

    pub fn accepts(self, term: &Term) -> bool {
        match self {
            ModeTag::Integer => term.is_integer(),
            ModeTag::PositiveInteger => term.is_non_negative_integer(),
            ModeTag::Var => term.is_var(),
            ModeTag::NonVar => term.is_nonvar(),
            ModeTag::List => term.is_list(),
            ModeTag::FixedList => term.is_fixed_list(),
            ModeTag::Any => true,
            ModeTag::Compare => term.is_compare_atom(),
            ModeTag::Ground => term.is_ground(),
            ModeTag::Atom => term.is_atom(),
            ModeTag::Callable => term.is_callable(),
        }
    }
}

/// A parsed mode pattern, one tag per argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mode(pub Vec<ModeTag>);

impl Mode {
    /// True if there is one argument per tag and each is accepted.
    pub fn matches(&self, args: &[Term]) -> bool {
        self.0.len() == args.len() && self.0.iter().zip(args).all(|(tag, arg)| tag.accepts(arg))
    }
}

impl FromStr for Mode {
    /// The first character that is not a tag.
    type Err = char;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        pattern
            .chars()
            .map(|c| ModeTag::from_char(c).ok_or(c))
            .collect::<Result<_, _>>()
            .map(Mode)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, tag) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{}", tag.name())?;
        }

        Ok(())
    }
}

/// True if every argument satisfies the tag at its position. Unknown tag
/// characters never match.
pub fn mode_matches(args: &[Term], mode: &str) -> bool {
    mode.parse::<Mode>().is_ok_and(|mode| mode.matches(args))
}

/// The index of the first mode in `accepted` that `args` fit, if any.
pub fn select_mode(args: &[Term], accepted: &[&str]) -> Option<usize> {
    accepted.iter().position(|mode| mode_matches(args, mode))
}

/// Picks the first matching mode or fails with a [`CallModeError`] naming
/// every rejected mode.
pub fn check_mode(
    args: &[Term],
    accepted: &[&str],
    functor: Option<&str>,
    location: Option<Location>,
) -> Result<usize, GroundingError> {
    match select_mode(args, accepted) {
        Some(idx) => {
            trace!(functor, mode = accepted[idx], "selected call mode");
            Ok(idx)
        }
        None => Err(CallModeError::new(functor, args, accepted, location).into()),
    }
}
