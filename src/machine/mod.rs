pub mod config;
pub mod dispatch;
pub mod machine_errors;
pub mod modes;
pub mod system_calls;
pub mod term_order;
pub mod unify;

use crate::types::*;

pub use crate::machine::config::*;
pub use crate::machine::machine_errors::*;

use smallvec::SmallVec;

use std::fmt;

/// One accepted solution of a nondeterministic built-in: a replacement for
/// every argument of the call.
pub type Solution = SmallVec<[Term; 3]>;

/// What a built-in call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The result of a deterministic built-in.
    Bool(bool),
    /// The solutions of a nondeterministic built-in. Empty means failure.
    Solutions(Vec<Solution>),
}

impl Outcome {
    /// True if the call has at least one solution.
    pub fn succeeded(&self) -> bool {
        match self {
            Outcome::Bool(b) => *b,
            Outcome::Solutions(solutions) => !solutions.is_empty(),
        }
    }

    /// The solutions, if the call was nondeterministic.
    pub fn solutions(&self) -> Option<&[Solution]> {
        match self {
            Outcome::Bool(_) => None,
            Outcome::Solutions(solutions) => Some(solutions),
        }
    }

    pub fn into_solutions(self) -> Option<Vec<Solution>> {
        match self {
            Outcome::Bool(_) => None,
            Outcome::Solutions(solutions) => Some(solutions),
        }
    }
}

impl From<bool> for Outcome {
    #[inline]
    fn from(value: bool) -> Self {
        Outcome::Bool(value)
    }
}

impl From<Vec<Solution>> for Outcome {
    #[inline]
    fn from(value: Vec<Solution>) -> Self {
        Outcome::Solutions(value)
    }
}

pub type CallResult = Result<Outcome, GroundingError>;

/// Identifies where a built-in was called from, for error messages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// An engine-defined marker resolved by the [`LocationProvider`].
    pub marker: Option<usize>,
}

impl CallSite {
    #[inline]
    pub fn at(marker: usize) -> Self {
        CallSite {
            marker: Some(marker),
        }
    }
}

/// The built-in predicate library.
///
/// Holds no state between calls: every call is a function of its arguments,
/// the flags and the location provider, so it can be shared freely across
/// branches of the search.
#[derive(Clone, Default)]
pub struct Builtins {
    pub(crate) flags: Flags,
    pub(crate) locations: Option<SharedLocationProvider>,
}

impl fmt::Debug for Builtins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtins")
            .field("flags", &self.flags)
            .field("locations", &self.locations.as_ref().map(|_| "<provider>"))
            .finish()
    }
}

impl Builtins {
    /// A library with default flags and no location provider.
    pub fn new() -> Self {
        Builtins::default()
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Resolves a call site to a position, if both are available.
    pub fn locate(&self, site: CallSite) -> Option<Location> {
        match (&self.locations, site.marker) {
            (Some(provider), Some(marker)) => provider.lineno(marker),
            _ => None,
        }
    }

    pub(crate) fn check_mode(
        &self,
        functor: &str,
        args: &[Term],
        accepted: &[&str],
        site: CallSite,
    ) -> Result<usize, GroundingError> {
        match modes::select_mode(args, accepted) {
            Some(idx) => Ok(idx),
            None => {
                let location = self.locate(site);
                modes::check_mode(args, accepted, Some(functor), location)
            }
        }
    }

    pub(crate) fn mode_error(
        &self,
        functor: &str,
        args: &[Term],
        message: &str,
        site: CallSite,
    ) -> GroundingError {
        CallModeError::with_message(Some(functor), args, message, self.locate(site)).into()
    }

    /// An empty buffer with room for `requested` generated terms. Fails with
    /// [`GroundingError::SizeLimit`] above [`Flags::max_generated`] or when
    /// the allocation itself fails.
    pub(crate) fn generated<T>(
        &self,
        functor: &str,
        arity: usize,
        requested: i128,
        site: CallSite,
    ) -> Result<Vec<T>, GroundingError> {
        let limit = self.flags.max_generated;

        let too_large = || GroundingError::SizeLimit {
            scope: format!("{}/{}", functor, arity),
            requested,
            limit,
            location: self.locate(site),
        };

        let size = usize::try_from(requested)
            .ok()
            .filter(|&size| size <= limit)
            .ok_or_else(too_large)?;

        let mut buffer = Vec::new();
        buffer.try_reserve_exact(size).map_err(|_| too_large())?;

        Ok(buffer)
    }

    pub(crate) fn variable_unification(&self, site: CallSite) -> GroundingError {
        GroundingError::VariableUnification {
            location: self.locate(site),
        }
    }
}
