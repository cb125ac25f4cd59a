use crate::clause_types::*;
use crate::machine::*;
use crate::types::*;

use indexmap::IndexMap;
use tracing::debug;

use std::hash::BuildHasher;

macro_rules! deterministic {
    ($e:expr) => {
        $e.map(Outcome::Bool)
    };
}

macro_rules! nondeterministic {
    ($e:expr) => {
        $e.map(Outcome::Solutions)
    };
}

/// Somewhere the built-ins can be registered, keyed by name and arity.
pub trait Registry {
    fn add_builtin(&mut self, name: &'static str, arity: usize, entry: BuiltinEntry);
}

impl<S: BuildHasher> Registry for IndexMap<(&'static str, usize), BuiltinEntry, S> {
    fn add_builtin(&mut self, name: &'static str, arity: usize, entry: BuiltinEntry) {
        self.insert((name, arity), entry);
    }
}

/// Registers every built-in in `registry`, in table order.
pub fn install_standard_builtins(registry: &mut impl Registry) {
    for (&(name, arity), &entry) in BUILTIN_TABLE.iter() {
        registry.add_builtin(name, arity, entry);
    }
}

impl Builtins {
    /// Runs the built-in `clause_type` on `args`.
    ///
    /// Deterministic built-ins answer [`Outcome::Bool`]. Nondeterministic
    /// ones answer [`Outcome::Solutions`], each solution holding one
    /// replacement term per argument. A call with the wrong number of
    /// arguments is a mode error.
    pub fn call(&self, clause_type: BuiltInClauseType, args: &[Term], site: CallSite) -> CallResult {
        let name = clause_type.name();

        if args.len() != clause_type.arity() {
            let expected = format!("{} arguments", clause_type.arity());
            let mut err = CallModeError::with_message(Some(name), args, expected, self.locate(site));

            err.scope = Some(format!("{}/{}", name, clause_type.arity()));
            return Err(err.into());
        }

        let outcome = match clause_type {
            BuiltInClauseType::True => Ok(Outcome::Bool(true)),
            BuiltInClauseType::Fail | BuiltInClauseType::False => Ok(Outcome::Bool(false)),
            BuiltInClauseType::Unify => nondeterministic!(self.unify(args, site)),
            BuiltInClauseType::NotUnifiable => deterministic!(self.not_unifiable(args)),
            BuiltInClauseType::Eq => deterministic!(self.eq(args, site)),
            BuiltInClauseType::NotEq => deterministic!(self.not_eq(args, site)),
            BuiltInClauseType::Is => nondeterministic!(self.is(args, site)),
            BuiltInClauseType::CompareNumber(qt) => {
                deterministic!(self.compare_numbers(qt, args, site))
            }
            BuiltInClauseType::TypeTest(test) => deterministic!(self.type_test(test, args)),
            BuiltInClauseType::Univ => nondeterministic!(self.univ(args, site)),
            BuiltInClauseType::Arg => nondeterministic!(self.arg(args, site)),
            BuiltInClauseType::Functor => nondeterministic!(self.functor(args, site)),
            BuiltInClauseType::CompareTerm(qt) => deterministic!(self.compare_term(qt, args)),
            BuiltInClauseType::Compare => nondeterministic!(self.compare(args, site)),
            BuiltInClauseType::Length => nondeterministic!(self.length(args, site)),
            BuiltInClauseType::Sort => nondeterministic!(self.sort(args, site)),
            BuiltInClauseType::Between => nondeterministic!(self.between(args, site)),
            BuiltInClauseType::Succ => nondeterministic!(self.succ(args, site)),
            BuiltInClauseType::Plus => nondeterministic!(self.plus(args, site)),
        };

        match &outcome {
            Ok(Outcome::Bool(b)) => debug!(builtin = name, arity = args.len(), result = b),
            Ok(Outcome::Solutions(solutions)) => {
                debug!(builtin = name, arity = args.len(), solutions = solutions.len())
            }
            Err(err) => debug!(builtin = name, arity = args.len(), %err, "built-in raised"),
        }

        outcome
    }

    /// Looks `name/len(args)` up in the built-in table and calls it. `None`
    /// if no such built-in exists.
    pub fn call_named(&self, name: &str, args: &[Term], site: CallSite) -> Option<CallResult> {
        let clause_type = BuiltInClauseType::from(name, args.len())?;
        Some(self.call(clause_type, args, site))
    }
}
