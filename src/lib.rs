//! Built-in predicates for a Prolog grounding engine.
//!
//! Every built-in is a pure function from argument terms to either a
//! truth value or a list of solutions, each solution giving one
//! replacement per argument. Variables are numbered by the calling
//! engine; [`Var::Fresh`] marks a variable a built-in introduced and
//! which the engine must allocate.

pub mod clause_types;
pub mod forms;
pub mod iterators;
pub mod machine;
pub mod types;

// Re-exports
pub use clause_types::{BuiltInClauseType, BuiltinEntry, CallConvention, BUILTIN_TABLE};
pub use forms::Number;
pub use machine::dispatch::{install_standard_builtins, Registry};
pub use machine::modes::{Mode, ModeTag};
pub use machine::term_order::{compare_terms, sort_unique, TermOrderCategory};
pub use machine::unify::{unifiable, unify_value, UnifyError};
pub use machine::*;
pub use types::{Constant, Term, Var};
