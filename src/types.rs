use crate::forms::*;
use crate::iterators::*;
use crate::machine::term_order::compare_terms;

use ordered_float::OrderedFloat;

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

/// The name of the empty list atom.
pub const EMPTY_LIST: &str = "[]";
/// The functor of a list cell.
pub const CONS: &str = ".";

/// An unbound logic variable.
///
/// Identities are allocated by the resolution engine; this crate only
/// reads them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Var {
    /// A placeholder with no identity yet, e.g. the new cells of `length/2`.
    Fresh,
    /// An engine-assigned variable index.
    Ref(usize),
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Var::Fresh => write!(f, "_"),
            Var::Ref(n) => write!(f, "_G{}", n),
        }
    }
}

/// A leaf value.
#[derive(Debug, Clone)]
pub enum Constant {
    /// An integer or float.
    Number(Number),
    /// A string.
    String(String),
}

impl Constant {
    /// Structural identity: `1` and `1.0` are different constants.
    pub fn is_identical(&self, other: &Constant) -> bool {
        match (self, other) {
            (Constant::Number(Number::Integer(n1)), Constant::Number(Number::Integer(n2))) => {
                n1 == n2
            }
            (Constant::Number(Number::Float(f1)), Constant::Number(Number::Float(f2))) => f1 == f2,
            (Constant::String(s1), Constant::String(s2)) => s1 == s2,
            _ => false,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Constant::Number(n) => write!(f, "{}", n),
            Constant::String(s) => write!(f, "{:?}", s),
        }
    }
}

/// A logic term.
///
/// Terms are immutable values. Atoms are compounds without arguments, and
/// negative numbers arrive as `-(N)` wrapped around a non-negative constant.
#[derive(Debug, Clone)]
pub enum Term {
    /// An unbound variable.
    Var(Var),
    /// A number or string.
    Constant(Constant),
    /// A functor applied to zero or more arguments.
    Compound(String, Vec<Term>),
}

impl Term {
    /// Creates an atom.
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Compound(name.into(), vec![])
    }

    /// Creates a compound term.
    pub fn compound(functor: impl Into<String>, args: impl IntoIterator<Item = Term>) -> Self {
        Term::Compound(functor.into(), args.into_iter().collect())
    }

    /// Creates an integer, wrapping negative values in `-/1`.
    pub fn integer(value: i64) -> Self {
        if value < 0 && value != i64::MIN {
            Term::compound("-", [Term::Constant(Constant::Number(Number::Integer(-value)))])
        } else {
            Term::Constant(Constant::Number(Number::Integer(value)))
        }
    }

    /// Creates a float, wrapping negative values in `-/1`.
    pub fn float(value: f64) -> Self {
        if value < 0.0 {
            Term::compound(
                "-",
                [Term::Constant(Constant::Number(Number::Float(OrderedFloat(-value))))],
            )
        } else {
            Term::Constant(Constant::Number(Number::Float(OrderedFloat(value))))
        }
    }

    /// Creates a number term from a [`Number`].
    pub fn number(value: Number) -> Self {
        match value {
            Number::Integer(n) => Term::integer(n),
            Number::Float(f) => Term::float(f.0),
        }
    }

    /// Creates a string.
    pub fn string(value: impl Into<String>) -> Self {
        Term::Constant(Constant::String(value.into()))
    }

    /// Creates a reference to the engine variable with the given index.
    pub fn var(index: usize) -> Self {
        Term::Var(Var::Ref(index))
    }

    /// Creates a variable with no identity.
    pub fn fresh() -> Self {
        Term::Var(Var::Fresh)
    }

    /// The empty list atom.
    pub fn empty_list() -> Self {
        Term::atom(EMPTY_LIST)
    }

    /// Creates a list cell.
    pub fn cons(head: Term, tail: Term) -> Self {
        Term::Compound(CONS.to_owned(), vec![head, tail])
    }

    /// Creates a proper list.
    pub fn list(elements: impl IntoIterator<Item = Term>) -> Self {
        Term::partial_list(elements, Term::empty_list())
    }

    /// Creates a list ending in `tail`.
    pub fn partial_list(elements: impl IntoIterator<Item = Term>, tail: Term) -> Self {
        let elements: Vec<Term> = elements.into_iter().collect();
        build_list(elements, tail)
    }

    /// The functor name of a compound or atom.
    pub fn name(&self) -> Option<&str> {
        match self {
            Term::Compound(name, _) => Some(name),
            _ => None,
        }
    }

    /// The arguments of a compound; empty for every other term.
    pub fn args(&self) -> &[Term] {
        match self {
            Term::Compound(_, args) => args,
            _ => &[],
        }
    }

    /// The number of arguments. Variables and constants have arity 0.
    pub fn arity(&self) -> usize {
        self.args().len()
    }

    /// The same functor applied to no arguments: an atom for compounds, the
    /// term itself for constants.
    pub fn without_args(&self) -> Term {
        match self {
            Term::Compound(name, _) => Term::atom(name.clone()),
            _ => self.clone(),
        }
    }

    /// Rebuilds a compound with the same functor and the given arguments.
    pub fn with_args(&self, args: Vec<Term>) -> Term {
        match self {
            Term::Compound(name, _) => Term::Compound(name.clone(), args),
            _ => self.clone(),
        }
    }

    #[inline]
    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    #[inline]
    pub fn is_nonvar(&self) -> bool {
        !self.is_var()
    }

    /// True if no variable occurs anywhere in the term.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Constant(_) => true,
            Term::Compound(_, args) => ground(args),
        }
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Constant(_))
    }

    /// True for atoms and compounds, i.e. anything with a functor. Negative
    /// numbers are not callable.
    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self, Term::Compound(..)) && !self.is_number()
    }

    #[inline]
    pub fn is_atom(&self) -> bool {
        matches!(self, Term::Compound(_, args) if args.is_empty())
    }

    /// A functor with at least one argument, other than a negative number.
    #[inline]
    pub fn is_compound(&self) -> bool {
        matches!(self, Term::Compound(_, args) if !args.is_empty())
            && !self.is_number()
    }

    /// True for integer constants and `-/1` around a non-negative integer
    /// constant.
    pub fn is_integer(&self) -> bool {
        matches!(Number::try_from(self), Ok(Number::Integer(_)))
    }

    /// True for float constants and `-/1` around a non-negative float
    /// constant.
    pub fn is_float(&self) -> bool {
        matches!(Number::try_from(self), Ok(Number::Float(_)))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// An integer constant that is not negative.
    pub fn is_non_negative_integer(&self) -> bool {
        matches!(self, Term::Constant(Constant::Number(Number::Integer(n))) if *n >= 0)
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Term::Constant(Constant::String(_)))
    }

    #[inline]
    pub fn is_atomic(&self) -> bool {
        self.is_atom() || self.is_number() || self.is_string()
    }

    /// Rationals are not part of this term model.
    #[inline]
    pub fn is_rational(&self) -> bool {
        false
    }

    /// Database references are not part of this term model.
    #[inline]
    pub fn is_dbref(&self) -> bool {
        false
    }

    #[inline]
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Term::Compound(name, args) if args.is_empty() && name == EMPTY_LIST)
    }

    /// True for a `'.'/2` cell, whatever its tail.
    #[inline]
    pub fn is_cons(&self) -> bool {
        matches!(self, Term::Compound(name, args) if args.len() == 2 && name == CONS)
    }

    /// A proper list or a partial list: `[]`, or cells ending in `[]` or a
    /// variable.
    pub fn is_list(&self) -> bool {
        if self.is_empty_list() {
            return true;
        }

        if self.is_cons() {
            let tail = list_tail(self);
            return tail.is_empty_list() || tail.is_var();
        }

        false
    }

    /// A list of known length, i.e. one whose tail is `[]`.
    pub fn is_fixed_list(&self) -> bool {
        list_tail(self).is_empty_list()
    }

    /// One of the atoms `<`, `=` or `>`.
    pub fn is_compare_atom(&self) -> bool {
        match self {
            Term::Compound(name, args) if args.is_empty() => {
                matches!(name.as_str(), "<" | "=" | ">")
            }
            _ => false,
        }
    }

    /// Reads an integer value, looking through the `-/1` wrapper.
    pub fn as_integer(&self) -> Option<i64> {
        Number::try_from(self).ok().and_then(|n| n.as_integer())
    }
}

/// True if none of `terms` contains a variable. Vacuously true for no terms.
pub fn ground(terms: &[Term]) -> bool {
    terms.iter().all(Term::is_ground)
}

impl PartialEq for Term {
    fn eq(&self, other: &Term) -> bool {
        compare_terms(self, other) == Ordering::Equal
    }
}

impl Eq for Term {}

impl From<Number> for Term {
    #[inline]
    fn from(value: Number) -> Term {
        Term::number(value)
    }
}

impl From<Var> for Term {
    #[inline]
    fn from(value: Var) -> Term {
        Term::Var(value)
    }
}

fn needs_quotes(name: &str) -> bool {
    if name == EMPTY_LIST || name.is_empty() {
        return name.is_empty();
    }

    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_lowercase() => !name.chars().all(|c| c.is_alphanumeric() || c == '_'),
        Some(_) => !name.chars().all(|c| "+-*/\\^<>=~:.?@#&$".contains(c)),
        None => true,
    }
}

fn fmt_name(name: &str, f: &mut fmt::Formatter) -> fmt::Result {
    if needs_quotes(name) {
        write!(f, "'{}'", name.replace('\'', "\\'"))
    } else {
        write!(f, "{}", name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Var(var) => write!(f, "{}", var),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Compound(_, args) if self.is_number() => write!(f, "-{}", args[0]),
            Term::Compound(name, args) if args.is_empty() => fmt_name(name, f),
            Term::Compound(..) if self.is_cons() => {
                let (elements, tail) = list_elements(self);

                write!(f, "[")?;

                for (idx, element) in elements.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }

                    write!(f, "{}", element)?;
                }

                if !tail.is_empty_list() {
                    write!(f, "|{}", tail)?;
                }

                write!(f, "]")
            }
            Term::Compound(name, args) => {
                fmt_name(name, f)?;
                write!(f, "(")?;

                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }

                    write!(f, "{}", arg)?;
                }

                write!(f, ")")
            }
        }
    }
}
