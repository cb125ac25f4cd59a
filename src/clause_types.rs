use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use lazy_static::lazy_static;

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareNumberQT {
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    NotEqual,
    Equal,
}

impl CompareNumberQT {
    pub fn name(self) -> &'static str {
        match self {
            CompareNumberQT::GreaterThan => ">",
            CompareNumberQT::LessThan => "<",
            CompareNumberQT::GreaterThanOrEqual => ">=",
            CompareNumberQT::LessThanOrEqual => "=<",
            CompareNumberQT::NotEqual => "=\\=",
            CompareNumberQT::Equal => "=:=",
        }
    }

    /// True if `ordering` of the left argument against the right satisfies
    /// the comparison.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareNumberQT::GreaterThan => ordering == Ordering::Greater,
            CompareNumberQT::LessThan => ordering == Ordering::Less,
            CompareNumberQT::GreaterThanOrEqual => ordering != Ordering::Less,
            CompareNumberQT::LessThanOrEqual => ordering != Ordering::Greater,
            CompareNumberQT::NotEqual => ordering != Ordering::Equal,
            CompareNumberQT::Equal => ordering == Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareTermQT {
    LessThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    GreaterThan,
}

impl CompareTermQT {
    pub fn name(self) -> &'static str {
        match self {
            CompareTermQT::GreaterThan => "@>",
            CompareTermQT::LessThan => "@<",
            CompareTermQT::GreaterThanOrEqual => "@>=",
            CompareTermQT::LessThanOrEqual => "@=<",
        }
    }

    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareTermQT::GreaterThan => ordering == Ordering::Greater,
            CompareTermQT::LessThan => ordering == Ordering::Less,
            CompareTermQT::GreaterThanOrEqual => ordering != Ordering::Less,
            CompareTermQT::LessThanOrEqual => ordering != Ordering::Greater,
        }
    }
}

/// The one-argument type tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTest {
    Var,
    Atom,
    Atomic,
    Compound,
    Float,
    Rational,
    Integer,
    NonVar,
    Number,
    Simple,
    Callable,
    DbReference,
    Primitive,
    Ground,
    IsList,
}

impl TypeTest {
    pub fn name(self) -> &'static str {
        match self {
            TypeTest::Var => "var",
            TypeTest::Atom => "atom",
            TypeTest::Atomic => "atomic",
            TypeTest::Compound => "compound",
            TypeTest::Float => "float",
            TypeTest::Rational => "rational",
            TypeTest::Integer => "integer",
            TypeTest::NonVar => "nonvar",
            TypeTest::Number => "number",
            TypeTest::Simple => "simple",
            TypeTest::Callable => "callable",
            TypeTest::DbReference => "dbreference",
            TypeTest::Primitive => "primitive",
            TypeTest::Ground => "ground",
            TypeTest::IsList => "is_list",
        }
    }
}

/// How the engine calls a built-in and reads its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallConvention {
    /// Succeeds or fails; proposes no bindings.
    Deterministic,
    /// Yields zero or more replacement argument vectors, one per solution.
    Nondeterministic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltInClauseType {
    True,
    Fail,
    False,
    Unify,
    NotUnifiable,
    Eq,
    NotEq,
    Is,
    CompareNumber(CompareNumberQT),
    TypeTest(TypeTest),
    Univ,
    Arg,
    Functor,
    CompareTerm(CompareTermQT),
    Compare,
    Length,
    Sort,
    Between,
    Succ,
    Plus,
}

impl BuiltInClauseType {
    /// Every built-in, in registration order.
    pub const ALL: [BuiltInClauseType; 42] = [
        BuiltInClauseType::True,
        BuiltInClauseType::Fail,
        BuiltInClauseType::False,
        BuiltInClauseType::Unify,
        BuiltInClauseType::NotUnifiable,
        BuiltInClauseType::Eq,
        BuiltInClauseType::NotEq,
        BuiltInClauseType::Is,
        BuiltInClauseType::CompareNumber(CompareNumberQT::GreaterThan),
        BuiltInClauseType::CompareNumber(CompareNumberQT::LessThan),
        BuiltInClauseType::CompareNumber(CompareNumberQT::LessThanOrEqual),
        BuiltInClauseType::CompareNumber(CompareNumberQT::GreaterThanOrEqual),
        BuiltInClauseType::CompareNumber(CompareNumberQT::NotEqual),
        BuiltInClauseType::CompareNumber(CompareNumberQT::Equal),
        BuiltInClauseType::TypeTest(TypeTest::Var),
        BuiltInClauseType::TypeTest(TypeTest::Atom),
        BuiltInClauseType::TypeTest(TypeTest::Atomic),
        BuiltInClauseType::TypeTest(TypeTest::Compound),
        BuiltInClauseType::TypeTest(TypeTest::Float),
        BuiltInClauseType::TypeTest(TypeTest::Rational),
        BuiltInClauseType::TypeTest(TypeTest::Integer),
        BuiltInClauseType::TypeTest(TypeTest::NonVar),
        BuiltInClauseType::TypeTest(TypeTest::Number),
        BuiltInClauseType::TypeTest(TypeTest::Simple),
        BuiltInClauseType::TypeTest(TypeTest::Callable),
        BuiltInClauseType::TypeTest(TypeTest::DbReference),
        BuiltInClauseType::TypeTest(TypeTest::Primitive),
        BuiltInClauseType::TypeTest(TypeTest::Ground),
        BuiltInClauseType::TypeTest(TypeTest::IsList),
        BuiltInClauseType::Univ,
        BuiltInClauseType::Arg,
        BuiltInClauseType::Functor,
        BuiltInClauseType::CompareTerm(CompareTermQT::GreaterThan),
        BuiltInClauseType::CompareTerm(CompareTermQT::LessThan),
        BuiltInClauseType::CompareTerm(CompareTermQT::GreaterThanOrEqual),
        BuiltInClauseType::CompareTerm(CompareTermQT::LessThanOrEqual),
        BuiltInClauseType::Compare,
        BuiltInClauseType::Length,
        BuiltInClauseType::Sort,
        BuiltInClauseType::Between,
        BuiltInClauseType::Succ,
        BuiltInClauseType::Plus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltInClauseType::True => "true",
            BuiltInClauseType::Fail => "fail",
            BuiltInClauseType::False => "false",
            BuiltInClauseType::Unify => "=",
            BuiltInClauseType::NotUnifiable => "\\=",
            BuiltInClauseType::Eq => "==",
            BuiltInClauseType::NotEq => "\\==",
            BuiltInClauseType::Is => "is",
            BuiltInClauseType::CompareNumber(qt) => qt.name(),
            BuiltInClauseType::TypeTest(test) => test.name(),
            BuiltInClauseType::Univ => "=..",
            BuiltInClauseType::Arg => "arg",
            BuiltInClauseType::Functor => "functor",
            BuiltInClauseType::CompareTerm(qt) => qt.name(),
            BuiltInClauseType::Compare => "compare",
            BuiltInClauseType::Length => "length",
            BuiltInClauseType::Sort => "sort",
            BuiltInClauseType::Between => "between",
            BuiltInClauseType::Succ => "succ",
            BuiltInClauseType::Plus => "plus",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            BuiltInClauseType::True | BuiltInClauseType::Fail | BuiltInClauseType::False => 0,
            BuiltInClauseType::TypeTest(_) => 1,
            BuiltInClauseType::Unify
            | BuiltInClauseType::NotUnifiable
            | BuiltInClauseType::Eq
            | BuiltInClauseType::NotEq
            | BuiltInClauseType::Is
            | BuiltInClauseType::CompareNumber(_)
            | BuiltInClauseType::Univ
            | BuiltInClauseType::CompareTerm(_)
            | BuiltInClauseType::Length
            | BuiltInClauseType::Sort
            | BuiltInClauseType::Succ => 2,
            BuiltInClauseType::Arg
            | BuiltInClauseType::Functor
            | BuiltInClauseType::Compare
            | BuiltInClauseType::Between
            | BuiltInClauseType::Plus => 3,
        }
    }

    pub fn from(name: &str, arity: usize) -> Option<Self> {
        match (name, arity) {
            ("true", 0) => Some(BuiltInClauseType::True),
            ("fail", 0) => Some(BuiltInClauseType::Fail),
            ("false", 0) => Some(BuiltInClauseType::False),
            ("=", 2) => Some(BuiltInClauseType::Unify),
            ("\\=", 2) => Some(BuiltInClauseType::NotUnifiable),
            ("==", 2) => Some(BuiltInClauseType::Eq),
            ("\\==", 2) => Some(BuiltInClauseType::NotEq),
            ("is", 2) => Some(BuiltInClauseType::Is),
            (">", 2) => Some(BuiltInClauseType::CompareNumber(CompareNumberQT::GreaterThan)),
            ("<", 2) => Some(BuiltInClauseType::CompareNumber(CompareNumberQT::LessThan)),
            ("=<", 2) => Some(BuiltInClauseType::CompareNumber(CompareNumberQT::LessThanOrEqual)),
            (">=", 2) => Some(BuiltInClauseType::CompareNumber(
                CompareNumberQT::GreaterThanOrEqual,
            )),
            ("=\\=", 2) => Some(BuiltInClauseType::CompareNumber(CompareNumberQT::NotEqual)),
            ("=:=", 2) => Some(BuiltInClauseType::CompareNumber(CompareNumberQT::Equal)),
            ("var", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Var)),
            ("atom", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Atom)),
            ("atomic", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Atomic)),
            ("compound", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Compound)),
            ("float", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Float)),
            ("rational", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Rational)),
            ("integer", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Integer)),
            ("nonvar", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::NonVar)),
            ("number", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Number)),
            ("simple", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Simple)),
            ("callable", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Callable)),
            ("dbreference", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::DbReference)),
            ("primitive", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Primitive)),
            ("ground", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::Ground)),
            ("is_list", 1) => Some(BuiltInClauseType::TypeTest(TypeTest::IsList)),
            ("=..", 2) => Some(BuiltInClauseType::Univ),
            ("arg", 3) => Some(BuiltInClauseType::Arg),
            ("functor", 3) => Some(BuiltInClauseType::Functor),
            ("@>", 2) => Some(BuiltInClauseType::CompareTerm(CompareTermQT::GreaterThan)),
            ("@<", 2) => Some(BuiltInClauseType::CompareTerm(CompareTermQT::LessThan)),
            ("@>=", 2) => Some(BuiltInClauseType::CompareTerm(CompareTermQT::GreaterThanOrEqual)),
            ("@=<", 2) => Some(BuiltInClauseType::CompareTerm(CompareTermQT::LessThanOrEqual)),
            ("compare", 3) => Some(BuiltInClauseType::Compare),
            ("length", 2) => Some(BuiltInClauseType::Length),
            ("sort", 2) => Some(BuiltInClauseType::Sort),
            ("between", 3) => Some(BuiltInClauseType::Between),
            ("succ", 2) => Some(BuiltInClauseType::Succ),
            ("plus", 3) => Some(BuiltInClauseType::Plus),
            _ => None,
        }
    }

    pub fn convention(&self) -> CallConvention {
        match self {
            BuiltInClauseType::Unify
            | BuiltInClauseType::Is
            | BuiltInClauseType::Univ
            | BuiltInClauseType::Arg
            | BuiltInClauseType::Functor
            | BuiltInClauseType::Compare
            | BuiltInClauseType::Length
            | BuiltInClauseType::Sort
            | BuiltInClauseType::Between
            | BuiltInClauseType::Succ
            | BuiltInClauseType::Plus => CallConvention::Nondeterministic,
            _ => CallConvention::Deterministic,
        }
    }

    /// The accepted call modes, highest priority first. Built-ins that take
    /// any arguments have none.
    pub fn modes(&self) -> &'static [&'static str] {
        match self {
            BuiltInClauseType::Is => &["*g"],
            BuiltInClauseType::CompareNumber(_) => &["gg"],
            BuiltInClauseType::Univ => &["vL", "nv", "nl"],
            BuiltInClauseType::Arg => &["In*"],
            BuiltInClauseType::Functor => &["vaI", "n**"],
            BuiltInClauseType::Compare => &["<**", "v**"],
            BuiltInClauseType::Length => &["LI", "Lv", "lI", "vI"],
            BuiltInClauseType::Sort => &["L*"],
            BuiltInClauseType::Between => &["iii", "iiv"],
            BuiltInClauseType::Succ => &["vI", "Iv", "II"],
            BuiltInClauseType::Plus => &["III", "IIv", "IvI", "vII"],
            _ => &[],
        }
    }
}

/// A row of the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinEntry {
    pub clause_type: BuiltInClauseType,
    pub convention: CallConvention,
}

pub type BuiltinTable = IndexMap<(&'static str, usize), BuiltinEntry, FxBuildHasher>;

lazy_static! {
    /// Every built-in keyed by name and arity, in registration order.
    pub static ref BUILTIN_TABLE: BuiltinTable = {
        let mut table = BuiltinTable::with_hasher(FxBuildHasher::default());

        for clause_type in BuiltInClauseType::ALL {
            let entry = BuiltinEntry {
                clause_type,
                convention: clause_type.convention(),
            };

            table.insert((clause_type.name(), clause_type.arity()), entry);
        }

        table
    };
}
