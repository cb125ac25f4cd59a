use crate::forms::*;
use crate::types::*;

use std::cmp::Ordering;
use std::convert::TryFrom;

/// The tiers of the standard order of terms, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TermOrderCategory {
    Variable,
    Number,
    String,
    Compound,
}

/// What the standard order looks at in a single term.
#[derive(Debug, Clone, Copy)]
enum OrderKey<'a> {
    Variable(Var),
    Number(Number),
    String(&'a str),
    Compound(&'a str, &'a [Term]),
}

impl<'a> OrderKey<'a> {
    fn of(term: &'a Term) -> Self {
        match term {
            Term::Var(var) => OrderKey::Variable(*var),
            Term::Constant(Constant::Number(n)) => OrderKey::Number(*n),
            Term::Constant(Constant::String(s)) => OrderKey::String(s),
            Term::Compound(name, args) => match Number::try_from(term) {
                Ok(n) => OrderKey::Number(n),
                Err(()) => OrderKey::Compound(name, args),
            },
        }
    }

    fn category(&self) -> TermOrderCategory {
        match self {
            OrderKey::Variable(_) => TermOrderCategory::Variable,
            OrderKey::Number(_) => TermOrderCategory::Number,
            OrderKey::String(_) => TermOrderCategory::String,
            OrderKey::Compound(..) => TermOrderCategory::Compound,
        }
    }
}

impl Term {
    /// The tier of the standard order this term belongs to. Negative number
    /// wrappers are numbers, not compounds.
    pub fn order_category(&self) -> TermOrderCategory {
        OrderKey::of(self).category()
    }
}

fn compare_numbers(n1: Number, n2: Number) -> Ordering {
    match n1.cmp(&n2) {
        Ordering::Equal => match (n1, n2) {
            (Number::Float(_), Number::Integer(_)) => Ordering::Less,
            (Number::Integer(_), Number::Float(_)) => Ordering::Greater,
            _ => Ordering::Equal,
        },
        ordering => ordering,
    }
}

/// The standard order of terms.
///
/// Variables come first (ordered by identity), then numbers (by value, a
/// float before an equal integer), then strings, then atoms and compounds
/// by arity, name and arguments from left to right.
pub fn compare_terms(a: &Term, b: &Term) -> Ordering {
    let mut pdl = vec![(a, b)];

    while let Some((t1, t2)) = pdl.pop() {
        let ordering = match (OrderKey::of(t1), OrderKey::of(t2)) {
            (OrderKey::Variable(v1), OrderKey::Variable(v2)) => v1.cmp(&v2),
            (OrderKey::Number(n1), OrderKey::Number(n2)) => compare_numbers(n1, n2),
            (OrderKey::String(s1), OrderKey::String(s2)) => s1.cmp(s2),
            (OrderKey::Compound(n1, args1), OrderKey::Compound(n2, args2)) => {
                let ordering = args1.len().cmp(&args2.len()).then_with(|| n1.cmp(n2));

                if ordering == Ordering::Equal {
                    // pushed in reverse so the leftmost pair is compared first.
                    pdl.extend(args1.iter().zip(args2.iter()).rev());
                }

                ordering
            }
            (k1, k2) => k1.category().cmp(&k2.category()),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

/// Sorts by the standard order of terms.
#[derive(Debug, Clone, Copy)]
pub struct StructSort<'a>(pub &'a Term);

impl PartialEq for StructSort<'_> {
    fn eq(&self, other: &Self) -> bool {
        compare_terms(self.0, other.0) == Ordering::Equal
    }
}

impl Eq for StructSort<'_> {}

impl PartialOrd for StructSort<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StructSort<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_terms(self.0, other.0)
    }
}

/// Sorts `terms` by the standard order and drops duplicates.
pub fn sort_unique(mut terms: Vec<Term>) -> Vec<Term> {
    terms.sort_by(compare_terms);
    terms.dedup_by(|t1, t2| compare_terms(t1, t2) == Ordering::Equal);
    terms
}
