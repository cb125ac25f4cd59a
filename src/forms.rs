use crate::types::*;

use num_order::NumOrd;
use ordered_float::OrderedFloat;

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

/// A numeric constant.
///
/// Equality and ordering are numeric: `Integer(1) == Float(1.0)`. The
/// standard order of terms breaks that tie separately, see
/// [`compare_terms`](crate::machine::term_order::compare_terms).
#[derive(Debug, Copy, Clone)]
pub enum Number {
    /// A machine integer.
    Integer(i64),
    /// A float.
    Float(OrderedFloat<f64>),
}

impl Default for Number {
    fn default() -> Self {
        Number::Integer(0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(fl) => {
                if fl.fract() == 0.0 && fl.is_finite() {
                    write!(f, "{:.1}", fl)
                } else {
                    write!(f, "{}", fl)
                }
            }
        }
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(f: f64) -> Self {
        Number::Float(OrderedFloat(f))
    }
}

impl Number {
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(n) => *n < 0,
            Number::Float(f) => f.0 < 0.0,
        }
    }

    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            &Number::Integer(n) => Some(n),
            Number::Float(_) => None,
        }
    }

    /// Negates the number. Integer negation saturates at the `i64` bounds.
    pub fn negate(self) -> Number {
        match self {
            Number::Integer(n) => Number::Integer(n.checked_neg().unwrap_or(i64::MAX)),
            Number::Float(f) => Number::Float(OrderedFloat(-f.0)),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, rhs: &Self) -> bool {
        match (self, rhs) {
            (&Number::Integer(n1), &Number::Integer(n2)) => n1 == n2,
            (&Number::Integer(n1), &Number::Float(n2)) => n1.num_eq(&n2.0),
            (&Number::Float(n1), &Number::Integer(n2)) => n1.0.num_eq(&n2),
            (&Number::Float(f1), &Number::Float(f2)) => f1.eq(&f2),
        }
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, rhs: &Number) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Number {
    fn cmp(&self, rhs: &Number) -> Ordering {
        match (self, rhs) {
            (&Number::Integer(n1), &Number::Integer(n2)) => n1.cmp(&n2),
            (&Number::Integer(n1), &Number::Float(n2)) => {
                n1.num_partial_cmp(&n2.0).unwrap_or(Ordering::Less)
            }
            (&Number::Float(n1), &Number::Integer(n2)) => {
                n1.0.num_partial_cmp(&n2).unwrap_or(Ordering::Greater)
            }
            (&Number::Float(f1), &Number::Float(f2)) => f1.cmp(&f2),
        }
    }
}

impl TryFrom<&Term> for Number {
    type Error = ();

    /// Reads a numeric constant, looking through the unary minus wrapper the
    /// parser uses for negative literals.
    fn try_from(term: &Term) -> Result<Number, Self::Error> {
        match term {
            Term::Constant(Constant::Number(n)) => Ok(*n),
            Term::Compound(name, args) if name == "-" && args.len() == 1 => match &args[0] {
                Term::Constant(Constant::Number(n)) if !n.is_negative() => Ok(n.negate()),
                _ => Err(()),
            },
            _ => Err(()),
        }
    }
}
