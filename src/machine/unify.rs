use crate::forms::*;
use crate::types::*;

use std::convert::TryFrom;

/// The two terms have no common instance.
///
/// Built-ins turn this into failure; it never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnifyError;

/// Computes the most specific common instance of `v1` and `v2`.
///
/// An unbound variable on either side yields the other side unchanged:
/// recording the binding is the engine's job. Of two variables the one
/// with an identity is kept, the lower index if both have one. Compounds
/// merge argument by argument when functor and arity agree. Numbers unify
/// when they have the same type and value, however the sign is encoded, so
/// `1` and `1.0` clash. Terms are assumed acyclic.
pub fn unify_value(v1: &Term, v2: &Term) -> Result<Term, UnifyError> {
    match (v1, v2) {
        (Term::Var(x), Term::Var(y)) => Ok(Term::Var(match (x, y) {
            (Var::Fresh, _) => *y,
            (_, Var::Fresh) => *x,
            _ => *x.min(y),
        })),
        (Term::Var(_), _) => Ok(v2.clone()),
        (_, Term::Var(_)) => Ok(v1.clone()),
        _ if v1.is_number() && v2.is_number() => {
            match (Number::try_from(v1), Number::try_from(v2)) {
                (Ok(n1), Ok(n2)) if Constant::Number(n1).is_identical(&Constant::Number(n2)) => {
                    Ok(v1.clone())
                }
                _ => Err(UnifyError),
            }
        }
        (Term::Compound(n1, args1), Term::Compound(n2, args2)) => {
            if n1 != n2 || args1.len() != args2.len() {
                return Err(UnifyError);
            }

            let args = args1
                .iter()
                .zip(args2.iter())
                .map(|(a1, a2)| unify_value(a1, a2))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Term::Compound(n1.clone(), args))
        }
        (Term::Constant(c1), Term::Constant(c2)) if c1.is_identical(c2) => Ok(v1.clone()),
        _ => Err(UnifyError),
    }
}

/// True if `v1` and `v2` unify.
#[inline]
pub fn unifiable(v1: &Term, v2: &Term) -> bool {
    unify_value(v1, v2).is_ok()
}
