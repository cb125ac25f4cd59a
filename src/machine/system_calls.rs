use crate::clause_types::*;
use crate::forms::*;
use crate::iterators::*;
use crate::machine::term_order::*;
use crate::machine::unify::*;
use crate::machine::*;
use crate::types::*;

use smallvec::smallvec;

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::iter;

type BoolResult = Result<bool, GroundingError>;
type SolutionsResult = Result<Vec<Solution>, GroundingError>;

#[inline]
fn integer_arg(term: &Term) -> i64 {
    // only called after a mode check guaranteed an integer.
    term.as_integer().unwrap_or_default()
}

fn compare_atom(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

impl Builtins {
    pub(crate) fn unify(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let (a, b) = (&args[0], &args[1]);

        if a.is_var() && b.is_var() {
            return Err(self.variable_unification(site));
        }

        Ok(match unify_value(a, b) {
            Ok(r) => vec![smallvec![r.clone(), r]],
            Err(UnifyError) => vec![],
        })
    }

    pub(crate) fn not_unifiable(&self, args: &[Term]) -> BoolResult {
        let (a, b) = (&args[0], &args[1]);

        if a.is_var() && b.is_var() {
            return Ok(false);
        }

        Ok(!unifiable(a, b))
    }

    fn identical(&self, args: &[Term], site: CallSite) -> BoolResult {
        let (a, b) = (&args[0], &args[1]);

        if a.is_var() && b.is_var() && self.flags.var_identity.is_reject() {
            return Err(self.variable_unification(site));
        }

        Ok(compare_terms(a, b) == Ordering::Equal)
    }

    pub(crate) fn eq(&self, args: &[Term], site: CallSite) -> BoolResult {
        self.identical(args, site)
    }

    pub(crate) fn not_eq(&self, args: &[Term], site: CallSite) -> BoolResult {
        self.identical(args, site).map(|same| !same)
    }

    /// `A is B` where `B` was already evaluated to a number.
    pub(crate) fn is(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Is;
        self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (a, b) = (&args[0], &args[1]);

        let result = match Number::try_from(b) {
            Ok(n) => Term::number(n),
            Err(()) => {
                return Err(self.mode_error(ct.name(), args, "an evaluated number as arg #2", site))
            }
        };

        Ok(match unify_value(a, &result) {
            Ok(_) => vec![smallvec![result, b.clone()]],
            Err(UnifyError) => vec![],
        })
    }

    pub(crate) fn compare_numbers(
        &self,
        qt: CompareNumberQT,
        args: &[Term],
        site: CallSite,
    ) -> BoolResult {
        let ct = BuiltInClauseType::CompareNumber(qt);
        self.check_mode(ct.name(), args, ct.modes(), site)?;

        match (Number::try_from(&args[0]), Number::try_from(&args[1])) {
            (Ok(n1), Ok(n2)) => Ok(qt.holds(n1.cmp(&n2))),
            _ => Err(self.mode_error(ct.name(), args, "numbers as both arguments", site)),
        }
    }

    pub(crate) fn type_test(&self, test: TypeTest, args: &[Term]) -> BoolResult {
        let term = &args[0];

        Ok(match test {
            TypeTest::Var => term.is_var(),
            TypeTest::Atom => term.is_atom(),
            TypeTest::Atomic => term.is_atomic(),
            TypeTest::Compound => term.is_compound(),
            TypeTest::Float => term.is_float(),
            TypeTest::Rational => term.is_rational(),
            TypeTest::Integer => term.is_integer(),
            TypeTest::NonVar => term.is_nonvar(),
            TypeTest::Number => term.is_number(),
            TypeTest::Simple => term.is_var() || term.is_atomic(),
            TypeTest::Callable => term.is_callable(),
            TypeTest::DbReference => term.is_dbref(),
            TypeTest::Primitive => term.is_atomic() || term.is_dbref(),
            TypeTest::Ground => term.is_ground(),
            TypeTest::IsList => term.is_list(),
        })
    }

    pub(crate) fn compare_term(&self, qt: CompareTermQT, args: &[Term]) -> BoolResult {
        Ok(qt.holds(compare_terms(&args[0], &args[1])))
    }

    /// `Term =.. List`
    pub(crate) fn univ(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Univ;
        let mode = self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (term, parts) = (&args[0], &args[1]);

        if mode == 0 {
            let (mut elements, _) = list_elements(parts);

            return match elements.len() {
                0 => Err(self.mode_error(
                    ct.name(),
                    args,
                    "non-empty list for arg #2 if arg #1 is a variable",
                    site,
                )),
                1 => Ok(vec![smallvec![elements.remove(0), parts.clone()]]),
                _ => {
                    let name = match elements.remove(0) {
                        Term::Compound(name, head_args) if head_args.is_empty() => name,
                        _ => {
                            return Err(self.mode_error(
                                ct.name(),
                                args,
                                "atom as first element in list if arg #1 is a variable",
                                site,
                            ))
                        }
                    };

                    let new_term = Term::Compound(name, elements);
                    Ok(vec![smallvec![new_term, parts.clone()]])
                }
            };
        }

        let part_list = if term.is_compound() {
            iter::once(term.without_args())
                .chain(term.args().iter().cloned())
                .collect()
        } else {
            vec![term.clone()]
        };

        let current = build_list(part_list, Term::empty_list());

        let solution = unify_value(&current, parts).and_then(|list| {
            let (mut elements, _) = list_elements(&list);

            let new_term = if elements.len() == 1 {
                elements.remove(0)
            } else {
                term.with_args(elements.split_off(1))
            };

            let merged = unify_value(term, &new_term)?;
            Ok(smallvec![merged, list])
        });

        Ok(solution.into_iter().collect())
    }

    /// `arg(N, Term, Arg)` with a 1-based `N`.
    pub(crate) fn arg(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Arg;
        self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (index, term, argument) = (&args[0], &args[1], &args[2]);

        if !term.is_compound() {
            return Ok(vec![]);
        }

        let term_args = term.args();

        let idx = integer_arg(index);

        if idx < 1 || idx as usize > term_args.len() {
            return Ok(vec![]);
        }

        Ok(match unify_value(&term_args[idx as usize - 1], argument) {
            Ok(res) => vec![smallvec![index.clone(), term.clone(), res]],
            Err(UnifyError) => vec![],
        })
    }

    /// `functor(Term, Name, Arity)`
    pub(crate) fn functor(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Functor;
        let mode = self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (term, name, arity) = (&args[0], &args[1], &args[2]);

        if mode == 0 {
            let n = integer_arg(arity);
            let mut fresh_args = self.generated(ct.name(), ct.arity(), n.into(), site)?;

            fresh_args.extend(iter::repeat(Term::fresh()).take(n as usize));
            let new_term = name.with_args(fresh_args);

            return Ok(vec![smallvec![new_term, name.clone(), arity.clone()]]);
        }

        let (term_name, term_arity) = if term.is_callable() {
            (term.without_args(), term.arity())
        } else {
            (term.clone(), 0)
        };

        let solution = unify_value(name, &term_name).and_then(|name_out| {
            let arity_out = unify_value(arity, &Term::integer(term_arity as i64))?;
            Ok(smallvec![term.clone(), name_out, arity_out])
        });

        Ok(solution.into_iter().collect())
    }

    /// `compare(Order, A, B)`
    pub(crate) fn compare(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Compare;
        let mode = self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (order, a, b) = (&args[0], &args[1], &args[2]);
        let token = compare_atom(compare_terms(a, b));

        if mode == 0 {
            if order.name() == Some(token) {
                return Ok(vec![smallvec![order.clone(), a.clone(), b.clone()]]);
            }

            return Ok(vec![]);
        }

        Ok(vec![smallvec![Term::atom(token), a.clone(), b.clone()]])
    }

    /// `length(List, N)`. Modes with an unbounded number of answers (both
    /// arguments open) are rejected.
    pub(crate) fn length(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Length;
        let mode = self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (list, n) = (&args[0], &args[1]);

        match mode {
            0 | 1 => {
                let size = ListIter::new(list).count();

                Ok(match unify_value(n, &Term::integer(size as i64)) {
                    Ok(n_out) => vec![smallvec![list.clone(), n_out]],
                    Err(UnifyError) => vec![],
                })
            }
            _ => {
                let elements = if mode == 2 {
                    list_elements(list).0
                } else {
                    vec![]
                };

                let size = integer_arg(n);
                let remain = size - elements.len() as i64;

                if remain < 0 {
                    return Ok(vec![]);
                }

                let mut extended = self.generated(ct.name(), ct.arity(), size.into(), site)?;

                extended.extend(elements);
                extended.extend(iter::repeat(Term::fresh()).take(remain as usize));

                let new_list = build_list(extended, Term::empty_list());
                Ok(vec![smallvec![new_list, n.clone()]])
            }
        }
    }

    /// `sort(List, Sorted)`: standard order, duplicates removed.
    pub(crate) fn sort(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Sort;
        self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (list, sorted) = (&args[0], &args[1]);
        let (elements, _) = list_elements(list);

        let sorted_list = build_list(sort_unique(elements), Term::empty_list());

        Ok(match unify_value(sorted, &sorted_list) {
            Ok(s_out) => vec![smallvec![list.clone(), s_out]],
            Err(UnifyError) => vec![],
        })
    }

    /// `between(Low, High, Value)`, enumerating `Value` when unbound.
    pub(crate) fn between(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Between;
        let mode = self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (low, high, value) = (&args[0], &args[1], &args[2]);
        let (low_v, high_v) = (integer_arg(low), integer_arg(high));

        if mode == 0 {
            let value_v = integer_arg(value);

            if (low_v..=high_v).contains(&value_v) {
                return Ok(vec![smallvec![low.clone(), high.clone(), value.clone()]]);
            }

            return Ok(vec![]);
        }

        if low_v > high_v {
            return Ok(vec![]);
        }

        let count = i128::from(high_v) - i128::from(low_v) + 1;
        let mut solutions = self.generated(ct.name(), ct.arity(), count, site)?;

        solutions.extend(
            (low_v..=high_v).map(|v| smallvec![low.clone(), high.clone(), Term::integer(v)]),
        );

        Ok(solutions)
    }

    /// `succ(A, B)` over the natural numbers.
    pub(crate) fn succ(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Succ;
        let mode = self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (a, b) = (&args[0], &args[1]);

        let solution = match mode {
            0 => match integer_arg(b) {
                0 => None,
                b_v => Some(smallvec![Term::integer(b_v - 1), b.clone()]),
            },
            1 => integer_arg(a)
                .checked_add(1)
                .map(|b_v| smallvec![a.clone(), Term::integer(b_v)]),
            _ => (integer_arg(a).checked_add(1) == Some(integer_arg(b)))
                .then(|| smallvec![a.clone(), b.clone()]),
        };

        Ok(solution.into_iter().collect())
    }

    /// `plus(A, B, C)` over the natural numbers: computes whichever of the
    /// three is unbound.
    pub(crate) fn plus(&self, args: &[Term], site: CallSite) -> SolutionsResult {
        let ct = BuiltInClauseType::Plus;
        let mode = self.check_mode(ct.name(), args, ct.modes(), site)?;

        let (a, b, c) = (&args[0], &args[1], &args[2]);

        let solution: Option<Solution> = match mode {
            0 => (integer_arg(a).checked_add(integer_arg(b)) == Some(integer_arg(c)))
                .then(|| smallvec![a.clone(), b.clone(), c.clone()]),
            1 => integer_arg(a)
                .checked_add(integer_arg(b))
                .map(|c_v| smallvec![a.clone(), b.clone(), Term::integer(c_v)]),
            2 => integer_arg(c)
                .checked_sub(integer_arg(a))
                .filter(|&b_v| b_v >= 0)
                .map(|b_v| smallvec![a.clone(), Term::integer(b_v), c.clone()]),
            _ => integer_arg(c)
                .checked_sub(integer_arg(b))
                .filter(|&a_v| a_v >= 0)
                .map(|a_v| smallvec![Term::integer(a_v), b.clone(), c.clone()]),
        };

        Ok(solution.into_iter().collect())
    }
}
