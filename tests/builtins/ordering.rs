use crate::helper::*;

use plp_builtins::*;

use std::cmp::Ordering;

#[test]
fn float_before_equal_integer() {
    assert_eq!(compare_terms(&Term::float(1.0), &int(1)), Ordering::Less);
    assert_eq!(compare_terms(&int(1), &Term::float(1.0)), Ordering::Greater);
}

#[test]
fn standard_order_predicates() {
    assert!(holds("@<", &[var(0), int(1)]));
    assert!(holds("@<", &[int(100), Term::string("a")]));
    assert!(holds("@>", &[atom("a"), Term::string("z")]));
    assert!(holds("@=<", &[atom("a"), atom("a")]));
    assert!(holds("@>=", &[Term::compound("a", [int(1), int(2)]), Term::compound("z", [int(1)])]));
    assert!(!holds("@<", &[atom("b"), atom("a")]));
}

#[test]
fn compare_produces_order_atoms() {
    let order = |a: Term, b: Term| solve_once("compare", &[var(0), a, b])[0].clone();

    assert_eq!(order(int(1), int(2)), atom("<"));
    assert_eq!(order(atom("x"), atom("x")), atom("="));
    assert_eq!(order(atom("y"), atom("x")), atom(">"));
}

#[test]
fn compare_verifies_an_order_atom() {
    assert_eq!(solve("compare", &[atom("<"), int(1), int(2)]).len(), 1);
    assert!(solve("compare", &[atom(">"), int(1), int(2)]).is_empty());
    assert!(call("compare", &[atom("less"), int(1), int(2)]).is_err());
}

#[test]
fn identity_of_unbound_variables() {
    assert!(matches!(
        call("==", &[var(0), var(1)]),
        Err(GroundingError::VariableUnification { .. })
    ));

    let by_index = BuiltinsBuilder::new()
        .with_flags(Flags {
            var_identity: VarIdentity::ByIndex,
            ..Flags::default()
        })
        .build();

    let same = by_index.call_named("==", &[var(3), var(3)], CallSite::default());
    let other = by_index.call_named("\\==", &[var(3), var(4)], CallSite::default());

    assert_eq!(same.map(|r| r.map(|o| o.succeeded())), Some(Ok(true)));
    assert_eq!(other.map(|r| r.map(|o| o.succeeded())), Some(Ok(true)));
}

#[test]
fn non_identity_of_unbound_variables() {
    assert!(matches!(
        call("\\==", &[var(0), var(1)]),
        Err(GroundingError::VariableUnification { .. })
    ));
    assert!(holds("\\==", &[atom("a"), atom("b")]));
}

#[test]
fn minus_around_a_negative_number_sorts_with_compounds() {
    let raw = Term::Constant(Constant::Number(Number::Integer(-5)));
    let wrapped = Term::compound("-", [raw.clone()]);

    assert_eq!(compare_terms(&raw, &int(-5)), Ordering::Equal);
    assert_eq!(compare_terms(&wrapped, &atom("z")), Ordering::Greater);
    assert!(holds("@<", &[int(1), wrapped.clone()]));

    let sorted = solve_once("sort", &[Term::list([int(2), wrapped.clone(), int(1)]), var(0)]);
    assert_eq!(sorted[1], Term::list([int(1), int(2), wrapped]));
}
