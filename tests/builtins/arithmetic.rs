use crate::helper::*;

use plp_builtins::*;

#[test]
fn between_enumerates_in_order() {
    let values: Vec<Term> = solve("between", &[int(1), int(5), var(0)])
        .into_iter()
        .map(|solution| solution[2].clone())
        .collect();

    assert_eq!(values, vec![int(1), int(2), int(3), int(4), int(5)]);
}

#[test]
fn between_checks_a_bound_value() {
    assert_eq!(solve("between", &[int(1), int(5), int(3)]).len(), 1);
    assert!(solve("between", &[int(1), int(5), int(9)]).is_empty());
    assert!(solve("between", &[int(5), int(1), var(0)]).is_empty());
    assert_eq!(solve("between", &[int(-2), int(-2), var(0)]), vec![vec![int(-2), int(-2), int(-2)]]);
}

#[test]
fn succ_in_every_mode() {
    assert_eq!(solve_once("succ", &[var(0), int(5)]), vec![int(4), int(5)]);
    assert_eq!(solve_once("succ", &[int(4), var(0)]), vec![int(4), int(5)]);
    assert_eq!(solve("succ", &[int(4), int(5)]).len(), 1);
    assert!(solve("succ", &[int(5), int(4)]).is_empty());
    assert!(solve("succ", &[var(0), int(0)]).is_empty());
}

#[test]
fn succ_rejects_negative_numbers() {
    assert!(matches!(
        call("succ", &[int(-1), var(0)]),
        Err(GroundingError::CallMode(_))
    ));
}

#[test]
fn plus_overflow_has_no_solutions() {
    assert!(solve("plus", &[int(i64::MAX), int(1), var(0)]).is_empty());
}

#[test]
fn is_binds_or_checks() {
    assert_eq!(solve_once("is", &[var(0), int(7)]), vec![int(7), int(7)]);
    assert_eq!(solve("is", &[int(7), int(7)]).len(), 1);
    assert!(solve("is", &[int(8), int(7)]).is_empty());
    assert_eq!(
        solve_once("is", &[var(0), Term::float(-0.5)]),
        vec![Term::float(-0.5), Term::float(-0.5)]
    );
}

#[test]
fn numeric_comparisons() {
    assert!(holds(">", &[int(3), int(2)]));
    assert!(holds("<", &[int(-3), int(2)]));
    assert!(holds("=<", &[int(2), int(2)]));
    assert!(holds(">=", &[Term::float(2.5), int(2)]));
    assert!(holds("=:=", &[Term::float(1.0), int(1)]));
    assert!(!holds("=\\=", &[Term::float(1.0), int(1)]));
    assert!(holds("=\\=", &[int(1), int(2)]));
}

#[test]
fn numeric_comparison_needs_ground_arguments() {
    let result = call(">", &[var(0), int(1)]);

    match result {
        Err(GroundingError::CallMode(err)) => {
            assert_eq!(err.scope.as_deref(), Some(">/2"));
            assert_eq!(err.expected, vec!["ground, ground".to_owned()]);
        }
        other => panic!("expected a mode error, got {other:?}"),
    }
}

#[test]
fn numeric_comparison_needs_numbers() {
    assert!(matches!(
        call("<", &[atom("a"), int(1)]),
        Err(GroundingError::CallMode(err)) if err.message.is_some()
    ));
}

#[test]
fn plus_stays_within_the_natural_numbers() {
    assert_eq!(solve_once("plus", &[int(2), var(0), int(5)]), vec![int(2), int(3), int(5)]);
    assert!(solve("plus", &[var(0), int(7), int(5)]).is_empty());
    assert!(solve("plus", &[int(7), var(0), int(5)]).is_empty());
    assert!(matches!(
        call("plus", &[int(-3), int(1), var(0)]),
        Err(GroundingError::CallMode(_))
    ));
}

#[test]
fn huge_ranges_are_refused() {
    let too_large = |name: &str, args: &[Term]| {
        matches!(call(name, args), Err(GroundingError::SizeLimit { .. }))
    };

    assert!(too_large("between", &[int(0), int(i64::MAX), var(0)]));
    assert!(too_large("between", &[int(i64::MIN), int(i64::MAX), var(0)]));
    assert!(too_large("length", &[var(0), int(i64::MAX)]));
    assert!(too_large("functor", &[var(0), atom("f"), int(i64::MAX)]));

    assert_eq!(solve("between", &[int(i64::MAX - 1), int(i64::MAX), var(0)]).len(), 2);
}
