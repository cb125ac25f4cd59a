use crate::helper::*;

use plp_builtins::*;

#[test]
fn length_measures_a_fixed_list() {
    let l = Term::list([atom("a"), atom("b"), atom("c")]);

    assert_eq!(solve_once("length", &[l.clone(), var(0)]), vec![l.clone(), int(3)]);
    assert_eq!(solve("length", &[l.clone(), int(3)]).len(), 1);
    assert!(solve("length", &[l, int(2)]).is_empty());
}

#[test]
fn length_builds_fresh_lists() {
    let solution = solve_once("length", &[var(0), int(3)]);

    assert_eq!(
        solution[0],
        Term::list([Term::fresh(), Term::fresh(), Term::fresh()])
    );
    assert_eq!(solve_once("length", &[var(0), int(0)])[0], Term::empty_list());
}

#[test]
fn length_extends_a_partial_list() {
    let partial = Term::partial_list([atom("a"), atom("b")], var(1));

    assert_eq!(
        solve_once("length", &[partial.clone(), int(3)])[0],
        Term::list([atom("a"), atom("b"), Term::fresh()])
    );
    assert!(solve("length", &[partial, int(1)]).is_empty());
}

#[test]
fn length_rejects_unbounded_modes() {
    assert!(call("length", &[var(0), var(1)]).is_err());

    let partial = Term::partial_list([atom("a")], var(1));
    assert!(call("length", &[partial, var(2)]).is_err());
}

#[test]
fn sort_orders_and_deduplicates() {
    let l = Term::list([int(3), int(1), int(2), int(1)]);

    assert_eq!(
        solve_once("sort", &[l.clone(), var(0)]),
        vec![l, Term::list([int(1), int(2), int(3)])]
    );
}

#[test]
fn sort_uses_the_standard_order() {
    let l = Term::list([
        atom("b"),
        Term::string("s"),
        int(1),
        Term::float(1.0),
        var(4),
        Term::compound("f", [atom("a")]),
    ]);

    let expected = Term::list([
        var(4),
        Term::float(1.0),
        int(1),
        Term::string("s"),
        atom("b"),
        Term::compound("f", [atom("a")]),
    ]);

    assert_eq!(solve_once("sort", &[l, var(0)])[1], expected);
}

#[test]
fn sort_checks_a_given_result() {
    let l = Term::list([atom("b"), atom("a")]);

    assert_eq!(solve("sort", &[l.clone(), Term::list([atom("a"), atom("b")])]).len(), 1);
    assert!(solve("sort", &[l, Term::list([atom("b"), atom("a")])]).is_empty());
}

#[test]
fn is_list_accepts_partial_lists() {
    assert!(holds("is_list", &[Term::empty_list()]));
    assert!(holds("is_list", &[Term::list([int(1)])]));
    assert!(holds("is_list", &[Term::partial_list([int(1)], var(0))]));
    assert!(!holds("is_list", &[Term::partial_list([int(1)], atom("x"))]));
    assert!(!holds("is_list", &[var(0)]));
}

#[test]
fn list_utilities_decompose_and_rebuild() {
    use plp_builtins::iterators::*;

    let partial = Term::partial_list([int(1), int(2)], var(0));
    let (elements, tail) = list_elements(&partial);

    assert_eq!(elements, vec![int(1), int(2)]);
    assert_eq!(tail, var(0));
    assert_eq!(list_tail(&partial), &var(0));
    assert_eq!(build_list(elements, tail), partial);
}
