use crate::helper::*;

use plp_builtins::*;

fn located() -> Builtins {
    BuiltinsBuilder::new()
        .with_locations(|marker: usize| Some(Location::new(marker, 7)))
        .build()
}

#[test]
fn unifying_two_variables_is_an_error() {
    let err = call("=", &[var(0), var(1)]).unwrap_err();

    assert_eq!(err, GroundingError::VariableUnification { location: None });
    assert_eq!(err.to_string(), "Unification of unbound variables not supported.");
}

#[test]
fn errors_carry_the_call_site_position() {
    let err = located()
        .call(BuiltInClauseType::Unify, &[var(0), var(1)], CallSite::at(3))
        .unwrap_err();

    assert_eq!(err.location(), Some(Location::new(3, 7)));
    assert_eq!(
        err.to_string(),
        "Unification of unbound variables not supported at position 3:7."
    );
}

#[test]
fn mode_errors_list_the_rejected_modes() {
    let err = located()
        .call(BuiltInClauseType::Length, &[var(0), var(1)], CallSite::at(3))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid argument types for call to 'length/2' at position 3:7: \
         arguments: (_G0, _G1), expected: (fixed_list, positive_integer) or \
         (fixed_list, var) or (list, positive_integer) or (var, positive_integer)."
    );
}

#[test]
fn free_form_mode_errors() {
    let err = call("=..", &[var(0), Term::empty_list()]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid argument types for call to '=../2': arguments: (_G0, []), \
         expected: non-empty list for arg #2 if arg #1 is a variable."
    );
}

#[test]
fn missing_marker_leaves_errors_undecorated() {
    let err = located()
        .call(BuiltInClauseType::Unify, &[var(0), var(1)], CallSite::default())
        .unwrap_err();

    assert_eq!(err.location(), None);
}

#[test]
fn engine_errors_share_the_format() {
    let unknown = GroundingError::UnknownClause {
        signature: "edge/2".to_owned(),
        location: Some(Location::new(1, 1)),
    };

    assert_eq!(unknown.to_string(), "No clauses found for 'edge/2' at position 1:1.");

    let non_ground = GroundingError::NonGroundProbabilisticClause { location: None };
    assert!(non_ground.to_string().ends_with('.'));
}

#[test]
fn unification_failure_is_not_an_error() {
    assert_eq!(
        call("=", &[atom("a"), atom("b")]),
        Ok(Outcome::Solutions(vec![]))
    );
}

#[test]
fn size_limit_errors_name_the_call() {
    let limited = BuiltinsBuilder::new()
        .with_flags(Flags {
            max_generated: 10,
            ..Flags::default()
        })
        .with_locations(|marker: usize| Some(Location::new(marker, 7)))
        .build();

    let err = limited
        .call(
            BuiltInClauseType::Between,
            &[int(1), int(11), var(0)],
            CallSite::at(2),
        )
        .unwrap_err();

    assert_eq!(err.location(), Some(Location::new(2, 7)));
    assert_eq!(
        err.to_string(),
        "Call to 'between/3' would generate 11 terms, more than the limit of 10 at position 2:7."
    );
}

#[test]
fn wrong_arity_names_the_builtin() {
    let err = Builtins::new()
        .call(BuiltInClauseType::Unify, &[atom("a")], CallSite::default())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid argument types for call to '=/2': arguments: (a), expected: 2 arguments."
    );
}
