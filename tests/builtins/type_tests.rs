use crate::helper::*;

use plp_builtins::*;

use maplit::btreeset;

use std::collections::BTreeSet;

fn samples() -> Vec<(&'static str, Term)> {
    vec![
        ("var", var(0)),
        ("atom", atom("a")),
        ("integer", int(3)),
        ("negative", int(-3)),
        ("float", Term::float(2.5)),
        ("string", Term::string("s")),
        ("compound", Term::compound("f", [var(1)])),
        ("list", Term::list([int(1)])),
        ("empty_list", Term::empty_list()),
    ]
}

/// The names of the samples accepted by the type test `name/1`.
fn accepted_by(name: &str) -> BTreeSet<&'static str> {
    samples()
        .into_iter()
        .filter(|(_, term)| holds(name, &[term.clone()]))
        .map(|(label, _)| label)
        .collect()
}

#[test]
fn type_tests_classify_terms() {
    assert_eq!(accepted_by("var"), btreeset! {"var"});
    assert_eq!(accepted_by("nonvar").len(), samples().len() - 1);
    assert_eq!(accepted_by("atom"), btreeset! {"atom", "empty_list"});
    assert_eq!(accepted_by("integer"), btreeset! {"integer", "negative"});
    assert_eq!(accepted_by("float"), btreeset! {"float"});
    assert_eq!(accepted_by("number"), btreeset! {"integer", "negative", "float"});
    assert_eq!(
        accepted_by("atomic"),
        btreeset! {"atom", "integer", "negative", "float", "string", "empty_list"}
    );
    assert_eq!(accepted_by("compound"), btreeset! {"compound", "list"});
    assert_eq!(
        accepted_by("callable"),
        btreeset! {"atom", "compound", "list", "empty_list"}
    );
    assert_eq!(
        accepted_by("ground"),
        btreeset! {"atom", "integer", "negative", "float", "string", "list", "empty_list"}
    );
    assert_eq!(accepted_by("is_list"), btreeset! {"list", "empty_list"});
}

#[test]
fn simple_and_primitive() {
    assert_eq!(
        accepted_by("simple"),
        btreeset! {"var", "atom", "integer", "negative", "float", "string", "empty_list"}
    );
    assert_eq!(
        accepted_by("primitive"),
        btreeset! {"atom", "integer", "negative", "float", "string", "empty_list"}
    );
}

#[test]
fn unsupported_types_are_never_matched() {
    assert!(accepted_by("rational").is_empty());
    assert!(accepted_by("dbreference").is_empty());
}
