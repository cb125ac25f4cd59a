use proptest::prelude::*;

use plp_builtins::*;

use std::cmp::Ordering;

fn raw_number(n: i64, float: bool) -> Term {
    let number = if float {
        Number::from(n as f64 / 2.0)
    } else {
        Number::from(n)
    };

    Term::Constant(Constant::Number(number))
}

fn generate_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        Just(Term::fresh()),
        (0usize..4).prop_map(Term::var),
        (-3i64..4).prop_map(Term::integer),
        (-3i64..4).prop_map(|n| Term::float(n as f64 / 2.0)),
        // negative constants stored without the `-/1` wrapper, and the
        // wrapper around zero or around an already negative constant.
        (-3i64..4, any::<bool>()).prop_map(|(n, float)| raw_number(n, float)),
        (-3i64..1, any::<bool>())
            .prop_map(|(n, float)| Term::compound("-", [raw_number(n, float)])),
        Just(Term::integer(i64::MIN)),
        "[a-c]{0,2}".prop_map(Term::string),
        "[a-c]{1,2}".prop_map(Term::atom),
        Just(Term::empty_list()),
    ];

    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            ("[f-g]", prop::collection::vec(inner.clone(), 1..4))
                .prop_map(|(name, args)| Term::compound(name, args)),
            prop::collection::vec(inner, 0..4).prop_map(Term::list),
        ]
    })
}

proptest! {
    #![proptest_config(
        if cfg!(miri) {
            ProptestConfig {
                failure_persistence: None,
                cases: 5,
                ..ProptestConfig::default()
            }
        } else {
            ProptestConfig::default()
        }
    )]

    #[test]
    fn order_is_antisymmetric(a in generate_term(), b in generate_term()) {
        prop_assert_eq!(compare_terms(&a, &b), compare_terms(&b, &a).reverse());
    }

    #[test]
    fn order_is_reflexive(a in generate_term()) {
        prop_assert_eq!(compare_terms(&a, &a), Ordering::Equal);
    }

    #[test]
    fn order_is_transitive(
        a in generate_term(),
        b in generate_term(),
        c in generate_term(),
    ) {
        let ab = compare_terms(&a, &b);
        let bc = compare_terms(&b, &c);

        if ab != Ordering::Greater && bc != Ordering::Greater {
            prop_assert_ne!(compare_terms(&a, &c), Ordering::Greater);
        }

        if ab == Ordering::Equal && bc == Ordering::Equal {
            prop_assert_eq!(compare_terms(&a, &c), Ordering::Equal);
        }
    }


    #[test]
    fn unify_is_idempotent(a in generate_term()) {
        let unified = unify_value(&a, &a);
        prop_assert_eq!(unified, Ok(a));
    }

    #[test]
    fn unify_is_commutative(a in generate_term(), b in generate_term()) {
        let ab = unify_value(&a, &b);
        let ba = unify_value(&b, &a);

        prop_assert_eq!(ab.is_ok(), ba.is_ok());

        if let (Ok(ab), Ok(ba)) = (ab, ba) {
            prop_assert_eq!(compare_terms(&ab, &ba), Ordering::Equal);
        }
    }

    #[test]
    fn sort_output_is_strictly_ascending(terms in prop::collection::vec(generate_term(), 0..8)) {
        let sorted = sort_unique(terms);

        for pair in sorted.windows(2) {
            prop_assert_eq!(compare_terms(&pair[0], &pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn sort_keeps_every_element(terms in prop::collection::vec(generate_term(), 0..8)) {
        let sorted = sort_unique(terms.clone());

        for term in &terms {
            prop_assert!(sorted.iter().any(|s| compare_terms(s, term) == Ordering::Equal));
        }
    }
}
