use crate::random_keys;
use hexastore_model::{
    BlankNode, BlankNodeScope, IncomparableError, Iri, Key, LangTaggedString, NumericLiteral,
    PlainString, Term, TermKind, TypedLiteral, Variable,
};
use std::cmp::Ordering;

fn key(term: impl Into<Term>) -> Key {
    Key::Term(term.into())
}

#[test]
fn test_order_is_antisymmetric_and_consistent_with_equality() {
    let keys = random_keys(200);
    for lhs in &keys {
        for rhs in &keys {
            let ordering = lhs.try_cmp(rhs).unwrap();
            assert_eq!(rhs.try_cmp(lhs).unwrap(), ordering.reverse());
            assert_eq!(ordering == Ordering::Equal, lhs == rhs, "{lhs:?} vs {rhs:?}");
        }
    }
}

#[test]
fn test_order_is_transitive() {
    let keys = random_keys(60);
    for a in &keys {
        for b in &keys {
            if a.try_cmp(b).unwrap() == Ordering::Greater {
                continue;
            }
            for c in &keys {
                if b.try_cmp(c).unwrap() != Ordering::Greater {
                    assert_ne!(
                        a.try_cmp(c).unwrap(),
                        Ordering::Greater,
                        "{a:?} <= {b:?} <= {c:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_kinds_take_precedence_over_payloads() {
    let keys = random_keys(200);
    for lhs in &keys {
        for rhs in &keys {
            if lhs.kind() != rhs.kind() {
                assert_eq!(
                    lhs.try_cmp(rhs).unwrap(),
                    lhs.kind().rank().cmp(&rhs.kind().rank())
                );
            }
        }
    }
}

#[test]
fn test_kind_precedence_ignores_extreme_payloads() {
    let scope = BlankNodeScope::new();
    let smallest_of_each_kind = [
        (TermKind::BlankNode, key(BlankNode::new(&scope, 0))),
        (TermKind::Iri, key(Iri::new_unchecked(""))),
        (TermKind::PlainString, key(PlainString::new(""))),
        (TermKind::LangTaggedString, key(LangTaggedString::new_unchecked("", ""))),
        (TermKind::Numeric, key(NumericLiteral::from(f64::NEG_INFINITY))),
        (
            TermKind::TypedLiteral,
            key(TypedLiteral::new("", Iri::new_unchecked(""))),
        ),
        (TermKind::Variable, key(Variable::new(""))),
    ];
    let largest_of_previous_kinds = [
        key(Term::Null),
        Key::tuple([key(Variable::new("\u{10ffff}"))]),
        key(BlankNode::new(&scope, u64::MAX)),
        key(Iri::new_unchecked("\u{10ffff}")),
        key(PlainString::new("\u{10ffff}")),
        key(LangTaggedString::new_unchecked("\u{10ffff}", "zz")),
        key(NumericLiteral::from(f64::NAN)),
        key(TypedLiteral::new("\u{10ffff}", Iri::new_unchecked("\u{10ffff}"))),
    ];

    for (kind, smallest) in &smallest_of_each_kind {
        for largest in largest_of_previous_kinds
            .iter()
            .filter(|largest| largest.kind() < *kind)
        {
            assert_eq!(largest.try_cmp(smallest), Ok(Ordering::Less), "{kind}");
        }
    }
}

#[test]
fn test_tuples_are_ordered_by_first_difference() {
    let a = key(Iri::new_unchecked("http://example.com/a"));
    let b = key(Iri::new_unchecked("http://example.com/b"));
    let lhs = Key::tuple([a.clone(), a.clone(), b.clone()]);
    let rhs = Key::tuple([a.clone(), b.clone(), a.clone()]);

    assert_eq!(lhs.try_cmp(&rhs), Ok(Ordering::Less));
    assert_eq!(
        lhs.try_cmp(&Key::tuple([a.clone(), a.clone(), b.clone()])),
        Ok(Ordering::Equal)
    );
    assert_eq!(
        lhs.try_cmp(&Key::tuple([a.clone(), a])),
        Err(IncomparableError::ArityMismatch { lhs: 3, rhs: 2 })
    );
}

#[test]
fn test_blank_nodes_are_ordered_within_their_scope() {
    let scope = BlankNodeScope::new();
    let three = key(BlankNode::new(&scope, 3));
    let seven = key(BlankNode::new(&scope, 7));
    assert_eq!(three.try_cmp(&seven), Ok(Ordering::Less));

    let other = key(BlankNode::new(&BlankNodeScope::new(), 3));
    assert_ne!(three, other);
    assert!(matches!(
        three.try_cmp(&other),
        Err(IncomparableError::BlankNodeScopes { .. })
    ));
    assert_eq!(three.partial_cmp(&other), None);
}

#[test]
fn test_literals_interleave_by_value() {
    let dt1 = Iri::new_unchecked("http://example.com/dt1");
    let dt2 = Iri::new_unchecked("http://example.com/dt2");
    let mut keys = vec![
        key(TypedLiteral::new("hj", dt1.clone())),
        key(TypedLiteral::new("hi", dt2.clone())),
        key(TypedLiteral::new("hh", dt2.clone())),
        key(TypedLiteral::new("hi", dt1.clone())),
    ];
    hexastore_model::sort_keys(&mut keys).unwrap();

    assert_eq!(
        keys,
        vec![
            key(TypedLiteral::new("hh", dt2.clone())),
            key(TypedLiteral::new("hi", dt1.clone())),
            key(TypedLiteral::new("hi", dt2)),
            key(TypedLiteral::new("hj", dt1)),
        ]
    );
}

#[test]
fn test_numeric_band_orders_by_value_then_subkind() {
    let mut keys = vec![
        key(NumericLiteral::from(2.0)),
        key(NumericLiteral::from(1)),
        key(NumericLiteral::from(f64::NAN)),
        key(NumericLiteral::from(1.0)),
        key(NumericLiteral::from(f64::NEG_INFINITY)),
        key(NumericLiteral::from(2)),
    ];
    hexastore_model::sort_keys(&mut keys).unwrap();

    let rendered = keys.iter().map(ToString::to_string).collect::<Vec<_>>();
    insta::assert_snapshot!(rendered.join(" "), @"-INF 1 1 2 2 NaN");

    let kinds = keys
        .iter()
        .filter_map(|key| key.as_term()?.as_numeric().map(NumericLiteral::kind))
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>();
    insta::assert_snapshot!(kinds.join(" "), @"float integer float integer float float");
}

#[test]
fn test_sorted_keys_are_non_decreasing() {
    let mut keys = random_keys(500);
    hexastore_model::sort_keys(&mut keys).unwrap();
    for pair in keys.windows(2) {
        assert_ne!(pair[0].try_cmp(&pair[1]), Ok(Ordering::Greater));
    }
}
