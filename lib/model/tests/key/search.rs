use crate::random_keys;
use hexastore_model::{
    bisect_left, bisect_right, insert_sorted, sort_keys, BlankNode, BlankNodeScope,
    IncomparableError, Key, Term, Triple, TriplePermutation, Variable,
};
use std::cmp::Ordering;

#[test]
fn test_bisect_finds_equal_ranges() {
    let mut keys = random_keys(300);
    sort_keys(&mut keys).unwrap();

    for key in &keys {
        let left = bisect_left(&keys, key).unwrap();
        let right = bisect_right(&keys, key).unwrap();
        let equal = keys.iter().filter(|other| *other == key).count();

        assert_eq!(right - left, equal, "{key:?}");
        assert!(keys[left..right].iter().all(|other| other == key));
    }
}

#[test]
fn test_insert_sorted_matches_sort() {
    let keys = random_keys(200);
    let mut inserted = Vec::new();
    for key in &keys {
        insert_sorted(&mut inserted, key.clone()).unwrap();
    }

    let mut sorted = keys;
    sort_keys(&mut sorted).unwrap();
    assert_eq!(inserted, sorted);
}

#[test]
fn test_range_scan_over_spo_index() {
    let scope = BlankNodeScope::new();
    let node = |id| Term::from(BlankNode::new(&scope, id));
    let mut index = Vec::new();
    for subject in 0..4 {
        for predicate in 0..3 {
            let triple = Triple::new(node(subject), node(10 + predicate), Term::Null);
            insert_sorted(&mut index, triple.to_key(TriplePermutation::SPO)).unwrap();
        }
    }

    // All triples with the subject 2 are between (2, null, null) and (2, ?max, ?max).
    let lower = Key::tuple([node(2).into(), Term::Null.into(), Term::Null.into()]);
    let upper = Key::tuple([
        node(2).into(),
        Term::from(Variable::new("\u{10ffff}")).into(),
        Term::from(Variable::new("\u{10ffff}")).into(),
    ]);
    let start = bisect_left(&index, &lower).unwrap();
    let end = bisect_right(&index, &upper).unwrap();

    assert_eq!(end - start, 3);
    for key in &index[start..end] {
        let triple = Triple::from_key(key, TriplePermutation::SPO).unwrap();
        assert_eq!(triple.subject, node(2));
    }
    assert_eq!(
        index[start].try_cmp(&index[end - 1]),
        Ok(Ordering::Less)
    );
}

#[test]
fn test_insert_into_index_of_other_arity_fails() {
    let mut index = vec![Key::tuple([Term::Null.into(), Term::Null.into()])];
    let result = insert_sorted(&mut index, Key::tuple([Term::Null.into()]));

    assert_eq!(
        result,
        Err(IncomparableError::ArityMismatch { lhs: 1, rhs: 2 })
    );
    assert_eq!(index.len(), 1);
}
