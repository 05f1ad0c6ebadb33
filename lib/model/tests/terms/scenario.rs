use hexastore_model::{
    ConstructionError, Iri, Key, LangTaggedString, PlainString, Term, TermKind, Variable,
};
use std::cmp::Ordering;

#[test]
fn test_typed_literal_requires_iri_datatype() {
    let result = Term::typed_literal("42", PlainString::new("int").into());
    assert!(matches!(
        result,
        Err(ConstructionError::DatatypeNotIri {
            found: TermKind::PlainString
        })
    ));

    let datatype = Iri::new("http://www.w3.org/2001/XMLSchema#integer").unwrap();
    let literal = Key::from(Term::typed_literal("42", datatype.into()).unwrap());
    assert_eq!(literal.kind(), TermKind::TypedLiteral);

    let lang_tagged = Key::from(Term::from(LangTaggedString::new("zzz", "en").unwrap()));
    let variable = Key::from(Term::from(Variable::new("")));
    assert_eq!(lang_tagged.try_cmp(&literal), Ok(Ordering::Less));
    assert_eq!(literal.try_cmp(&variable), Ok(Ordering::Less));
    assert_eq!(TermKind::LangTaggedString.rank(), 5);
    assert_eq!(TermKind::TypedLiteral.rank(), 9);
    assert_eq!(TermKind::Variable.rank(), 10);
}

#[test]
fn test_invalid_parts_are_rejected() {
    assert!(matches!(
        Iri::new("not an iri"),
        Err(ConstructionError::InvalidIri(_))
    ));
    assert!(matches!(
        LangTaggedString::new("hi", "en us"),
        Err(ConstructionError::InvalidLanguageTag { .. })
    ));
}
