use hexastore_model::{
    BlankNodeFactory, DecodedTerm, Iri, NumericDatatypes, NumericKind, NumericLiteral, Term,
    TermKind,
};
use oxrdf::{BlankNode, Literal, NamedNode};

fn decode(term: &DecodedTerm, factory: &mut BlankNodeFactory) -> Term {
    Term::from_decoded(term.as_ref(), factory, &NumericDatatypes::default()).unwrap()
}

#[test]
fn test_decoded_terms_round_trip() {
    let mut factory = BlankNodeFactory::new();
    let terms = [
        DecodedTerm::from(NamedNode::new_unchecked("http://example.com/s")),
        Literal::new_simple_literal("plain").into(),
        Literal::new_language_tagged_literal_unchecked("chat", "fr").into(),
        Literal::new_typed_literal("42", oxrdf::vocab::xsd::INTEGER).into(),
        Literal::new_typed_literal("2.5", oxrdf::vocab::xsd::DECIMAL).into(),
        Literal::new_typed_literal("2020-01-01", oxrdf::vocab::xsd::DATE).into(),
    ];

    for term in &terms {
        let decoded = decode(term, &mut factory);
        assert_eq!(decoded.to_decoded().as_ref(), Some(term));
    }
}

#[test]
fn test_blank_node_labels_share_identity() {
    let mut factory = BlankNodeFactory::new();
    let b0 = DecodedTerm::from(BlankNode::new_unchecked("b0"));
    let b1 = DecodedTerm::from(BlankNode::new_unchecked("b1"));

    let first = decode(&b0, &mut factory);
    let other = decode(&b1, &mut factory);
    let again = decode(&b0, &mut factory);

    assert_eq!(first, again);
    assert_ne!(first, other);
    assert!(first.try_cmp(&other).is_ok());

    let mut other_factory = BlankNodeFactory::new();
    let foreign = decode(&b0, &mut other_factory);
    assert_ne!(first, foreign);
    assert!(first.try_cmp(&foreign).is_err());
}

#[test]
fn test_numeric_literals_are_decoded_canonically() {
    let mut factory = BlankNodeFactory::new();
    let source = DecodedTerm::from(Literal::new_typed_literal("01", oxrdf::vocab::xsd::INT));
    let term = decode(&source, &mut factory);

    assert_eq!(
        term.to_decoded(),
        Some(Literal::new_typed_literal("1", oxrdf::vocab::xsd::INTEGER).into())
    );
}

#[test]
fn test_custom_numeric_datatype() {
    let datatype = Iri::new_unchecked("http://example.com/celsius");
    let registry = NumericDatatypes::default().with_datatype(datatype.clone(), NumericKind::Decimal);

    let term = Term::literal("21.5", &datatype, &registry).unwrap();
    assert_eq!(term.kind(), TermKind::Numeric);
    assert_eq!(
        term.as_numeric().map(NumericLiteral::kind),
        Some(NumericKind::Decimal)
    );

    let term = Term::literal("21.5", &datatype, &NumericDatatypes::default()).unwrap();
    assert_eq!(term.kind(), TermKind::TypedLiteral);
}

#[test]
fn test_install_registry_once() {
    let datatype = Iri::new_unchecked("http://example.com/count");
    NumericDatatypes::default()
        .with_datatype(datatype.clone(), NumericKind::Integer)
        .install()
        .unwrap();

    assert_eq!(
        NumericDatatypes::global().kind_of(&datatype),
        Some(NumericKind::Integer)
    );
    assert!(NumericDatatypes::empty().install().is_err());
}
