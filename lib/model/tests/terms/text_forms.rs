use hexastore_model::{
    BlankNode, BlankNodeFactory, Iri, Key, LangTaggedString, Namespace, NumericLiteral,
    PlainString, Term, TypedLiteral, Variable,
};

#[test]
fn test_iri_text_form_and_bytes() {
    let iri = Iri::new("http://example.org/x").unwrap();
    insta::assert_snapshot!(format!("{iri:?}"), @r#"IRI(value="http://example.org/x")"#);
    assert_eq!(iri.to_bytes(), b"http://example.org/x");
    assert_eq!(Iri::from_utf8(iri.to_bytes()), Ok(iri));
}

#[test]
fn test_literal_text_forms() {
    let lang_tagged = LangTaggedString::new("hi", "en").unwrap();
    insta::assert_snapshot!(lang_tagged, @r#""hi"@en"#);

    let typed = TypedLiteral::new(
        "42",
        Iri::new_unchecked("http://www.w3.org/2001/XMLSchema#integer"),
    );
    insta::assert_snapshot!(typed, @r#""42"^^http://www.w3.org/2001/XMLSchema#integer"#);
    insta::assert_snapshot!(
        format!("{typed:?}"),
        @r#"TypedLiteral(value="42", datatype=IRI(value="http://www.w3.org/2001/XMLSchema#integer"))"#
    );

    insta::assert_snapshot!(Variable::new("x"), @"x");
    insta::assert_snapshot!(format!("{:?}", PlainString::new("a\"b")), @r#""a\"b""#);
}

#[test]
fn test_blank_node_text_form() {
    let mut factory = BlankNodeFactory::with_initial_id(3);
    let node = factory.fresh().unwrap();
    let expected = format!(
        "BlankNode(id=3, factory=BlankNodeScope({}))",
        factory.scope().id()
    );
    assert_eq!(format!("{node:?}"), expected);
    assert_eq!(node, BlankNode::new(factory.scope(), 3));
}

#[test]
fn test_key_text_forms() {
    let key = Key::tuple([
        Term::from(Iri::new_unchecked("http://example.org/s")).into(),
        Term::from(NumericLiteral::from(42)).into(),
        Term::Null.into(),
    ]);
    insta::assert_snapshot!(key, @"(http://example.org/s, 42, null)");
    insta::assert_snapshot!(
        format!("{key:?}"),
        @r#"(IRI(value="http://example.org/s"), NumericLiteral(value=42, kind=integer), Null)"#
    );
}

#[test]
fn test_namespace_text_form() {
    let ex = Namespace::new("ex", Iri::new_unchecked("http://example.org/"));
    insta::assert_snapshot!(ex, @"ex: <http://example.org/>");
    insta::assert_snapshot!(format!("{:?}", ex.term("x")), @r#"IRI(value="http://example.org/x")"#);
}
