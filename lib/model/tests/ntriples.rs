#![cfg(test)]

use rdf_interop_model::vocab::xsd;
use rdf_interop_model::{
    BlankNode, BlankNodeScope, GraphName, Iri, Literal, Quad, RdfResult, RdfTerm, Term, Triple,
};

#[test]
fn terms() -> RdfResult<()> {
    assert_eq!(
        Iri::new("http://example/a")?.ntriples_form(),
        "<http://example/a>"
    );
    assert_eq!(
        BlankNode::new(BlankNodeScope::new(), "b1").ntriples_form(),
        "_:b1"
    );
    assert_eq!(
        Literal::new_language_tagged("hello", "en")?.ntriples_form(),
        "\"hello\"@en"
    );
    assert_eq!(
        Literal::new_typed("true", xsd::BOOLEAN.into_owned())?.ntriples_form(),
        "\"true\"^^<http://www.w3.org/2001/XMLSchema#boolean>"
    );
    Ok(())
}

#[test]
fn abstract_view_matches_display() -> RdfResult<()> {
    let term = Term::from(Literal::new_simple("line\nbreak \"quoted\""));
    assert_eq!(RdfTerm::ntriples_form(&term), term.to_string());
    assert_eq!(term.to_string(), "\"line\\nbreak \\\"quoted\\\"\"");
    Ok(())
}

#[test]
fn statements() -> RdfResult<()> {
    let scope = BlankNodeScope::new();
    let triple = Triple::new(
        BlankNode::new(scope, "s"),
        Iri::new("http://example/p")?,
        Literal::new_language_tagged("hi", "EN-gb")?,
    );
    assert_eq!(
        triple.ntriples_form(),
        "_:s <http://example/p> \"hi\"@en-gb ."
    );

    let quad = Quad::new(
        Iri::new("http://example/s")?,
        Iri::new("http://example/p")?,
        BlankNode::new(scope, "o"),
        GraphName::from(Iri::new("http://example/g")?),
    );
    assert_eq!(
        quad.ntriples_form(),
        "<http://example/s> <http://example/p> _:o <http://example/g> ."
    );
    assert_eq!(
        quad.as_triple().in_default_graph().ntriples_form(),
        "<http://example/s> <http://example/p> _:o ."
    );
    Ok(())
}
