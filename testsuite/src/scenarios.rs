use anyhow::{bail, ensure, Result};
use rdf_interop_model::conformance::{
    check_quad_pair, check_term_pair, check_term_transitivity, check_triple_pair,
};
use rdf_interop_model::vocab::{rdf, xsd};
use rdf_interop_model::{
    quads_equal, terms_equal, triples_equal, InvalidTerm, Iri, RdfFactory, RdfLiteral, RdfQuad,
    RdfTerm, RdfTriple,
};

/// A check over two factories, possibly of different implementations.
pub type Scenario<A, B> = fn(&A, &B) -> Result<()>;

/// Every scenario together with its identifier.
pub fn scenarios<A: RdfFactory, B: RdfFactory>() -> [(&'static str, Scenario<A, B>); 9] {
    [
        ("iri-equality", iri_equality),
        ("simple-literal", simple_literal),
        ("language-tag-case", language_tag_case),
        ("triple-equality", triple_equality),
        ("blank-node-scoping", blank_node_scoping),
        ("default-graph", default_graph),
        ("datatype-coupling", datatype_coupling),
        ("invalid-iri", invalid_iri),
        ("transitivity", transitivity),
    ]
}

fn iri_equality<A: RdfFactory, B: RdfFactory>(a: &A, b: &B) -> Result<()> {
    let iri1 = a.create_iri("http://example/s")?;
    let iri2 = b.create_iri("http://example/s")?;
    check_term_pair(&iri1, &iri2)?;
    check_term_pair(&iri1, &a.create_iri("http://example/s")?)?;
    ensure!(
        iri1.ntriples_form() == "<http://example/s>",
        "unexpected N-Triples form {}",
        iri1.ntriples_form()
    );
    ensure!(!terms_equal(&iri1, &b.create_iri("http://example/o")?));
    Ok(())
}

fn simple_literal<A: RdfFactory, B: RdfFactory>(a: &A, b: &B) -> Result<()> {
    let lit1 = a.create_literal("hello");
    ensure!(
        lit1.datatype_iri() == xsd::STRING,
        "expected xsd:string, found {}",
        lit1.datatype_iri()
    );
    ensure!(lit1.language_tag().is_none());
    ensure!(
        lit1.ntriples_form() == "\"hello\"",
        "unexpected N-Triples form {}",
        lit1.ntriples_form()
    );
    check_term_pair(&lit1, &b.create_literal("hello"))?;
    check_term_pair(
        &lit1,
        &b.create_typed_literal("hello", b.create_iri(xsd::STRING.as_str())?)?,
    )?;
    Ok(())
}

fn language_tag_case<A: RdfFactory, B: RdfFactory>(a: &A, b: &B) -> Result<()> {
    let lit2 = a.create_language_literal("hi", "EN")?;
    let lit3 = b.create_language_literal("hi", "en")?;
    check_term_pair(&lit2, &lit3)?;
    ensure!(
        lit2.ntriples_form() == "\"hi\"@en",
        "unexpected N-Triples form {}",
        lit2.ntriples_form()
    );
    ensure!(lit2.datatype_iri() == rdf::LANG_STRING);
    check_term_pair(
        &a.create_language_literal("hi", "en-US")?,
        &b.create_language_literal("hi", "en-us")?,
    )?;
    ensure!(!terms_equal(
        &lit2,
        &b.create_language_literal("hi", "en-GB")?
    ));
    ensure!(!terms_equal(&lit2, &b.create_literal("hi")));
    Ok(())
}

fn triple_equality<A: RdfFactory, B: RdfFactory>(a: &A, b: &B) -> Result<()> {
    let t1 = a.create_triple(
        a.create_iri("http://example/s")?,
        a.create_iri("http://example/p")?,
        a.create_literal("hello"),
    );
    let t2 = b.create_triple(
        b.create_iri("http://example/s")?,
        b.create_iri("http://example/p")?,
        b.create_literal("hello"),
    );
    check_triple_pair(&t1, &t2)?;
    ensure!(
        t1.ntriples_form() == "<http://example/s> <http://example/p> \"hello\" .",
        "unexpected N-Triples form {}",
        t1.ntriples_form()
    );

    let t3 = b.create_triple(
        b.create_iri("http://example/s")?,
        b.create_iri("http://example/p")?,
        b.create_literal("goodbye"),
    );
    ensure!(!triples_equal(&t1, &t3));
    Ok(())
}

fn blank_node_scoping<A: RdfFactory, B: RdfFactory>(a: &A, b: &B) -> Result<()> {
    let b1 = a.create_blank_node();
    let b2 = b.create_blank_node();
    ensure!(!terms_equal(&b1, &b2), "fresh blank nodes {b1:?} and {b2:?} are equal");
    ensure!(!terms_equal(&b1, &a.create_blank_node()));

    let x1 = a.create_blank_node_with_label("x");
    check_term_pair(&x1, &a.create_blank_node_with_label("x"))?;
    let x2 = b.create_blank_node_with_label("x");
    if a.scope() == b.scope() {
        check_term_pair(&x1, &x2)?;
    } else if terms_equal(&x1, &x2) {
        bail!("blank nodes {x1:?} and {x2:?} of distinct factories are equal");
    }
    Ok(())
}

fn default_graph<A: RdfFactory, B: RdfFactory>(a: &A, b: &B) -> Result<()> {
    let q1 = a.create_quad(
        None,
        a.create_iri("http://example/s")?,
        a.create_iri("http://example/p")?,
        a.create_iri("http://example/o")?,
    );
    let q2 = b.create_quad(
        None,
        b.create_iri("http://example/s")?,
        b.create_iri("http://example/p")?,
        b.create_iri("http://example/o")?,
    );
    check_quad_pair(&q1, &q2)?;
    ensure!(
        q1.ntriples_form() == "<http://example/s> <http://example/p> <http://example/o> .",
        "unexpected N-Quads form {}",
        q1.ntriples_form()
    );

    let named = b.create_quad(
        Some(b.create_iri("http://example/g")?.into()),
        b.create_iri("http://example/s")?,
        b.create_iri("http://example/p")?,
        b.create_iri("http://example/o")?,
    );
    ensure!(!quads_equal(&q1, &named));

    let t = a.create_triple(
        a.create_iri("http://example/s")?,
        a.create_iri("http://example/p")?,
        a.create_iri("http://example/o")?,
    );
    ensure!(
        t.as_triple_ref() == q1.as_quad_ref().as_triple(),
        "the triple of a quad must keep its components"
    );
    ensure!(
        q1.as_quad_ref() != t.as_triple_ref(),
        "a quad must never equal a triple"
    );
    Ok(())
}

fn datatype_coupling<A: RdfFactory, B: RdfFactory>(a: &A, b: &B) -> Result<()> {
    for result in [
        a.create_typed_literal("hi", a.create_iri(rdf::LANG_STRING.as_str())?)
            .map(|_| ()),
        b.create_typed_literal("hi", b.create_iri(rdf::LANG_STRING.as_str())?)
            .map(|_| ()),
    ] {
        ensure!(
            matches!(result, Err(InvalidTerm::MissingLanguageTag)),
            "rdf:langString without a language tag was accepted"
        );
    }
    ensure!(matches!(
        rdf_interop_model::Literal::new("hi", Some(Iri::from(xsd::INTEGER)), Some("en")),
        Err(InvalidTerm::DatatypeMismatch { .. })
    ));
    ensure!(matches!(
        a.create_language_literal("hi", "not a tag"),
        Err(InvalidTerm::LanguageTag { .. })
    ));
    Ok(())
}

fn invalid_iri<A: RdfFactory, B: RdfFactory>(a: &A, b: &B) -> Result<()> {
    for iri in ["", "no scheme", "http://example/ space"] {
        ensure!(
            matches!(a.create_iri(iri), Err(InvalidTerm::Iri { .. })),
            "<{iri}> was accepted"
        );
        ensure!(
            matches!(b.create_iri(iri), Err(InvalidTerm::Iri { .. })),
            "<{iri}> was accepted"
        );
    }
    Ok(())
}

fn transitivity<A: RdfFactory, B: RdfFactory>(a: &A, b: &B) -> Result<()> {
    let model = Iri::new("http://example/s")?;
    check_term_transitivity(
        &a.create_iri("http://example/s")?,
        &b.create_iri("http://example/s")?,
        &model,
    )?;
    check_term_transitivity(
        &a.create_language_literal("hi", "EN-us")?,
        &b.create_language_literal("hi", "en-US")?,
        &rdf_interop_model::Literal::new_language_tagged("hi", "en-us")?,
    )?;
    Ok(())
}
