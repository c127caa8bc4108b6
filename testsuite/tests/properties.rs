#![cfg(test)]

use proptest::prelude::*;
use rdf_interop_model::conformance::{
    check_quad_pair, check_term_pair, check_term_transitivity, check_triple_pair,
};
use rdf_interop_model::vocab::rdf;
use rdf_interop_model::{
    quads_equal, terms_equal, triples_equal, BlankNodeScope, InvalidTerm, Iri, Literal,
    RdfFactory, RdfLiteral, RdfResult, RdfTerm, SimpleRdf,
};
use rdf_interop_oxrdf::OxRdf;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug)]
enum SubjectSpec {
    Iri(String),
    BlankNode(String),
}

#[derive(Clone, Debug)]
enum TermSpec {
    Subject(SubjectSpec),
    Simple(String),
    Language(String, String),
    Typed(String, String),
}

type QuadSpec = (Option<SubjectSpec>, SubjectSpec, String, TermSpec);

fn iri() -> impl Strategy<Value = String> {
    "[ab]{1,2}".prop_map(|path| format!("http://example.com/{path}"))
}

fn datatype() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("http://www.w3.org/2001/XMLSchema#string".to_owned()),
        Just("http://www.w3.org/2001/XMLSchema#integer".to_owned()),
        iri(),
    ]
}

fn language() -> impl Strategy<Value = String> {
    "(en|EN|fr|Fr)(-us|-US|-gb)?"
}

fn subject() -> impl Strategy<Value = SubjectSpec> {
    prop_oneof![
        iri().prop_map(SubjectSpec::Iri),
        "[ab]".prop_map(SubjectSpec::BlankNode),
    ]
}

fn term() -> impl Strategy<Value = TermSpec> {
    prop_oneof![
        subject().prop_map(TermSpec::Subject),
        "[ab]{0,2}".prop_map(TermSpec::Simple),
        ("[ab]{0,2}", language())
            .prop_map(|(value, language)| TermSpec::Language(value, language)),
        ("[ab]{0,2}", datatype())
            .prop_map(|(value, datatype)| TermSpec::Typed(value, datatype)),
    ]
}

fn build_subject<F: RdfFactory>(
    factory: &F,
    spec: &SubjectSpec,
) -> RdfResult<F::BlankNodeOrIri> {
    Ok(match spec {
        SubjectSpec::Iri(iri) => factory.create_iri(iri)?.into(),
        SubjectSpec::BlankNode(label) => factory.create_blank_node_with_label(label).into(),
    })
}

fn build_term<F: RdfFactory>(factory: &F, spec: &TermSpec) -> RdfResult<F::Term> {
    Ok(match spec {
        TermSpec::Subject(subject) => build_subject(factory, subject)?.into(),
        TermSpec::Simple(value) => factory.create_literal(value).into(),
        TermSpec::Language(value, language) => {
            factory.create_language_literal(value, language)?.into()
        }
        TermSpec::Typed(value, datatype) => factory
            .create_typed_literal(value, factory.create_iri(datatype)?)?
            .into(),
    })
}

fn build_quad<F: RdfFactory>(
    factory: &F,
    quad: &QuadSpec,
) -> RdfResult<F::Quad> {
    let (graph_name, subject, predicate, object) = quad;
    Ok(factory.create_quad(
        graph_name
            .as_ref()
            .map(|graph_name| build_subject(factory, graph_name))
            .transpose()?,
        build_subject(factory, subject)?,
        factory.create_iri(predicate)?,
        build_term(factory, object)?,
    ))
}

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Two factories of different implementations that share a blank node scope.
fn factories() -> (SimpleRdf, OxRdf) {
    let scope = BlankNodeScope::new();
    (SimpleRdf::with_scope(scope), OxRdf::with_scope(scope))
}

proptest! {
    #[test]
    fn term_equality_is_an_equivalence(x in term(), y in term(), z in term()) {
        let (simple, ox) = factories();
        let (a, b, c) = (build_term(&simple, &x)?, build_term(&ox, &y)?, build_term(&simple, &z)?);
        prop_assert!(terms_equal(&a, &a));
        prop_assert_eq!(terms_equal(&a, &b), terms_equal(&b, &a));
        prop_assert_eq!(check_term_transitivity(&a, &b, &c), Ok(()));
        prop_assert_eq!(check_term_pair(&a, &build_term(&ox, &x)?), Ok(()));
    }

    #[test]
    fn equal_terms_have_equal_hashes(x in term(), y in term()) {
        let (simple, ox) = factories();
        let (a, b) = (build_term(&simple, &x)?, build_term(&ox, &y)?);
        if terms_equal(&a, &b) {
            prop_assert_eq!(a.contract_hash(), b.contract_hash());
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn triple_equality_is_component_equality(
        s in (subject(), subject()),
        p in (iri(), iri()),
        o in (term(), term()),
    ) {
        let (simple, ox) = factories();
        let t1 = simple.create_triple(
            build_subject(&simple, &s.0)?,
            simple.create_iri(&p.0)?,
            build_term(&simple, &o.0)?,
        );
        let t2 = ox.create_triple(
            build_subject(&ox, &s.1)?,
            ox.create_iri(&p.1)?,
            build_term(&ox, &o.1)?,
        );
        let components_equal = terms_equal(&build_subject(&simple, &s.0)?, &build_subject(&ox, &s.1)?)
            && p.0 == p.1
            && terms_equal(&build_term(&simple, &o.0)?, &build_term(&ox, &o.1)?);
        prop_assert_eq!(triples_equal(&t1, &t2), components_equal);
        if components_equal {
            prop_assert_eq!(check_triple_pair(&t1, &t2), Ok(()));
        }
    }

    #[test]
    fn quad_equality_is_component_equality(
        x in (proptest::option::of(subject()), subject(), iri(), term()),
        y in (proptest::option::of(subject()), subject(), iri(), term()),
    ) {
        let (simple, ox) = factories();
        let (q1, q2) = (build_quad(&simple, &x)?, build_quad(&ox, &y)?);
        let graph_names_equal = match (&x.0, &y.0) {
            (None, None) => true,
            (Some(a), Some(b)) => terms_equal(&build_subject(&simple, a)?, &build_subject(&ox, b)?),
            _ => false,
        };
        let triple1 = simple.create_triple(
            build_subject(&simple, &x.1)?,
            simple.create_iri(&x.2)?,
            build_term(&simple, &x.3)?,
        );
        let triple2 = ox.create_triple(
            build_subject(&ox, &y.1)?,
            ox.create_iri(&y.2)?,
            build_term(&ox, &y.3)?,
        );
        let components_equal = graph_names_equal && triples_equal(&triple1, &triple2);
        prop_assert_eq!(quads_equal(&q1, &q2), components_equal);
        if components_equal {
            prop_assert_eq!(check_quad_pair(&q1, &q2), Ok(()));
        }
    }

    #[test]
    fn iris_are_equal_across_factories(iri in iri()) {
        let a = SimpleRdf::new().create_iri(&iri)?;
        let b = OxRdf::new().create_iri(&iri)?;
        prop_assert!(terms_equal(&a, &b));
        prop_assert_eq!(a.contract_hash(), b.contract_hash());
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn blank_nodes_are_scoped_to_their_factory(label in "[a-z][a-z0-9]{0,4}") {
        let pairs = [
            terms_equal(
                &SimpleRdf::new().create_blank_node_with_label(&label),
                &SimpleRdf::new().create_blank_node_with_label(&label),
            ),
            terms_equal(
                &SimpleRdf::new().create_blank_node_with_label(&label),
                &OxRdf::new().create_blank_node_with_label(&label),
            ),
            terms_equal(
                &OxRdf::new().create_blank_node_with_label(&label),
                &OxRdf::new().create_blank_node_with_label(&label),
            ),
        ];
        prop_assert_eq!(pairs, [false; 3]);
    }

    #[test]
    fn language_tags_ignore_case(value in "[ab]{0,4}", language in language()) {
        let (simple, ox) = factories();
        let lower = simple.create_language_literal(&value, &language.to_ascii_lowercase())?;
        let upper = ox.create_language_literal(&value, &language.to_ascii_uppercase())?;
        prop_assert_eq!(check_term_pair(&lower, &upper), Ok(()));
        let upper_language = language.to_ascii_uppercase();
        let lower_language = language.to_ascii_lowercase();
        prop_assert_eq!(upper.language_tag(), Some(upper_language.as_str()));
        prop_assert_eq!(lower.language_tag(), Some(lower_language.as_str()));
    }

    #[test]
    fn language_tags_require_lang_string(value in "[ab]{0,4}", language in language(), datatype in datatype()) {
        let result = Literal::new(value, Some(Iri::new(datatype)?), Some(language.as_str()));
        let is_datatype_mismatch = matches!(result, Err(InvalidTerm::DatatypeMismatch { .. }));
        prop_assert!(is_datatype_mismatch);
    }

    #[test]
    fn accessors_are_stable(x in term()) {
        let (simple, ox) = factories();
        let terms = [
            build_term(&simple, &x)?.as_term_ref().into_owned(),
            build_term(&ox, &x)?.as_term_ref().into_owned(),
        ];
        for term in terms {
            prop_assert_eq!(term.as_term_ref(), term.as_term_ref());
            prop_assert_eq!(term.ntriples_form(), term.ntriples_form());
            prop_assert_eq!(term.contract_hash(), term.contract_hash());
        }
    }
}

#[test]
fn lang_string_datatype_is_accepted_with_a_language_tag() -> RdfResult<()> {
    let literal = Literal::new("chat", Some(rdf::LANG_STRING.into_owned()), Some("FR"))?;
    assert_eq!(literal.language(), Some("FR"));
    assert!(terms_equal(
        &literal,
        &OxRdf::new().create_language_literal("chat", "fr")?
    ));
    Ok(())
}
