#![allow(clippy::panic)]

use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use rdf_interop_model::{
    BlankNodeScope, Iri, Literal, Quad, RdfFactory, SimpleRdf, Term, Triple,
};
use std::collections::HashSet;
use std::hint::black_box;

fn hash_quads(c: &mut Criterion) {
    let quads = generate_quads(10_000).collect::<Vec<_>>();
    c.bench_function("Quad: insert into HashSet", |b| {
        b.iter(|| {
            let set = quads.iter().collect::<HashSet<_>>();
            assert_eq!(set.len(), quads.len());
        });
    });
}

fn ntriples_form(c: &mut Criterion) {
    let scope = BlankNodeScope::new();
    let triples = (0..1_000)
        .map(|i| {
            Triple::new(
                rdf_interop_model::BlankNode::new(scope, format!("node_{i}")),
                Iri::new_unchecked(format!("http://example.com/predicate{i}")),
                Literal::new_language_tagged_unchecked(format!("value \"{i}\"\n"), "en-US"),
            )
        })
        .collect::<Vec<_>>();
    c.bench_function("Triple: N-Triples form", |b| {
        b.iter(|| {
            for triple in &triples {
                black_box(triple.ntriples_form());
            }
        });
    });
}

fn create_terms(c: &mut Criterion) {
    let factory = SimpleRdf::new();
    c.bench_function("SimpleRdf: create validated terms", |b| {
        b.iter(|| {
            let iri = factory.create_iri("http://example.com/s").unwrap();
            let literal = factory.create_language_literal("hi", "en-US").unwrap();
            black_box(factory.create_triple(iri.clone(), iri, literal));
        });
    });
}

criterion_group!(terms, hash_quads, ntriples_form, create_terms);
criterion_main!(terms);

fn generate_quads(count: u64) -> impl Iterator<Item = Quad> {
    (0..count).map(|i| {
        let subject = format!("http://example.com/subject{i}");
        let predicate = format!("http://example.com/predicate{i}");
        let object = format!("http://example.com/object{i}");
        Quad::new(
            Iri::new_unchecked(subject),
            Iri::new_unchecked(predicate),
            Term::Iri(Iri::new_unchecked(object)),
            None::<rdf_interop_model::BlankNodeOrIri>,
        )
    })
}
