//! The equality and hashing contract shared by every implementation of the term model.
//!
//! Equality and hashing are defined once, over the projected attributes of terms and statements.
//! Owned values, borrowed views and backend wrappers all delegate to the functions in this module,
//! so two implementations necessarily agree on whether two values are equal and on their hash.
//!
//! The hash values are normative:
//!
//! - strings hash with SipHash-2-4 under the all-zero key ([`string_hash`]),
//! - components are combined left to right with `h = 31 * h + c`, starting from `0`
//!   ([`combine_hashes`]). For a triple this is `31 * (31 * hs + hp) + ho`,
//! - the default graph hashes to `0`.
//!
//! Every [`Hash`](std::hash::Hash) implementation of the model writes exactly one `u64`, the
//! contract hash, so values from different implementations can share one hash-based container.

use crate::{
    BlankNodeOrIriRef, BlankNodeRef, GraphNameRef, IriRef, LiteralRef, QuadRef, TermRef,
    TripleRef,
};
use siphasher::sip::SipHasher24;
use std::hash::Hasher;
use uuid::Uuid;

/// The hash of a string: SipHash-2-4 with the all-zero key over the UTF-8 bytes.
pub fn string_hash(value: &str) -> u64 {
    let mut hasher = SipHasher24::new();
    hasher.write(value.as_bytes());
    hasher.finish()
}

/// Combines component hashes with `h = 31 * h + c`, starting from `0`.
pub fn combine_hashes(hashes: impl IntoIterator<Item = u64>) -> u64 {
    hashes
        .into_iter()
        .fold(0, |acc: u64, hash| acc.wrapping_mul(31).wrapping_add(hash))
}

pub fn iri_eq(a: IriRef<'_>, b: IriRef<'_>) -> bool {
    a.as_str() == b.as_str()
}

pub fn iri_hash(iri: IriRef<'_>) -> u64 {
    string_hash(iri.as_str())
}

/// Blank nodes are equal iff they come from the same scope and share the same identifier.
pub fn blank_node_eq(a: BlankNodeRef<'_>, b: BlankNodeRef<'_>) -> bool {
    a.scope() == b.scope() && a.id() == b.id()
}

/// Combines the hyphenated lowercase scope UUID with the identifier.
pub fn blank_node_hash(node: BlankNodeRef<'_>) -> u64 {
    let mut buffer = Uuid::encode_buffer();
    let scope = node.scope().as_uuid().as_hyphenated().encode_lower(&mut buffer);
    combine_hashes([string_hash(scope), string_hash(node.id())])
}

/// Literals are equal iff their lexical forms and datatypes are equal and their language tags are
/// both absent or equal ignoring ASCII case.
pub fn literal_eq(a: LiteralRef<'_>, b: LiteralRef<'_>) -> bool {
    a.value() == b.value()
        && iri_eq(a.datatype(), b.datatype())
        && match (a.language(), b.language()) {
            (None, None) => true,
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
}

pub fn literal_hash(literal: LiteralRef<'_>) -> u64 {
    let language = literal
        .language()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    combine_hashes([
        string_hash(literal.value()),
        string_hash(literal.datatype().as_str()),
        string_hash(&language),
    ])
}

pub fn blank_node_or_iri_eq(a: BlankNodeOrIriRef<'_>, b: BlankNodeOrIriRef<'_>) -> bool {
    match (a, b) {
        (BlankNodeOrIriRef::Iri(a), BlankNodeOrIriRef::Iri(b)) => iri_eq(a, b),
        (BlankNodeOrIriRef::BlankNode(a), BlankNodeOrIriRef::BlankNode(b)) => blank_node_eq(a, b),
        _ => false,
    }
}

pub fn blank_node_or_iri_hash(node: BlankNodeOrIriRef<'_>) -> u64 {
    match node {
        BlankNodeOrIriRef::Iri(iri) => iri_hash(iri),
        BlankNodeOrIriRef::BlankNode(node) => blank_node_hash(node),
    }
}

pub fn term_eq(a: TermRef<'_>, b: TermRef<'_>) -> bool {
    match (a, b) {
        (TermRef::Iri(a), TermRef::Iri(b)) => iri_eq(a, b),
        (TermRef::BlankNode(a), TermRef::BlankNode(b)) => blank_node_eq(a, b),
        (TermRef::Literal(a), TermRef::Literal(b)) => literal_eq(a, b),
        _ => false,
    }
}

/// A term hashes like the variant it holds.
pub fn term_hash(term: TermRef<'_>) -> u64 {
    match term {
        TermRef::Iri(iri) => iri_hash(iri),
        TermRef::BlankNode(node) => blank_node_hash(node),
        TermRef::Literal(literal) => literal_hash(literal),
    }
}

pub fn graph_name_eq(a: GraphNameRef<'_>, b: GraphNameRef<'_>) -> bool {
    match (a, b) {
        (GraphNameRef::DefaultGraph, GraphNameRef::DefaultGraph) => true,
        (GraphNameRef::Named(a), GraphNameRef::Named(b)) => blank_node_or_iri_eq(a, b),
        _ => false,
    }
}

pub fn graph_name_hash(graph_name: GraphNameRef<'_>) -> u64 {
    match graph_name {
        GraphNameRef::DefaultGraph => 0,
        GraphNameRef::Named(node) => blank_node_or_iri_hash(node),
    }
}

pub fn triple_eq(a: TripleRef<'_>, b: TripleRef<'_>) -> bool {
    blank_node_or_iri_eq(a.subject(), b.subject())
        && iri_eq(a.predicate(), b.predicate())
        && term_eq(a.object(), b.object())
}

/// `31 * (31 * hs + hp) + ho`
pub fn triple_hash(triple: TripleRef<'_>) -> u64 {
    combine_hashes([
        blank_node_or_iri_hash(triple.subject()),
        iri_hash(triple.predicate()),
        term_hash(triple.object()),
    ])
}

pub fn quad_eq(a: QuadRef<'_>, b: QuadRef<'_>) -> bool {
    blank_node_or_iri_eq(a.subject(), b.subject())
        && iri_eq(a.predicate(), b.predicate())
        && term_eq(a.object(), b.object())
        && graph_name_eq(a.graph_name(), b.graph_name())
}

/// `31 * (31 * (31 * hs + hp) + ho) + hg`
pub fn quad_hash(quad: QuadRef<'_>) -> u64 {
    combine_hashes([
        blank_node_or_iri_hash(quad.subject()),
        iri_hash(quad.predicate()),
        term_hash(quad.object()),
        graph_name_hash(quad.graph_name()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{rdf, xsd};
    use crate::BlankNodeScope;

    #[test]
    fn combine_is_the_pinned_tuple_hash() {
        let (s, p, o) = (7_u64, 11_u64, 13_u64);
        assert_eq!(combine_hashes([s, p, o]), 31 * (31 * s + p) + o);
        assert_eq!(combine_hashes(std::iter::empty::<u64>()), 0);
    }

    #[test]
    fn string_hash_is_deterministic() {
        assert_eq!(string_hash("http://example.com/"), string_hash("http://example.com/"));
        assert_ne!(string_hash("http://example.com/a"), string_hash("http://example.com/b"));
    }

    #[test]
    fn blank_node_hash_uses_the_hyphenated_scope() {
        let scope = BlankNodeScope::new();
        let expected = combine_hashes([string_hash(&scope.to_string()), string_hash("b1")]);
        assert_eq!(blank_node_hash(BlankNodeRef::new(scope, "b1")), expected);
        assert_eq!(scope.to_string().len(), 36);
    }

    #[test]
    fn literal_hash_ignores_language_case() {
        let a = LiteralRef::new_language_tagged_unchecked("hi", "EN-us");
        let b = LiteralRef::new_language_tagged_unchecked("hi", "en-US");
        assert!(literal_eq(a, b));
        assert_eq!(literal_hash(a), literal_hash(b));
    }

    #[test]
    fn literal_equality_requires_same_datatype() {
        let string = LiteralRef::new_simple("1");
        let integer = LiteralRef::new_typed_unchecked("1", xsd::INTEGER);
        let explicit_string = LiteralRef::new_typed_unchecked("1", xsd::STRING);
        assert!(!literal_eq(string, integer));
        assert!(literal_eq(string, explicit_string));
        assert_eq!(rdf::LANG_STRING.as_str(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString");
    }

    #[test]
    fn blank_nodes_are_scoped() {
        let a = BlankNodeScope::new();
        let b = BlankNodeScope::new();
        assert!(blank_node_eq(BlankNodeRef::new(a, "x"), BlankNodeRef::new(a, "x")));
        assert!(!blank_node_eq(BlankNodeRef::new(a, "x"), BlankNodeRef::new(b, "x")));
        assert!(!blank_node_eq(BlankNodeRef::new(a, "x"), BlankNodeRef::new(a, "y")));
    }

    #[test]
    fn default_graph_hashes_to_zero() {
        assert_eq!(graph_name_hash(GraphNameRef::DefaultGraph), 0);
    }
}
