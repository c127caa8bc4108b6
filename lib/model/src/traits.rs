//! Implementation-independent views of terms and statements.
//!
//! Any type that can project itself onto the borrowed model types takes part in the equality and
//! hashing contract. Comparing two views goes through [`contract`](crate::contract), never through
//! an implementation-specific method.

use crate::contract::{quad_eq, quad_hash, term_eq, term_hash, triple_eq, triple_hash};
use crate::{
    BlankNode, BlankNodeOrIri, BlankNodeOrIriRef, BlankNodeRef, BlankNodeScope, GraphNameRef, Iri,
    IriRef, Literal, LiteralRef, Quad, QuadRef, Term, TermKind, TermRef, Triple, TripleRef,
};

/// An RDF term of any kind.
pub trait RdfTerm {
    fn as_term_ref(&self) -> TermRef<'_>;

    fn term_kind(&self) -> TermKind {
        self.as_term_ref().kind()
    }

    /// The N-Triples lexical form of the term.
    fn ntriples_form(&self) -> String {
        self.as_term_ref().to_string()
    }

    fn contract_hash(&self) -> u64 {
        term_hash(self.as_term_ref())
    }
}

/// A term that is allowed in subject and graph name positions.
pub trait RdfBlankNodeOrIri: RdfTerm {
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_>;
}

pub trait RdfIri: RdfBlankNodeOrIri {
    fn as_iri_ref(&self) -> IriRef<'_>;

    fn iri_str(&self) -> &str {
        self.as_iri_ref().as_str()
    }
}

pub trait RdfBlankNode: RdfBlankNodeOrIri {
    fn as_blank_node_ref(&self) -> BlankNodeRef<'_>;

    fn blank_node_scope(&self) -> BlankNodeScope {
        self.as_blank_node_ref().scope()
    }

    fn blank_node_id(&self) -> &str {
        self.as_blank_node_ref().id()
    }
}

pub trait RdfLiteral: RdfTerm {
    fn as_literal_ref(&self) -> LiteralRef<'_>;

    fn lexical_form(&self) -> &str {
        self.as_literal_ref().value()
    }

    fn datatype_iri(&self) -> IriRef<'_> {
        self.as_literal_ref().datatype()
    }

    fn language_tag(&self) -> Option<&str> {
        self.as_literal_ref().language()
    }
}

/// An RDF triple.
pub trait RdfTriple {
    fn as_triple_ref(&self) -> TripleRef<'_>;

    /// The N-Triples line of the triple.
    fn ntriples_form(&self) -> String {
        self.as_triple_ref().to_string()
    }

    fn contract_hash(&self) -> u64 {
        triple_hash(self.as_triple_ref())
    }
}

/// An RDF quad.
pub trait RdfQuad {
    fn as_quad_ref(&self) -> QuadRef<'_>;

    /// The N-Quads line of the quad.
    fn ntriples_form(&self) -> String {
        self.as_quad_ref().to_string()
    }

    fn contract_hash(&self) -> u64 {
        quad_hash(self.as_quad_ref())
    }
}

/// Compares two terms of possibly different implementations.
pub fn terms_equal<A, B>(a: &A, b: &B) -> bool
where
    A: RdfTerm + ?Sized,
    B: RdfTerm + ?Sized,
{
    term_eq(a.as_term_ref(), b.as_term_ref())
}

/// Compares two triples of possibly different implementations.
pub fn triples_equal<A, B>(a: &A, b: &B) -> bool
where
    A: RdfTriple + ?Sized,
    B: RdfTriple + ?Sized,
{
    triple_eq(a.as_triple_ref(), b.as_triple_ref())
}

/// Compares two quads of possibly different implementations.
pub fn quads_equal<A, B>(a: &A, b: &B) -> bool
where
    A: RdfQuad + ?Sized,
    B: RdfQuad + ?Sized,
{
    quad_eq(a.as_quad_ref(), b.as_quad_ref())
}

macro_rules! impl_term_views {
    ($($ty: ty),* $(,)?) => {
        $(
            impl RdfTerm for $ty {
                #[inline]
                fn as_term_ref(&self) -> TermRef<'_> {
                    self.as_ref().into()
                }
            }
        )*
    };
}

impl_term_views!(Iri, BlankNode, Literal, BlankNodeOrIri, Term);

impl RdfTerm for IriRef<'_> {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::Iri(*self)
    }
}

impl RdfTerm for BlankNodeRef<'_> {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::BlankNode(*self)
    }
}

impl RdfTerm for LiteralRef<'_> {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::Literal(*self)
    }
}

impl RdfTerm for BlankNodeOrIriRef<'_> {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        (*self).into()
    }
}

impl RdfTerm for TermRef<'_> {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        *self
    }
}

impl RdfBlankNodeOrIri for Iri {
    #[inline]
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_> {
        BlankNodeOrIriRef::Iri(self.as_ref())
    }
}

impl RdfBlankNodeOrIri for BlankNode {
    #[inline]
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_> {
        BlankNodeOrIriRef::BlankNode(self.as_ref())
    }
}

impl RdfBlankNodeOrIri for BlankNodeOrIri {
    #[inline]
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_> {
        self.as_ref()
    }
}

impl RdfBlankNodeOrIri for IriRef<'_> {
    #[inline]
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_> {
        BlankNodeOrIriRef::Iri(*self)
    }
}

impl RdfBlankNodeOrIri for BlankNodeRef<'_> {
    #[inline]
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_> {
        BlankNodeOrIriRef::BlankNode(*self)
    }
}

impl RdfBlankNodeOrIri for BlankNodeOrIriRef<'_> {
    #[inline]
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_> {
        *self
    }
}

impl RdfIri for Iri {
    #[inline]
    fn as_iri_ref(&self) -> IriRef<'_> {
        self.as_ref()
    }
}

impl RdfIri for IriRef<'_> {
    #[inline]
    fn as_iri_ref(&self) -> IriRef<'_> {
        *self
    }
}

impl RdfBlankNode for BlankNode {
    #[inline]
    fn as_blank_node_ref(&self) -> BlankNodeRef<'_> {
        self.as_ref()
    }
}

impl RdfBlankNode for BlankNodeRef<'_> {
    #[inline]
    fn as_blank_node_ref(&self) -> BlankNodeRef<'_> {
        *self
    }
}

impl RdfLiteral for Literal {
    #[inline]
    fn as_literal_ref(&self) -> LiteralRef<'_> {
        self.as_ref()
    }
}

impl RdfLiteral for LiteralRef<'_> {
    #[inline]
    fn as_literal_ref(&self) -> LiteralRef<'_> {
        *self
    }
}

impl RdfTriple for Triple {
    #[inline]
    fn as_triple_ref(&self) -> TripleRef<'_> {
        self.as_ref()
    }
}

impl RdfTriple for TripleRef<'_> {
    #[inline]
    fn as_triple_ref(&self) -> TripleRef<'_> {
        *self
    }
}

impl RdfQuad for Quad {
    #[inline]
    fn as_quad_ref(&self) -> QuadRef<'_> {
        self.as_ref()
    }
}

impl RdfQuad for QuadRef<'_> {
    #[inline]
    fn as_quad_ref(&self) -> QuadRef<'_> {
        *self
    }
}

/// Builds a borrowed quad from any implementation of its components.
pub fn quad_ref<'a>(
    subject: &'a (impl RdfBlankNodeOrIri + ?Sized),
    predicate: &'a (impl RdfIri + ?Sized),
    object: &'a (impl RdfTerm + ?Sized),
    graph_name: Option<&'a (impl RdfBlankNodeOrIri + ?Sized)>,
) -> QuadRef<'a> {
    QuadRef::new(
        subject.as_blank_node_or_iri_ref(),
        predicate.as_iri_ref(),
        object.as_term_ref(),
        graph_name.map_or(GraphNameRef::DefaultGraph, |g| {
            GraphNameRef::Named(g.as_blank_node_or_iri_ref())
        }),
    )
}

/// Builds a borrowed triple from any implementation of its components.
pub fn triple_ref<'a>(
    subject: &'a (impl RdfBlankNodeOrIri + ?Sized),
    predicate: &'a (impl RdfIri + ?Sized),
    object: &'a (impl RdfTerm + ?Sized),
) -> TripleRef<'a> {
    TripleRef::new(
        subject.as_blank_node_or_iri_ref(),
        predicate.as_iri_ref(),
        object.as_term_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RdfResult;

    #[test]
    fn owned_and_borrowed_views_agree() -> RdfResult<()> {
        let iri = Iri::new("http://example.com/s")?;
        assert!(terms_equal(&iri, &iri.as_ref()));
        assert!(terms_equal(&iri, &Term::from(iri.clone())));
        assert_eq!(
            RdfTerm::contract_hash(&iri),
            RdfTerm::contract_hash(&Term::from(iri.clone()))
        );
        assert_eq!(iri.iri_str(), "http://example.com/s");
        Ok(())
    }

    #[test]
    fn kinds_never_compare_equal() -> RdfResult<()> {
        let iri = Iri::new("http://example.com/x")?;
        let literal = Literal::new_simple("http://example.com/x");
        let node = BlankNode::new(BlankNodeScope::new(), "x");
        assert!(!terms_equal(&iri, &literal));
        assert!(!terms_equal(&node, &literal));
        assert!(!terms_equal(&iri, &node));
        assert_eq!(literal.term_kind(), TermKind::Literal);
        Ok(())
    }

    #[test]
    fn literal_accessors() -> RdfResult<()> {
        let literal = Literal::new_language_tagged("chat", "fr-CA")?;
        assert_eq!(literal.lexical_form(), "chat");
        assert_eq!(literal.language_tag(), Some("fr-CA"));
        assert_eq!(literal.datatype_iri(), crate::vocab::rdf::LANG_STRING);
        Ok(())
    }

    #[test]
    fn statements_built_from_views() -> RdfResult<()> {
        let s = Iri::new("http://example.com/s")?;
        let p = Iri::new("http://example.com/p")?;
        let o = Literal::new_simple("o");
        let triple = Triple::new(s.clone(), p.clone(), o.clone());
        assert!(triples_equal(&triple, &triple_ref(&s, &p, &o)));
        assert_eq!(
            RdfTriple::contract_hash(&triple),
            RdfTriple::contract_hash(&triple_ref(&s, &p, &o))
        );

        let quad = triple.in_default_graph();
        assert!(quads_equal(&quad, &quad_ref(&s, &p, &o, None::<&Iri>)));
        assert!(!quads_equal(&quad, &quad_ref(&s, &p, &o, Some(&s))));
        Ok(())
    }
}
