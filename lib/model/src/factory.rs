use crate::{
    BlankNode, BlankNodeOrIri, BlankNodeScope, Iri, Literal, Quad, RdfBlankNode,
    RdfBlankNodeOrIri, RdfIri, RdfLiteral, RdfQuad, RdfResult, RdfTerm, RdfTriple, Term, Triple,
};
use std::fmt::Debug;
use std::hash::Hash;
use uuid::Uuid;

/// Mints terms and statements.
///
/// Every factory owns a [`BlankNodeScope`]: blank nodes minted by one factory are never equal to
/// blank nodes minted by another one, even if their labels coincide. Cloning a factory shares its
/// scope.
pub trait RdfFactory {
    type Iri: RdfIri + Clone + Debug + Eq + Hash;
    type BlankNode: RdfBlankNode + Clone + Debug + Eq + Hash;
    type Literal: RdfLiteral + Clone + Debug + Eq + Hash;
    type BlankNodeOrIri: RdfBlankNodeOrIri
        + From<Self::Iri>
        + From<Self::BlankNode>
        + Clone
        + Debug
        + Eq
        + Hash;
    type Term: RdfTerm
        + From<Self::Iri>
        + From<Self::BlankNode>
        + From<Self::Literal>
        + From<Self::BlankNodeOrIri>
        + Clone
        + Debug
        + Eq
        + Hash;
    type Triple: RdfTriple + Clone + Debug + Eq + Hash;
    type Quad: RdfQuad + Clone + Debug + Eq + Hash;

    fn scope(&self) -> BlankNodeScope;

    /// Fails with [`InvalidTerm::Iri`](crate::InvalidTerm::Iri) if `iri` is not an absolute IRI.
    fn create_iri(&self, iri: &str) -> RdfResult<Self::Iri>;

    /// Mints a blank node that is distinct from every other blank node of this factory.
    fn create_blank_node(&self) -> Self::BlankNode;

    /// Returns the blank node of this factory with the given label.
    ///
    /// Calling this twice with the same label returns equal blank nodes.
    fn create_blank_node_with_label(&self, label: &str) -> Self::BlankNode;

    /// Builds an `xsd:string` literal.
    fn create_literal(&self, lexical_form: &str) -> Self::Literal;

    fn create_typed_literal(
        &self,
        lexical_form: &str,
        datatype: Self::Iri,
    ) -> RdfResult<Self::Literal>;

    fn create_language_literal(
        &self,
        lexical_form: &str,
        language: &str,
    ) -> RdfResult<Self::Literal>;

    fn create_triple(
        &self,
        subject: impl Into<Self::BlankNodeOrIri>,
        predicate: Self::Iri,
        object: impl Into<Self::Term>,
    ) -> Self::Triple;

    /// Builds a quad. A missing graph name places the quad in the default graph.
    fn create_quad(
        &self,
        graph_name: Option<Self::BlankNodeOrIri>,
        subject: impl Into<Self::BlankNodeOrIri>,
        predicate: Self::Iri,
        object: impl Into<Self::Term>,
    ) -> Self::Quad;
}

/// The factory of the plain model types.
#[derive(Debug, Clone)]
pub struct SimpleRdf {
    scope: BlankNodeScope,
}

impl SimpleRdf {
    /// Creates a factory with a fresh blank node scope.
    pub fn new() -> Self {
        Self::with_scope(BlankNodeScope::new())
    }

    pub fn with_scope(scope: BlankNodeScope) -> Self {
        tracing::debug!(%scope, "Created simple RDF factory");
        Self { scope }
    }
}

impl Default for SimpleRdf {
    fn default() -> Self {
        Self::new()
    }
}

impl RdfFactory for SimpleRdf {
    type Iri = Iri;
    type BlankNode = BlankNode;
    type Literal = Literal;
    type BlankNodeOrIri = BlankNodeOrIri;
    type Term = Term;
    type Triple = Triple;
    type Quad = Quad;

    fn scope(&self) -> BlankNodeScope {
        self.scope
    }

    fn create_iri(&self, iri: &str) -> RdfResult<Iri> {
        Iri::new(iri)
    }

    fn create_blank_node(&self) -> BlankNode {
        let id = Uuid::new_v4().simple().to_string();
        tracing::trace!(scope = %self.scope, id = %id, "Minted blank node");
        BlankNode::new(self.scope, id)
    }

    fn create_blank_node_with_label(&self, label: &str) -> BlankNode {
        BlankNode::new(self.scope, label)
    }

    fn create_literal(&self, lexical_form: &str) -> Literal {
        Literal::new_simple(lexical_form)
    }

    fn create_typed_literal(&self, lexical_form: &str, datatype: Iri) -> RdfResult<Literal> {
        Literal::new_typed(lexical_form, datatype)
    }

    fn create_language_literal(&self, lexical_form: &str, language: &str) -> RdfResult<Literal> {
        Literal::new_language_tagged(lexical_form, language)
    }

    fn create_triple(
        &self,
        subject: impl Into<BlankNodeOrIri>,
        predicate: Iri,
        object: impl Into<Term>,
    ) -> Triple {
        Triple::new(subject, predicate, object)
    }

    fn create_quad(
        &self,
        graph_name: Option<BlankNodeOrIri>,
        subject: impl Into<BlankNodeOrIri>,
        predicate: Iri,
        object: impl Into<Term>,
    ) -> Quad {
        Quad::new(subject, predicate, object, graph_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{terms_equal, GraphName, InvalidTerm};

    #[test]
    fn labeled_blank_nodes_are_scoped_to_their_factory() {
        let a = SimpleRdf::new();
        let b = SimpleRdf::new();
        assert_eq!(
            a.create_blank_node_with_label("x"),
            a.create_blank_node_with_label("x")
        );
        assert_ne!(
            a.create_blank_node_with_label("x"),
            b.create_blank_node_with_label("x")
        );
        assert_eq!(
            a.create_blank_node_with_label("x"),
            a.clone().create_blank_node_with_label("x")
        );
    }

    #[test]
    fn unlabeled_blank_nodes_are_fresh() {
        let factory = SimpleRdf::new();
        assert_ne!(factory.create_blank_node(), factory.create_blank_node());
    }

    #[test]
    fn creates_terms() -> RdfResult<()> {
        let factory = SimpleRdf::default();
        let iri = factory.create_iri("http://example.com/s")?;
        assert!(terms_equal(&iri, &Iri::new("http://example.com/s")?));
        assert!(matches!(
            factory.create_iri("not an iri"),
            Err(InvalidTerm::Iri { .. })
        ));
        assert!(matches!(
            factory.create_language_literal("hi", "not a tag!"),
            Err(InvalidTerm::LanguageTag { .. })
        ));
        Ok(())
    }

    #[test]
    fn quads_default_to_the_default_graph() -> RdfResult<()> {
        let factory = SimpleRdf::new();
        let s = factory.create_iri("http://example.com/s")?;
        let p = factory.create_iri("http://example.com/p")?;
        let quad = factory.create_quad(None, s.clone(), p.clone(), factory.create_literal("o"));
        assert_eq!(quad.graph_name(), &GraphName::DefaultGraph);
        let named = factory.create_quad(Some(s.clone().into()), s, p, factory.create_literal("o"));
        assert_ne!(quad, named);
        Ok(())
    }
}
