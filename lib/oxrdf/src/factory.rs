use crate::statement::Residues;
use crate::term::{native_blank_node, Residue};
use crate::{OxBlankNode, OxBlankNodeOrIri, OxIri, OxLiteral, OxQuad, OxTerm, OxTriple};
use oxrdf::{BlankNode, GraphName, Literal, NamedNode, Quad, Subject, Term, Triple};
use rdf_interop_model::vocab::rdf;
use rdf_interop_model::{
    BlankNodeOrIriRef, BlankNodeScope, ExpectedKind, FoundKind, GraphNameRef, InvalidTerm,
    LiteralRef, RdfError, RdfFactory, RdfIri, RdfQuad, RdfResult, RdfTerm, RdfTriple, TermKind,
    TermRef, UnsupportedTermKind,
};

/// A factory of terms and statements backed by `oxrdf`.
///
/// Besides minting new values, the factory adopts native `oxrdf` values (`wrap_*`) and converts
/// values of other implementations (`import_*`). Adopted blank nodes belong to the scope of the
/// factory, imported blank nodes keep their original scope. The native value of a blank node of
/// another scope has an identifier derived from that scope and the blank node identifier.
#[derive(Debug, Clone)]
pub struct OxRdf {
    scope: BlankNodeScope,
}

impl OxRdf {
    /// Creates a factory with a fresh blank node scope.
    pub fn new() -> Self {
        Self::with_scope(BlankNodeScope::new())
    }

    pub fn with_scope(scope: BlankNodeScope) -> Self {
        tracing::debug!(%scope, "Created oxrdf RDF factory");
        Self { scope }
    }

    pub fn wrap_iri(&self, native: NamedNode) -> OxIri {
        OxIri::new(native)
    }

    pub fn wrap_blank_node(&self, native: BlankNode) -> OxBlankNode {
        OxBlankNode::new(self.scope, native)
    }

    /// Fails if the literal has the datatype `rdf:langString` but no language tag.
    pub fn wrap_literal(&self, native: Literal) -> RdfResult<OxLiteral> {
        check_literal(&native)?;
        Ok(OxLiteral::new(native))
    }

    /// Fails for triple terms.
    pub fn wrap_subject(&self, native: Subject) -> Result<OxBlankNodeOrIri, UnsupportedTermKind> {
        match native {
            Subject::NamedNode(node) => Ok(self.wrap_iri(node).into()),
            Subject::BlankNode(node) => Ok(self.wrap_blank_node(node).into()),
            Subject::Triple(_) => Err(rejected(UnsupportedTermKind::new(
                ExpectedKind::BlankNodeOrIri,
                FoundKind::TripleTerm,
            ))),
        }
    }

    /// Fails for triple terms and invalid literals.
    pub fn wrap_term(&self, native: Term) -> Result<OxTerm, RdfError> {
        match native {
            Term::NamedNode(node) => Ok(self.wrap_iri(node).into()),
            Term::BlankNode(node) => Ok(self.wrap_blank_node(node).into()),
            Term::Literal(literal) => Ok(self.wrap_literal(literal)?.into()),
            Term::Triple(_) => Err(rejected(UnsupportedTermKind::new(
                ExpectedKind::Term,
                FoundKind::TripleTerm,
            ))
            .into()),
        }
    }

    /// Narrows a native term to a subject, failing for literals and triple terms.
    pub fn wrap_blank_node_or_iri(
        &self,
        native: Term,
    ) -> Result<OxBlankNodeOrIri, UnsupportedTermKind> {
        match native {
            Term::NamedNode(node) => Ok(self.wrap_iri(node).into()),
            Term::BlankNode(node) => Ok(self.wrap_blank_node(node).into()),
            Term::Literal(_) => Err(rejected(UnsupportedTermKind::new(
                ExpectedKind::BlankNodeOrIri,
                TermKind::Literal,
            ))),
            Term::Triple(_) => Err(rejected(UnsupportedTermKind::new(
                ExpectedKind::BlankNodeOrIri,
                FoundKind::TripleTerm,
            ))),
        }
    }

    /// Adopts a graph name. The default graph is returned as `None`.
    pub fn wrap_graph_name(&self, native: GraphName) -> Option<OxBlankNodeOrIri> {
        match native {
            GraphName::NamedNode(node) => Some(self.wrap_iri(node).into()),
            GraphName::BlankNode(node) => Some(self.wrap_blank_node(node).into()),
            GraphName::DefaultGraph => None,
        }
    }

    /// Fails if the triple contains triple terms or invalid literals.
    pub fn wrap_triple(&self, native: Triple) -> Result<OxTriple, RdfError> {
        check_subject(&native.subject)?;
        check_object(&native.object)?;
        Ok(OxTriple::new(native, Residues::empty(self.scope)))
    }

    /// Fails if the quad contains triple terms or invalid literals.
    pub fn wrap_quad(&self, native: Quad) -> Result<OxQuad, RdfError> {
        check_subject(&native.subject)?;
        check_object(&native.object)?;
        Ok(OxQuad::new(native, Residues::empty(self.scope)))
    }

    /// Converts a term of any implementation.
    pub fn import_term(&self, term: &(impl RdfTerm + ?Sized)) -> OxTerm {
        match term.as_term_ref() {
            TermRef::Iri(iri) => OxIri::new(NamedNode::new_unchecked(iri.as_str())).into(),
            TermRef::BlankNode(node) => OxBlankNode::from_view(self.scope, node).into(),
            TermRef::Literal(literal) => import_literal(literal).into(),
        }
    }

    /// Converts a triple of any implementation.
    pub fn import_triple(&self, triple: &(impl RdfTriple + ?Sized)) -> OxTriple {
        let triple = triple.as_triple_ref();
        let subject = self.import_blank_node_or_iri(triple.subject());
        let object = self.import_term(&triple.object());
        self.create_triple(
            subject,
            OxIri::new(NamedNode::new_unchecked(triple.predicate().as_str())),
            object,
        )
    }

    /// Converts a quad of any implementation.
    pub fn import_quad(&self, quad: &(impl RdfQuad + ?Sized)) -> OxQuad {
        let quad = quad.as_quad_ref();
        let graph_name = match quad.graph_name() {
            GraphNameRef::Named(node) => Some(self.import_blank_node_or_iri(node)),
            GraphNameRef::DefaultGraph => None,
        };
        let subject = self.import_blank_node_or_iri(quad.subject());
        let object = self.import_term(&quad.object());
        self.create_quad(
            graph_name,
            subject,
            OxIri::new(NamedNode::new_unchecked(quad.predicate().as_str())),
            object,
        )
    }

    fn import_blank_node_or_iri(&self, node: BlankNodeOrIriRef<'_>) -> OxBlankNodeOrIri {
        match node {
            BlankNodeOrIriRef::Iri(iri) => {
                OxIri::new(NamedNode::new_unchecked(iri.as_str())).into()
            }
            BlankNodeOrIriRef::BlankNode(node) => OxBlankNode::from_view(self.scope, node).into(),
        }
    }
}

impl Default for OxRdf {
    fn default() -> Self {
        Self::new()
    }
}

impl RdfFactory for OxRdf {
    type Iri = OxIri;
    type BlankNode = OxBlankNode;
    type Literal = OxLiteral;
    type BlankNodeOrIri = OxBlankNodeOrIri;
    type Term = OxTerm;
    type Triple = OxTriple;
    type Quad = OxQuad;

    fn scope(&self) -> BlankNodeScope {
        self.scope
    }

    fn create_iri(&self, iri: &str) -> RdfResult<OxIri> {
        let native = NamedNode::new(iri).map_err(|source| InvalidTerm::Iri {
            iri: iri.to_owned(),
            source,
        })?;
        Ok(OxIri::new(native))
    }

    fn create_blank_node(&self) -> OxBlankNode {
        let native = BlankNode::default();
        tracing::trace!(scope = %self.scope, id = native.as_str(), "Minted blank node");
        OxBlankNode::new(self.scope, native)
    }

    fn create_blank_node_with_label(&self, label: &str) -> OxBlankNode {
        OxBlankNode::new(self.scope, native_blank_node(label))
    }

    fn create_literal(&self, lexical_form: &str) -> OxLiteral {
        OxLiteral::new(Literal::new_simple_literal(lexical_form))
    }

    fn create_typed_literal(&self, lexical_form: &str, datatype: OxIri) -> RdfResult<OxLiteral> {
        if datatype.as_iri_ref() == rdf::LANG_STRING {
            return Err(InvalidTerm::MissingLanguageTag);
        }
        Ok(OxLiteral::new(Literal::new_typed_literal(
            lexical_form,
            datatype.into_native(),
        )))
    }

    fn create_language_literal(&self, lexical_form: &str, language: &str) -> RdfResult<OxLiteral> {
        let native = Literal::new_language_tagged_literal(lexical_form, language).map_err(
            |source| InvalidTerm::LanguageTag {
                tag: language.to_owned(),
                source,
            },
        )?;
        Ok(OxLiteral::with_language(native, language))
    }

    fn create_triple(
        &self,
        subject: impl Into<OxBlankNodeOrIri>,
        predicate: OxIri,
        object: impl Into<OxTerm>,
    ) -> OxTriple {
        let (subject, subject_residue) = subject.into().into_native_subject(self.scope);
        let (object, object_residue) = object.into().into_native_object(self.scope);
        let residues = Residues {
            subject: subject_residue,
            object: object_residue,
            ..Residues::empty(self.scope)
        };
        OxTriple::new(
            Triple::new(subject, predicate.into_native(), object),
            residues,
        )
    }

    fn create_quad(
        &self,
        graph_name: Option<OxBlankNodeOrIri>,
        subject: impl Into<OxBlankNodeOrIri>,
        predicate: OxIri,
        object: impl Into<OxTerm>,
    ) -> OxQuad {
        let (subject, subject_residue) = subject.into().into_native_subject(self.scope);
        let (object, object_residue) = object.into().into_native_object(self.scope);
        let (graph_name, graph_name_residue) = match graph_name {
            Some(graph_name) => graph_name.into_native_graph_name(self.scope),
            None => (GraphName::DefaultGraph, Residue::Empty),
        };
        let residues = Residues {
            home: self.scope,
            subject: subject_residue,
            object: object_residue,
            graph_name: graph_name_residue,
        };
        OxQuad::new(
            Quad::new(subject, predicate.into_native(), object, graph_name),
            residues,
        )
    }
}

fn import_literal(literal: LiteralRef<'_>) -> OxLiteral {
    match literal.language() {
        Some(language) => OxLiteral::with_language(
            Literal::new_language_tagged_literal_unchecked(
                literal.value(),
                language.to_ascii_lowercase(),
            ),
            language,
        ),
        None => OxLiteral::new(Literal::new_typed_literal(
            literal.value(),
            NamedNode::new_unchecked(literal.datatype().as_str()),
        )),
    }
}

fn check_literal(literal: &Literal) -> RdfResult<()> {
    if literal.language().is_none() && literal.datatype() == oxrdf::vocab::rdf::LANG_STRING {
        return Err(InvalidTerm::MissingLanguageTag);
    }
    Ok(())
}

fn check_subject(subject: &Subject) -> Result<(), UnsupportedTermKind> {
    match subject {
        Subject::NamedNode(_) | Subject::BlankNode(_) => Ok(()),
        Subject::Triple(_) => Err(rejected(UnsupportedTermKind::new(
            ExpectedKind::BlankNodeOrIri,
            FoundKind::TripleTerm,
        ))),
    }
}

fn check_object(object: &Term) -> Result<(), RdfError> {
    match object {
        Term::NamedNode(_) | Term::BlankNode(_) => Ok(()),
        Term::Literal(literal) => Ok(check_literal(literal)?),
        Term::Triple(_) => Err(rejected(UnsupportedTermKind::new(
            ExpectedKind::Term,
            FoundKind::TripleTerm,
        ))
        .into()),
    }
}

fn rejected(error: UnsupportedTermKind) -> UnsupportedTermKind {
    tracing::debug!(%error, "Rejected native value");
    error
}
