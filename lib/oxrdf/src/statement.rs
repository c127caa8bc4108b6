use crate::term::{blank_node_ref, iri_ref, object_ref, subject_ref, Residue};
use oxrdf::{GraphName, Quad, Triple};
use rdf_interop_model::backend::{BackendQuad, BackendTriple, HasNativeHandle};
use rdf_interop_model::contract::{quad_eq, quad_hash, triple_eq, triple_hash};
use rdf_interop_model::{
    BlankNodeOrIriRef, BlankNodeScope, GraphNameRef, QuadRef, RdfQuad, RdfTriple, TripleRef,
};

/// What the native value of each position of a statement does not keep.
///
/// Blank nodes without a residue belong to the `home` scope of the factory that built the
/// statement.
#[derive(Clone, Debug)]
pub(crate) struct Residues {
    pub(crate) home: BlankNodeScope,
    pub(crate) subject: Residue,
    pub(crate) object: Residue,
    pub(crate) graph_name: Residue,
}

impl Residues {
    pub(crate) fn empty(home: BlankNodeScope) -> Self {
        Self {
            home,
            subject: Residue::Empty,
            object: Residue::Empty,
            graph_name: Residue::Empty,
        }
    }
}

/// A triple backed by an [`oxrdf::Triple`].
///
/// The native triple never contains triple terms and its literals are valid RDF 1.1 literals.
#[derive(Clone, Debug)]
pub struct OxTriple {
    native: Triple,
    residues: Residues,
}

impl OxTriple {
    pub(crate) fn new(native: Triple, residues: Residues) -> Self {
        Self { native, residues }
    }

    #[inline]
    pub fn into_native(self) -> Triple {
        self.native
    }
}

impl HasNativeHandle for OxTriple {
    type Native = Triple;

    #[inline]
    fn as_native(&self) -> &Triple {
        &self.native
    }
}

impl RdfTriple for OxTriple {
    fn as_triple_ref(&self) -> TripleRef<'_> {
        TripleRef::new(
            subject_ref(
                self.residues.home,
                &self.residues.subject,
                &self.native.subject,
            ),
            iri_ref(&self.native.predicate),
            object_ref(
                self.residues.home,
                &self.residues.object,
                &self.native.object,
            ),
        )
    }
}

impl BackendTriple for OxTriple {}

impl_value_traits!(OxTriple, as_triple_ref, triple_eq, triple_hash);

/// A quad backed by an [`oxrdf::Quad`].
///
/// The native quad never contains triple terms and its literals are valid RDF 1.1 literals.
#[derive(Clone, Debug)]
pub struct OxQuad {
    native: Quad,
    residues: Residues,
}

impl OxQuad {
    pub(crate) fn new(native: Quad, residues: Residues) -> Self {
        Self { native, residues }
    }

    #[inline]
    pub fn into_native(self) -> Quad {
        self.native
    }

    /// The triple of this quad, without its graph name.
    pub fn as_triple(&self) -> OxTriple {
        OxTriple::new(
            Triple::new(
                self.native.subject.clone(),
                self.native.predicate.clone(),
                self.native.object.clone(),
            ),
            Residues {
                graph_name: Residue::Empty,
                ..self.residues.clone()
            },
        )
    }
}

impl HasNativeHandle for OxQuad {
    type Native = Quad;

    #[inline]
    fn as_native(&self) -> &Quad {
        &self.native
    }
}

impl RdfQuad for OxQuad {
    fn as_quad_ref(&self) -> QuadRef<'_> {
        let graph_name: GraphNameRef<'_> = match &self.native.graph_name {
            GraphName::NamedNode(node) => BlankNodeOrIriRef::Iri(iri_ref(node)).into(),
            GraphName::BlankNode(node) => {
                BlankNodeOrIriRef::BlankNode(blank_node_ref(
                    self.residues.home,
                    &self.residues.graph_name,
                    node,
                ))
                .into()
            }
            GraphName::DefaultGraph => GraphNameRef::DefaultGraph,
        };
        QuadRef::new(
            subject_ref(
                self.residues.home,
                &self.residues.subject,
                &self.native.subject,
            ),
            iri_ref(&self.native.predicate),
            object_ref(
                self.residues.home,
                &self.residues.object,
                &self.native.object,
            ),
            graph_name,
        )
    }
}

impl BackendQuad for OxQuad {}

impl_value_traits!(OxQuad, as_quad_ref, quad_eq, quad_hash);
