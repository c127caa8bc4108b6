use crate::contract::{graph_name_eq, graph_name_hash, quad_eq, quad_hash};
use crate::{
    BlankNode, BlankNodeOrIri, BlankNodeOrIriRef, BlankNodeRef, Iri, IriRef, Term, TermRef,
    Triple, TripleRef,
};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The owned name of the graph a [`Quad`] belongs to.
///
/// The [default graph](https://www.w3.org/TR/rdf11-concepts/#dfn-default-graph) is a value of its
/// own and is distinct from every named graph.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum GraphName {
    Named(BlankNodeOrIri),
    #[default]
    DefaultGraph,
}

impl GraphName {
    #[inline]
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Self::DefaultGraph)
    }

    #[inline]
    pub fn as_ref(&self) -> GraphNameRef<'_> {
        match self {
            Self::Named(node) => GraphNameRef::Named(node.as_ref()),
            Self::DefaultGraph => GraphNameRef::DefaultGraph,
        }
    }
}

impl fmt::Display for GraphName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

impl Hash for GraphName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

/// The borrowed name of the graph a [`QuadRef`] belongs to.
#[derive(Clone, Copy, Debug, Default)]
pub enum GraphNameRef<'a> {
    Named(BlankNodeOrIriRef<'a>),
    #[default]
    DefaultGraph,
}

impl<'a> GraphNameRef<'a> {
    #[inline]
    pub fn is_default_graph(self) -> bool {
        matches!(self, Self::DefaultGraph)
    }

    /// Returns the name of the graph, or `None` for the default graph.
    #[inline]
    pub fn named(self) -> Option<BlankNodeOrIriRef<'a>> {
        match self {
            Self::Named(node) => Some(node),
            Self::DefaultGraph => None,
        }
    }

    #[inline]
    pub fn into_owned(self) -> GraphName {
        match self {
            Self::Named(node) => GraphName::Named(node.into_owned()),
            Self::DefaultGraph => GraphName::DefaultGraph,
        }
    }
}

impl fmt::Display for GraphNameRef<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(node) => fmt::Display::fmt(node, f),
            Self::DefaultGraph => f.write_str("DEFAULT"),
        }
    }
}

impl PartialEq for GraphNameRef<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        graph_name_eq(*self, *other)
    }
}

impl Eq for GraphNameRef<'_> {}

impl Hash for GraphNameRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(graph_name_hash(*self));
    }
}

impl From<BlankNodeOrIri> for GraphName {
    #[inline]
    fn from(node: BlankNodeOrIri) -> Self {
        Self::Named(node)
    }
}

impl From<Iri> for GraphName {
    #[inline]
    fn from(node: Iri) -> Self {
        Self::Named(node.into())
    }
}

impl From<BlankNode> for GraphName {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::Named(node.into())
    }
}

impl From<Option<BlankNodeOrIri>> for GraphName {
    #[inline]
    fn from(node: Option<BlankNodeOrIri>) -> Self {
        node.map_or(Self::DefaultGraph, Self::Named)
    }
}

impl<'a> From<BlankNodeOrIriRef<'a>> for GraphNameRef<'a> {
    #[inline]
    fn from(node: BlankNodeOrIriRef<'a>) -> Self {
        Self::Named(node)
    }
}

impl<'a> From<IriRef<'a>> for GraphNameRef<'a> {
    #[inline]
    fn from(node: IriRef<'a>) -> Self {
        Self::Named(node.into())
    }
}

impl<'a> From<BlankNodeRef<'a>> for GraphNameRef<'a> {
    #[inline]
    fn from(node: BlankNodeRef<'a>) -> Self {
        Self::Named(node.into())
    }
}

impl<'a> From<&'a GraphName> for GraphNameRef<'a> {
    #[inline]
    fn from(graph_name: &'a GraphName) -> Self {
        graph_name.as_ref()
    }
}

impl From<GraphNameRef<'_>> for GraphName {
    #[inline]
    fn from(graph_name: GraphNameRef<'_>) -> Self {
        graph_name.into_owned()
    }
}

/// An owned [triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple) in an
/// [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
///
/// Quads are immutable. Two quads are equal iff their four components are pairwise equal, the
/// default graph being equal only to itself. A quad is never equal to a [`Triple`].
///
/// The default string formatter returns an N-Quads line:
/// ```
/// use rdf_interop_model::{Iri, Quad};
///
/// let quad = Quad::new(
///     Iri::new("http://example.com/s")?,
///     Iri::new("http://example.com/p")?,
///     Iri::new("http://example.com/o")?,
///     Iri::new("http://example.com/g")?,
/// );
/// assert_eq!(
///     "<http://example.com/s> <http://example.com/p> <http://example.com/o> <http://example.com/g> .",
///     quad.to_string()
/// );
/// # Result::<_, rdf_interop_model::InvalidTerm>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quad {
    subject: BlankNodeOrIri,
    predicate: Iri,
    object: Term,
    graph_name: GraphName,
}

impl Quad {
    #[inline]
    pub fn new(
        subject: impl Into<BlankNodeOrIri>,
        predicate: impl Into<Iri>,
        object: impl Into<Term>,
        graph_name: impl Into<GraphName>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph_name: graph_name.into(),
        }
    }

    #[inline]
    pub fn subject(&self) -> &BlankNodeOrIri {
        &self.subject
    }

    #[inline]
    pub fn predicate(&self) -> &Iri {
        &self.predicate
    }

    #[inline]
    pub fn object(&self) -> &Term {
        &self.object
    }

    #[inline]
    pub fn graph_name(&self) -> &GraphName {
        &self.graph_name
    }

    /// The name of the graph, or `None` if the quad is in the default graph.
    #[inline]
    pub fn graph(&self) -> Option<&BlankNodeOrIri> {
        match &self.graph_name {
            GraphName::Named(node) => Some(node),
            GraphName::DefaultGraph => None,
        }
    }

    /// The triple of this quad, without its graph name.
    #[inline]
    pub fn as_triple(&self) -> Triple {
        Triple::new(
            self.subject.clone(),
            self.predicate.clone(),
            self.object.clone(),
        )
    }

    #[inline]
    pub fn as_ref(&self) -> QuadRef<'_> {
        QuadRef::new(
            self.subject.as_ref(),
            self.predicate.as_ref(),
            self.object.as_ref(),
            self.graph_name.as_ref(),
        )
    }

    pub fn ntriples_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Quad {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

impl Hash for Quad {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

impl From<Quad> for Triple {
    #[inline]
    fn from(quad: Quad) -> Self {
        Self::new(quad.subject, quad.predicate, quad.object)
    }
}

/// A quad is never equal to a triple, even if it is in the default graph.
impl PartialEq<Triple> for Quad {
    #[inline]
    fn eq(&self, _: &Triple) -> bool {
        false
    }
}

/// A borrowed [`Quad`].
#[derive(Clone, Copy, Debug)]
pub struct QuadRef<'a> {
    subject: BlankNodeOrIriRef<'a>,
    predicate: IriRef<'a>,
    object: TermRef<'a>,
    graph_name: GraphNameRef<'a>,
}

impl<'a> QuadRef<'a> {
    #[inline]
    pub fn new(
        subject: impl Into<BlankNodeOrIriRef<'a>>,
        predicate: impl Into<IriRef<'a>>,
        object: impl Into<TermRef<'a>>,
        graph_name: impl Into<GraphNameRef<'a>>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph_name: graph_name.into(),
        }
    }

    #[inline]
    pub fn subject(self) -> BlankNodeOrIriRef<'a> {
        self.subject
    }

    #[inline]
    pub fn predicate(self) -> IriRef<'a> {
        self.predicate
    }

    #[inline]
    pub fn object(self) -> TermRef<'a> {
        self.object
    }

    #[inline]
    pub fn graph_name(self) -> GraphNameRef<'a> {
        self.graph_name
    }

    #[inline]
    pub fn as_triple(self) -> TripleRef<'a> {
        TripleRef::new(self.subject, self.predicate, self.object)
    }

    #[inline]
    pub fn into_owned(self) -> Quad {
        Quad {
            subject: self.subject.into_owned(),
            predicate: self.predicate.into_owned(),
            object: self.object.into_owned(),
            graph_name: self.graph_name.into_owned(),
        }
    }
}

impl fmt::Display for QuadRef<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph_name {
            GraphNameRef::Named(graph_name) => write!(
                f,
                "{} {} {} {} .",
                self.subject, self.predicate, self.object, graph_name
            ),
            GraphNameRef::DefaultGraph => {
                write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
            }
        }
    }
}

impl PartialEq for QuadRef<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        quad_eq(*self, *other)
    }
}

impl Eq for QuadRef<'_> {}

impl Hash for QuadRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(quad_hash(*self));
    }
}

impl<'a> From<&'a Quad> for QuadRef<'a> {
    #[inline]
    fn from(quad: &'a Quad) -> Self {
        quad.as_ref()
    }
}

impl From<QuadRef<'_>> for Quad {
    #[inline]
    fn from(quad: QuadRef<'_>) -> Self {
        quad.into_owned()
    }
}

impl PartialEq<Quad> for QuadRef<'_> {
    #[inline]
    fn eq(&self, other: &Quad) -> bool {
        *self == other.as_ref()
    }
}

impl PartialEq<QuadRef<'_>> for Quad {
    #[inline]
    fn eq(&self, other: &QuadRef<'_>) -> bool {
        self.as_ref() == *other
    }
}

impl PartialEq<TripleRef<'_>> for QuadRef<'_> {
    #[inline]
    fn eq(&self, _: &TripleRef<'_>) -> bool {
        false
    }
}
