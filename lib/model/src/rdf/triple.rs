use crate::contract::{triple_eq, triple_hash};
use crate::{
    BlankNodeOrIri, BlankNodeOrIriRef, GraphName, Iri, IriRef, Quad, QuadRef, Term, TermRef,
};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An owned [RDF triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple).
///
/// Triples are immutable. Two triples are equal iff their subjects, predicates and objects are
/// pairwise equal, and their hash is `31 * (31 * hs + hp) + ho` over the component hashes (see
/// [`contract`](crate::contract)).
///
/// The default string formatter returns an N-Triples line:
/// ```
/// use rdf_interop_model::{Iri, Literal, Triple};
///
/// let triple = Triple::new(
///     Iri::new("http://example.com/s")?,
///     Iri::new("http://example.com/p")?,
///     Literal::new_simple("o"),
/// );
/// assert_eq!(
///     "<http://example.com/s> <http://example.com/p> \"o\" .",
///     triple.to_string()
/// );
/// # Result::<_, rdf_interop_model::InvalidTerm>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triple {
    subject: BlankNodeOrIri,
    predicate: Iri,
    object: Term,
}

impl Triple {
    #[inline]
    pub fn new(
        subject: impl Into<BlankNodeOrIri>,
        predicate: impl Into<Iri>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// The [subject](https://www.w3.org/TR/rdf11-concepts/#dfn-subject) of this triple.
    #[inline]
    pub fn subject(&self) -> &BlankNodeOrIri {
        &self.subject
    }

    /// The [predicate](https://www.w3.org/TR/rdf11-concepts/#dfn-predicate) of this triple.
    #[inline]
    pub fn predicate(&self) -> &Iri {
        &self.predicate
    }

    /// The [object](https://www.w3.org/TR/rdf11-concepts/#dfn-object) of this triple.
    #[inline]
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Places the triple in the given graph.
    #[inline]
    pub fn in_graph(self, graph_name: impl Into<GraphName>) -> Quad {
        Quad::new(self.subject, self.predicate, self.object, graph_name)
    }

    /// Places the triple in the default graph.
    #[inline]
    pub fn in_default_graph(self) -> Quad {
        self.in_graph(GraphName::DefaultGraph)
    }

    /// Splits the triple into its components.
    #[inline]
    pub fn into_parts(self) -> (BlankNodeOrIri, Iri, Term) {
        (self.subject, self.predicate, self.object)
    }

    #[inline]
    pub fn as_ref(&self) -> TripleRef<'_> {
        TripleRef::new(
            self.subject.as_ref(),
            self.predicate.as_ref(),
            self.object.as_ref(),
        )
    }

    pub fn ntriples_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Triple {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

impl Hash for Triple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

/// A quad is never equal to a triple, even if it is in the default graph.
impl PartialEq<Quad> for Triple {
    #[inline]
    fn eq(&self, _: &Quad) -> bool {
        false
    }
}

/// A borrowed [RDF triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple).
#[derive(Clone, Copy, Debug)]
pub struct TripleRef<'a> {
    subject: BlankNodeOrIriRef<'a>,
    predicate: IriRef<'a>,
    object: TermRef<'a>,
}

impl<'a> TripleRef<'a> {
    #[inline]
    pub fn new(
        subject: impl Into<BlankNodeOrIriRef<'a>>,
        predicate: impl Into<IriRef<'a>>,
        object: impl Into<TermRef<'a>>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
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
    pub fn into_owned(self) -> Triple {
        Triple {
            subject: self.subject.into_owned(),
            predicate: self.predicate.into_owned(),
            object: self.object.into_owned(),
        }
    }
}

impl fmt::Display for TripleRef<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

impl PartialEq for TripleRef<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        triple_eq(*self, *other)
    }
}

impl Eq for TripleRef<'_> {}

impl Hash for TripleRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(triple_hash(*self));
    }
}

impl<'a> From<&'a Triple> for TripleRef<'a> {
    #[inline]
    fn from(triple: &'a Triple) -> Self {
        triple.as_ref()
    }
}

impl From<TripleRef<'_>> for Triple {
    #[inline]
    fn from(triple: TripleRef<'_>) -> Self {
        triple.into_owned()
    }
}

impl PartialEq<Triple> for TripleRef<'_> {
    #[inline]
    fn eq(&self, other: &Triple) -> bool {
        *self == other.as_ref()
    }
}

impl PartialEq<TripleRef<'_>> for Triple {
    #[inline]
    fn eq(&self, other: &TripleRef<'_>) -> bool {
        self.as_ref() == *other
    }
}

impl PartialEq<QuadRef<'_>> for TripleRef<'_> {
    #[inline]
    fn eq(&self, _: &QuadRef<'_>) -> bool {
        false
    }
}
