use crate::contract::{blank_node_or_iri_eq, blank_node_or_iri_hash, term_eq, term_hash};
use crate::{
    BlankNode, BlankNodeRef, ExpectedKind, Iri, IriRef, Literal, LiteralRef, UnsupportedTermKind,
};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The kind of an RDF term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermKind {
    Iri,
    BlankNode,
    Literal,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Iri => "an IRI",
            Self::BlankNode => "a blank node",
            Self::Literal => "a literal",
        })
    }
}

/// The owned union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri) and
/// [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// Allowed in the subject position of statements and as the name of a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlankNodeOrIri {
    Iri(Iri),
    BlankNode(BlankNode),
}

impl BlankNodeOrIri {
    #[inline]
    pub fn is_iri(&self) -> bool {
        self.as_ref().is_iri()
    }

    #[inline]
    pub fn is_blank_node(&self) -> bool {
        self.as_ref().is_blank_node()
    }

    #[inline]
    pub fn kind(&self) -> TermKind {
        self.as_ref().kind()
    }

    #[inline]
    pub fn as_ref(&self) -> BlankNodeOrIriRef<'_> {
        match self {
            Self::Iri(node) => BlankNodeOrIriRef::Iri(node.as_ref()),
            Self::BlankNode(node) => BlankNodeOrIriRef::BlankNode(node.as_ref()),
        }
    }

    pub fn ntriples_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BlankNodeOrIri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

impl Hash for BlankNodeOrIri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

/// The borrowed union of IRIs and blank nodes.
#[derive(Clone, Copy, Debug)]
pub enum BlankNodeOrIriRef<'a> {
    Iri(IriRef<'a>),
    BlankNode(BlankNodeRef<'a>),
}

impl<'a> BlankNodeOrIriRef<'a> {
    #[inline]
    pub fn is_iri(self) -> bool {
        matches!(self, Self::Iri(_))
    }

    #[inline]
    pub fn is_blank_node(self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    #[inline]
    pub fn kind(self) -> TermKind {
        match self {
            Self::Iri(_) => TermKind::Iri,
            Self::BlankNode(_) => TermKind::BlankNode,
        }
    }

    #[inline]
    pub fn into_owned(self) -> BlankNodeOrIri {
        match self {
            Self::Iri(node) => BlankNodeOrIri::Iri(node.into_owned()),
            Self::BlankNode(node) => BlankNodeOrIri::BlankNode(node.into_owned()),
        }
    }
}

impl fmt::Display for BlankNodeOrIriRef<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(node) => fmt::Display::fmt(node, f),
            Self::BlankNode(node) => fmt::Display::fmt(node, f),
        }
    }
}

impl PartialEq for BlankNodeOrIriRef<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        blank_node_or_iri_eq(*self, *other)
    }
}

impl Eq for BlankNodeOrIriRef<'_> {}

impl Hash for BlankNodeOrIriRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(blank_node_or_iri_hash(*self));
    }
}

/// An owned RDF [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term).
///
/// Allowed in the object position of statements.
///
/// ```
/// use rdf_interop_model::{Iri, Term};
///
/// let term = Term::from(Iri::new("http://example.com/o")?);
/// assert_eq!("<http://example.com/o>", term.to_string());
/// # Result::<_, rdf_interop_model::InvalidTerm>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    Iri(Iri),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    #[inline]
    pub fn is_iri(&self) -> bool {
        self.as_ref().is_iri()
    }

    #[inline]
    pub fn is_blank_node(&self) -> bool {
        self.as_ref().is_blank_node()
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        self.as_ref().is_literal()
    }

    #[inline]
    pub fn kind(&self) -> TermKind {
        self.as_ref().kind()
    }

    #[inline]
    pub fn as_ref(&self) -> TermRef<'_> {
        match self {
            Self::Iri(node) => TermRef::Iri(node.as_ref()),
            Self::BlankNode(node) => TermRef::BlankNode(node.as_ref()),
            Self::Literal(literal) => TermRef::Literal(literal.as_ref()),
        }
    }

    pub fn ntriples_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Term {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

/// A borrowed RDF [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term).
#[derive(Clone, Copy, Debug)]
pub enum TermRef<'a> {
    Iri(IriRef<'a>),
    BlankNode(BlankNodeRef<'a>),
    Literal(LiteralRef<'a>),
}

impl<'a> TermRef<'a> {
    #[inline]
    pub fn is_iri(self) -> bool {
        matches!(self, Self::Iri(_))
    }

    #[inline]
    pub fn is_blank_node(self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Literal(_))
    }

    #[inline]
    pub fn kind(self) -> TermKind {
        match self {
            Self::Iri(_) => TermKind::Iri,
            Self::BlankNode(_) => TermKind::BlankNode,
            Self::Literal(_) => TermKind::Literal,
        }
    }

    #[inline]
    pub fn into_owned(self) -> Term {
        match self {
            Self::Iri(node) => Term::Iri(node.into_owned()),
            Self::BlankNode(node) => Term::BlankNode(node.into_owned()),
            Self::Literal(literal) => Term::Literal(literal.into_owned()),
        }
    }
}

impl fmt::Display for TermRef<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(node) => fmt::Display::fmt(node, f),
            Self::BlankNode(node) => fmt::Display::fmt(node, f),
            Self::Literal(literal) => fmt::Display::fmt(literal, f),
        }
    }
}

impl PartialEq for TermRef<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        term_eq(*self, *other)
    }
}

impl Eq for TermRef<'_> {}

impl Hash for TermRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(term_hash(*self));
    }
}

macro_rules! impl_from {
    ($FROM: ty, $TO: ty, $VARIANT: path) => {
        impl From<$FROM> for $TO {
            #[inline]
            fn from(value: $FROM) -> Self {
                $VARIANT(value)
            }
        }
    };
    ($FROM: ty, $TO: ty, $VARIANT: path, $LT: lifetime) => {
        impl<$LT> From<$FROM> for $TO {
            #[inline]
            fn from(value: $FROM) -> Self {
                $VARIANT(value)
            }
        }
    };
}

impl_from!(Iri, BlankNodeOrIri, BlankNodeOrIri::Iri);
impl_from!(BlankNode, BlankNodeOrIri, BlankNodeOrIri::BlankNode);
impl_from!(Iri, Term, Term::Iri);
impl_from!(BlankNode, Term, Term::BlankNode);
impl_from!(Literal, Term, Term::Literal);
impl_from!(IriRef<'a>, BlankNodeOrIriRef<'a>, BlankNodeOrIriRef::Iri, 'a);
impl_from!(BlankNodeRef<'a>, BlankNodeOrIriRef<'a>, BlankNodeOrIriRef::BlankNode, 'a);
impl_from!(IriRef<'a>, TermRef<'a>, TermRef::Iri, 'a);
impl_from!(BlankNodeRef<'a>, TermRef<'a>, TermRef::BlankNode, 'a);
impl_from!(LiteralRef<'a>, TermRef<'a>, TermRef::Literal, 'a);

impl From<BlankNodeOrIri> for Term {
    #[inline]
    fn from(node: BlankNodeOrIri) -> Self {
        match node {
            BlankNodeOrIri::Iri(node) => Self::Iri(node),
            BlankNodeOrIri::BlankNode(node) => Self::BlankNode(node),
        }
    }
}

impl<'a> From<BlankNodeOrIriRef<'a>> for TermRef<'a> {
    #[inline]
    fn from(node: BlankNodeOrIriRef<'a>) -> Self {
        match node {
            BlankNodeOrIriRef::Iri(node) => Self::Iri(node),
            BlankNodeOrIriRef::BlankNode(node) => Self::BlankNode(node),
        }
    }
}

impl<'a> From<&'a BlankNodeOrIri> for BlankNodeOrIriRef<'a> {
    #[inline]
    fn from(node: &'a BlankNodeOrIri) -> Self {
        node.as_ref()
    }
}

impl From<BlankNodeOrIriRef<'_>> for BlankNodeOrIri {
    #[inline]
    fn from(node: BlankNodeOrIriRef<'_>) -> Self {
        node.into_owned()
    }
}

impl<'a> From<&'a Term> for TermRef<'a> {
    #[inline]
    fn from(term: &'a Term) -> Self {
        term.as_ref()
    }
}

impl From<TermRef<'_>> for Term {
    #[inline]
    fn from(term: TermRef<'_>) -> Self {
        term.into_owned()
    }
}

impl TryFrom<Term> for BlankNodeOrIri {
    type Error = UnsupportedTermKind;

    #[inline]
    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Iri(node) => Ok(Self::Iri(node)),
            Term::BlankNode(node) => Ok(Self::BlankNode(node)),
            Term::Literal(_) => Err(UnsupportedTermKind::new(
                ExpectedKind::BlankNodeOrIri,
                TermKind::Literal,
            )),
        }
    }
}

impl<'a> TryFrom<TermRef<'a>> for BlankNodeOrIriRef<'a> {
    type Error = UnsupportedTermKind;

    #[inline]
    fn try_from(term: TermRef<'a>) -> Result<Self, Self::Error> {
        match term {
            TermRef::Iri(node) => Ok(Self::Iri(node)),
            TermRef::BlankNode(node) => Ok(Self::BlankNode(node)),
            TermRef::Literal(_) => Err(UnsupportedTermKind::new(
                ExpectedKind::BlankNodeOrIri,
                TermKind::Literal,
            )),
        }
    }
}

impl TryFrom<Term> for Iri {
    type Error = UnsupportedTermKind;

    #[inline]
    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Iri(node) => Ok(node),
            other => Err(UnsupportedTermKind::new(ExpectedKind::Iri, other.kind())),
        }
    }
}

impl TryFrom<BlankNodeOrIri> for Iri {
    type Error = UnsupportedTermKind;

    #[inline]
    fn try_from(node: BlankNodeOrIri) -> Result<Self, Self::Error> {
        match node {
            BlankNodeOrIri::Iri(node) => Ok(node),
            BlankNodeOrIri::BlankNode(_) => Err(UnsupportedTermKind::new(
                ExpectedKind::Iri,
                TermKind::BlankNode,
            )),
        }
    }
}

impl TryFrom<Term> for BlankNode {
    type Error = UnsupportedTermKind;

    #[inline]
    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::BlankNode(node) => Ok(node),
            other => Err(UnsupportedTermKind::new(
                ExpectedKind::BlankNode,
                other.kind(),
            )),
        }
    }
}

impl TryFrom<Term> for Literal {
    type Error = UnsupportedTermKind;

    #[inline]
    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Literal(literal) => Ok(literal),
            other => Err(UnsupportedTermKind::new(ExpectedKind::Literal, other.kind())),
        }
    }
}

impl PartialEq<BlankNodeOrIri> for Term {
    #[inline]
    fn eq(&self, other: &BlankNodeOrIri) -> bool {
        self.as_ref() == TermRef::from(other.as_ref())
    }
}

impl PartialEq<Term> for BlankNodeOrIri {
    #[inline]
    fn eq(&self, other: &Term) -> bool {
        other == self
    }
}

impl PartialEq<TermRef<'_>> for Term {
    #[inline]
    fn eq(&self, other: &TermRef<'_>) -> bool {
        self.as_ref() == *other
    }
}

impl PartialEq<Term> for TermRef<'_> {
    #[inline]
    fn eq(&self, other: &Term) -> bool {
        *self == other.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlankNodeScope, InvalidTerm};
    use std::collections::HashSet;

    #[test]
    fn narrowing_rejects_literals() {
        let literal = Term::from(Literal::new_simple("x"));
        let error = BlankNodeOrIri::try_from(literal).unwrap_err();
        assert_eq!(error.expected, ExpectedKind::BlankNodeOrIri);
        assert_eq!(error.to_string(), "expected a blank node or an IRI, found a literal");
    }

    #[test]
    fn widening_preserves_equality() -> Result<(), InvalidTerm> {
        let iri = Iri::new("http://example.com/s")?;
        let subject = BlankNodeOrIri::from(iri.clone());
        let term = Term::from(subject.clone());
        assert_eq!(term, subject);
        assert_eq!(Iri::try_from(term).unwrap(), iri);
        Ok(())
    }

    #[test]
    fn owned_and_borrowed_terms_share_hashes() {
        let node = BlankNode::new(BlankNodeScope::new(), "b0");
        let mut set = HashSet::new();
        set.insert(Term::from(node.clone()));
        set.insert(Term::from(node.clone()));
        assert_eq!(set.len(), 1);

        let mut refs = HashSet::new();
        refs.insert(TermRef::from(node.as_ref()));
        refs.insert(TermRef::BlankNode(node.as_ref()));
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn kinds_differ() {
        let scope = BlankNodeScope::new();
        let iri = Term::Iri(Iri::new_unchecked("http://example.com/x"));
        let node = Term::BlankNode(BlankNode::new(scope, "x"));
        assert_ne!(iri, node);
        assert_eq!(iri.kind(), TermKind::Iri);
        assert_eq!(node.kind(), TermKind::BlankNode);
    }
}
