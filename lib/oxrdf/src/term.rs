use oxrdf::{BlankNode, GraphName, Literal, NamedNode, NamedOrBlankNode, Subject, Term};
use rdf_interop_model::backend::{
    BackendBlankNode, BackendBlankNodeOrIri, BackendIri, BackendLiteral, BackendTerm,
    HasNativeHandle,
};
use rdf_interop_model::contract::{
    blank_node_or_iri_eq, blank_node_or_iri_hash, term_eq, term_hash,
};
use rdf_interop_model::{
    BlankNode as ModelBlankNode, BlankNodeOrIriRef, BlankNodeRef, BlankNodeScope, IriRef,
    LiteralRef, RdfBlankNode, RdfBlankNodeOrIri, RdfIri, RdfLiteral, RdfTerm, TermRef,
};

/// An IRI backed by an [`oxrdf::NamedNode`].
#[derive(Clone, Debug)]
pub struct OxIri {
    native: NamedNode,
}

impl OxIri {
    pub(crate) fn new(native: NamedNode) -> Self {
        Self { native }
    }

    #[inline]
    pub fn into_native(self) -> NamedNode {
        self.native
    }
}

impl HasNativeHandle for OxIri {
    type Native = NamedNode;

    #[inline]
    fn as_native(&self) -> &NamedNode {
        &self.native
    }
}

impl RdfTerm for OxIri {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::Iri(self.as_iri_ref())
    }
}

impl RdfBlankNodeOrIri for OxIri {
    #[inline]
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_> {
        BlankNodeOrIriRef::Iri(self.as_iri_ref())
    }
}

impl RdfIri for OxIri {
    #[inline]
    fn as_iri_ref(&self) -> IriRef<'_> {
        iri_ref(&self.native)
    }
}

impl BackendTerm for OxIri {}
impl BackendBlankNodeOrIri for OxIri {}
impl BackendIri for OxIri {}

impl_value_traits!(OxIri, as_term_ref, term_eq, term_hash);

/// A blank node backed by an [`oxrdf::BlankNode`].
///
/// The native blank node is relative to the scope of the factory that built the wrapper. A blank
/// node of that scope keeps its identifier natively. A blank node of another scope gets a native
/// identifier derived from its scope and identifier, so that distinct blank nodes never share a
/// native value.
#[derive(Clone, Debug)]
pub struct OxBlankNode {
    home: BlankNodeScope,
    native: BlankNode,
    residue: Residue,
}

impl OxBlankNode {
    /// Wraps a native blank node of the `home` scope.
    pub(crate) fn new(home: BlankNodeScope, native: BlankNode) -> Self {
        Self {
            home,
            native,
            residue: Residue::Empty,
        }
    }

    /// Builds the wrapper of any blank node for the `home` scope.
    pub(crate) fn from_view(home: BlankNodeScope, node: BlankNodeRef<'_>) -> Self {
        let (native, residue) = rehome(home, node);
        Self {
            home,
            native,
            residue,
        }
    }

    #[inline]
    pub fn scope(&self) -> BlankNodeScope {
        self.as_blank_node_ref().scope()
    }

    #[inline]
    pub fn into_native(self) -> BlankNode {
        self.native
    }

    /// The native blank node standing for this one in values built in the `home` scope.
    pub(crate) fn into_native_in(self, home: BlankNodeScope) -> (BlankNode, Residue) {
        if self.home == home {
            return (self.native, self.residue);
        }
        rehome(home, self.as_blank_node_ref())
    }
}

impl HasNativeHandle for OxBlankNode {
    type Native = BlankNode;

    #[inline]
    fn as_native(&self) -> &BlankNode {
        &self.native
    }
}

impl RdfTerm for OxBlankNode {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::BlankNode(self.as_blank_node_ref())
    }
}

impl RdfBlankNodeOrIri for OxBlankNode {
    #[inline]
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_> {
        BlankNodeOrIriRef::BlankNode(self.as_blank_node_ref())
    }
}

impl RdfBlankNode for OxBlankNode {
    #[inline]
    fn as_blank_node_ref(&self) -> BlankNodeRef<'_> {
        blank_node_ref(self.home, &self.residue, &self.native)
    }
}

impl BackendTerm for OxBlankNode {}
impl BackendBlankNodeOrIri for OxBlankNode {}
impl BackendBlankNode for OxBlankNode {}

impl_value_traits!(OxBlankNode, as_term_ref, term_eq, term_hash);

/// A literal backed by an [`oxrdf::Literal`].
///
/// `oxrdf` stores language tags in lowercase. The wrapper keeps the tag as it was given, so
/// [`RdfLiteral::language_tag`] returns the original casing while the native literal is lowercase.
#[derive(Clone, Debug)]
pub struct OxLiteral {
    native: Literal,
    residue: Residue,
}

impl OxLiteral {
    /// The native literal must not have the datatype `rdf:langString` without a language tag.
    pub(crate) fn new(native: Literal) -> Self {
        Self {
            native,
            residue: Residue::Empty,
        }
    }

    /// Wraps a language-tagged native literal that was built from `language`.
    pub(crate) fn with_language(native: Literal, language: &str) -> Self {
        let residue = if native.language() == Some(language) {
            Residue::Empty
        } else {
            Residue::LanguageTag(language.into())
        };
        Self { native, residue }
    }

    #[inline]
    pub fn into_native(self) -> Literal {
        self.native
    }
}

impl HasNativeHandle for OxLiteral {
    type Native = Literal;

    #[inline]
    fn as_native(&self) -> &Literal {
        &self.native
    }
}

impl RdfTerm for OxLiteral {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::Literal(self.as_literal_ref())
    }
}

impl RdfLiteral for OxLiteral {
    #[inline]
    fn as_literal_ref(&self) -> LiteralRef<'_> {
        literal_ref(&self.residue, &self.native)
    }
}

impl BackendTerm for OxLiteral {}
impl BackendLiteral for OxLiteral {}

impl_value_traits!(OxLiteral, as_term_ref, term_eq, term_hash);

/// An [`OxIri`] or an [`OxBlankNode`].
#[derive(Clone, Debug)]
pub enum OxBlankNodeOrIri {
    Iri(OxIri),
    BlankNode(OxBlankNode),
}

impl OxBlankNodeOrIri {
    pub fn into_native(self) -> NamedOrBlankNode {
        match self {
            Self::Iri(node) => NamedOrBlankNode::NamedNode(node.native),
            Self::BlankNode(node) => NamedOrBlankNode::BlankNode(node.native),
        }
    }

    /// The scope of the blank node, if this is one.
    pub fn blank_node_scope(&self) -> Option<BlankNodeScope> {
        match self {
            Self::Iri(_) => None,
            Self::BlankNode(node) => Some(node.scope()),
        }
    }

    pub(crate) fn into_native_subject(self, home: BlankNodeScope) -> (Subject, Residue) {
        match self {
            Self::Iri(node) => (Subject::NamedNode(node.native), Residue::Empty),
            Self::BlankNode(node) => {
                let (native, residue) = node.into_native_in(home);
                (Subject::BlankNode(native), residue)
            }
        }
    }

    pub(crate) fn into_native_graph_name(self, home: BlankNodeScope) -> (GraphName, Residue) {
        match self {
            Self::Iri(node) => (GraphName::NamedNode(node.native), Residue::Empty),
            Self::BlankNode(node) => {
                let (native, residue) = node.into_native_in(home);
                (GraphName::BlankNode(native), residue)
            }
        }
    }
}

impl RdfTerm for OxBlankNodeOrIri {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        self.as_blank_node_or_iri_ref().into()
    }
}

impl RdfBlankNodeOrIri for OxBlankNodeOrIri {
    #[inline]
    fn as_blank_node_or_iri_ref(&self) -> BlankNodeOrIriRef<'_> {
        match self {
            Self::Iri(node) => node.as_blank_node_or_iri_ref(),
            Self::BlankNode(node) => node.as_blank_node_or_iri_ref(),
        }
    }
}

impl_value_traits!(
    OxBlankNodeOrIri,
    as_blank_node_or_iri_ref,
    blank_node_or_iri_eq,
    blank_node_or_iri_hash
);

impl From<OxIri> for OxBlankNodeOrIri {
    #[inline]
    fn from(node: OxIri) -> Self {
        Self::Iri(node)
    }
}

impl From<OxBlankNode> for OxBlankNodeOrIri {
    #[inline]
    fn from(node: OxBlankNode) -> Self {
        Self::BlankNode(node)
    }
}

/// An [`OxIri`], an [`OxBlankNode`] or an [`OxLiteral`].
#[derive(Clone, Debug)]
pub enum OxTerm {
    Iri(OxIri),
    BlankNode(OxBlankNode),
    Literal(OxLiteral),
}

impl OxTerm {
    pub fn into_native(self) -> Term {
        match self {
            Self::Iri(node) => node.native.into(),
            Self::BlankNode(node) => node.native.into(),
            Self::Literal(literal) => literal.native.into(),
        }
    }

    pub fn blank_node_scope(&self) -> Option<BlankNodeScope> {
        match self {
            Self::BlankNode(node) => Some(node.scope()),
            Self::Iri(_) | Self::Literal(_) => None,
        }
    }

    pub(crate) fn into_native_object(self, home: BlankNodeScope) -> (Term, Residue) {
        match self {
            Self::Iri(node) => (node.native.into(), Residue::Empty),
            Self::BlankNode(node) => {
                let (native, residue) = node.into_native_in(home);
                (native.into(), residue)
            }
            Self::Literal(literal) => (literal.native.into(), literal.residue),
        }
    }
}

impl RdfTerm for OxTerm {
    #[inline]
    fn as_term_ref(&self) -> TermRef<'_> {
        match self {
            Self::Iri(node) => node.as_term_ref(),
            Self::BlankNode(node) => node.as_term_ref(),
            Self::Literal(literal) => literal.as_term_ref(),
        }
    }
}

impl_value_traits!(OxTerm, as_term_ref, term_eq, term_hash);

impl From<OxIri> for OxTerm {
    #[inline]
    fn from(node: OxIri) -> Self {
        Self::Iri(node)
    }
}

impl From<OxBlankNode> for OxTerm {
    #[inline]
    fn from(node: OxBlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<OxLiteral> for OxTerm {
    #[inline]
    fn from(literal: OxLiteral) -> Self {
        Self::Literal(literal)
    }
}

impl From<OxBlankNodeOrIri> for OxTerm {
    #[inline]
    fn from(node: OxBlankNodeOrIri) -> Self {
        match node {
            OxBlankNodeOrIri::Iri(node) => Self::Iri(node),
            OxBlankNodeOrIri::BlankNode(node) => Self::BlankNode(node),
        }
    }
}

pub(crate) fn iri_ref(node: &NamedNode) -> IriRef<'_> {
    IriRef::new_unchecked(node.as_str())
}

/// The part of an abstract value that its native counterpart does not keep.
#[derive(Clone, Debug, Default)]
pub(crate) enum Residue {
    #[default]
    Empty,
    /// A blank node of a scope other than the one the native value is relative to.
    ForeignBlankNode(ModelBlankNode),
    /// A language tag whose casing differs from the lowercase native one.
    LanguageTag(Box<str>),
}

/// The native blank node standing for `node` in values built in the `home` scope.
pub(crate) fn rehome(home: BlankNodeScope, node: BlankNodeRef<'_>) -> (BlankNode, Residue) {
    if node.scope() == home {
        return (native_blank_node(node.id()), Residue::Empty);
    }
    let id = format!("{}_{}", node.scope().as_uuid().simple(), node.id());
    (
        BlankNode::new_unchecked(id),
        Residue::ForeignBlankNode(node.into_owned()),
    )
}

/// Identifiers that are not valid N-Triples labels are kept as they are. The N-Triples form of the
/// abstract view sanitizes them.
pub(crate) fn native_blank_node(id: &str) -> BlankNode {
    BlankNode::new(id).unwrap_or_else(|_| BlankNode::new_unchecked(id))
}

pub(crate) fn blank_node_ref<'a>(
    home: BlankNodeScope,
    residue: &'a Residue,
    node: &'a BlankNode,
) -> BlankNodeRef<'a> {
    match residue {
        Residue::ForeignBlankNode(origin) => origin.as_ref(),
        Residue::Empty | Residue::LanguageTag(_) => BlankNodeRef::new(home, node.as_str()),
    }
}

pub(crate) fn literal_ref<'a>(residue: &'a Residue, literal: &'a Literal) -> LiteralRef<'a> {
    let language = match residue {
        Residue::LanguageTag(language) => Some(&**language),
        Residue::Empty | Residue::ForeignBlankNode(_) => literal.language(),
    };
    match language {
        Some(language) => LiteralRef::new_language_tagged_unchecked(literal.value(), language),
        None => LiteralRef::new_typed_unchecked(
            literal.value(),
            IriRef::new_unchecked(literal.datatype().as_str()),
        ),
    }
}

/// The view of a subject that was checked not to be a triple term.
pub(crate) fn subject_ref<'a>(
    home: BlankNodeScope,
    residue: &'a Residue,
    subject: &'a Subject,
) -> BlankNodeOrIriRef<'a> {
    match subject {
        Subject::NamedNode(node) => BlankNodeOrIriRef::Iri(iri_ref(node)),
        Subject::BlankNode(node) => {
            BlankNodeOrIriRef::BlankNode(blank_node_ref(home, residue, node))
        }
        Subject::Triple(_) => unreachable!("triple terms are rejected when wrapping statements"),
    }
}

/// The view of an object that was checked not to be a triple term.
pub(crate) fn object_ref<'a>(
    home: BlankNodeScope,
    residue: &'a Residue,
    object: &'a Term,
) -> TermRef<'a> {
    match object {
        Term::NamedNode(node) => TermRef::Iri(iri_ref(node)),
        Term::BlankNode(node) => TermRef::BlankNode(blank_node_ref(home, residue, node)),
        Term::Literal(literal) => TermRef::Literal(literal_ref(residue, literal)),
        Term::Triple(_) => unreachable!("triple terms are rejected when wrapping statements"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_interop_model::vocab::xsd;
    use rdf_interop_model::{terms_equal, Iri, Literal as ModelLiteral};

    #[test]
    fn iri_view_matches_native() {
        let native = NamedNode::new_unchecked("http://example.com/s");
        let iri = OxIri::new(native.clone());
        assert_eq!(iri.iri_str(), native.as_str());
        assert_eq!(iri.as_native(), &native);
        assert!(terms_equal(&iri, &Iri::new_unchecked("http://example.com/s")));
        assert_eq!(iri.to_string(), "<http://example.com/s>");
    }

    #[test]
    fn blank_node_identity_includes_the_scope() {
        let scope = BlankNodeScope::new();
        let node = OxBlankNode::new(scope, BlankNode::new_unchecked("b1"));
        assert!(terms_equal(&node, &ModelBlankNode::new(scope, "b1")));
        assert!(!terms_equal(
            &node,
            &OxBlankNode::new(BlankNodeScope::new(), BlankNode::new_unchecked("b1"))
        ));
        assert_eq!(node.blank_node_id(), "b1");
    }

    #[test]
    fn literal_views() {
        let simple = OxLiteral::new(Literal::new_simple_literal("hi"));
        assert_eq!(simple.datatype_iri(), xsd::STRING);
        assert!(terms_equal(&simple, &ModelLiteral::new_simple("hi")));

        let tagged = OxLiteral::new(Literal::new_language_tagged_literal_unchecked("hi", "en-us"));
        assert_eq!(tagged.language_tag(), Some("en-us"));
        assert!(terms_equal(
            &tagged,
            &ModelLiteral::new_language_tagged_unchecked("hi", "en-US")
        ));
        assert_eq!(tagged.to_string(), "\"hi\"@en-us");

        let original = OxLiteral::with_language(
            Literal::new_language_tagged_literal_unchecked("hi", "en-us"),
            "en-US",
        );
        assert_eq!(original.language_tag(), Some("en-US"));
        assert_eq!(original.as_native().language(), Some("en-us"));
        assert_eq!(original, tagged);
        assert_eq!(original.to_string(), "\"hi\"@en-us");
    }

    #[test]
    fn foreign_blank_nodes_get_distinct_native_identifiers() {
        let (home, foreign) = (BlankNodeScope::new(), BlankNodeScope::new());
        let local = OxBlankNode::new(home, native_blank_node("x"));
        let imported = OxBlankNode::from_view(home, BlankNodeRef::new(foreign, "x"));
        assert_eq!(imported.scope(), foreign);
        assert_eq!(imported.blank_node_id(), "x");
        assert!(!terms_equal(&local, &imported));
        assert_ne!(local.as_native(), imported.as_native());

        let returned = OxBlankNode::from_view(foreign, imported.as_blank_node_ref());
        assert_eq!(returned.as_native().as_str(), "x");
        let (native, residue) = imported.into_native_in(foreign);
        assert_eq!(native, BlankNode::new_unchecked("x"));
        assert!(matches!(residue, Residue::Empty));
    }

    #[test]
    fn unions_delegate_to_their_variants() {
        let scope = BlankNodeScope::new();
        let node = OxBlankNode::new(scope, BlankNode::new_unchecked("x"));
        let subject = OxBlankNodeOrIri::from(node.clone());
        let term = OxTerm::from(subject.clone());
        assert!(terms_equal(&node, &subject));
        assert!(terms_equal(&subject, &term));
        assert_eq!(term.blank_node_scope(), Some(scope));
        assert_eq!(term.into_native(), Term::BlankNode(BlankNode::new_unchecked("x")));
    }
}
