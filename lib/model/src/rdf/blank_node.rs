use crate::contract::{blank_node_eq, blank_node_hash};
use crate::ntriples::write_blank_node;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

/// The scope in which blank node identifiers are unique.
///
/// Every factory owns exactly one scope. Blank nodes minted in different scopes are never equal,
/// even if their identifiers coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNodeScope(Uuid);

impl BlankNodeScope {
    /// Creates a fresh scope that is distinct from every other scope.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Re-creates a scope from its identifier.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BlankNodeScope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlankNodeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.as_hyphenated(), f)
    }
}

/// An owned RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// A blank node is identified by the scope of the factory that created it and an opaque
/// identifier that is unique within that scope. The identifier is not required to match any label
/// found in a serialization.
///
/// The default string formatter returns an N-Triples compatible representation:
/// ```
/// use rdf_interop_model::{BlankNode, BlankNodeScope};
///
/// assert_eq!("_:b1", BlankNode::new(BlankNodeScope::new(), "b1").to_string());
/// ```
#[derive(Clone, Debug)]
pub struct BlankNode {
    scope: BlankNodeScope,
    id: Arc<str>,
}

impl BlankNode {
    pub fn new(scope: BlankNodeScope, id: impl Into<Arc<str>>) -> Self {
        Self {
            scope,
            id: id.into(),
        }
    }

    #[inline]
    pub fn scope(&self) -> BlankNodeScope {
        self.scope
    }

    /// Returns the identifier of the blank node within its scope.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn as_ref(&self) -> BlankNodeRef<'_> {
        BlankNodeRef::new(self.scope, &self.id)
    }

    pub fn ntriples_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BlankNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

impl PartialEq for BlankNode {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        blank_node_eq(self.as_ref(), other.as_ref())
    }
}

impl Eq for BlankNode {}

impl Hash for BlankNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

/// A borrowed RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
#[derive(Clone, Copy, Debug)]
pub struct BlankNodeRef<'a> {
    scope: BlankNodeScope,
    id: &'a str,
}

impl<'a> BlankNodeRef<'a> {
    #[inline]
    pub const fn new(scope: BlankNodeScope, id: &'a str) -> Self {
        Self { scope, id }
    }

    #[inline]
    pub const fn scope(self) -> BlankNodeScope {
        self.scope
    }

    #[inline]
    pub const fn id(self) -> &'a str {
        self.id
    }

    #[inline]
    pub fn into_owned(self) -> BlankNode {
        BlankNode::new(self.scope, self.id)
    }
}

impl fmt::Display for BlankNodeRef<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_blank_node(f, self.id)
    }
}

impl PartialEq for BlankNodeRef<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        blank_node_eq(*self, *other)
    }
}

impl Eq for BlankNodeRef<'_> {}

impl Hash for BlankNodeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(blank_node_hash(*self));
    }
}

impl<'a> From<&'a BlankNode> for BlankNodeRef<'a> {
    #[inline]
    fn from(node: &'a BlankNode) -> Self {
        node.as_ref()
    }
}

impl From<BlankNodeRef<'_>> for BlankNode {
    #[inline]
    fn from(node: BlankNodeRef<'_>) -> Self {
        node.into_owned()
    }
}

impl PartialEq<BlankNode> for BlankNodeRef<'_> {
    #[inline]
    fn eq(&self, other: &BlankNode) -> bool {
        *self == other.as_ref()
    }
}

impl PartialEq<BlankNodeRef<'_>> for BlankNode {
    #[inline]
    fn eq(&self, other: &BlankNodeRef<'_>) -> bool {
        self.as_ref() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_scope_same_id_is_equal() {
        let scope = BlankNodeScope::new();
        assert_eq!(BlankNode::new(scope, "x"), BlankNode::new(scope, "x"));
        assert_ne!(BlankNode::new(scope, "x"), BlankNode::new(scope, "y"));
    }

    #[test]
    fn different_scopes_are_never_equal() {
        let a = BlankNode::new(BlankNodeScope::new(), "x");
        let b = BlankNode::new(BlankNodeScope::new(), "x");
        assert_ne!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn scope_round_trips_through_uuid() {
        let scope = BlankNodeScope::new();
        assert_eq!(BlankNodeScope::from_uuid(*scope.as_uuid()), scope);
    }
}
