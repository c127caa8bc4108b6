use crate::contract::{iri_eq, iri_hash};
use crate::ntriples::write_iri;
use crate::{InvalidTerm, RdfResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An owned RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri).
///
/// The IRI string is kept exactly as supplied: no case folding, no percent-decoding and no other
/// normalization takes place. Two IRIs are equal iff their strings are equal.
///
/// The default string formatter returns an N-Triples compatible representation:
/// ```
/// use rdf_interop_model::Iri;
///
/// assert_eq!(
///     "<http://example.com/foo>",
///     Iri::new("http://example.com/foo")?.to_string()
/// );
/// # Result::<_, rdf_interop_model::InvalidTerm>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct Iri {
    iri: Arc<str>,
}

impl Iri {
    /// Builds and validates an IRI.
    ///
    /// Relative IRIs are rejected.
    pub fn new(iri: impl Into<String>) -> RdfResult<Self> {
        let iri = iri.into();
        validate_iri(&iri)?;
        Ok(Self::new_unchecked(iri))
    }

    /// Builds an IRI from a string.
    ///
    /// It is the caller's responsibility to ensure that `iri` is a valid absolute IRI.
    /// [`Iri::new()`] is a safe version of this constructor and should be used for untrusted data.
    #[inline]
    pub fn new_unchecked(iri: impl Into<Arc<str>>) -> Self {
        Self { iri: iri.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.iri
    }

    #[inline]
    pub fn as_ref(&self) -> IriRef<'_> {
        IriRef::new_unchecked(&self.iri)
    }

    pub fn ntriples_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Iri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

impl PartialEq for Iri {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        iri_eq(self.as_ref(), other.as_ref())
    }
}

impl Eq for Iri {}

impl Hash for Iri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

impl PartialEq<str> for Iri {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Iri {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A borrowed RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri).
///
/// ```
/// use rdf_interop_model::IriRef;
///
/// assert_eq!(
///     "<http://example.com/foo>",
///     IriRef::new("http://example.com/foo")?.to_string()
/// );
/// # Result::<_, rdf_interop_model::InvalidTerm>::Ok(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct IriRef<'a> {
    iri: &'a str,
}

impl<'a> IriRef<'a> {
    /// Builds and validates an IRI.
    pub fn new(iri: &'a str) -> RdfResult<Self> {
        validate_iri(iri)?;
        Ok(Self::new_unchecked(iri))
    }

    /// Builds an IRI from a string.
    ///
    /// It is the caller's responsibility to ensure that `iri` is a valid absolute IRI.
    #[inline]
    pub const fn new_unchecked(iri: &'a str) -> Self {
        Self { iri }
    }

    #[inline]
    pub const fn as_str(self) -> &'a str {
        self.iri
    }

    #[inline]
    pub fn into_owned(self) -> Iri {
        Iri::new_unchecked(self.iri)
    }
}

impl fmt::Display for IriRef<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_iri(f, self.iri)
    }
}

impl PartialEq for IriRef<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        iri_eq(*self, *other)
    }
}

impl Eq for IriRef<'_> {}

impl Hash for IriRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(iri_hash(*self));
    }
}

impl<'a> From<&'a Iri> for IriRef<'a> {
    #[inline]
    fn from(node: &'a Iri) -> Self {
        node.as_ref()
    }
}

impl From<IriRef<'_>> for Iri {
    #[inline]
    fn from(node: IriRef<'_>) -> Self {
        node.into_owned()
    }
}

impl PartialEq<Iri> for IriRef<'_> {
    #[inline]
    fn eq(&self, other: &Iri) -> bool {
        *self == other.as_ref()
    }
}

impl PartialEq<IriRef<'_>> for Iri {
    #[inline]
    fn eq(&self, other: &IriRef<'_>) -> bool {
        self.as_ref() == *other
    }
}

fn validate_iri(iri: &str) -> RdfResult<()> {
    oxiri::Iri::parse(iri)
        .map(|_| ())
        .map_err(|source| InvalidTerm::Iri {
            iri: iri.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_iris() {
        assert!(matches!(Iri::new("foo/bar"), Err(InvalidTerm::Iri { .. })));
        assert!(matches!(Iri::new("http://exa mple.com"), Err(InvalidTerm::Iri { .. })));
    }

    #[test]
    fn keeps_the_string_as_supplied() -> RdfResult<()> {
        let iri = Iri::new("HTTP://Example.com/%7Efoo")?;
        assert_eq!(iri.as_str(), "HTTP://Example.com/%7Efoo");
        assert_ne!(iri, Iri::new("http://example.com/~foo")?);
        Ok(())
    }

    #[test]
    fn owned_and_borrowed_are_equal() -> RdfResult<()> {
        let owned = Iri::new("http://example.com/s")?;
        let borrowed = IriRef::new("http://example.com/s")?;
        assert_eq!(owned, borrowed);
        assert_eq!(borrowed, owned);
        assert_eq!(borrowed.into_owned(), owned);
        Ok(())
    }
}
