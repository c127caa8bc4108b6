use crate::TermKind;
use oxilangtag::LanguageTagParseError;
use oxiri::IriParseError;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// The result of constructing an RDF term.
pub type RdfResult<T> = Result<T, InvalidTerm>;

/// A term was rejected at construction time.
///
/// Terms that exist are always valid, so this error can only be observed when building a term, a
/// literal, or when adopting a value from a backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvalidTerm {
    /// The string is not an absolute [RFC 3987](https://www.ietf.org/rfc/rfc3987.html) IRI.
    #[error("invalid IRI <{iri}>: {source}")]
    Iri {
        iri: String,
        #[source]
        source: IriParseError,
    },
    /// The language tag is not a well-formed [BCP 47](https://www.rfc-editor.org/info/bcp47) tag.
    #[error("invalid language tag '{tag}': {source}")]
    LanguageTag {
        tag: String,
        #[source]
        source: LanguageTagParseError,
    },
    /// A language tag was given together with a datatype other than `rdf:langString`.
    #[error("a literal with language tag '{language}' must have datatype rdf:langString, not <{datatype}>")]
    DatatypeMismatch { datatype: String, language: String },
    /// The datatype `rdf:langString` was given without a language tag.
    #[error("a literal with datatype rdf:langString requires a language tag")]
    MissingLanguageTag,
}

/// A value of one term kind was used where another kind is required.
///
/// Raised by narrowing conversions (e.g. a [`Term`](crate::Term) into a subject) and by backend
/// adapters that are asked to wrap native values they cannot represent.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("expected {expected}, found {found}")]
pub struct UnsupportedTermKind {
    pub expected: ExpectedKind,
    pub found: FoundKind,
}

impl UnsupportedTermKind {
    pub fn new(expected: ExpectedKind, found: impl Into<FoundKind>) -> Self {
        Self {
            expected,
            found: found.into(),
        }
    }
}

/// The set of kinds that would have been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedKind {
    Iri,
    BlankNode,
    Literal,
    BlankNodeOrIri,
    Term,
}

impl Display for ExpectedKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Iri => "an IRI",
            Self::BlankNode => "a blank node",
            Self::Literal => "a literal",
            Self::BlankNodeOrIri => "a blank node or an IRI",
            Self::Term => "an IRI, a blank node or a literal",
        })
    }
}

/// The kind that was actually encountered.
///
/// Backends may know kinds that have no counterpart in RDF 1.1 (e.g. RDF-star triple terms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundKind {
    Term(TermKind),
    TripleTerm,
}

impl From<TermKind> for FoundKind {
    fn from(value: TermKind) -> Self {
        Self::Term(value)
    }
}

impl Display for FoundKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Term(kind) => write!(f, "{kind}"),
            Self::TripleTerm => f.write_str("a triple term"),
        }
    }
}

/// Any error raised while turning input into terms.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RdfError {
    #[error(transparent)]
    InvalidTerm(#[from] InvalidTerm),
    #[error(transparent)]
    UnsupportedTermKind(#[from] UnsupportedTermKind),
}

/// Two values break the equality and hashing contract.
///
/// This error is never produced by constructing or comparing terms. It is reported by the checks
/// in [`conformance`](crate::conformance) that backends run in their test suites.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{rule} violated for {left} and {right}")]
pub struct ContractViolation {
    pub rule: ContractRule,
    pub left: String,
    pub right: String,
}

/// The rule that a [`ContractViolation`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractRule {
    Reflexivity,
    Symmetry,
    Transitivity,
    EqualHash,
    StableAccessors,
    ComponentEquality,
    NTriplesAgreement,
}

impl Display for ContractRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Reflexivity => "reflexivity of equality",
            Self::Symmetry => "symmetry of equality",
            Self::Transitivity => "transitivity of equality",
            Self::EqualHash => "equal values must have equal hashes",
            Self::StableAccessors => "accessors must return equal values on every call",
            Self::ComponentEquality => "statement equality must match component equality",
            Self::NTriplesAgreement => "equal values must have the same N-Triples form",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_kinds_name_both_sides() {
        assert_eq!(
            UnsupportedTermKind::new(ExpectedKind::BlankNodeOrIri, TermKind::Literal).to_string(),
            "expected a blank node or an IRI, found a literal"
        );
        assert_eq!(
            UnsupportedTermKind::new(ExpectedKind::Term, FoundKind::TripleTerm).to_string(),
            "expected an IRI, a blank node or a literal, found a triple term"
        );
    }
}
