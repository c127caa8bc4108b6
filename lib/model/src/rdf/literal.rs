use crate::contract::{literal_eq, literal_hash};
use crate::ntriples::{write_iri, write_language_tag, write_quoted_string};
use crate::vocab::{rdf, xsd};
use crate::{InvalidTerm, Iri, IriRef, RdfResult};
use oxilangtag::LanguageTag;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An owned RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// A literal has a lexical form, a datatype IRI and, iff the datatype is `rdf:langString`, a
/// language tag. Language tags keep the casing they were created with but compare ignoring ASCII
/// case.
///
/// The default string formatter returns an N-Triples compatible representation:
/// ```
/// use rdf_interop_model::Literal;
///
/// assert_eq!("\"foo\\nbar\"", Literal::new_simple("foo\nbar").to_string());
///
/// assert_eq!(
///     r#""1999-01-01"^^<http://www.w3.org/2001/XMLSchema#date>"#,
///     Literal::new_typed(
///         "1999-01-01",
///         rdf_interop_model::Iri::new("http://www.w3.org/2001/XMLSchema#date")?
///     )?
///     .to_string()
/// );
///
/// assert_eq!(
///     r#""foo"@en"#,
///     Literal::new_language_tagged("foo", "EN")?.to_string()
/// );
/// # Result::<_, rdf_interop_model::InvalidTerm>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct Literal {
    value: Arc<str>,
    datatype: Iri,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Builds a literal, checking that the language tag and the datatype are consistent.
    ///
    /// A missing datatype defaults to `xsd:string`, or to `rdf:langString` if a language tag is
    /// given.
    pub fn new(
        value: impl Into<Arc<str>>,
        datatype: Option<Iri>,
        language: Option<&str>,
    ) -> RdfResult<Self> {
        match (datatype, language) {
            (None, None) => Ok(Self::new_simple(value)),
            (datatype, Some(language)) => {
                if let Some(datatype) = datatype.filter(|d| d.as_ref() != rdf::LANG_STRING) {
                    return Err(InvalidTerm::DatatypeMismatch {
                        datatype: datatype.as_str().to_owned(),
                        language: language.to_owned(),
                    });
                }
                Self::new_language_tagged(value, language)
            }
            (Some(datatype), None) => Self::new_typed(value, datatype),
        }
    }

    /// Builds an `xsd:string` literal.
    #[inline]
    pub fn new_simple(value: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
            datatype: xsd::STRING.into_owned(),
            language: None,
        }
    }

    /// Builds a literal with an explicit datatype.
    ///
    /// Fails with [`InvalidTerm::MissingLanguageTag`] for `rdf:langString`.
    pub fn new_typed(value: impl Into<Arc<str>>, datatype: impl Into<Iri>) -> RdfResult<Self> {
        let datatype = datatype.into();
        if datatype.as_ref() == rdf::LANG_STRING {
            return Err(InvalidTerm::MissingLanguageTag);
        }
        Ok(Self {
            value: value.into(),
            datatype,
            language: None,
        })
    }

    /// Builds an `rdf:langString` literal after validating the
    /// [BCP 47](https://www.rfc-editor.org/info/bcp47) tag.
    pub fn new_language_tagged(value: impl Into<Arc<str>>, language: &str) -> RdfResult<Self> {
        validate_language_tag(language)?;
        Ok(Self::new_language_tagged_unchecked(value, language))
    }

    /// Builds an `rdf:langString` literal.
    ///
    /// It is the caller's responsibility to ensure that `language` is a valid BCP 47 tag.
    #[inline]
    pub fn new_language_tagged_unchecked(
        value: impl Into<Arc<str>>,
        language: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            value: value.into(),
            datatype: rdf::LANG_STRING.into_owned(),
            language: Some(language.into()),
        }
    }

    /// The literal [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The literal [datatype](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri).
    #[inline]
    pub fn datatype(&self) -> IriRef<'_> {
        self.datatype.as_ref()
    }

    /// The literal [language tag](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tag) as
    /// given at construction time.
    #[inline]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[inline]
    pub fn as_ref(&self) -> LiteralRef<'_> {
        LiteralRef {
            value: &self.value,
            datatype: self.datatype.as_ref(),
            language: self.language.as_deref(),
        }
    }

    pub fn ntriples_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Literal {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

impl PartialEq for Literal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        literal_eq(self.as_ref(), other.as_ref())
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state);
    }
}

/// A borrowed RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
#[derive(Clone, Copy, Debug)]
pub struct LiteralRef<'a> {
    value: &'a str,
    datatype: IriRef<'a>,
    language: Option<&'a str>,
}

impl<'a> LiteralRef<'a> {
    /// Builds an `xsd:string` literal.
    #[inline]
    pub const fn new_simple(value: &'a str) -> Self {
        Self {
            value,
            datatype: xsd::STRING,
            language: None,
        }
    }

    /// Builds a literal with an explicit datatype.
    ///
    /// It is the caller's responsibility to ensure that `datatype` is not `rdf:langString`.
    #[inline]
    pub const fn new_typed_unchecked(value: &'a str, datatype: IriRef<'a>) -> Self {
        Self {
            value,
            datatype,
            language: None,
        }
    }

    /// Builds an `rdf:langString` literal.
    ///
    /// It is the caller's responsibility to ensure that `language` is a valid BCP 47 tag.
    #[inline]
    pub const fn new_language_tagged_unchecked(value: &'a str, language: &'a str) -> Self {
        Self {
            value,
            datatype: rdf::LANG_STRING,
            language: Some(language),
        }
    }

    #[inline]
    pub const fn value(self) -> &'a str {
        self.value
    }

    #[inline]
    pub const fn datatype(self) -> IriRef<'a> {
        self.datatype
    }

    #[inline]
    pub const fn language(self) -> Option<&'a str> {
        self.language
    }

    /// Checks if this literal could be seen as an RDF 1.0
    /// [plain literal](https://www.w3.org/TR/2004/REC-rdf-concepts-20040210/#dfn-plain-literal).
    #[inline]
    pub fn is_plain(self) -> bool {
        self.language.is_some() || self.datatype == xsd::STRING
    }

    #[inline]
    pub fn into_owned(self) -> Literal {
        Literal {
            value: self.value.into(),
            datatype: self.datatype.into_owned(),
            language: self.language.map(Into::into),
        }
    }
}

impl fmt::Display for LiteralRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted_string(f, self.value)?;
        match self.language {
            Some(language) => write_language_tag(f, language),
            None if self.datatype == xsd::STRING => Ok(()),
            None => {
                f.write_str("^^")?;
                write_iri(f, self.datatype.as_str())
            }
        }
    }
}

impl PartialEq for LiteralRef<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        literal_eq(*self, *other)
    }
}

impl Eq for LiteralRef<'_> {}

impl Hash for LiteralRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(literal_hash(*self));
    }
}

impl<'a> From<&'a Literal> for LiteralRef<'a> {
    #[inline]
    fn from(node: &'a Literal) -> Self {
        node.as_ref()
    }
}

impl From<LiteralRef<'_>> for Literal {
    #[inline]
    fn from(node: LiteralRef<'_>) -> Self {
        node.into_owned()
    }
}

impl PartialEq<Literal> for LiteralRef<'_> {
    #[inline]
    fn eq(&self, other: &Literal) -> bool {
        *self == other.as_ref()
    }
}

impl PartialEq<LiteralRef<'_>> for Literal {
    #[inline]
    fn eq(&self, other: &LiteralRef<'_>) -> bool {
        self.as_ref() == *other
    }
}

fn validate_language_tag(language: &str) -> RdfResult<()> {
    LanguageTag::parse(language)
        .map(|_| ())
        .map_err(|source| InvalidTerm::LanguageTag {
            tag: language.to_owned(),
            source,
        })
}
