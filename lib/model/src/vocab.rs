//! Well-known IRIs used by the term model.

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.
    use crate::IriRef;

    /// The datatype of language-tagged string values.
    pub const LANG_STRING: IriRef<'_> =
        IriRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString");
}

pub mod xsd {
    //! [XML Schema](https://www.w3.org/TR/xmlschema11-2/) datatypes.
    use crate::IriRef;

    /// Character strings. The datatype of literals without explicit datatype.
    pub const STRING: IriRef<'_> = IriRef::new_unchecked("http://www.w3.org/2001/XMLSchema#string");
    /// true, false
    pub const BOOLEAN: IriRef<'_> =
        IriRef::new_unchecked("http://www.w3.org/2001/XMLSchema#boolean");
    /// Arbitrary-size integer numbers.
    pub const INTEGER: IriRef<'_> =
        IriRef::new_unchecked("http://www.w3.org/2001/XMLSchema#integer");
}
