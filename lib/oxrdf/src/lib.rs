//! An [`oxrdf`] backend for the RDF Interop term model.
//!
//! The wrappers of this crate hold the native `oxrdf` values and expose them through the abstract
//! views of [`rdf_interop_model`]. Since `oxrdf` has no notion of blank node scopes, native values
//! are relative to the scope of the factory that built them: blank nodes of other scopes get
//! derived native identifiers and the wrapper remembers their abstract identity. Wrappers also
//! remember the casing of language tags, which `oxrdf` lowercases.
//!
//! ```
//! use rdf_interop_model::backend::HasNativeHandle;
//! use rdf_interop_model::{terms_equal, RdfFactory, SimpleRdf};
//! use rdf_interop_oxrdf::OxRdf;
//!
//! let ox = OxRdf::new();
//! let iri = ox.create_iri("http://example.com/s")?;
//! assert!(terms_equal(&iri, &SimpleRdf::new().create_iri("http://example.com/s")?));
//! assert_eq!(iri.as_native(), &oxrdf::NamedNode::new("http://example.com/s")?);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

macro_rules! impl_value_traits {
    ($ty: ty, $view: ident, $eq: path, $hash: path) => {
        impl PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $eq(self.$view(), other.$view())
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($hash(self.$view()));
            }
        }

        impl std::fmt::Display for $ty {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.$view(), f)
            }
        }
    };
}

mod factory;
mod statement;
mod term;

pub use factory::OxRdf;
pub use statement::{OxQuad, OxTriple};
pub use term::{OxBlankNode, OxBlankNodeOrIri, OxIri, OxLiteral, OxTerm};
