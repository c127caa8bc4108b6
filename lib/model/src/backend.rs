//! Traits for backends that expose their native values through the term model.
//!
//! A backend wraps its own value objects in types that implement both an abstract view
//! ([`RdfIri`], [`RdfLiteral`], ...) and [`HasNativeHandle`]. Code that only knows the abstract view
//! keeps working with any backend, while code that knows the backend can recover the native value
//! without copying:
//!
//! ```
//! use rdf_interop_model::backend::{try_as_native, HasNativeHandle};
//! use rdf_interop_model::{Iri, IriRef, RdfBlankNodeOrIri, RdfIri, RdfTerm, TermRef};
//! use std::any::Any;
//!
//! /// A backend that stores IRIs as plain strings.
//! struct StringIri(String);
//!
//! impl RdfTerm for StringIri {
//!     fn as_term_ref(&self) -> TermRef<'_> {
//!         self.as_iri_ref().into()
//!     }
//! }
//! # impl RdfBlankNodeOrIri for StringIri {
//! #     fn as_blank_node_or_iri_ref(&self) -> rdf_interop_model::BlankNodeOrIriRef<'_> {
//! #         self.as_iri_ref().into()
//! #     }
//! # }
//! impl RdfIri for StringIri {
//!     fn as_iri_ref(&self) -> IriRef<'_> {
//!         IriRef::new_unchecked(&self.0)
//!     }
//! }
//!
//! impl HasNativeHandle for StringIri {
//!     type Native = String;
//!
//!     fn as_native(&self) -> &String {
//!         &self.0
//!     }
//! }
//!
//! let wrapped = StringIri("http://example.com/s".to_owned());
//! let value: &dyn Any = &wrapped;
//! assert_eq!(
//!     try_as_native::<StringIri>(value).map(String::as_str),
//!     Some("http://example.com/s")
//! );
//! assert_eq!(try_as_native::<StringIri>(&Iri::new("http://example.com/s")?), None);
//! # Result::<_, rdf_interop_model::InvalidTerm>::Ok(())
//! ```
//!
//! The native value must stay structurally equivalent to the abstract view for as long as the
//! wrapper lives: same IRI string, same lexical form, datatype and language, same blank node
//! identity. Wrappers are immutable, so building them from the native value is enough.

use crate::{RdfBlankNode, RdfBlankNodeOrIri, RdfIri, RdfLiteral, RdfQuad, RdfTerm, RdfTriple};
use std::any::Any;

/// Pass-through to the value object of a backend.
pub trait HasNativeHandle {
    type Native;

    fn as_native(&self) -> &Self::Native;
}

/// A backend term.
pub trait BackendTerm: RdfTerm + HasNativeHandle {}

/// A backend term that is allowed in subject and graph name positions.
pub trait BackendBlankNodeOrIri: BackendTerm + RdfBlankNodeOrIri {}

pub trait BackendIri: BackendBlankNodeOrIri + RdfIri {}

pub trait BackendBlankNode: BackendBlankNodeOrIri + RdfBlankNode {}

pub trait BackendLiteral: BackendTerm + RdfLiteral {}

pub trait BackendTriple: RdfTriple + HasNativeHandle {}

pub trait BackendQuad: RdfQuad + HasNativeHandle {}

/// Returns the native value of `value` if it is a `T`.
///
/// This is the capability check that lets a caller holding an abstract value continue with the
/// API of the backend that produced it.
pub fn try_as_native<T>(value: &dyn Any) -> Option<&T::Native>
where
    T: HasNativeHandle + 'static,
{
    value.downcast_ref::<T>().map(HasNativeHandle::as_native)
}
