//! The RDF 1.1 term and statement model shared by every backend.
//!
//! Terms ([`Iri`], [`BlankNode`], [`Literal`]) and statements ([`Triple`], [`Quad`]) are immutable
//! values. Equality and hashing are defined once in [`contract`] over the abstract attributes of a
//! value, so that values produced by different backends can be compared and stored in the same
//! hash-based containers. Backends expose their native values through the traits in [`backend`].

pub mod backend;
pub mod conformance;
pub mod contract;
mod error;
mod factory;
mod ntriples;
mod rdf;
mod traits;
pub mod vocab;

pub use error::*;
pub use factory::*;
pub use rdf::*;
pub use traits::*;
