mod blank_node;
mod iri;
mod literal;
mod quad;
mod term;
mod triple;

pub use blank_node::{BlankNode, BlankNodeRef, BlankNodeScope};
pub use iri::{Iri, IriRef};
pub use literal::{Literal, LiteralRef};
pub use quad::{GraphName, GraphNameRef, Quad, QuadRef};
pub use term::{BlankNodeOrIri, BlankNodeOrIriRef, Term, TermKind, TermRef};
pub use triple::{Triple, TripleRef};
