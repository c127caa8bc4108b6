#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod model {
    pub use rdf_interop_model::*;
}

pub mod oxrdf {
    pub use rdf_interop_oxrdf::*;
}
