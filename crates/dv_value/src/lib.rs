#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod dictionary;
mod value;

pub mod serde;

// -----------------------------------------------------------------------------
// Exports

pub use dictionary::{Dictionary, DictionaryIter};
pub use value::{Value, ValueKind};
