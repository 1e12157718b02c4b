#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod composite;
mod error;
mod field;
mod reader;
mod writer;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Exports

pub use composite::Composite;
pub use error::ArchiveError;
pub use field::{EnumField, FieldEntry, FieldKind, FieldMut, Serializable};
pub use reader::{Reader, from_dictionary};
pub use writer::{CLASS_VERSION_KEY, Writer, to_dictionary};
