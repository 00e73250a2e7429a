//! Resource extraction module
//!
//! Projects a normalized JSON body onto caller-declared record shapes.
//!
//! # Overview
//!
//! Records declare an explicit field-mapping table (wire key to semantic
//! kind) instead of relying on derived deserialization. The extractor walks
//! the declared table, coerces wire values per kind, and leaves undeclared
//! wire keys alone. Cross-reference stub lists are preserved verbatim.

mod extractor;
mod types;

pub use extractor::{
    decode_record, extract_collection, extract_many, extract_one, extract_resource,
};
pub use types::{FieldKind, FieldSpec, FieldValue, Record, Resource};
