//! Extraction types and traits
//!
//! Defines the field-mapping table a record declares and the traits the
//! extractor operates on.

use crate::error::Result;
use crate::types::JsonObject;

/// Semantic kind of a declared record field
///
/// The kind drives coercion from the wire value. Services in this family
/// omit optional, false, or empty fields, so every kind tolerates absence
/// by keeping the record's default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Textual field, mapped verbatim from a wire string
    Text,
    /// Boolean field, mapped verbatim from a wire boolean
    Flag,
    /// Integer field; fractional wire values are rejected, never truncated
    Int,
    /// Floating-point field
    Float,
    /// List of strings (e.g. associated monitor IDs)
    TextList,
    /// List of cross-reference stubs, preserved as opaque mappings
    ///
    /// The wire form is a partial sub-object (commonly just an `id` key),
    /// not a full sub-resource. Recursive decoding would silently drop
    /// sibling data on partial stubs, so the mappings stay verbatim.
    RefList,
    /// A single nested mapping, handed to the record untouched
    ///
    /// Lets a record decode a genuinely inlined sub-record (such as a
    /// session persistence block) on its own terms.
    Map,
}

/// A coerced wire value, matched to the declared [`FieldKind`]
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Int(i64),
    Float(f64),
    TextList(Vec<String>),
    RefList(Vec<JsonObject>),
    Map(JsonObject),
}

/// One entry of a record's field-mapping table
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key of the field on the wire
    pub wire: &'static str,
    /// Semantic kind the wire value coerces to
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declare a field mapping
    pub const fn new(wire: &'static str, kind: FieldKind) -> Self {
        Self { wire, kind }
    }
}

/// A caller-declared record shape
///
/// Decoding is structural: the extractor visits every declared field,
/// coerces the wire value to the declared kind, and hands it to [`apply`].
/// Undeclared wire keys are ignored; absent declared fields keep the
/// `Default` zero value.
///
/// [`apply`]: Record::apply
pub trait Record: Default {
    /// The field-mapping table: wire key to semantic kind
    const FIELDS: &'static [FieldSpec];

    /// Store one coerced field value
    ///
    /// The value's variant always matches the kind declared for `wire_key`,
    /// so implementations match on the pair and ignore anything else.
    fn apply(&mut self, wire_key: &str, value: FieldValue) -> Result<()>;
}

/// A record that is also a top-level resource of the service
///
/// Names the envelope keys the service wraps this resource in, so callers
/// can extract without restating key strings per call site.
pub trait Resource: Record {
    /// Wrapper key for single-resource bodies
    const SINGULAR: &'static str;
    /// Wrapper key for collection bodies
    const PLURAL: &'static str;
    /// Key of the pagination link array in collection bodies
    const LINKS: &'static str;
}
