//! Extraction algorithm
//!
//! Pure functions over an already-materialized JSON tree. No I/O, no
//! side effects; errors surface to the caller unswallowed.

use super::types::{FieldKind, FieldValue, Record, Resource};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Decode a single wire object into a record
///
/// Walks the record's declared field table. Wire keys not in the table are
/// ignored; declared fields absent (or `null`) on the wire keep the
/// record's default value.
pub fn decode_record<R: Record>(obj: &JsonObject) -> Result<R> {
    let mut record = R::default();

    for spec in R::FIELDS {
        let Some(value) = obj.get(spec.wire) else {
            continue;
        };
        if value.is_null() {
            continue;
        }

        let coerced = coerce(spec.wire, spec.kind, value)?;
        record.apply(spec.wire, coerced)?;
    }

    Ok(record)
}

/// Extract a collection of records from under `key`
///
/// An absent wrapper key is a legitimately empty collection, not an error.
/// A wrapper key mapping to anything but an array of objects is
/// [`Error::Malformed`].
pub fn extract_many<R: Record>(body: &JsonValue, key: &str) -> Result<Vec<R>> {
    let obj = as_object(body)?;

    let Some(value) = obj.get(key) else {
        return Ok(Vec::new());
    };

    let items = value
        .as_array()
        .ok_or_else(|| Error::malformed(format!("expected an array under key '{key}'")))?;

    items
        .iter()
        .map(|item| {
            let entry = item.as_object().ok_or_else(|| {
                Error::malformed(format!("expected objects in collection '{key}'"))
            })?;
            decode_record(entry)
        })
        .collect()
}

/// Extract one record from under `key`
///
/// An absent or `null` wrapper key is [`Error::NotFound`], distinct from
/// [`Error::Malformed`]: a get-by-id body missing its resource usually
/// means a genuine service-side fault, which callers may want to treat
/// specially instead of swallowing.
pub fn extract_one<R: Record>(body: &JsonValue, key: &str) -> Result<R> {
    let obj = as_object(body)?;

    let value = match obj.get(key) {
        None => return Err(Error::not_found(key)),
        Some(JsonValue::Null) => return Err(Error::not_found(key)),
        Some(value) => value,
    };

    let entry = value
        .as_object()
        .ok_or_else(|| Error::malformed(format!("expected an object under key '{key}'")))?;

    decode_record(entry)
}

/// Extract a collection using the resource's declared plural key
pub fn extract_collection<R: Resource>(body: &JsonValue) -> Result<Vec<R>> {
    extract_many(body, R::PLURAL)
}

/// Extract a single resource using its declared singular key
pub fn extract_resource<R: Resource>(body: &JsonValue) -> Result<R> {
    extract_one(body, R::SINGULAR)
}

fn as_object(body: &JsonValue) -> Result<&JsonObject> {
    body.as_object()
        .ok_or_else(|| Error::malformed("expected an object body"))
}

/// Coerce a wire value to the declared field kind
fn coerce(wire_key: &str, kind: FieldKind, value: &JsonValue) -> Result<FieldValue> {
    match kind {
        FieldKind::Text => value
            .as_str()
            .map(|s| FieldValue::Text(s.to_string()))
            .ok_or_else(|| mismatch(wire_key, "a string", value)),

        FieldKind::Flag => value
            .as_bool()
            .map(FieldValue::Flag)
            .ok_or_else(|| mismatch(wire_key, "a boolean", value)),

        FieldKind::Int => {
            let number = value
                .as_number()
                .ok_or_else(|| mismatch(wire_key, "a number", value))?;
            // A fractional wire value destined for an integer field is an
            // error, not a silent truncation.
            number.as_i64().map(FieldValue::Int).ok_or_else(|| {
                Error::malformed(format!(
                    "field '{wire_key}' expects an integer, got {number}"
                ))
            })
        }

        FieldKind::Float => value
            .as_f64()
            .map(FieldValue::Float)
            .ok_or_else(|| mismatch(wire_key, "a number", value)),

        FieldKind::TextList => {
            let items = value
                .as_array()
                .ok_or_else(|| mismatch(wire_key, "an array of strings", value))?;
            let texts = items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(ToString::to_string)
                        .ok_or_else(|| mismatch(wire_key, "an array of strings", item))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(FieldValue::TextList(texts))
        }

        FieldKind::RefList => {
            let items = value
                .as_array()
                .ok_or_else(|| mismatch(wire_key, "an array of mappings", value))?;
            let stubs = items
                .iter()
                .map(|item| {
                    item.as_object()
                        .cloned()
                        .ok_or_else(|| mismatch(wire_key, "an array of mappings", item))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(FieldValue::RefList(stubs))
        }

        FieldKind::Map => value
            .as_object()
            .cloned()
            .map(FieldValue::Map)
            .ok_or_else(|| mismatch(wire_key, "a mapping", value)),
    }
}

fn mismatch(wire_key: &str, wanted: &str, got: &JsonValue) -> Error {
    let got = match got {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    };
    Error::malformed(format!("field '{wire_key}' expects {wanted}, got {got}"))
}
