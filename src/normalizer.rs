use serde_json::Value;

use crate::error::NormalizeError;
use crate::model::Flavors;

/// Options controlling which field is normalized and how the result is written.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Top-level array holding the records to walk.
    pub collection: String,
    /// Per-record field coerced into a list.
    pub field: String,
    /// Pretty-print the output instead of writing compact JSON.
    pub pretty: bool,
    /// Compute the result but never write it back.
    pub dry_run: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            collection: "favorite_foods".to_string(),
            field: "flavors".to_string(),
            pretty: false,
            dry_run: false,
        }
    }
}

/// The result of normalizing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeResult {
    /// Serialized document after normalization.
    pub json: String,
    /// Number of records visited.
    pub records: usize,
    /// Indices of records whose field was wrapped into a list.
    pub wrapped: Vec<usize>,
}

impl NormalizeResult {
    pub fn changed(&self) -> bool {
        !self.wrapped.is_empty()
    }
}

/// Wrap every non-array `options.field` in `document[options.collection]`.
///
/// Records are rewritten in place at their own index; the collection is never
/// resized or reordered. Returns the number of records and the wrapped indices.
pub fn normalize_value(
    document: &mut Value,
    options: &NormalizeOptions,
) -> Result<(usize, Vec<usize>), NormalizeError> {
    let kind = value_kind(document);
    let object = document
        .as_object_mut()
        .ok_or_else(|| NormalizeError::MalformedDocument {
            reason: format!("expected a JSON object at the top level, found {kind}"),
        })?;

    let records = match object.get_mut(&options.collection) {
        Some(Value::Array(records)) => records,
        Some(other) => {
            return Err(NormalizeError::MalformedDocument {
                reason: format!(
                    "`{}` must be an array, found {}",
                    options.collection,
                    value_kind(other)
                ),
            });
        }
        None => {
            return Err(NormalizeError::MalformedDocument {
                reason: format!("missing `{}` field", options.collection),
            });
        }
    };

    let mut wrapped = Vec::new();
    for (index, record) in records.iter_mut().enumerate() {
        let kind = value_kind(record);
        let fields = record
            .as_object_mut()
            .ok_or_else(|| NormalizeError::MalformedRecord {
                index,
                reason: format!("expected an object, found {kind}"),
            })?;
        let slot = fields
            .get_mut(&options.field)
            .ok_or_else(|| NormalizeError::MalformedRecord {
                index,
                reason: format!("missing `{}` field", options.field),
            })?;

        match Flavors::from(slot.take()) {
            Flavors::List(items) => *slot = Value::Array(items),
            Flavors::Scalar(value) => {
                tracing::debug!(index, field = %options.field, "wrapping scalar into list");
                *slot = Value::Array(vec![value]);
                wrapped.push(index);
            }
        }
    }

    Ok((records.len(), wrapped))
}

/// Serialize a document the way it is written back to disk.
pub fn render(document: &Value, options: &NormalizeOptions) -> Result<String, NormalizeError> {
    let json = if options.pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
