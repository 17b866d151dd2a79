pub mod error;
pub mod model;
pub mod normalizer;
pub mod write;

pub use error::NormalizeError;
pub use model::{Document, Flavors, FoodRecord};
pub use normalizer::{NormalizeOptions, NormalizeResult};

use std::path::Path;

/// Normalize the JSON document at `path` and write it back to the same path.
///
/// Nothing is written when parsing or any structural check fails, or when
/// `options.dry_run` is set. The write itself goes through
/// [`write::write_atomic`].
pub fn normalize_file(
    path: impl AsRef<Path>,
    options: &NormalizeOptions,
) -> Result<NormalizeResult, NormalizeError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let result = normalize_bytes(&data, options)?;

    if options.dry_run {
        tracing::debug!(path = %path.display(), "dry run, leaving file untouched");
        return Ok(result);
    }

    write::write_atomic(path, result.json.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        records = result.records,
        wrapped = result.wrapped.len(),
        "rewrote document"
    );
    Ok(result)
}

/// Normalize raw JSON bytes without touching the filesystem.
pub fn normalize_bytes(
    data: &[u8],
    options: &NormalizeOptions,
) -> Result<NormalizeResult, NormalizeError> {
    let mut document: serde_json::Value = serde_json::from_slice(data)?;
    let (records, wrapped) = normalizer::normalize_value(&mut document, options)?;
    let json = normalizer::render(&document, options)?;

    Ok(NormalizeResult {
        json,
        records,
        wrapped,
    })
}

/// Load a document through the typed view, accepting `flavors` in either shape.
pub fn read_document(path: impl AsRef<Path>) -> Result<Document, NormalizeError> {
    let data = std::fs::read(path.as_ref())?;
    Ok(serde_json::from_slice(&data)?)
}
