use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace the contents of `path` with `contents`.
///
/// The data is written to a temporary file next to the resolved target,
/// synced, and renamed over it. The target holds either its old or its new
/// contents, never a truncated mix. A symlinked `path` stays a symlink and the
/// file it points to is replaced. Existing permissions are carried over.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(e),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    match fs::metadata(&target) {
        Ok(metadata) => fs::set_permissions(tmp.path(), metadata.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
