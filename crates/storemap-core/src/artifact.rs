//! Atomic persistence of the generated sitemap.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Writes the document to `path` with temp-file-then-rename discipline.
///
/// No partially written document is ever observable at `path`: the
/// content lands in a sibling temp file first and is committed with a
/// rename. Parent directories are not created; an unwritable location
/// is a fatal run failure surfaced to the caller.
pub fn write_sitemap(path: &Path, document: &str) -> Result<()> {
    let tmp_path = path.with_extension("xml.tmp");
    fs::write(&tmp_path, document)
        .map_err(|e| Error::Storage(format!("Failed to write sitemap: {e}")))?;

    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)
            .map_err(|e| Error::Storage(format!("Failed to remove existing sitemap: {e}")))?;
    }

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::Storage(format!("Failed to commit sitemap: {e}")))?;

    debug!("Wrote sitemap to {}", path.display());
    Ok(())
}
