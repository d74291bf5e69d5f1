//! Atomic file replacement.
//!
//! New content goes to a temporary file in the target's directory, which is
//! then renamed over the target. Readers see either the old file or the new
//! one, never a partial write. The temporary file is removed on every failure
//! path when it is dropped.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::TocError;

/// Replaces the contents of `path` with `content` atomically.
pub fn rewrite(path: &Path, content: &str) -> Result<(), TocError> {
    write_atomic(path, |file| file.write_all(content.as_bytes()))
}

/// Replaces the contents of `path` with whatever `write` produces.
///
/// If `write` fails, the target is left as it was and the temporary file is
/// discarded. An existing target's permissions carry over to the new file.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<(), TocError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let wrap = |source: io::Error| TocError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(parent_dir(path)).map_err(wrap)?;
    log::debug!("writing {} via {}", path.display(), temp.path().display());

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(wrap)?;
    }

    write(temp.as_file_mut()).map_err(wrap)?;
    temp.as_file_mut().flush().map_err(wrap)?;
    temp.as_file().sync_all().map_err(wrap)?;
    temp.persist(path).map_err(|e| wrap(e.error))?;

    Ok(())
}

/// Directory that receives the temporary file.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
