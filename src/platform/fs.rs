// LogLens - platform/fs.rs
//
// Filesystem primitives for the app layer: whole-file reads and the
// single-line pointer record. Free-form log dumps are not guaranteed to be
// valid UTF-8, so reads are lossy rather than failing on stray bytes.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Read the remaining content of an already-open file as a string.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; a log dump
/// with a few mangled bytes should still be analysable.
pub fn read_to_string_lossy(file: &mut File) -> io::Result<String> {
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read the pointer record: a single line naming the last uploaded file.
///
/// Returns the recorded path only when the record exists, is non-blank, and
/// the file it names is still present on disk. Anything else (missing
/// record, unreadable record, stale path) yields `None` -- a fresh start,
/// never an error.
pub fn read_pointer_file(pointer_file: &Path) -> Option<PathBuf> {
    let recorded = match std::fs::read_to_string(pointer_file) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(
                path = %pointer_file.display(),
                error = %e,
                "Could not read pointer file; starting with no active file"
            );
            return None;
        }
    };

    let trimmed = recorded.trim();
    if trimmed.is_empty() {
        return None;
    }

    let path = PathBuf::from(trimmed);
    if path.exists() {
        Some(path)
    } else {
        tracing::warn!(
            path = %path.display(),
            "Pointer file names a log that no longer exists; ignoring it"
        );
        None
    }
}

/// Overwrite the pointer record with the given path.
///
/// Written to a temp file in the same directory and renamed into place, so
/// a crash mid-write never corrupts the previous good record.
pub fn write_pointer_file(pointer_file: &Path, target: &Path) -> io::Result<()> {
    if let Some(parent) = pointer_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = pointer_file.with_extension("tmp");
    std::fs::write(&tmp, target.display().to_string())?;
    std::fs::rename(&tmp, pointer_file)?;
    Ok(())
}
