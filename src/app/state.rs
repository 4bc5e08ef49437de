// LogLens - app/state.rs
//
// The active-file pointer: the single log file all analytics operate
// against, and the only shared mutable state in the system. Explicitly
// owned and constructed from paths so tests can point it at a fixture
// directory instead of the real filesystem pointer.
//
// Durable state is one plain-text record holding the absolute path of the
// last uploaded log (whole-file overwrite on each upload). Restore errors
// are logged and discarded; a corrupt or stale record just means "no
// active file yet".

use crate::platform::fs;
use crate::util::error::StateError;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Pointer to the most recently uploaded log file, with its persisted
/// backing record.
#[derive(Debug)]
pub struct ActiveFile {
    pointer_file: PathBuf,
    current: RwLock<Option<PathBuf>>,
}

impl ActiveFile {
    /// Construct the state, adopting the persisted record if it names a
    /// file that still exists on disk.
    pub fn restore(pointer_file: PathBuf) -> Self {
        let current = fs::read_pointer_file(&pointer_file);
        if let Some(path) = &current {
            tracing::info!(path = %path.display(), "Restored last uploaded file");
        }
        Self {
            pointer_file,
            current: RwLock::new(current),
        }
    }

    /// Repoint to a freshly uploaded file.
    ///
    /// Persists the record first, then updates the in-memory pointer under
    /// the write guard, so analytics either see the old complete state or
    /// the new one.
    pub fn set_current(&self, path: PathBuf) -> Result<(), StateError> {
        let mut guard = self.write_guard();
        fs::write_pointer_file(&self.pointer_file, &path).map_err(|source| {
            StateError::PersistPointer {
                path: self.pointer_file.clone(),
                source,
            }
        })?;
        *guard = Some(path);
        Ok(())
    }

    /// Snapshot the pointer and open the file it names, both under one
    /// read guard. Holding the guard across "read pointer + open file"
    /// means a concurrent upload can never repoint the state between the
    /// two steps of a single analytic pass.
    ///
    /// Returns `Ok(None)` when no file has been uploaded yet.
    pub fn open_current(&self) -> Result<Option<(PathBuf, File)>, StateError> {
        let guard = self.read_guard();
        match guard.as_ref() {
            Some(path) => {
                let file = File::open(path).map_err(|source| StateError::OpenFile {
                    path: path.clone(),
                    source,
                })?;
                Ok(Some((path.clone(), file)))
            }
            None => Ok(None),
        }
    }

    /// Current pointer value, if any.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.read_guard().clone()
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Option<PathBuf>> {
        // A writer can only panic between persist and memory update, which
        // leaves the previous pointer value intact; recover it.
        self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Option<PathBuf>> {
        self.current.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Convenience for tests and callers that already know the log directory.
pub fn pointer_file_in(dir: &Path) -> PathBuf {
    dir.join(crate::util::constants::POINTER_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_without_record() {
        let dir = tempfile::tempdir().unwrap();
        let state = ActiveFile::restore(pointer_file_in(dir.path()));
        assert_eq!(state.current_path(), None);
        assert!(state.open_current().unwrap().is_none());
    }

    #[test]
    fn test_set_current_persists_and_restores() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("catalina_20240110_100000.out");
        std::fs::write(&log, "x").unwrap();

        let state = ActiveFile::restore(pointer_file_in(dir.path()));
        state.set_current(log.clone()).unwrap();
        assert_eq!(state.current_path(), Some(log.clone()));

        // A fresh instance adopts the persisted record.
        let restored = ActiveFile::restore(pointer_file_in(dir.path()));
        assert_eq!(restored.current_path(), Some(log));
    }

    #[test]
    fn test_stale_record_ignored_on_restore() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("catalina_20240110_100000.out");
        std::fs::write(&log, "x").unwrap();

        let state = ActiveFile::restore(pointer_file_in(dir.path()));
        state.set_current(log.clone()).unwrap();
        std::fs::remove_file(&log).unwrap();

        let restored = ActiveFile::restore(pointer_file_in(dir.path()));
        assert_eq!(restored.current_path(), None);
    }

    #[test]
    fn test_upload_overwrites_pointer() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("catalina_1.out");
        let second = dir.path().join("catalina_2.out");
        std::fs::write(&first, "a").unwrap();
        std::fs::write(&second, "b").unwrap();

        let state = ActiveFile::restore(pointer_file_in(dir.path()));
        state.set_current(first).unwrap();
        state.set_current(second.clone()).unwrap();
        assert_eq!(state.current_path(), Some(second));
    }

    #[test]
    fn test_open_current_yields_readable_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("catalina_1.out");
        std::fs::write(&log, "hello").unwrap();

        let state = ActiveFile::restore(pointer_file_in(dir.path()));
        state.set_current(log.clone()).unwrap();

        let (path, mut file) = state.open_current().unwrap().expect("file open");
        assert_eq!(path, log);
        let content = crate::platform::fs::read_to_string_lossy(&mut file).unwrap();
        assert_eq!(content, "hello");
    }
}
