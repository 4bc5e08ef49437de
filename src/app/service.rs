// LogLens - app/service.rs
//
// Per-request orchestration: stores uploads, reads the active file under
// the state's read guard, and hands content to the core aggregations.
// No parsed state survives between requests -- every analytic call is a
// fresh pass over the file.
//
// Error policy per operation (all three kinds kept distinct):
//   - upload: empty input is a caller error; write/pointer failures are
//     internal and logged here.
//   - summary / top-messages: best-effort read-only views; read failures
//     are logged and degrade to "no content" rather than propagating.
//   - search: validation failures are caller errors, a missing active file
//     is a precondition failure, and a failing read is an internal error.

use crate::app::state::ActiveFile;
use crate::core::model::{RankedMessage, SearchMatch, SummaryResult};
use crate::core::{rank, search, summary};
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{SearchError, StateError, UploadError};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// The analytics service: owns the active-file state and the upload
/// directory. Shared across requests behind an `Arc`.
#[derive(Debug)]
pub struct LogService {
    state: ActiveFile,
    log_directory: PathBuf,
}

impl LogService {
    pub fn new(state: ActiveFile, log_directory: PathBuf) -> Self {
        Self {
            state,
            log_directory,
        }
    }

    // -------------------------------------------------------------------
    // Upload
    // -------------------------------------------------------------------

    /// Store uploaded bytes as a new log file and repoint the active file.
    ///
    /// Returns the generated file name. Each upload fully replaces the
    /// pointer; nothing is ever merged.
    pub fn store_upload(&self, bytes: &[u8]) -> Result<String, UploadError> {
        if bytes.is_empty() {
            return Err(UploadError::EmptyFile);
        }

        std::fs::create_dir_all(&self.log_directory).map_err(|source| UploadError::Write {
            path: self.log_directory.clone(),
            source,
        })?;

        let file_name = stored_log_name(chrono::Local::now().naive_local());
        let target = self.log_directory.join(&file_name);
        std::fs::write(&target, bytes).map_err(|source| UploadError::Write {
            path: target.clone(),
            source,
        })?;

        self.state
            .set_current(target.clone())
            .map_err(|source| UploadError::Pointer { source })?;

        tracing::info!(
            path = %target.display(),
            bytes = bytes.len(),
            "Log file uploaded"
        );
        Ok(file_name)
    }

    // -------------------------------------------------------------------
    // Analytics
    // -------------------------------------------------------------------

    /// Level histogram and time range of the active file.
    ///
    /// `None` means "no content": no file uploaded yet, or the file could
    /// not be read (logged, deliberately not surfaced -- this view is best
    /// effort).
    pub fn summary(&self) -> Option<SummaryResult> {
        match self.read_active() {
            Ok(Some((path, content))) => {
                Some(summary::summarize(&content, &display_name(&path)))
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Summary degraded to no content");
                None
            }
        }
    }

    /// The `limit` most frequent messages in the active file.
    ///
    /// Empty when no file is uploaded, nothing matched, or the file could
    /// not be read (logged and degraded, as with `summary`). `limit` is
    /// validated at the boundary.
    pub fn top_messages(&self, limit: usize) -> Vec<RankedMessage> {
        match self.read_active() {
            Ok(Some((_, content))) => rank::top_messages(&content, limit),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Top-messages degraded to no content");
                Vec::new()
            }
        }
    }

    /// One page of entries whose message matches the query.
    ///
    /// The whole file is scanned before pagination is applied, so a page
    /// past the end is an empty page, not an error.
    pub fn search(
        &self,
        query: &str,
        case_sensitive: bool,
        use_regex: bool,
        page: i64,
        size: i64,
    ) -> Result<Vec<SearchMatch>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        if page < 1 || size < 1 {
            return Err(SearchError::InvalidPagination { page, size });
        }

        let pattern = search::build_pattern(query, case_sensitive, use_regex)?;

        let (_, content) = match self.read_active() {
            Ok(Some(active)) => active,
            Ok(None) => return Err(SearchError::NoActiveFile),
            Err(e) => {
                tracing::error!(error = %e, "Search failed reading the active file");
                return Err(e);
            }
        };

        let matches = search::search_messages(&content, &pattern);
        let matched_page = search::paginate(matches, page as usize, size as usize);
        Ok(matched_page.into_iter().map(SearchMatch::from).collect())
    }

    // -------------------------------------------------------------------
    // Shared read path
    // -------------------------------------------------------------------

    /// Open and read the active file in one step.
    ///
    /// The pointer snapshot and file open happen under the state's read
    /// guard; the content read happens after, against the already-open
    /// handle, so a concurrent upload cannot swap the file mid-pass.
    fn read_active(&self) -> Result<Option<(PathBuf, String)>, SearchError> {
        match self.state.open_current() {
            Ok(Some((path, mut file))) => match fs::read_to_string_lossy(&mut file) {
                Ok(content) => Ok(Some((path, content))),
                Err(source) => Err(SearchError::Io { path, source }),
            },
            Ok(None) => Ok(None),
            Err(
                StateError::OpenFile { path, source }
                | StateError::PersistPointer { path, source },
            ) => Err(SearchError::Io { path, source }),
        }
    }
}

/// Generated name for a stored upload: fixed prefix, compact date-time,
/// fixed extension (e.g. `catalina_20240110_100005.out`).
fn stored_log_name(at: NaiveDateTime) -> String {
    format!(
        "{}{}.{}",
        constants::STORED_LOG_PREFIX,
        at.format(constants::STORED_LOG_TIMESTAMP_FORMAT),
        constants::STORED_LOG_EXTENSION
    )
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
