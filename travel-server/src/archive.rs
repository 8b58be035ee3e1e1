//! Best-effort persistence of composite route results.
//!
//! Each successful composite-route request dumps its result to a
//! timestamp-named JSON file. A failed write must never fail the request
//! that produced it, so `save` returns its error for logging and nothing
//! more.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

/// File-name timestamp format. Compact, so names sort chronologically and
/// never collide across seconds.
const FILE_STAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Errors from writing an archive file.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// Result could not be serialized
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Directory creation or file write failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes composite route results into a directory, one file per request.
#[derive(Debug, Clone)]
pub struct ResultArchive {
    dir: PathBuf,
}

impl ResultArchive {
    /// Create an archive rooted at the given directory.
    ///
    /// The directory is created on first save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the archive writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a result stamped at `requested_at` is written to.
    pub fn file_path(&self, requested_at: DateTime<Local>) -> PathBuf {
        let stamp = requested_at.format(FILE_STAMP_FORMAT);
        self.dir.join(format!("complex_route_result_{stamp}.json"))
    }

    /// Write one result as pretty-printed JSON, returning the path written.
    ///
    /// Creates the archive directory if it does not exist.
    pub fn save<T: Serialize>(
        &self,
        requested_at: DateTime<Local>,
        result: &T,
    ) -> Result<PathBuf, ArchiveError> {
        let path = self.file_path(requested_at);

        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| ArchiveError::Write {
                path: self.dir.clone(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(result)?;

        std::fs::write(&path, json).map_err(|e| ArchiveError::Write {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }
}

impl Default for ResultArchive {
    fn default() -> Self {
        // Default to the process working directory
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use tempfile::tempdir;

    fn stamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn file_name_uses_compact_timestamp() {
        let archive = ResultArchive::new("/tmp/results");
        let path = archive.file_path(stamp());

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "complex_route_result_20250601T123045.json"
        );
    }

    #[test]
    fn save_writes_pretty_json() {
        let dir = tempdir().unwrap();
        let archive = ResultArchive::new(dir.path());
        let result = json!({"leg1": {"threads": []}, "leg2": {}});

        let path = archive.save(stamp(), &result).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let read_back: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(read_back, result);
        // Indented output, not a single line
        assert!(contents.contains('\n'));
    }

    #[test]
    fn save_creates_the_archive_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("results").join("routes");
        let archive = ResultArchive::new(&nested);

        archive.save(stamp(), &json!({"leg1": 1})).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn save_reports_unwritable_locations() {
        let dir = tempdir().unwrap();
        // A plain file where the archive directory should be
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "x").unwrap();
        let archive = ResultArchive::new(&blocker);

        let err = archive.save(stamp(), &json!({})).unwrap_err();
        assert!(matches!(err, ArchiveError::Write { .. }));
    }
}
