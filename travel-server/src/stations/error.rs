//! Station directory error types.

use std::path::PathBuf;

/// Errors that can occur when loading the station codes file.
///
/// There are no partial loads: any variant is fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Codes file could not be read
    #[error("failed to read station codes from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Codes file is not a JSON mapping of name to list of codes
    #[error("malformed station codes file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
