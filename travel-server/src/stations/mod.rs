//! Station directory: name to provider code lookup.
//!
//! The directory is loaded once at startup from a static JSON codes file
//! and never mutated afterwards, so request handlers share it without
//! locking. The `import` module builds that codes file from the
//! provider's full stations-list dump.

mod code;
mod directory;
mod error;
pub mod import;

pub use code::{CODE_MARKER, StationCode, StationNotFound};
pub use directory::StationDirectory;
pub use error::DirectoryError;
