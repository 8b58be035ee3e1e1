//! Provider station code types.

use std::fmt;

/// Marker character that distinguishes provider codes from station names.
///
/// Any request identifier beginning with this character is treated as an
/// already-resolved code and bypasses the directory lookup.
pub const CODE_MARKER: char = 's';

/// Error returned when an identifier matches nothing in the directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no station code found for {identifier}")]
pub struct StationNotFound {
    /// The identifier as supplied by the caller, before trimming.
    pub identifier: String,
}

/// A provider station code.
///
/// Codes are recognized by convention, not validated: anything prefixed
/// with [`CODE_MARKER`] is accepted as a code, and a code that does not
/// exist upstream surfaces as a provider error rather than a resolution
/// failure.
///
/// # Examples
///
/// ```
/// use travel_server::stations::StationCode;
///
/// let moscow = StationCode::new("s9600213");
/// assert_eq!(moscow.as_str(), "s9600213");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Wrap a code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
