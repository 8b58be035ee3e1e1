//! Station name to provider code lookup.

use std::collections::BTreeMap;
use std::path::Path;

use super::code::{CODE_MARKER, StationCode, StationNotFound};
use super::error::DirectoryError;

/// Immutable lookup table from station display name to provider codes.
///
/// Built once at startup from the codes file and shared read-only across
/// request handlers, so no locking is needed. Each name maps to an ordered
/// list of codes whose first entry is canonical. A `BTreeMap` keeps the
/// substring scan in ascending key order, so a lookup that matches several
/// names resolves to the lexicographically first one.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    entries: BTreeMap<String, Vec<String>>,
}

impl StationDirectory {
    /// Load the directory from a JSON file mapping names to code lists.
    ///
    /// The whole file must parse; there is no partial load. Callers treat
    /// any error here as fatal at startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| DirectoryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let entries: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&contents).map_err(|e| DirectoryError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self { entries })
    }

    /// Build a directory from an already-constructed mapping.
    pub fn from_map(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Number of station names in the directory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a request-supplied station identifier to a provider code.
    ///
    /// Identifiers already carrying the code marker prefix are returned
    /// unchanged without consulting the directory. Anything else is
    /// trimmed and matched against the directory: exact key match first
    /// (case-sensitive), then a case-insensitive substring scan in
    /// ascending key order. Either way the first code of the matching
    /// entry wins; entries with empty code lists are skipped.
    ///
    /// On failure the error carries the identifier exactly as supplied,
    /// for error reporting.
    pub fn resolve(&self, identifier: &str) -> Result<StationCode, StationNotFound> {
        if identifier.starts_with(CODE_MARKER) {
            return Ok(StationCode::new(identifier));
        }

        let name = identifier.trim();

        if let Some(codes) = self.entries.get(name)
            && let Some(first) = codes.first()
        {
            return Ok(StationCode::new(first));
        }

        let needle = name.to_lowercase();
        for (key, codes) in &self.entries {
            if key.to_lowercase().contains(&needle)
                && let Some(first) = codes.first()
            {
                return Ok(StationCode::new(first));
            }
        }

        Err(StationNotFound {
            identifier: identifier.to_string(),
        })
    }
}


/// Tests that document quirks in the lookup behavior.
#[cfg(test)]
mod bug_tests {
    use super::*;

    /// BUG: a whitespace-only identifier matches every entry.
    ///
    /// Trimming reduces such an identifier to the empty string, and every
    /// name contains the empty string as a substring, so the scan returns
    /// the lexicographically first usable entry instead of failing with
    /// StationNotFound.
    #[test]
    fn bug_whitespace_identifier_resolves_to_first_entry() {
        let mut entries = BTreeMap::new();
        entries.insert("Abakan".to_string(), vec!["s9600001".to_string()]);
        entries.insert("Moscow".to_string(), vec!["s9600213".to_string()]);
        let directory = StationDirectory::from_map(entries);

        let code = directory.resolve("   ").unwrap();
        assert_eq!(code.as_str(), "s9600001", "expected the first entry, not NotFound");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sample_directory() -> StationDirectory {
        let mut entries = BTreeMap::new();
        entries.insert("see".to_string(), vec!["s1".to_string()]);
        entries.insert("Moscow".to_string(), vec!["s9600213".to_string()]);
        entries.insert("Saint Petersburg".to_string(), vec!["s9602494".to_string()]);
        StationDirectory::from_map(entries)
    }

    proptest! {
        /// Marker-prefixed identifiers pass through verbatim, even when a
        /// directory name would also match them.
        #[test]
        fn marker_prefixed_passes_through(s in "s[a-zA-Z0-9 ]{0,12}") {
            let code = sample_directory().resolve(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Without the marker, nothing resolves against an empty directory.
        #[test]
        fn empty_directory_never_resolves_names(s in "[A-Za-rt-z][a-zA-Z ]{0,12}") {
            let empty = StationDirectory::from_map(BTreeMap::new());
            let err = empty.resolve(&s).unwrap_err();
            prop_assert_eq!(err.identifier, s);
        }

        /// Any successful name resolution yields the first code of some
        /// directory entry.
        #[test]
        fn resolved_names_map_to_a_known_first_code(s in "[A-Za-rt-z][a-zA-Z ]{0,12}") {
            let directory = sample_directory();
            if let Ok(code) = directory.resolve(&s) {
                prop_assert!(["s1", "s9600213", "s9602494"].contains(&code.as_str()));
            }
        }
    }
}
