use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// One distinct title and how many times it has been added to the watchlist.
///
/// Serialized as `{"name": "...", "watches": N}`, the shape stored under
/// [`crate::constants::HISTORY_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchEntry {
    pub name: String,
    pub watches: u32,
}

impl WatchEntry {
    /// First sighting of `name`.
    #[must_use]
    pub fn first_watch(name: impl Into<String>) -> Self {
        Self { name: name.into(), watches: 1 }
    }

    pub(crate) fn bump(&mut self) {
        self.watches = self.watches.saturating_add(1);
    }
}

/// Lowercase a raw title. Whitespace is kept as typed.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase()
}

/// True when the title has nothing but whitespace in it.
#[must_use]
pub fn is_blank_name(name: &str) -> bool {
    name.trim().is_empty()
}

/// Normalize `raw` and reject blank titles.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = normalize_name(raw);
    if is_blank_name(&name) {
        return Err(ValidationError::EmptyName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_only() {
        assert_eq!(normalize_name("Dune"), "dune");
        assert_eq!(normalize_name("  The THING "), "  the thing ");
        assert_eq!(normalize_name("AMÉLIE"), "amélie");
    }

    #[test]
    fn test_validate_rejects_blank() {
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(validate_name("\t\n"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_validate_returns_normalized() {
        assert_eq!(validate_name("Blade Runner"), Ok("blade runner".to_owned()));
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = WatchEntry { name: "dune".to_owned(), watches: 2 };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"dune","watches":2}"#);
    }
}
