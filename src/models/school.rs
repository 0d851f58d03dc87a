//! School search record.

use serde::{Deserialize, Serialize};

/// Placeholder city; directory pages are not parsed beyond the name.
pub const UNKNOWN_CITY: &str = "Unknown";

/// A school or college found near a postal code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchoolRecord {
    /// Normalized (trimmed, title-cased) name
    pub name: String,

    /// Always [`UNKNOWN_CITY`]
    pub city: String,

    /// Always empty
    pub state: String,

    /// Postal code the search was run for
    pub zip: String,
}

impl SchoolRecord {
    /// Create a record for an already normalized name.
    pub fn new(name: impl Into<String>, zip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: UNKNOWN_CITY.to_string(),
            state: String::new(),
            zip: zip.into(),
        }
    }
}
