//! School identity record.

use serde::{Deserialize, Serialize};

/// Primary color used when no keyword rule matches.
pub const DEFAULT_PRIMARY: &str = "#000000";

/// Secondary color; no rule ever changes it.
pub const DEFAULT_SECONDARY: &str = "#FFD700";

/// Guessed visual identity of a school.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityRecord {
    /// The name exactly as given
    pub name: String,

    /// `[primary, secondary]` hex colors
    pub colors: [String; 2],

    /// Guessed logo URL, empty when guessing failed
    pub logo_url: String,
}

impl IdentityRecord {
    /// The record returned when guessing fails.
    pub fn fallback(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: [DEFAULT_PRIMARY.to_string(), DEFAULT_SECONDARY.to_string()],
            logo_url: String::new(),
        }
    }

    pub fn primary(&self) -> &str {
        &self.colors[0]
    }

    pub fn secondary(&self) -> &str {
        &self.colors[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_serializes_as_pair() {
        let json = serde_json::to_string(&IdentityRecord::fallback("Nowhere Prep")).unwrap();
        assert_eq!(
            json,
            r##"{"name":"Nowhere Prep","colors":["#000000","#FFD700"],"logo_url":""}"##
        );
    }
}
