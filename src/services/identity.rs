// src/services/identity.rs

//! School identity guessing.
//!
//! Colors come from keyword rules over the lower-cased name; the logo URL is
//! either an initials avatar (K-12 names) or a logo lookup on a guessed
//! `.edu` domain.

use url::Url;

use crate::error::{AppError, Degrade, Result};
use crate::models::{DEFAULT_PRIMARY, DEFAULT_SECONDARY, IdentityConfig, IdentityRecord};

/// Sets the primary color when the name contains any of the keywords.
struct ColorRule {
    keywords: &'static [&'static str],
    color: &'static str,
}

impl ColorRule {
    fn matches(&self, name_lower: &str) -> bool {
        self.keywords.iter().any(|k| name_lower.contains(k))
    }
}

/// Applied in order; a later match overrides an earlier one.
const COLOR_RULES: [ColorRule; 4] = [
    // maroon
    ColorRule {
        keywords: &["valley", "university", "state"],
        color: "#800000",
    },
    // navy
    ColorRule {
        keywords: &["lake", "ocean", "blue", "sea"],
        color: "#000080",
    },
    // dark green
    ColorRule {
        keywords: &["forest", "oak", "green"],
        color: "#006400",
    },
    // black
    ColorRule {
        keywords: &["tech", "central", "high"],
        color: "#000000",
    },
];

/// Substrings marking a K-12 name. Matched literally, so "high school" with
/// a space does not count.
const K12_MARKERS: [&str; 2] = ["highschool", "elementary"];

fn primary_color(name_lower: &str) -> &'static str {
    COLOR_RULES.iter().fold(DEFAULT_PRIMARY, |color, rule| {
        if rule.matches(name_lower) {
            rule.color
        } else {
            color
        }
    })
}

/// How the logo URL is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogoStrategy {
    /// Initials avatar with a random background
    Avatar,
    /// Logo lookup by guessed institutional domain
    DomainGuess,
}

impl LogoStrategy {
    fn for_name(name_lower: &str) -> Self {
        if K12_MARKERS.iter().any(|m| name_lower.contains(m)) {
            Self::Avatar
        } else {
            Self::DomainGuess
        }
    }
}

/// Guess `name` with spaces removed, lower-cased, under `.edu`.
fn guess_domain(name: &str) -> String {
    format!("{}.edu", name.replace(' ', "").to_lowercase())
}

/// Service for guessing colors and a logo for a school name.
#[derive(Debug, Clone, Default)]
pub struct IdentityGuesser {
    config: IdentityConfig,
}

impl IdentityGuesser {
    pub fn new(config: IdentityConfig) -> Self {
        Self { config }
    }

    /// Guess the identity of `name`.
    ///
    /// Never fails: on error the name is returned with the default colors
    /// and an empty logo URL.
    pub fn guess(&self, name: &str) -> IdentityRecord {
        self.try_guess(name)
            .degrade(&format!("Identity guess for {name:?}"), || {
                IdentityRecord::fallback(name)
            })
    }

    /// Guess the identity of `name`, surfacing URL construction errors.
    pub fn try_guess(&self, name: &str) -> Result<IdentityRecord> {
        let name_lower = name.to_lowercase();
        let primary = primary_color(&name_lower);
        let logo_url = self.logo_url(name, LogoStrategy::for_name(&name_lower))?;

        Ok(IdentityRecord {
            name: name.to_string(),
            colors: [primary.to_string(), DEFAULT_SECONDARY.to_string()],
            logo_url,
        })
    }

    fn logo_url(&self, name: &str, strategy: LogoStrategy) -> Result<String> {
        match strategy {
            LogoStrategy::Avatar => {
                let mut url = Url::parse(&self.config.avatar_url)?;
                url.query_pairs_mut()
                    .append_pair("name", name)
                    .append_pair("background", "random");
                Ok(url.into())
            }
            LogoStrategy::DomainGuess => {
                let base = Url::parse(&self.config.domain_logo_url)?;
                if base.cannot_be_a_base() {
                    return Err(AppError::config(format!(
                        "identity.domain_logo_url cannot take a path: {base}"
                    )));
                }
                // The guessed domain is appended verbatim, without percent-encoding.
                Ok(format!(
                    "{}/{}",
                    base.as_str().trim_end_matches('/'),
                    guess_domain(name)
                ))
            }
        }
    }
}
