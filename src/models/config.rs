//! Application configuration structures.

use std::fs;
use std::path::Path;

use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Directory endpoints queried by school search
    #[serde(default)]
    pub directories: DirectoryConfig,

    /// Result shaping for school search
    #[serde(default)]
    pub search: SearchConfig,

    /// Logo services used by identity guessing
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        HeaderValue::from_str(&self.http.user_agent).map_err(|e| {
            AppError::validation(format!("http.user_agent is not a valid header value: {e}"))
        })?;
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.search.max_results == 0 {
            return Err(AppError::validation("search.max_results must be > 0"));
        }

        for (key, endpoint) in [
            ("public_schools", &self.directories.public_schools),
            ("private_schools", &self.directories.private_schools),
            ("colleges", &self.directories.colleges),
        ] {
            if endpoint.zip_param.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "directories.{key}.zip_param is empty"
                )));
            }
            Url::parse(&endpoint.url).map_err(|e| {
                AppError::validation(format!("directories.{key}.url is invalid: {e}"))
            })?;
        }

        for (key, url) in [
            ("avatar_url", &self.identity.avatar_url),
            ("domain_logo_url", &self.identity.domain_logo_url),
        ] {
            Url::parse(url)
                .map_err(|e| AppError::validation(format!("identity.{key} is invalid: {e}")))?;
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// A directory search page keyed by postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEndpoint {
    /// Search page URL, including any fixed query parameters
    pub url: String,

    /// Query parameter that carries the postal code
    pub zip_param: String,
}

impl DirectoryEndpoint {
    fn new(url: &str, zip_param: &str) -> Self {
        Self {
            url: url.to_string(),
            zip_param: zip_param.to_string(),
        }
    }

    /// Build the request URL for a postal code.
    pub fn url_for(&self, zip: &str) -> Result<Url> {
        let mut url = Url::parse(&self.url)?;
        url.query_pairs_mut().append_pair(&self.zip_param, zip);
        Ok(url)
    }
}

/// The three directory endpoints of the search fallback chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "defaults::public_schools")]
    pub public_schools: DirectoryEndpoint,

    /// Only queried when public schools yield nothing
    #[serde(default = "defaults::private_schools")]
    pub private_schools: DirectoryEndpoint,

    #[serde(default = "defaults::colleges")]
    pub colleges: DirectoryEndpoint,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            public_schools: defaults::public_schools(),
            private_schools: defaults::private_schools(),
            colleges: defaults::colleges(),
        }
    }
}

/// School search result settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of records returned by one search
    #[serde(default = "defaults::max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: defaults::max_results(),
        }
    }
}

/// Logo service settings. These URLs are only formatted, never fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Initials avatar generator, used for K-12 names
    #[serde(default = "defaults::avatar_url")]
    pub avatar_url: String,

    /// Logo-by-domain lookup service, used for everything else
    #[serde(default = "defaults::domain_logo_url")]
    pub domain_logo_url: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            avatar_url: defaults::avatar_url(),
            domain_logo_url: defaults::domain_logo_url(),
        }
    }
}

mod defaults {
    use super::DirectoryEndpoint;

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/91.0.4472.124 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Directory defaults
    pub fn public_schools() -> DirectoryEndpoint {
        DirectoryEndpoint::new(
            "https://nces.ed.gov/ccd/schoolsearch/school_list.asp?Search=1",
            "Zip",
        )
    }
    pub fn private_schools() -> DirectoryEndpoint {
        DirectoryEndpoint::new(
            "https://nces.ed.gov/surveys/pss/privateschoolsearch/school_list.asp?Search=1",
            "Zip",
        )
    }
    pub fn colleges() -> DirectoryEndpoint {
        DirectoryEndpoint::new("https://nces.ed.gov/collegenavigator/", "zp")
    }

    // Search defaults
    pub fn max_results() -> usize {
        12
    }

    // Identity defaults
    pub fn avatar_url() -> String {
        "https://ui-avatars.com/api/".into()
    }
    pub fn domain_logo_url() -> String {
        "https://logo.clearbit.com/".into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_user_agent_with_control_chars() {
        let mut config = Config::default();
        config.http.user_agent = "bad\nagent".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http.user_agent"));
    }

    #[test]
    fn validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.search.max_results = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_urls() {
        let mut config = Config::default();
        config.directories.colleges.url = "collegenavigator".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.identity.avatar_url = "::".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_appends_zip_after_fixed_params() {
        let directories = DirectoryConfig::default();
        assert_eq!(
            directories.public_schools.url_for("94110").unwrap().as_str(),
            "https://nces.ed.gov/ccd/schoolsearch/school_list.asp?Search=1&Zip=94110"
        );
        assert_eq!(
            directories.colleges.url_for("94110").unwrap().as_str(),
            "https://nces.ed.gov/collegenavigator/?zp=94110"
        );
    }

    #[test]
    fn endpoint_form_encodes_zip() {
        // Spaces become `+`, not `%20`.
        let endpoint = DirectoryConfig::default().colleges;
        assert_eq!(
            endpoint.url_for("941 10").unwrap().as_str(),
            "https://nces.ed.gov/collegenavigator/?zp=941+10"
        );
    }

    #[test]
    fn load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\ntimeout_secs = \"ten\"").unwrap();
        assert!(matches!(Config::load(file.path()), Err(AppError::Toml(_))));
    }

    #[test]
    fn load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\ntimeout_secs = 3\n\n[search]\nmax_results = 5").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.http.timeout_secs, 3);
        assert_eq!(config.http.user_agent, defaults::user_agent());
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.directories.colleges, defaults::colleges());
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config.search.max_results, 12);
        assert_eq!(config.http.timeout_secs, 10);
    }
}
