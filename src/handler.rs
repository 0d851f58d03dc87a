// src/handler.rs

//! Command dispatch for the command-line helper.
//!
//! Turns a sub-command and its arguments into a [`Response`] that renders as
//! a single JSON line. Argument problems are the only errors that reach the
//! caller; the lookups themselves degrade to empty or default values.

use std::path::Path;

use serde_json::json;

use crate::error::{ArgumentError, Result};
use crate::models::{Config, IdentityRecord, SchoolRecord};
use crate::services::{IdentityGuesser, SchoolSearch};
use crate::utils::{HttpPageSource, PageSource};

/// A parsed command-line request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `list <zip>`
    List { zip: String },
    /// `identity <name>`
    Identity { name: String },
    /// `validate`
    Validate,
}

impl Invocation {
    /// Parse the sub-command and its positional arguments.
    ///
    /// A missing command is reported as a missing zip code, since `list` is
    /// the primary use.
    pub fn parse(
        command: Option<&str>,
        args: &[String],
    ) -> std::result::Result<Self, ArgumentError> {
        let command = command.ok_or(ArgumentError::MissingZipCode)?;
        let first = args.first().cloned();

        match command {
            "list" => first
                .map(|zip| Self::List { zip })
                .ok_or(ArgumentError::MissingZipCode),
            "identity" => first
                .map(|name| Self::Identity { name })
                .ok_or(ArgumentError::MissingSchoolName),
            "validate" => Ok(Self::Validate),
            _ => Err(ArgumentError::UnknownCommand),
        }
    }
}

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Schools(Vec<SchoolRecord>),
    Identity(IdentityRecord),
    Valid,
    Invalid(String),
    Argument(ArgumentError),
}

impl Response {
    /// Render as one line of JSON.
    pub fn to_json(&self) -> Result<String> {
        let line = match self {
            Self::Schools(records) => serde_json::to_string(records)?,
            Self::Identity(record) => serde_json::to_string(record)?,
            Self::Valid => json!({ "status": "ok" }).to_string(),
            Self::Invalid(message) => json!({ "error": message }).to_string(),
            Self::Argument(e) => json!({ "error": e.to_string() }).to_string(),
        };
        Ok(line)
    }

    /// Process exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Invalid(_) => 1,
            Self::Argument(e) => e.exit_code(),
            _ => 0,
        }
    }
}

/// Load the configuration for `invocation`.
///
/// `validate` reports a file that fails to load; every other command falls
/// back to the defaults.
pub fn load_config(path: Option<&Path>, invocation: &Invocation) -> Result<Config> {
    match (path, invocation) {
        (None, _) => Ok(Config::default()),
        (Some(path), Invocation::Validate) => Config::load(path),
        (Some(path), _) => Ok(Config::load_or_default(path)),
    }
}

/// Parse a command, load its configuration and run it over HTTP.
pub fn dispatch(config_path: Option<&Path>, command: Option<&str>, args: &[String]) -> Response {
    let invocation = match Invocation::parse(command, args) {
        Ok(invocation) => invocation,
        Err(e) => {
            log::debug!("Rejected command {command:?}: {e}");
            return Response::Argument(e);
        }
    };

    let config = match load_config(config_path, &invocation) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config load failed: {e}");
            return Response::Invalid(e.to_string());
        }
    };

    let source = HttpPageSource::new(config.http.clone());
    Handler::new(config, source).run(&invocation)
}

/// Runs commands against one configuration and page source.
pub struct Handler<S> {
    config: Config,
    search: SchoolSearch<S>,
    guesser: IdentityGuesser,
}

impl<S: PageSource> Handler<S> {
    pub fn new(config: Config, source: S) -> Self {
        let search = SchoolSearch::new(source, &config);
        let guesser = IdentityGuesser::new(config.identity.clone());
        Self {
            config,
            search,
            guesser,
        }
    }

    /// Parse and run a command.
    pub fn handle(&self, command: Option<&str>, args: &[String]) -> Response {
        match Invocation::parse(command, args) {
            Ok(invocation) => self.run(&invocation),
            Err(e) => {
                log::debug!("Rejected command {command:?}: {e}");
                Response::Argument(e)
            }
        }
    }

    /// Run an already parsed command.
    pub fn run(&self, invocation: &Invocation) -> Response {
        match invocation {
            Invocation::List { zip } => {
                log::info!("Searching schools near {zip}");
                Response::Schools(self.search.search(zip))
            }
            Invocation::Identity { name } => Response::Identity(self.guesser.guess(name)),
            Invocation::Validate => match self.config.validate() {
                Ok(()) => Response::Valid,
                Err(e) => {
                    log::error!("Config validation failed: {e}");
                    Response::Invalid(e.to_string())
                }
            },
        }
    }

    pub fn search(&self) -> &SchoolSearch<S> {
        &self.search
    }
}
