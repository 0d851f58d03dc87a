// src/utils/http.rs

//! HTTP client utilities.

use std::cell::OnceCell;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::Result;
use crate::models::HttpConfig;

/// Source of raw page bodies.
///
/// `Ok(None)` means the server answered with a non-success status. Transport
/// failures (timeout, connection, decoding) are errors.
pub trait PageSource {
    fn fetch(&self, url: &Url) -> Result<Option<String>>;
}

/// Create a configured blocking HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// [`PageSource`] backed by a blocking reqwest client.
///
/// The client is built on the first fetch, so a bad client setting only
/// affects commands that go to the network.
pub struct HttpPageSource {
    config: HttpConfig,
    client: OnceCell<Client>,
}

impl HttpPageSource {
    pub fn new(config: HttpConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = create_client(&self.config)?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &Url) -> Result<Option<String>> {
        let response = self.client()?.get(url.as_str()).send()?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("{url} answered {status}, skipping");
            return Ok(None);
        }
        Ok(Some(response.text()?))
    }
}

/// In-memory [`PageSource`] for tests.
#[cfg(test)]
pub(crate) mod stub {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;

    use url::Url;

    use super::PageSource;
    use crate::error::{AppError, Result};

    /// What the stub answers for one URL.
    pub enum Reply {
        Body(String),
        Status,
        Timeout,
    }

    /// Serves canned replies by URL and records every request.
    /// Unknown URLs answer with a non-success status.
    #[derive(Default)]
    pub struct StubPageSource {
        replies: HashMap<String, Reply>,
        requests: RefCell<Vec<String>>,
    }

    impl StubPageSource {
        pub fn with(mut self, url: &str, reply: Reply) -> Self {
            self.replies.insert(url.to_string(), reply);
            self
        }

        pub fn body(self, url: &str, body: &str) -> Self {
            self.with(url, Reply::Body(body.to_string()))
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl PageSource for StubPageSource {
        fn fetch(&self, url: &Url) -> Result<Option<String>> {
            self.requests.borrow_mut().push(url.to_string());
            match self.replies.get(url.as_str()) {
                Some(Reply::Body(body)) => Ok(Some(body.clone())),
                Some(Reply::Status) | None => Ok(None),
                Some(Reply::Timeout) => Err(AppError::Io(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "operation timed out",
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_from_default_config() {
        assert!(create_client(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_user_agent_fails_on_fetch_not_construction() {
        let config = HttpConfig {
            user_agent: "bad\nagent".to_string(),
            ..HttpConfig::default()
        };
        assert!(create_client(&config).is_err());

        let source = HttpPageSource::new(config);
        let url = Url::parse("https://nces.ed.gov/collegenavigator/?zp=94110").unwrap();
        assert!(source.fetch(&url).is_err());
    }
}
