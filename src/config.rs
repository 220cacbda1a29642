use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://proclubs.ea.com/api/fc/";

/// Settings shared by the client and its HTTP transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root that every endpoint path is joined onto.
    pub base_url: String,

    /// Skip TLS certificate verification. The upstream has served chains
    /// that some trust stores reject; only turn this on when you accept that
    /// any host can impersonate it.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Parses the base URL, adding the trailing `/` that `Url::join` needs to
    /// keep the last path segment.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| ConfigError::BaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::BaseUrl {
                url: self.base_url.clone(),
                reason: "cannot be used as a base".into(),
            });
        }
        Ok(url)
    }
}
