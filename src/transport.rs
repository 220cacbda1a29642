use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT,
};
use reqwest::Url;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ConfigError, DecodeError, Error, TransportError};

// The upstream only answers requests that look like they come from its own
// web frontend.
pub const ACCEPT_VALUE: &str = "application/json";
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-GB,en;q=0.9";
pub const CONTENT_TYPE_VALUE: &str = "application/json";
pub const ORIGIN_VALUE: &str = "https://www.ea.com";
pub const REFERER_VALUE: &str = "https://www.ea.com/";
pub const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";

/// Performs one GET and hands back the decoded JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &Url) -> Result<Value, Error>;
}

pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_VALUE));
    headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_VALUE));
    headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        if config.accept_invalid_certs {
            tracing::warn!(
                "TLS certificate verification is disabled; responses can be forged by anyone on the network path"
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(default_headers())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, Error> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status,
            }
            .into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        Ok(serde_json::from_slice(&body).map_err(|source| DecodeError::new(url, source))?)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn transport() -> HttpTransport {
        HttpTransport::new(&ClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_sends_browser_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/clubs/info?clubIds=1")
            .match_header("accept", ACCEPT_VALUE)
            .match_header("accept-language", ACCEPT_LANGUAGE_VALUE)
            .match_header("content-type", CONTENT_TYPE_VALUE)
            .match_header("origin", ORIGIN_VALUE)
            .match_header("referer", REFERER_VALUE)
            .match_header("user-agent", USER_AGENT_VALUE)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/clubs/info?clubIds=1", server.url())).unwrap();
        let json = transport().get_json(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(json, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/members/stats")
            .with_status(503)
            .with_body("upstream down")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/members/stats", server.url())).unwrap();
        let err = transport().get_json(&url).await.unwrap_err();

        mock.assert_async().await;
        match err {
            Error::Transport(TransportError::Status { status, .. }) => {
                assert_eq!(status.as_u16(), 503)
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/clubs/search")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/clubs/search", server.url())).unwrap();
        let err = transport().get_json(&url).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // port 1 is reserved and never listening on a test host
        let url = Url::parse("http://127.0.0.1:1/clubs/search").unwrap();
        let err = transport().get_json(&url).await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "{err:?}");
    }

    #[test]
    fn insecure_transport_builds() {
        let config = ClientConfig::default().accept_invalid_certs(true);
        assert!(HttpTransport::new(&config).is_ok());
    }
}
