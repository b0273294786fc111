use crate::credential::Credential;
use crate::Result;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Raw outcome of one provider call: status plus the undecoded body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Thin wrapper over a pooled `reqwest::Client` bound to one base URL.
///
/// Holds no credential: the key is supplied per call so every submission
/// re-reads it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        // No overall request timeout: a submission waits for the provider.
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(8)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` relative to the base URL, keeping any base path prefix (e.g. `/v1`).
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                crate::Error::configuration_with_context(
                    e.to_string(),
                    crate::ErrorContext::new()
                        .with_field_path("path")
                        .with_details(path.to_string())
                        .with_source("http_transport"),
                )
            })
    }

    /// POST a JSON body with bearer auth and return status and body text.
    ///
    /// Non-2xx statuses are returned, not raised; the caller decides.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        credential: &Credential,
        request_id: Option<&str>,
    ) -> Result<TransportResponse> {
        let url = self.endpoint(path)?;

        let mut req = self
            .client
            .post(url)
            .bearer_auth(credential.expose())
            .header("accept", "application/json")
            .json(body);
        if let Some(id) = request_id {
            req = req.header("x-request-id", id);
        }

        let resp = req.send().await.map_err(TransportError::Http)?;
        let status = resp.status();
        let body = resp.text().await.map_err(TransportError::Http)?;

        Ok(TransportResponse { status, body })
    }
}

/// Parse and normalize a base URL so that `join` appends instead of replacing
/// the last path segment.
fn parse_base_url(raw: &str) -> Result<Url> {
    let ctx = || {
        crate::ErrorContext::new()
            .with_field_path("base_url")
            .with_details(raw.to_string())
            .with_source("http_transport")
    };
    let mut url = Url::parse(raw)
        .map_err(|e| crate::Error::configuration_with_context(e.to_string(), ctx()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(crate::Error::configuration_with_context(
            format!("unsupported scheme '{}'", url.scheme()),
            ctx(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let t = HttpTransport::new("https://api.openai.com/v1").unwrap();
        assert_eq!(
            t.endpoint("/chat/completions").unwrap().as_str(),
            "https://api.openai.com/v1/chat/completions"
        );

        let t = HttpTransport::new("http://127.0.0.1:1234/").unwrap();
        assert_eq!(
            t.endpoint("chat/completions").unwrap().as_str(),
            "http://127.0.0.1:1234/chat/completions"
        );
    }

    #[test]
    fn test_rejects_bad_base_urls() {
        for raw in ["not a url", "ftp://example.com/v1", ""] {
            let err = HttpTransport::new(raw).unwrap_err();
            assert!(
                matches!(err, crate::Error::Configuration { .. }),
                "{raw:?} -> {err}"
            );
        }
    }
}
