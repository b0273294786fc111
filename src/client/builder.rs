use crate::client::core::CompletionClient;
use crate::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::transport::HttpTransport;
use crate::Result;

/// Builder for [`CompletionClient`].
///
/// Model and temperature are always [`DEFAULT_MODEL`] and
/// [`DEFAULT_TEMPERATURE`]; only the provider base URL can change.
pub struct CompletionClientBuilder {
    base_url: String,
}

impl CompletionClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the provider base URL (e.g. a mock server in tests).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CompletionClient> {
        let transport = HttpTransport::new(&self.base_url)?;
        Ok(CompletionClient {
            transport,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        })
    }
}

impl Default for CompletionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
