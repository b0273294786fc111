use crate::client::backend::CompletionBackend;
use crate::client::wire::{self, ChatCompletionRequest, ChatCompletionResponse};
use crate::credential::Credential;
use crate::transport::HttpTransport;
use crate::types::Message;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

const CHAT_PATH: &str = "chat/completions";

/// Client for an OpenAI-compatible `chat/completions` endpoint.
///
/// Cheap to share behind an `Arc`; holds only the pooled HTTP client and the
/// fixed sampling settings.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    pub(crate) transport: HttpTransport,
    pub(crate) model: String,
    pub(crate) temperature: f64,
}

impl CompletionClient {
    /// Client with the default model, temperature and base URL.
    pub fn new() -> Result<Self> {
        crate::client::builder::CompletionClientBuilder::new().build()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    async fn complete_once(&self, credential: &Credential, messages: &[Message]) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        let body = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages,
        };

        debug!(
            request_id = %request_id,
            model = %self.model,
            messages = messages.len(),
            "sending chat completion"
        );
        let started = std::time::Instant::now();
        let resp = self
            .transport
            .post_json(CHAT_PATH, &body, credential, Some(&request_id))
            .await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if !resp.status.is_success() {
            let status = resp.status.as_u16();
            let message = wire::error_message(status, &resp.body);
            warn!(request_id = %request_id, status, elapsed_ms, "provider returned an error");
            return Err(Error::Remote { status, message });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&resp.body)?;
        let text = parsed.into_text().ok_or_else(|| {
            Error::response_with_context(
                "provider returned no message content",
                ErrorContext::new()
                    .with_field_path("choices[0].message.content")
                    .with_source("completion_client"),
            )
        })?;

        info!(
            request_id = %request_id,
            elapsed_ms,
            chars = text.chars().count(),
            "chat completion finished"
        );
        Ok(text)
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, credential: &Credential, messages: &[Message]) -> Result<String> {
        self.complete_once(credential, messages).await
    }
}
