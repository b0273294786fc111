use crate::credential::Credential;
use crate::types::Message;
use crate::Result;
use async_trait::async_trait;

/// Seam between the presentation layer and the remote model.
///
/// One call per submission; implementations must not retry.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send `messages` and return the generated text.
    async fn complete(&self, credential: &Credential, messages: &[Message]) -> Result<String>;
}
