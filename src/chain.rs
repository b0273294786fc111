//! Response chain: resolve persona → assemble prompt → call model → text.

use crate::client::CompletionBackend;
use crate::credential::Credential;
use crate::prompt::assemble_for_persona;
use crate::Result;

/// Run one completion for `user_text` under the persona named `persona_label`.
///
/// Unknown persona labels use the fallback instruction. The returned string is
/// the model output as-is.
pub async fn generate_response(
    backend: &dyn CompletionBackend,
    credential: &Credential,
    user_text: &str,
    persona_label: &str,
) -> Result<String> {
    let messages = assemble_for_persona(persona_label, user_text);
    backend.complete(credential, &messages).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::{Persona, FALLBACK_INSTRUCTION};
    use crate::types::Message;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<Vec<Message>>>,
    }

    #[async_trait]
    impl CompletionBackend for Recording {
        async fn complete(&self, _credential: &Credential, messages: &[Message]) -> Result<String> {
            self.seen.lock().unwrap().push(messages.to_vec());
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn test_chain_sends_assembled_prompt() {
        let backend = Recording::default();
        let key = Credential::new("sk-test").unwrap();

        let out = generate_response(&backend, &key, "KPI を決めたい", "プロダクトマネージャー")
            .await
            .unwrap();
        assert_eq!(out, "ok");

        generate_response(&backend, &key, "hello", "unknown-role")
            .await
            .unwrap();

        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0],
            vec![
                Message::system(Persona::ProductManager.instruction()),
                Message::user("KPI を決めたい"),
            ]
        );
        assert_eq!(
            seen[1],
            vec![Message::system(FALLBACK_INSTRUCTION), Message::user("hello")]
        );
    }
}
