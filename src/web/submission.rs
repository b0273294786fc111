//! One form submission: guards, then at most one completion call.

use crate::chain::generate_response;
use crate::client::CompletionBackend;
use crate::credential::{Credential, CredentialSource};
use crate::web::state::{ViewEvent, ViewState};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Fields posted by the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmissionForm {
    pub role: String,
    pub user_text: String,
}

/// Run a submission starting from the form-shown state.
///
/// The credential is read fresh on every call, but only once the text guard
/// has passed. The backend is invoked only when both guards pass; any backend
/// error ends in [`ViewState::Error`].
pub async fn run_submission(
    form: &SubmissionForm,
    credentials: Arc<dyn CredentialSource>,
    backend: &dyn CompletionBackend,
) -> ViewState {
    let submission_id = Uuid::new_v4();
    let span = info_span!(
        "submission",
        id = %submission_id,
        role = %form.role,
        text_chars = form.user_text.chars().count()
    );

    async move {
        let text_blank = form.user_text.trim().is_empty();
        let credential = if text_blank {
            None
        } else {
            load_credential(credentials).await
        };

        let state = ViewState::AwaitingInput.on(ViewEvent::Submitted {
            text_blank,
            credential_present: credential.is_some(),
        });

        let credential = match (state.is_loading(), credential) {
            (true, Some(c)) => c,
            (_, _) => {
                info!(?state, "submission rejected before the remote call");
                return state;
            }
        };

        let result = generate_response(backend, &credential, &form.user_text, &form.role).await;
        if let Err(ref e) = result {
            warn!("completion failed: {}", e);
        }
        let state = state.on(ViewEvent::Completed(result));
        info!(success = matches!(state, ViewState::Success { .. }), "submission finished");
        state
    }
    .instrument(span)
    .await
}

/// Secret store lookups block on IPC, so they run on the blocking pool.
async fn load_credential(credentials: Arc<dyn CredentialSource>) -> Option<Credential> {
    match tokio::task::spawn_blocking(move || credentials.load()).await {
        Ok(credential) => credential,
        Err(e) => {
            warn!("credential lookup task failed: {}", e);
            None
        }
    }
}
