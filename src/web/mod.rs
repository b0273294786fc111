//! フォーム画面：1ページの入力フォームと結果表示。
//!
//! # Web Module
//!
//! Single-page form served over HTTP. `GET /` shows the empty form,
//! `POST /` runs one submission and re-renders the page with its outcome.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`state`] | View state machine |
//! | [`submission`] | Guards and the single completion call |
//! | [`page`] | HTML rendering |
//! | [`handlers`] | axum handlers |

pub mod handlers;
pub mod page;
pub mod state;
pub mod submission;

pub use state::{ViewEvent, ViewState};
pub use submission::{run_submission, SubmissionForm};

use crate::client::CompletionBackend;
use crate::credential::CredentialSource;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared, immutable server state.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn CompletionBackend>,
    pub credentials: Arc<dyn CredentialSource>,
}

impl AppState {
    pub fn new(backend: Arc<dyn CompletionBackend>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            backend,
            credentials,
        }
    }
}

/// Build the router for the page and the health check.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> crate::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
