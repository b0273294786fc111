//! # persona-chat
//!
//! 専門家ペルソナを選んで LLM に質問する 1 ページのフォームアプリ。
//!
//! A single-page web form that forwards user text, together with a selected
//! expert persona, to an OpenAI-compatible chat completion API and renders the
//! returned text.
//!
//! ## Flow
//!
//! Every submission runs the same linear pipeline and keeps no state:
//!
//! 1. guard: the text must not be blank, a credential must be present
//! 2. resolve the persona label to a system instruction ([`persona`])
//! 3. assemble `[system, user]` messages ([`prompt`])
//! 4. call the model once and take the first choice's text ([`client`])
//! 5. render the outcome ([`web`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use persona_chat::{generate_response, CompletionClient, Credential};
//!
//! #[tokio::main]
//! async fn main() -> persona_chat::Result<()> {
//!     let client = CompletionClient::new()?;
//!     let key = Credential::new("sk-...").expect("non-empty key");
//!     let answer = generate_response(&client, &key, "このA/Bテスト設計をレビューして", "データサイエンティスト").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`persona`] | Persona table and instruction lookup |
//! | [`prompt`] | Two-message prompt assembly |
//! | [`client`] | Chat completion client |
//! | [`chain`] | `generate_response` pipeline |
//! | [`credential`] | API key lookup (env, `.env`, secret store) |
//! | [`web`] | Form page, view state machine, HTTP handlers |
//! | [`config`] | Command-line configuration |

pub mod chain;
pub mod client;
pub mod config;
pub mod credential;
pub mod persona;
pub mod prompt;
pub mod transport;
pub mod types;
pub mod web;

pub use chain::generate_response;
pub use client::{CompletionBackend, CompletionClient, CompletionClientBuilder};
pub use credential::{ChainedCredentialSource, Credential, CredentialSource};
pub use persona::{system_instruction_for, Persona, FALLBACK_INSTRUCTION};
pub use prompt::{assemble, assemble_for_persona};
pub use types::{Message, MessageRole};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

pub mod error;
pub use error::{Error, ErrorContext};
