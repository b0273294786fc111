//! Completion client for OpenAI-compatible chat endpoints.
//!
//! The public surface stays small: build a [`CompletionClient`] once, then call
//! [`CompletionBackend::complete`] with a credential and a message list.
//! Implementation details are split into submodules under `src/client/`.

pub mod backend;
pub mod builder;
pub mod core;
pub mod wire;

pub use backend::CompletionBackend;
pub use builder::CompletionClientBuilder;
pub use core::CompletionClient;

/// Model used for every completion.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature used for every completion.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
