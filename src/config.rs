//! Command-line configuration.

use crate::client::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;

/// Expert persona form backed by an OpenAI-compatible chat completion API.
#[derive(Debug, Clone, Parser)]
#[command(name = "persona-chat", version, about)]
pub struct Config {
    /// Address to bind the web server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8501)]
    pub port: u16,

    /// Provider base URL (the `chat/completions` path is appended)
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Load environment variables from this file instead of `./.env`
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}
