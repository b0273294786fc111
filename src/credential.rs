//! API キーの取得：環境変数（.env 読み込み後）と OS のシークレットストア。
//!
//! Credential lookup.
//!
//! The provider key is re-read on every submission so that fixing the
//! configuration takes effect without restarting the server. Lookup order:
//!
//! 1. `OPENAI_API_KEY` in the process environment (populated from `.env` at startup)
//! 2. OS secret store entry (service `persona-chat`, user `OPENAI_API_KEY`)
//!
//! Empty values are treated as missing.

use std::env;
use std::fmt;
use std::path::Path;

/// Environment variable holding the provider key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Secret store service name.
pub const KEYRING_SERVICE: &str = "persona-chat";

/// Provider API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key. Returns `None` for blank input.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Somewhere a credential can be read from.
pub trait CredentialSource: Send + Sync {
    fn load(&self) -> Option<Credential>;
}

/// Reads the key from a process environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredentialSource {
    fn load(&self) -> Option<Credential> {
        env::var(&self.var).ok().and_then(Credential::new)
    }
}

/// Reads the key from the OS secret store via `keyring`.
#[derive(Debug, Clone)]
pub struct KeyringCredentialSource {
    service: String,
    user: String,
}

impl KeyringCredentialSource {
    pub fn new(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }
}

impl Default for KeyringCredentialSource {
    fn default() -> Self {
        Self::new(KEYRING_SERVICE, API_KEY_ENV)
    }
}

impl CredentialSource for KeyringCredentialSource {
    fn load(&self) -> Option<Credential> {
        let entry = keyring::Entry::new(&self.service, &self.user).ok()?;
        match entry.get_password() {
            Ok(key) => Credential::new(key),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                tracing::debug!(service = %self.service, "secret store lookup failed: {}", e);
                None
            }
        }
    }
}

/// Tries each source in order and returns the first key found.
pub struct ChainedCredentialSource {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl ChainedCredentialSource {
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }
}

impl Default for ChainedCredentialSource {
    /// Environment first, then the secret store.
    fn default() -> Self {
        Self::new(vec![
            Box::new(EnvCredentialSource::default()),
            Box::new(KeyringCredentialSource::default()),
        ])
    }
}

impl CredentialSource for ChainedCredentialSource {
    fn load(&self) -> Option<Credential> {
        self.sources.iter().find_map(|s| s.load())
    }
}

/// Load `.env` into the process environment.
///
/// A missing file is not an error; variables already set in the environment
/// win over values from the file.
pub fn load_dotenv(path: Option<&Path>) -> crate::Result<()> {
    let loaded = match path {
        Some(p) => dotenvy::from_path(p).map(|_| p.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match loaded {
        Ok(p) => {
            tracing::info!("Loaded environment variables from: {}", p.display());
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            if let Some(p) = path {
                tracing::warn!(".env file not found: {}", p.display());
            }
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) => Err(e.into()),
        Err(e) => Err(crate::Error::configuration_with_context(
            e.to_string(),
            crate::ErrorContext::new().with_source("dotenv"),
        )),
    }
}
