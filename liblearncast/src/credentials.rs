//! API credentials loaded from the environment
//!
//! Values are wrapped in [`SecretString`] so they are zeroed on drop and
//! never show up in `Debug` output.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const X_API_KEY: &str = "X_API_KEY";
pub const X_API_SECRET: &str = "X_API_SECRET";
pub const X_ACCESS_TOKEN: &str = "X_ACCESS_TOKEN";
pub const X_ACCESS_SECRET: &str = "X_ACCESS_SECRET";

/// Read a required, non-empty secret from the environment
pub fn require_env(name: &str) -> Result<SecretString, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
        _ => Err(ConfigError::MissingEnv(name.to_string())),
    }
}

/// Gemini API key, if configured
///
/// Absence is reported later, at generation time, so dry runs over an
/// empty input file still work without a key.
pub fn gemini_api_key() -> Option<SecretString> {
    require_env(GEMINI_API_KEY).ok()
}

/// The four OAuth 1.0a secrets needed to post on X
#[derive(Debug)]
pub struct XCredentials {
    pub consumer_key: SecretString,
    pub consumer_secret: SecretString,
    pub access_token: SecretString,
    pub access_token_secret: SecretString,
}

impl XCredentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: SecretString::from(consumer_key.into()),
            consumer_secret: SecretString::from(consumer_secret.into()),
            access_token: SecretString::from(access_token.into()),
            access_token_secret: SecretString::from(access_token_secret.into()),
        }
    }

    /// Load from `X_API_KEY`, `X_API_SECRET`, `X_ACCESS_TOKEN` and
    /// `X_ACCESS_SECRET`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnv` naming the first variable that is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            consumer_key: require_env(X_API_KEY)?,
            consumer_secret: require_env(X_API_SECRET)?,
            access_token: require_env(X_ACCESS_TOKEN)?,
            access_token_secret: require_env(X_ACCESS_SECRET)?,
        })
    }

    pub fn consumer_key(&self) -> &str {
        self.consumer_key.expose_secret()
    }

    pub fn consumer_secret(&self) -> &str {
        self.consumer_secret.expose_secret()
    }

    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    pub fn access_token_secret(&self) -> &str {
        self.access_token_secret.expose_secret()
    }
}
