use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{BricklinkError, Result};

pub const API_BASE: &str = "https://api.bricklink.com/api/store/v1";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_CONSUMER_KEY: &str = "BRICKLINK_CONSUMER_KEY";
pub const ENV_CONSUMER_SECRET: &str = "BRICKLINK_CONSUMER_SECRET";
pub const ENV_TOKEN_VALUE: &str = "BRICKLINK_TOKEN_VALUE";
pub const ENV_TOKEN_SECRET: &str = "BRICKLINK_TOKEN_SECRET";

/// The four long-lived OAuth 1.0 secrets issued by BrickLink for API access.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Read credentials from the `BRICKLINK_*` environment variables.
    ///
    /// Fails with [`BricklinkError::InvalidArgument`] naming the first
    /// variable that is unset or not valid unicode.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            env::var(name).map_err(|e| {
                BricklinkError::InvalidArgument(format!("{name}: {e}"))
            })
        };
        Ok(Self {
            consumer_key: var(ENV_CONSUMER_KEY)?,
            consumer_secret: var(ENV_CONSUMER_SECRET)?,
            token: var(ENV_TOKEN_VALUE)?,
            token_secret: var(ENV_TOKEN_SECRET)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}
