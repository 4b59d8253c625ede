// Runtime configuration. Loaded once before the workflow starts and handed to
// the client by reference; nothing mutates it afterwards.

use crate::error::{PublishError, Stage};
use anyhow::{bail, Context, Result};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://graph.facebook.com/v22.0";
pub const DEFAULT_IMAGE_URL: &str = "https://i.imgur.com/R2GMxHN.png";
pub const DEFAULT_CAPTION: &str = "Automatic post via Rust & Graph API! 🚀";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct Config {
    pub account_id: String,
    pub access_token: String,
    pub api_base_url: String,
    /// `None` when `IMAGE_URL` was not set.
    pub image_url: Option<String>,
    /// `None` when `CAPTION` was not set.
    pub caption: Option<String>,
    pub timeout: Duration,
}

impl Config {
    /// Read the configuration from the process environment, after loading a
    /// `.env` file from the working directory if there is one.
    pub fn from_env() -> Result<Self> {
        match dotenv::dotenv() {
            Ok(path) => log::debug!("loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e).context("Failed to read .env file"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` uses the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            match lookup(key) {
                Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
                _ => bail!("Missing required environment variable {}", key),
            }
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let account_id = required("IG_USER_ID")?;
        let access_token = required("ACCESS_TOKEN")?;
        let api_base_url = optional("GRAPH_API_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();
        let timeout = match optional("HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("HTTP_TIMEOUT_SECS is not a number: {}", raw))?;
                if secs == 0 {
                    bail!("HTTP_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Config {
            account_id,
            access_token,
            api_base_url,
            image_url: optional("IMAGE_URL"),
            caption: optional("CAPTION"),
            timeout,
        })
    }

    /// Image URL and caption with the built-in defaults filled in.
    pub fn post(&self) -> Post {
        Post {
            image_url: self
                .image_url
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.into()),
            caption: self.caption.clone().unwrap_or_else(|| DEFAULT_CAPTION.into()),
        }
    }
}

/// The content to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub image_url: String,
    pub caption: String,
}

impl Post {
    pub fn new(image_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Post {
            image_url: image_url.into(),
            caption: caption.into(),
        }
    }

    /// Both fields must be non-empty; reachability is only checked by the
    /// platform.
    pub fn validate(&self) -> crate::error::Result<()> {
        let reason = if self.image_url.trim().is_empty() {
            "image URL must not be empty"
        } else if self.caption.trim().is_empty() {
            "caption must not be empty"
        } else {
            return Ok(());
        };
        Err(PublishError::InvalidInput {
            stage: Stage::Creation,
            reason,
        })
    }
}
