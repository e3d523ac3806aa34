//! Connection configuration
//!
//! # Environment Variables
//!
//! - `NEST_ACCESS_TOKEN`: OAuth access token (required)
//! - `NEST_API_URL`: Override the base URL, e.g. for a local mock server

use crate::{ApiError, Result};

pub const ACCESS_TOKEN_ENV: &str = "NEST_ACCESS_TOKEN";
pub const BASE_URL_ENV: &str = "NEST_API_URL";

/// Credentials and endpoint for a [`NestClient`](crate::NestClient)
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub access_token: String,
    /// `None` uses [`DEFAULT_BASE_URL`](crate::DEFAULT_BASE_URL)
    pub base_url: Option<String>,
}

impl Config {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup(ACCESS_TOKEN_ENV)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Config(format!("{} is not set", ACCESS_TOKEN_ENV)))?;

        let base_url = lookup(BASE_URL_ENV)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            access_token,
            base_url,
        })
    }
}

// Keep the token out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
