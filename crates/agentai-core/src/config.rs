/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Configuration management for the Agent.ai client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "AGENTAI_BASE_URL";

/// Environment variable overriding the request timeout (milliseconds)
pub const TIMEOUT_MS_ENV: &str = "AGENTAI_TIMEOUT_MS";

/// Main configuration struct for the Agent.ai client
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
  /// Bearer token sent as `Authorization: Bearer <api_key>`
  pub api_key: String,

  /// Base URL for the Actions API
  pub base_url: String,

  /// Per-request timeout
  pub timeout: Duration,

  /// Extra headers merged over `Authorization` and `Content-Type`
  pub headers: BTreeMap<String, String>,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var(crate::API_KEY_ENV)
      .map_err(|_| Error::ApiKey(format!("{} not set", crate::API_KEY_ENV)))?;

    let timeout_ms = env::var(TIMEOUT_MS_ENV)
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_MS.to_string())
      .parse::<u64>()
      .map_err(|_| Error::Config(format!("Invalid {}", TIMEOUT_MS_ENV)))?;

    let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| crate::AGENT_AI_BASE_URL.to_string());

    Config::default_with_key(api_key)
      .with_base_url(base_url)
      .with_timeout(Duration::from_millis(timeout_ms))
      .validated()
  }

  /// Create a config with default values
  pub fn default_with_key(api_key: impl Into<String>) -> Self {
    Config {
      api_key: api_key.into(),
      base_url: crate::AGENT_AI_BASE_URL.to_string(),
      timeout: Duration::from_millis(crate::DEFAULT_TIMEOUT_MS),
      headers: BTreeMap::new(),
    }
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Add an extra header. Later calls with the same name replace earlier ones.
  pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.headers.insert(name.into(), value.into());
    self
  }

  /// Check the base URL and timeout, stripping any trailing slash from the URL
  pub fn validated(mut self) -> Result<Self> {
    let parsed = Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
      return Err(Error::Config(format!(
        "Unsupported base URL scheme: {}",
        parsed.scheme()
      )));
    }

    if self.timeout.is_zero() {
      return Err(Error::Config("Timeout must be greater than zero".to_string()));
    }

    self.base_url = self.base_url.trim_end_matches('/').to_string();
    Ok(self)
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .field("headers", &self.headers)
      .finish()
  }
}
