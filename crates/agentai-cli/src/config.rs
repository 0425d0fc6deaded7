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

use agentai_client::AgentAiClient;
use agentai_core::Config as CoreConfig;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::time::Duration;

/// Connection settings shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
  /// Bearer token for the Agent.ai API
  #[arg(long, global = true, env = "AGENT_API_KEY", hide_env_values = true)]
  pub api_key: Option<String>,

  /// Override the API base URL
  #[arg(long, global = true, env = "AGENTAI_BASE_URL", default_value = agentai_core::AGENT_AI_BASE_URL)]
  pub base_url: String,

  /// Request timeout in milliseconds
  #[arg(long, global = true, env = "AGENTAI_TIMEOUT_MS", default_value_t = agentai_core::DEFAULT_TIMEOUT_MS)]
  pub timeout_ms: u64,

  /// Extra header as NAME:VALUE (repeatable)
  #[arg(long = "header", global = true, value_name = "NAME:VALUE")]
  pub headers: Vec<String>,
}

impl ConnectionArgs {
  pub fn to_config(&self) -> Result<CoreConfig> {
    let api_key = self
      .api_key
      .clone()
      .context("AGENT_API_KEY environment variable not set (or pass --api-key)")?;

    let mut config = CoreConfig::default_with_key(api_key)
      .with_base_url(self.base_url.clone())
      .with_timeout(Duration::from_millis(self.timeout_ms));

    for raw in &self.headers {
      let (name, value) = parse_header(raw)?;
      config = config.with_header(name, value);
    }

    Ok(config)
  }

  pub fn client(&self) -> Result<AgentAiClient> {
    let config = self.to_config()?;
    AgentAiClient::with_config(config).context("Failed to create Agent.ai client")
  }
}

/// Split `NAME:VALUE`, trimming whitespace around both parts
pub fn parse_header(raw: &str) -> Result<(String, String)> {
  let Some((name, value)) = raw.split_once(':') else {
    bail!("Invalid header '{}': expected NAME:VALUE", raw);
  };
  let name = name.trim();
  if name.is_empty() {
    bail!("Invalid header '{}': empty name", raw);
  }
  Ok((name.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args() -> ConnectionArgs {
    ConnectionArgs {
      api_key: Some("test-api-key".to_string()),
      base_url: "https://custom-url.com".to_string(),
      timeout_ms: 60_000,
      headers: vec!["X-Custom-Header: value".to_string()],
    }
  }

  #[test]
  fn test_parse_header() {
    assert_eq!(
      parse_header("X-Custom-Header: CustomValue").unwrap(),
      ("X-Custom-Header".to_string(), "CustomValue".to_string())
    );
    assert_eq!(
      parse_header("X-Url:https://a.b").unwrap(),
      ("X-Url".to_string(), "https://a.b".to_string())
    );
    assert!(parse_header("no-colon").is_err());
    assert!(parse_header(" : value").is_err());
  }

  #[test]
  fn test_to_config() {
    let config = args().to_config().unwrap();
    assert_eq!(config.api_key, "test-api-key");
    assert_eq!(config.base_url, "https://custom-url.com");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.headers.get("X-Custom-Header").map(String::as_str), Some("value"));
  }

  #[test]
  fn test_missing_api_key() {
    let mut args = args();
    args.api_key = None;
    let err = args.to_config().unwrap_err();
    assert!(err.to_string().contains("AGENT_API_KEY"));
  }

  #[test]
  fn test_client_rejects_bad_base_url() {
    let mut args = args();
    args.base_url = "not a url".to_string();
    assert!(args.client().is_err());
  }
}
