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

use crate::transport::Transport;
use agentai_core::actions::INVOKE_LLM;
use agentai_core::{ActionRegistry, Config, Result};
use agentai_models::{ActionError, ActionResponse, ActionResult, ChatOptions};
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Main Agent.ai API client
///
/// Resolves action ids through the static [`ActionRegistry`], posts the
/// parameters as JSON and normalizes whatever comes back into an
/// [`ActionResult`]. Cloning is cheap and clones share one HTTP client, so a
/// single instance can serve many concurrent calls.
///
/// # Examples
///
/// ```ignore
/// use agentai_client::AgentAiClient;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AgentAiClient::new(std::env::var("AGENT_API_KEY")?)?;
///
///     let page = client.action("grabWebText", json!({"url": "https://agent.ai"})).await;
///     if page.is_success() {
///         println!("{}", page.results.unwrap_or_default());
///     } else {
///         eprintln!("{}: {}", page.status, page.error.unwrap_or_default());
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AgentAiClient {
  transport: Arc<Transport>,
  registry: ActionRegistry,
}

impl AgentAiClient {
  /// Create a client for `api_key` with the default base URL and timeout
  ///
  /// # Errors
  ///
  /// Returns an error if the key cannot be used as a header value or the HTTP
  /// client cannot be created.
  pub fn new(api_key: impl Into<String>) -> Result<Self> {
    Self::with_config(Config::default_with_key(api_key))
  }

  /// Create a client from a full configuration
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL, timeout or any header is invalid, or
  /// if the HTTP client cannot be created.
  pub fn with_config(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport, registry: ActionRegistry })
  }

  /// Create a client from `AGENT_API_KEY` and the optional `AGENTAI_*` variables
  pub fn from_env() -> Result<Self> {
    Self::with_config(Config::from_env()?)
  }

  /// Execute an action by id
  ///
  /// Never fails: unknown ids, HTTP error statuses and network failures all
  /// come back as an [`ActionResult`] with `status` and `error` set.
  pub async fn action(&self, action_id: &str, params: Value) -> ActionResult {
    self.try_action(action_id, params).await.into()
  }

  /// Execute an action by id, keeping success and failure apart
  ///
  /// An unregistered `action_id` returns [`ActionError::InvalidAction`]
  /// without touching the network.
  #[instrument(skip(self, params), fields(action_id = %action_id))]
  pub async fn try_action(
    &self,
    action_id: &str,
    params: Value,
  ) -> std::result::Result<ActionResponse, ActionError> {
    let Some(endpoint) = self.registry.endpoint(action_id) else {
      warn!("Rejected unknown action id");
      return Err(ActionError::invalid_action(action_id));
    };

    self.transport.post_json(endpoint, &params).await
  }

  /// Ask the `invokeLlm` action to answer `prompt`
  ///
  /// Sends `{instructions: prompt, llm_engine: model}` plus every extra
  /// option; the model defaults to `gpt4o`.
  pub async fn chat(&self, prompt: &str, options: ChatOptions) -> ActionResult {
    self.action(INVOKE_LLM, options.into_params(prompt)).await
  }

  /// The action table this client dispatches through
  pub fn registry(&self) -> ActionRegistry {
    self.registry
  }

  /// Get the underlying transport
  pub fn transport(&self) -> &Transport {
    &self.transport
  }
}

impl std::fmt::Debug for AgentAiClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AgentAiClient")
      .field("base_url", &self.transport.base_url())
      .field("timeout", &self.transport.timeout())
      .field("actions", &self.registry.len())
      .finish()
  }
}
