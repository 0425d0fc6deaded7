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

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message used when a transport failure carries no text of its own
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Normalized outcome of a single action call
///
/// All four fields are always serialized; empty ones appear as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
  pub status: u16,
  pub error: Option<String>,
  pub results: Option<Value>,
  pub metadata: Option<Value>,
}

impl ActionResult {
  /// True when the call reached the API, got a 2xx, and carries no error
  pub fn is_success(&self) -> bool {
    self.error.is_none() && (200..300).contains(&self.status)
  }

  /// Split the flat shape back into success and failure
  ///
  /// A 400 whose message names an invalid action id becomes
  /// [`ActionError::InvalidAction`] and any other 500 becomes
  /// [`ActionError::Transport`]. The flat shape does not record whether a 500
  /// came from the server, so a remote 500 also comes back as `Transport`.
  /// A non-2xx without an error message gets the status-code fallback text.
  pub fn into_result(self) -> Result<ActionResponse, ActionError> {
    let ActionResult { status, error, results, metadata } = self;
    let Some(message) = error else {
      if (200..300).contains(&status) {
        return Ok(ActionResponse { status, results, metadata });
      }
      return Err(ActionError::Remote { status, message: status_fallback(status) });
    };

    match (status, message.strip_prefix(INVALID_ACTION_PREFIX)) {
      (400, Some(action_id)) => Err(ActionError::invalid_action(action_id)),
      (500, _) => Err(ActionError::transport(message)),
      _ => Err(ActionError::Remote { status, message }),
    }
  }
}

const INVALID_ACTION_PREFIX: &str = "Invalid action_id: ";

/// Message used for a non-2xx response that carries no usable `error` member
pub fn status_fallback(status: u16) -> String {
  format!("Request failed with status code {}", status)
}

/// Successful API response: the `response` and `metadata` members of the body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
  pub status: u16,
  pub results: Option<Value>,
  pub metadata: Option<Value>,
}

impl ActionResponse {
  /// Extract `response` and `metadata` from a decoded body.
  ///
  /// Absent members and JSON `null` both become `None`; any other value,
  /// including `false`, `0` and `""`, is kept.
  pub fn from_body(status: u16, body: &Value) -> Self {
    Self { status, results: member(body, "response"), metadata: member(body, "metadata") }
  }

  /// A 2xx response whose body could not be read as JSON
  pub fn empty(status: u16) -> Self {
    Self { status, results: None, metadata: None }
  }
}

fn member(body: &Value, key: &str) -> Option<Value> {
  body.get(key).filter(|v| !v.is_null()).cloned()
}

/// The three ways an action call can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
  /// The action id is not in the registry; no request was sent
  #[error("Invalid action_id: {action_id}")]
  InvalidAction { action_id: String },

  /// The API answered with a non-2xx status
  #[error("{message}")]
  Remote { status: u16, message: String },

  /// No usable response: connect failure, DNS, timeout, broken body
  #[error("{message}")]
  Transport { message: String },
}

impl ActionError {
  pub fn invalid_action(action_id: impl Into<String>) -> Self {
    ActionError::InvalidAction { action_id: action_id.into() }
  }

  /// Build a remote error, preferring the server's `error` member over `fallback`
  ///
  /// A string member is used as is. Any other non-empty value (an object, a
  /// non-zero number, `true`) is rendered as JSON text. `null`, `false`, `0`
  /// and `""` fall back.
  pub fn remote(status: u16, body: Option<&Value>, fallback: impl Into<String>) -> Self {
    let message = body
      .and_then(|b| b.get("error"))
      .and_then(error_text)
      .unwrap_or_else(|| fallback.into());
    ActionError::Remote { status, message }
  }

  pub fn transport(message: impl Into<String>) -> Self {
    let message = message.into();
    let message = if message.trim().is_empty() { UNKNOWN_ERROR.to_string() } else { message };
    ActionError::Transport { message }
  }

  /// Status code reported for this failure
  pub fn status(&self) -> u16 {
    match self {
      ActionError::InvalidAction { .. } => 400,
      ActionError::Remote { status, .. } => *status,
      ActionError::Transport { .. } => 500,
    }
  }
}

fn error_text(value: &Value) -> Option<String> {
  match value {
    Value::Null | Value::Bool(false) => None,
    Value::String(s) if s.is_empty() => None,
    Value::String(s) => Some(s.clone()),
    Value::Number(n) if n.as_f64() == Some(0.0) => None,
    other => Some(other.to_string()),
  }
}

impl From<ActionResponse> for ActionResult {
  fn from(response: ActionResponse) -> Self {
    ActionResult {
      status: response.status,
      error: None,
      results: response.results,
      metadata: response.metadata,
    }
  }
}

impl From<ActionError> for ActionResult {
  fn from(err: ActionError) -> Self {
    ActionResult { status: err.status(), error: Some(err.to_string()), results: None, metadata: None }
  }
}

impl From<Result<ActionResponse, ActionError>> for ActionResult {
  fn from(outcome: Result<ActionResponse, ActionError>) -> Self {
    match outcome {
      Ok(response) => response.into(),
      Err(err) => err.into(),
    }
  }
}
