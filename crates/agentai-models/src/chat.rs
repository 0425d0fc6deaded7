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

use agentai_core::DEFAULT_LLM_ENGINE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options for `chat`, the `invokeLlm` shortcut
///
/// `model` becomes `llm_engine`; everything in `extra` is passed through to
/// the action parameters untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatOptions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub model: Option<String>,

  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl ChatOptions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Read options from a JSON object such as `{"model": "claude3opus", "max_tokens": 500}`
  pub fn from_value(value: Value) -> serde_json::Result<Self> {
    serde_json::from_value(value)
  }

  pub fn model(mut self, model: impl Into<String>) -> Self {
    self.model = Some(model.into());
    self
  }

  pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.extra.insert(key.into(), value.into());
    self
  }

  /// Build the `invokeLlm` parameter object for `prompt`.
  ///
  /// Pass-through fields are applied last, so an explicit `instructions` or
  /// `llm_engine` in `extra` wins over the derived value.
  pub fn into_params(self, prompt: &str) -> Value {
    let mut params = Map::new();
    params.insert("instructions".to_string(), Value::String(prompt.to_string()));
    params.insert(
      "llm_engine".to_string(),
      Value::String(self.model.unwrap_or_else(|| DEFAULT_LLM_ENGINE.to_string())),
    );
    params.extend(self.extra);
    Value::Object(params)
  }
}
