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

use super::print_result;
use agentai_client::AgentAiClient;
use agentai_models::ChatOptions;
use anyhow::{bail, Result};
use clap::Args;
use serde_json::Value;

#[derive(Args, Debug)]
pub struct ChatCommand {
  /// Prompt sent as the LLM instructions
  prompt: String,

  /// LLM engine (defaults to gpt4o)
  #[arg(short, long)]
  model: Option<String>,

  /// Extra option as KEY=VALUE; VALUE is read as JSON when it parses (repeatable)
  #[arg(short, long = "option", value_name = "KEY=VALUE")]
  options: Vec<String>,
}

pub async fn execute(cmd: ChatCommand, client: AgentAiClient) -> Result<()> {
  let mut options = ChatOptions::new();
  if let Some(model) = cmd.model {
    options = options.model(model);
  }
  for raw in &cmd.options {
    let (key, value) = parse_option(raw)?;
    options = options.option(key, value);
  }

  let result = client.chat(&cmd.prompt, options).await;
  print_result(&result)
}

/// `max_tokens=500` gives a number, `style=brief` a string
pub fn parse_option(raw: &str) -> Result<(String, Value)> {
  let Some((key, value)) = raw.split_once('=') else {
    bail!("Invalid option '{}': expected KEY=VALUE", raw);
  };
  if key.is_empty() {
    bail!("Invalid option '{}': empty key", raw);
  }
  let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
  Ok((key.to_string(), value))
}
