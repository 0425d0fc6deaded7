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
use agentai_core::ActionRegistry;
use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ActionCommand {
  /// Action id, e.g. grabWebText or invokeLlm
  action_id: String,

  /// Parameters as an inline JSON document
  #[arg(short, long, conflicts_with = "params_file")]
  params: Option<String>,

  /// Read parameters from a JSON file
  #[arg(long, value_name = "PATH")]
  params_file: Option<PathBuf>,
}

pub fn list() {
  let registry = ActionRegistry;
  let width = registry.ids().map(str::len).max().unwrap_or(0);
  for (id, path) in registry.iter() {
    println!("{id:<width$}  {path}");
  }
}

pub async fn execute(cmd: ActionCommand, client: AgentAiClient) -> Result<()> {
  let params = match (&cmd.params, &cmd.params_file) {
    (Some(inline), _) => parse_params(inline)?,
    (None, Some(path)) => read_params(path)?,
    (None, None) => Value::Object(Default::default()),
  };

  let result = client.action(&cmd.action_id, params).await;
  print_result(&result)
}

fn parse_params(raw: &str) -> Result<Value> {
  let value: Value = serde_json::from_str(raw).context("Parameters are not valid JSON")?;
  if !value.is_object() {
    bail!("Parameters must be a JSON object");
  }
  Ok(value)
}

fn read_params(path: &Path) -> Result<Value> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read parameters from {}", path.display()))?;
  parse_params(&raw)
}
