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
use agentai_models::ActionResult;
use anyhow::{bail, Result};
use clap::Args;
use futures::future::join_all;
use serde_json::{json, Value};

#[derive(Args, Debug)]
pub struct FetchCommand {
  /// Pages to fetch
  #[arg(required = true, num_args = 1..)]
  urls: Vec<String>,
}

pub async fn execute(cmd: FetchCommand, client: AgentAiClient) -> Result<()> {
  eprintln!("Fetching content from {} websites...", cmd.urls.len());

  let calls = cmd.urls.iter().map(|url| {
    let client = client.clone();
    async move { client.action("grabWebText", json!({"url": url})).await }
  });
  let results = join_all(calls).await;

  let report: Vec<Value> = cmd.urls.iter().zip(&results).map(|(url, r)| fetch_entry(url, r)).collect();
  println!("{}", serde_json::to_string_pretty(&report)?);

  let successful = results.iter().filter(|r| r.is_success()).count();
  eprintln!("Successfully fetched {} of {} websites.", successful, cmd.urls.len());

  if successful == 0 {
    bail!("No website could be fetched");
  }
  Ok(())
}

fn fetch_entry(url: &str, result: &ActionResult) -> Value {
  let success = result.is_success();
  let content = if success { result.results.clone() } else { None };
  json!({
    "url": url,
    "success": success,
    "content": content,
    "error": result.error,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fetch_entry_success() {
    let result = ActionResult { status: 200, error: None, results: Some(json!("page text")), metadata: None };
    assert_eq!(
      fetch_entry("https://agent.ai", &result),
      json!({"url": "https://agent.ai", "success": true, "content": "page text", "error": null})
    );
  }

  #[test]
  fn test_fetch_entry_failure() {
    let result = ActionResult { status: 500, error: Some("timed out".to_string()), results: None, metadata: None };
    assert_eq!(
      fetch_entry("https://slow.example", &result),
      json!({"url": "https://slow.example", "success": false, "content": null, "error": "timed out"})
    );
  }
}
