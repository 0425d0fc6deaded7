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

//! Basic usage of the Agent.ai client
//!
//! Reads the bearer token from `AGENT_API_KEY` (a `.env` file works too) and
//! runs a couple of actions, printing each normalized result.
//!
//! ```text
//! AGENT_API_KEY=... cargo run -p agentai-client --example basic_usage
//! ```

use agentai_client::{ActionResult, AgentAiClient, ChatOptions};
use serde_json::json;

fn report(label: &str, result: &ActionResult) {
  if result.is_success() {
    println!("{label}: {}", result.results.clone().unwrap_or_default());
  } else {
    println!(
      "{label} failed ({}): {}",
      result.status,
      result.error.as_deref().unwrap_or("no error message")
    );
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let client = AgentAiClient::from_env()?;

  let page = client.action("grabWebText", json!({"url": "https://agent.ai"})).await;
  report("grabWebText", &page);

  let answer = client.chat("What is an AI agent? Answer in one sentence.", ChatOptions::new()).await;
  report("chat", &answer);

  let answer = client
    .chat(
      "Summarize the history of the transistor in two sentences.",
      ChatOptions::new().model("claude3opus").option("max_tokens", 200),
    )
    .await;
  report("chat (claude3opus)", &answer);

  // Unknown ids never leave the process.
  let bogus = client.action("notAnAction", json!({})).await;
  report("notAnAction", &bogus);

  Ok(())
}
