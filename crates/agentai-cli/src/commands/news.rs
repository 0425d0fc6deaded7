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

use super::ensure_success;
use agentai_client::AgentAiClient;
use agentai_models::ChatOptions;
use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};
use tracing::info;

#[derive(Args, Debug)]
pub struct NewsCommand {
  /// Topic to search the news for
  topic: String,

  /// Location passed to getGoogleNews
  #[arg(short, long, default_value = "US")]
  location: String,

  /// Date range, e.g. 1d, 7d, 30d
  #[arg(short, long, default_value = "7d")]
  days: String,

  /// LLM engine used for the analysis
  #[arg(short, long, default_value = agentai_core::DEFAULT_LLM_ENGINE)]
  model: String,
}

pub async fn execute(cmd: NewsCommand, client: AgentAiClient) -> Result<()> {
  info!("Fetching news about \"{}\" in {} from the last {}", cmd.topic, cmd.location, cmd.days);
  let news = client
    .action(
      "getGoogleNews",
      json!({"query": cmd.topic, "date_range": cmd.days, "location": cmd.location}),
    )
    .await;
  ensure_success(&news)?;

  let articles = news.results.unwrap_or(Value::Null);
  let titles = headline_titles(&articles);
  println!("Found {} news articles.", titles.len());

  let analysis = client
    .chat(&analysis_prompt(&cmd.topic, &titles), ChatOptions::new().model(cmd.model))
    .await;
  ensure_success(&analysis)?;

  println!("\n--- Analysis Results ---");
  match analysis.results {
    Some(Value::String(text)) => println!("{text}"),
    Some(other) => println!("{}", serde_json::to_string_pretty(&other)?),
    None => println!("(no analysis returned)"),
  }
  println!("------------------------");

  Ok(())
}

/// Titles of the articles returned by getGoogleNews, skipping untitled ones
fn headline_titles(articles: &Value) -> Vec<&str> {
  articles
    .as_array()
    .map(|items| items.iter().filter_map(|a| a.get("title").and_then(Value::as_str)).collect())
    .unwrap_or_default()
}

fn analysis_prompt(topic: &str, titles: &[&str]) -> String {
  format!(
    "I've collected these news headlines about {topic}:\n\n{}\n\nPlease provide a brief analysis of the current trends and sentiment around this topic based on these headlines.",
    titles.join("\n")
  )
}
