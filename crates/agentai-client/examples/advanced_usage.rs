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

//! Advanced usage: custom configuration, chained actions and fan-out
//!
//! - Builds a client with a longer timeout and an extra header
//! - Fetches news for a topic, then asks an LLM to analyze the headlines
//! - Fetches several websites concurrently through one shared client

use agentai_client::{AgentAiClient, ChatOptions, Config};
use futures::future::join_all;
use serde_json::{json, Value};
use std::time::Duration;

/// Outcome of one website fetch
#[derive(Debug)]
struct FetchReport {
  url: String,
  content: Option<Value>,
  error: Option<String>,
}

async fn news_and_analysis(client: &AgentAiClient, topic: &str, location: &str, days: &str) -> Option<Value> {
  println!("Fetching news about \"{topic}\" in {location} from the last {days}...");
  let news = client
    .action("getGoogleNews", json!({"query": topic, "date_range": days, "location": location}))
    .await;

  if !news.is_success() {
    eprintln!("Failed to get news: {}", news.error.unwrap_or_default());
    return None;
  }

  let articles = news.results.unwrap_or_default();
  let titles: Vec<&str> = articles
    .as_array()
    .map(|items| items.iter().filter_map(|a| a.get("title").and_then(Value::as_str)).collect())
    .unwrap_or_default();
  println!("Found {} news articles.", titles.len());

  let prompt = format!(
    "I've collected these news headlines about {topic}:\n\n{}\n\nPlease provide a brief analysis of the current trends and sentiment around this topic based on these headlines.",
    titles.join("\n")
  );
  let analysis = client.chat(&prompt, ChatOptions::new().model("gpt4o")).await;

  if !analysis.is_success() {
    eprintln!("Failed to analyze headlines: {}", analysis.error.unwrap_or_default());
    return None;
  }
  analysis.results
}

async fn fetch_websites(client: &AgentAiClient, urls: &[&str]) -> Vec<FetchReport> {
  println!("Fetching content from {} websites...", urls.len());

  let calls = urls.iter().map(|url| async move {
    let result = client.action("grabWebText", json!({"url": url})).await;
    let ok = result.is_success();
    FetchReport {
      url: url.to_string(),
      content: if ok { result.results } else { None },
      error: if ok { None } else { result.error },
    }
  });
  let reports = join_all(calls).await;

  let successful = reports.iter().filter(|r| r.error.is_none()).count();
  println!("Successfully fetched {successful} of {} websites.", urls.len());
  reports
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::from_env()?
    .with_timeout(Duration::from_secs(60))
    .with_header("X-Custom-Header", "CustomValue");
  let client = AgentAiClient::with_config(config)?;

  if let Some(analysis) = news_and_analysis(&client, "artificial intelligence", "New York", "7d").await {
    println!("\n--- Analysis Results ---\n{analysis}\n------------------------");
  }

  println!("\n{}\n", "-".repeat(50));

  let sites = ["https://agent.ai", "https://openai.com", "https://anthropic.com", "https://huggingface.co"];
  for report in fetch_websites(&client, &sites).await {
    match (&report.content, &report.error) {
      (Some(_), _) => println!("{}: ok", report.url),
      (None, Some(err)) => println!("{}: {}", report.url, err),
      (None, None) => println!("{}: empty response", report.url),
    }
  }

  Ok(())
}
