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

//! # agentai-client
//!
//! A Rust client for the Agent.ai Actions API.
//!
//! ## Features
//!
//! - **One entry point**: every action goes through `action(id, params)`
//! - **Async/Await**: Built on tokio and reqwest
//! - **Errors as data**: calls never fail; each returns an `ActionResult`
//! - **Configurable**: base URL, timeout and extra headers via `Config`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agentai_client::{AgentAiClient, ChatOptions};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AgentAiClient::from_env()?;
//!
//!     let news = client
//!         .action("getGoogleNews", json!({"query": "rust", "date_range": "7d"}))
//!         .await;
//!     println!("status {}: {:?}", news.status, news.results);
//!
//!     let answer = client.chat("What is AI?", ChatOptions::new().model("claude3opus")).await;
//!     println!("{:?}", answer.results);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! `action` and `chat` return `ActionResult`; inspect `status` and `error`.
//! `try_action` returns `Result<ActionResponse, ActionError>` for callers who
//! prefer `?`. Only construction returns `agentai_core::Error`.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// The dispatching client
pub mod client;
/// reqwest-backed HTTP transport
pub mod transport;

pub use agentai_core::{ActionRegistry, Config, Error, Result, ACTION_ENDPOINTS};
pub use agentai_models::*;
pub use client::AgentAiClient;
pub use transport::Transport;
