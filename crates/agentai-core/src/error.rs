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

use thiserror::Error;

/// The main error type for agentai-* crates
///
/// Action dispatch never surfaces this type; it covers building a client and
/// loading configuration.
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// A configured header name or value is not valid HTTP
  #[error("Invalid header {name}: {reason}")]
  InvalidHeader { name: String, reason: String },

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),
}

/// Result type alias for agentai-* crates
pub type Result<T> = std::result::Result<T, Error>;
