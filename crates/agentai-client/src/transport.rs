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

//! HTTP transport layer for Agent.ai action requests

use agentai_core::{Config, Error, Result};
use agentai_models::{status_fallback, ActionError, ActionResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// `User-Agent` sent unless the configuration supplies one
pub const USER_AGENT: &str = concat!("agentai-client/", env!("CARGO_PKG_VERSION"));

/// HTTP transport layer for making requests to the Agent.ai API
///
/// Holds one `reqwest::Client` configured with the merged header set and
/// timeout; it is shared by every call made through the owning client.
#[derive(Debug)]
pub struct Transport {
    client: Client,
    base_url: String,
    timeout: Duration,
    headers: HeaderMap,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let config = config.clone().validated()?;
        let headers = build_headers(&config)?;

        // default_headers goes last so a configured User-Agent wins
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers.clone())
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            timeout: config.timeout,
            headers,
        })
    }

    /// POST `body` as JSON to `<base_url><path>` and classify the outcome
    ///
    /// A 2xx yields the `response`/`metadata` members of the body. Any other
    /// status is a remote error; anything that prevents reading a status is a
    /// transport error.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post_json(
        &self,
        path: &str,
        body: &Value,
    ) -> std::result::Result<ActionResponse, ActionError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to: {}", url);

        // Serialized by hand so a caller-supplied Content-Type default header is
        // not replaced by RequestBuilder::json.
        let response = self
            .client
            .post(&url)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                ActionError::transport(error_chain(&e))
            })?;

        let status = response.status();
        let code = status.as_u16();

        if status.is_success() {
            let bytes = response.bytes().await.map_err(|e| {
                error!("Failed to read response body: {}", e);
                ActionError::transport(error_chain(&e))
            })?;
            debug!("Response body length: {} bytes", bytes.len());

            return match serde_json::from_slice::<Value>(&bytes) {
                Ok(body) => {
                    info!("Action request succeeded with status: {}", status);
                    Ok(ActionResponse::from_body(code, &body))
                }
                Err(e) => {
                    if !bytes.is_empty() {
                        warn!("Response body is not JSON: {}", e);
                    }
                    Ok(ActionResponse::empty(code))
                }
            };
        }

        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok());
        warn!("Request failed with status: {}", status);

        Err(ActionError::remote(code, body.as_ref(), status_fallback(code)))
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get request timeout duration
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Mandatory headers first, then the configured extras on top.
///
/// Extras replace a mandatory header of the same (case-insensitive) name.
fn build_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut auth = header_value("Authorization", &format!("Bearer {}", config.api_key))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in &config.headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| Error::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        if header_name == AUTHORIZATION || header_name == CONTENT_TYPE {
            warn!("Extra header {} overrides a default header", header_name);
        }

        let mut header_value = header_value(name, value)?;
        if header_name == AUTHORIZATION {
            header_value.set_sensitive(true);
        }
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Render an error with its sources, e.g. `error sending request: connection refused`
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
