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

//! End-to-end dispatch tests against a local wiremock server.
//!
//! Each test mounts the endpoints it expects, points a client at the mock
//! server and checks both the request that went out and the normalized
//! `ActionResult` that came back.

use agentai_client::{ActionError, ActionResult, AgentAiClient, ChatOptions, Config};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn init_tracing() {
  let _ = tracing_subscriber::fmt().with_env_filter("debug").with_test_writer().try_init();
}

fn client_for(server: &MockServer) -> AgentAiClient {
  init_tracing();
  AgentAiClient::with_config(Config::default_with_key(API_KEY).with_base_url(server.uri()))
    .expect("Failed to create client")
}

async fn mount_success(server: &MockServer, endpoint: &str, body: Value, response: Value) {
  Mock::given(method("POST"))
    .and(path(endpoint))
    .and(body_json(body))
    .respond_with(ResponseTemplate::new(200).set_body_json(response))
    .expect(1)
    .mount(server)
    .await;
}

// ---------------------------------------------------------------------------
// action
// ---------------------------------------------------------------------------

#[tokio::test]
async fn successful_action_returns_formatted_response() {
  let server = MockServer::start().await;
  mount_success(
    &server,
    "/action/grab_web_text",
    json!({"url": "https://example.com"}),
    json!({"response": "test result", "metadata": {"test": "metadata"}}),
  )
  .await;

  let result = client_for(&server).action("grabWebText", json!({"url": "https://example.com"})).await;

  assert_eq!(
    result,
    ActionResult {
      status: 200,
      error: None,
      results: Some(json!("test result")),
      metadata: Some(json!({"test": "metadata"})),
    }
  );
}

#[tokio::test]
async fn request_carries_mandatory_headers() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/action/get_google_news"))
    .and(header("authorization", "Bearer test-api-key"))
    .and(header("content-type", "application/json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": []})))
    .expect(1)
    .mount(&server)
    .await;

  let result = client_for(&server)
    .action("getGoogleNews", json!({"query": "ai", "date_range": "7d", "location": "US"}))
    .await;

  assert_eq!(result.status, 200);
  assert_eq!(result.results, Some(json!([])));
  assert_eq!(result.metadata, None);
}

#[tokio::test]
async fn custom_config_reaches_the_wire() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/v1/action/invoke_agent"))
    .and(header("authorization", "Bearer test-api-key"))
    .and(header("x-custom-header", "CustomValue"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
    .expect(1)
    .mount(&server)
    .await;

  let config = Config::default_with_key(API_KEY)
    .with_base_url(format!("{}/v1/", server.uri()))
    .with_timeout(Duration::from_secs(60))
    .with_header("X-Custom-Header", "CustomValue");
  let client = AgentAiClient::with_config(config).unwrap();

  assert_eq!(client.transport().base_url(), format!("{}/v1", server.uri()));
  assert_eq!(client.transport().timeout(), Duration::from_secs(60));

  let result = client.action("invokeAgent", json!({"id": "abc"})).await;
  assert_eq!(result.results, Some(json!("ok")));
}

#[tokio::test]
async fn remote_error_uses_body_message() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/action/grab_web_text"))
    .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Bad Request"})))
    .mount(&server)
    .await;

  let result = client_for(&server).action("grabWebText", json!({"url": "https://example.com"})).await;

  assert_eq!(
    result,
    ActionResult { status: 400, error: Some("Bad Request".to_string()), results: None, metadata: None }
  );
}

#[tokio::test]
async fn remote_error_without_body_message_falls_back() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/action/rest_call"))
    .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
    .mount(&server)
    .await;

  let result = client_for(&server).action("restCall", json!({})).await;

  assert_eq!(result.status, 502);
  assert_eq!(result.error.as_deref(), Some("Request failed with status code 502"));
  assert_eq!(result.results, None);
  assert_eq!(result.metadata, None);
}

#[tokio::test]
async fn remote_error_ignores_response_members() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/action/generate_image"))
    .respond_with(
      ResponseTemplate::new(422).set_body_json(json!({"error": "bad prompt", "response": "partial"})),
    )
    .mount(&server)
    .await;

  let result = client_for(&server).action("generateImage", json!({"prompt": ""})).await;

  assert_eq!(result.status, 422);
  assert_eq!(result.error.as_deref(), Some("bad prompt"));
  assert_eq!(result.results, None);
}

#[tokio::test]
async fn remote_error_renders_structured_error_member() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/action/invoke_agent"))
    .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": {"code": 7}})))
    .mount(&server)
    .await;

  let result = client_for(&server).action("invokeAgent", json!({"id": "abc"})).await;

  assert_eq!(result.status, 409);
  assert_eq!(result.error.as_deref(), Some(r#"{"code":7}"#));
  assert_eq!(
    result.into_result(),
    Err(ActionError::Remote { status: 409, message: r#"{"code":7}"#.to_string() })
  );
}

#[tokio::test]
async fn content_type_override_reaches_the_wire() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/action/grab_web_text"))
    .and(header("content-type", "application/vnd.agent+json"))
    .and(body_json(json!({"url": "https://example.com"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "page"})))
    .expect(1)
    .mount(&server)
    .await;

  init_tracing();
  let config = Config::default_with_key(API_KEY)
    .with_base_url(server.uri())
    .with_header("Content-Type", "application/vnd.agent+json");
  let client = AgentAiClient::with_config(config).unwrap();

  let result = client.action("grabWebText", json!({"url": "https://example.com"})).await;
  assert_eq!(result.results, Some(json!("page")));

  let requests = server.received_requests().await.unwrap_or_default();
  assert_eq!(requests.len(), 1);
  let content_types: Vec<_> = requests[0].headers.get_all("content-type").iter().collect();
  assert_eq!(content_types.len(), 1);
  assert_eq!(content_types[0], "application/vnd.agent+json");
}

#[tokio::test]
async fn user_agent_defaults_and_can_be_overridden() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
    .mount(&server)
    .await;

  client_for(&server).action("grabWebText", json!({"url": "https://example.com"})).await;

  init_tracing();
  let config = Config::default_with_key(API_KEY)
    .with_base_url(server.uri())
    .with_header("User-Agent", "my-agent/1.0");
  let client = AgentAiClient::with_config(config).unwrap();
  client.action("grabWebText", json!({"url": "https://example.com"})).await;

  let requests = server.received_requests().await.unwrap_or_default();
  assert_eq!(requests.len(), 2);
  assert_eq!(requests[0].headers["user-agent"], agentai_client::transport::USER_AGENT);
  assert_eq!(requests[1].headers["user-agent"], "my-agent/1.0");
}

#[tokio::test]
async fn network_error_maps_to_500() {
  init_tracing();
  // Bind then drop so the port is closed when the client connects.
  let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let client =
    AgentAiClient::with_config(Config::default_with_key(API_KEY).with_base_url(format!("http://{addr}")))
      .unwrap();
  let result = client.action("grabWebText", json!({"url": "https://example.com"})).await;

  assert_eq!(result.status, 500);
  assert!(result.error.as_deref().is_some_and(|e| !e.is_empty()));
  assert_eq!(result.results, None);
  assert_eq!(result.metadata, None);
}

#[tokio::test]
async fn timeout_maps_to_500() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/action/output_audio"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(json!({"response": "too late"}))
        .set_delay(Duration::from_secs(2)),
    )
    .mount(&server)
    .await;

  let config = Config::default_with_key(API_KEY)
    .with_base_url(server.uri())
    .with_timeout(Duration::from_millis(100));
  let client = AgentAiClient::with_config(config).unwrap();

  let err = client.try_action("outputAudio", json!({"text": "hi"})).await.unwrap_err();
  assert!(matches!(err, ActionError::Transport { .. }));

  let result: ActionResult = err.into();
  assert_eq!(result.status, 500);
  assert_eq!(result.results, None);
}

#[tokio::test]
async fn invalid_action_sends_no_request() {
  let server = MockServer::start().await;
  Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let result = client_for(&server).action("invalidAction", json!({})).await;

  assert_eq!(
    result,
    ActionResult {
      status: 400,
      error: Some("Invalid action_id: invalidAction".to_string()),
      results: None,
      metadata: None,
    }
  );
  assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn empty_success_body_yields_null_results() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/action/store_variable_to_database"))
    .respond_with(ResponseTemplate::new(204))
    .mount(&server)
    .await;

  let result = client_for(&server)
    .action("storeVariableToDatabase", json!({"variable": "x", "value": 1}))
    .await;

  assert_eq!(result, ActionResult { status: 204, error: None, results: None, metadata: None });
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/action/grab_web_text"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "page"})))
    .expect(8)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let calls = (0..8).map(|i| {
    let client = client.clone();
    async move { client.action("grabWebText", json!({"url": format!("https://site{i}.example")})).await }
  });
  let results = futures::future::join_all(calls).await;

  assert_eq!(results.len(), 8);
  assert!(results.iter().all(|r| r.is_success() && r.results == Some(json!("page"))));
}

// ---------------------------------------------------------------------------
// chat
// ---------------------------------------------------------------------------

#[tokio::test]
async fn chat_uses_default_model() {
  let server = MockServer::start().await;
  mount_success(
    &server,
    "/action/invoke_llm",
    json!({"instructions": "What is AI?", "llm_engine": "gpt4o"}),
    json!({"response": "AI response", "metadata": null}),
  )
  .await;

  let result = client_for(&server).chat("What is AI?", ChatOptions::new()).await;

  assert_eq!(
    result,
    ActionResult { status: 200, error: None, results: Some(json!("AI response")), metadata: None }
  );
}

#[tokio::test]
async fn chat_passes_model_and_options() {
  let server = MockServer::start().await;
  mount_success(
    &server,
    "/action/invoke_llm",
    json!({"instructions": "What is AI?", "llm_engine": "claude3opus", "max_tokens": 500}),
    json!({"response": "AI response", "metadata": null}),
  )
  .await;

  let options = ChatOptions::from_value(json!({"model": "claude3opus", "max_tokens": 500})).unwrap();
  let result = client_for(&server).chat("What is AI?", options).await;

  assert_eq!(result.status, 200);
  assert_eq!(result.error, None);
  assert_eq!(result.results, Some(json!("AI response")));
}
