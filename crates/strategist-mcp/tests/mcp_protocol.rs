//! JSON-RPC exchanges against the mounted streamable HTTP endpoint.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use strategist::fake::{ScriptedGenerator, ScriptedReply};
use strategist::{OutlineAdapter, GENERIC_BACKEND_ERROR_MESSAGE};
use strategist_mcp::{serve_http, OutlineServer, MCP_PATH, TOOL_NAME};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const PROTOCOL_VERSION: &str = "2025-03-26";
const SESSION_HEADER: &str = "mcp-session-id";

struct TestServer {
    endpoint: String,
    shutdown: oneshot::Sender<()>,
    task: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    async fn start(generator: Arc<ScriptedGenerator>) -> Self {
        let server = OutlineServer::new(OutlineAdapter::new(generator));
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let (shutdown, rx) = oneshot::channel::<()>();

        let task = tokio::spawn(serve_http(server, listener, async move {
            let _ = rx.await;
        }));

        Self {
            endpoint: format!("http://{addr}{MCP_PATH}"),
            shutdown,
            task,
        }
    }

    async fn stop(self) {
        self.shutdown.send(()).expect("server still running");
        tokio::time::timeout(Duration::from_secs(10), self.task)
            .await
            .expect("server stops")
            .expect("join")
            .expect("clean shutdown");
    }
}

/// An initialized MCP session on a [`TestServer`].
#[derive(Clone)]
struct Session {
    client: reqwest::Client,
    endpoint: String,
    id: Option<String>,
}

impl Session {
    async fn open(server: &TestServer) -> Self {
        let mut session = Self {
            client: reqwest::Client::new(),
            endpoint: server.endpoint.clone(),
            id: None,
        };

        let response = session
            .post(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {},
                    "clientInfo": { "name": "outline-tests", "version": "0.0.0" }
                }
            }))
            .await;
        assert!(response.status().is_success(), "initialize: {}", response.status());
        session.id = response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let init = read_reply(response, 1).await;
        assert!(init["result"]["capabilities"]["tools"].is_object(), "{init}");

        session
            .notify("notifications/initialized", json!({}))
            .await;
        session
    }

    async fn post(&self, body: &Value) -> reqwest::Response {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json, text/event-stream")
            .header("content-type", "application/json")
            .json(body);
        if let Some(id) = &self.id {
            request = request
                .header(SESSION_HEADER, id)
                .header("mcp-protocol-version", PROTOCOL_VERSION);
        }
        request.send().await.expect("request")
    }

    async fn notify(&self, method: &str, params: Value) {
        let response = self
            .post(&json!({ "jsonrpc": "2.0", "method": method, "params": params }))
            .await;
        assert!(
            response.status().is_success(),
            "{method}: {}",
            response.status()
        );
    }

    async fn call_tool(&self, id: u64, arguments: Value) -> Value {
        let response = self
            .post(&json!({
                "jsonrpc": "2.0",
                "id": id,
                "method": "tools/call",
                "params": { "name": TOOL_NAME, "arguments": arguments }
            }))
            .await;
        assert!(response.status().is_success(), "tools/call: {}", response.status());
        read_reply(response, id).await
    }
}

/// Read a response body until the JSON-RPC message answering `id` arrives.
/// Handles both a plain JSON body and an SSE stream.
async fn read_reply(mut response: reqwest::Response, id: u64) -> Value {
    let read = async {
        let mut buffer = String::new();
        while let Some(chunk) = response.chunk().await.expect("body chunk") {
            buffer.push_str(&String::from_utf8_lossy(&chunk));
            if let Some(message) = find_reply(&buffer, id) {
                return message;
            }
        }
        panic!("stream ended without a reply to {id}: {buffer}");
    };
    tokio::time::timeout(Duration::from_secs(10), read)
        .await
        .expect("reply within timeout")
}

fn find_reply(buffer: &str, id: u64) -> Option<Value> {
    let answers = |message: &Value| message["id"] == json!(id);

    if let Ok(message) = serde_json::from_str::<Value>(buffer.trim()) {
        if answers(&message) {
            return Some(message);
        }
    }
    buffer
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .filter_map(|data| serde_json::from_str::<Value>(data.trim()).ok())
        .find(answers)
}

async fn wait_until(what: &str, condition: impl Fn() -> bool) {
    let poll = async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    };
    tokio::time::timeout(Duration::from_secs(10), poll)
        .await
        .unwrap_or_else(|_| panic!("timed out waiting for {what}"));
}

#[tokio::test]
async fn backend_failure_is_tool_error_with_generic_text_only() {
    let generator = Arc::new(ScriptedGenerator::new(ScriptedReply::Status {
        status: 429,
        message: "quota exhausted for key AIza-secret".into(),
    }));
    let server = TestServer::start(generator.clone()).await;
    let session = Session::open(&server).await;

    let reply = session.call_tool(2, json!({ "topic": "home espresso" })).await;

    assert!(reply.get("error").is_none(), "{reply}");
    let result = &reply["result"];
    assert_eq!(result["isError"], json!(true));
    let content = result["content"].as_array().expect("content");
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["type"], "text");
    assert_eq!(content[0]["text"], GENERIC_BACKEND_ERROR_MESSAGE);

    let raw = reply.to_string();
    assert!(!raw.contains("quota"));
    assert!(!raw.contains("AIza-secret"));
    assert!(!raw.contains("429"));
    assert_eq!(generator.call_count(), 1);

    server.stop().await;
}

#[tokio::test]
async fn success_returns_structured_outline_verbatim() {
    let text = "  I. X\n     A. y  \n\n";
    let generator = Arc::new(ScriptedGenerator::new(ScriptedReply::Text(text.into())));
    let server = TestServer::start(generator.clone()).await;
    let session = Session::open(&server).await;

    let reply = session.call_tool(2, json!({ "topic": "tide pools" })).await;

    let result = &reply["result"];
    assert_ne!(result["isError"], json!(true), "{reply}");
    assert_eq!(result["structuredContent"]["outline"], json!(text));
    assert_eq!(generator.call_count(), 1);
    assert!(generator.prompts()[0].contains("tide pools"));

    server.stop().await;
}

#[tokio::test]
async fn non_string_topic_is_rejected_before_backend() {
    let generator = Arc::new(ScriptedGenerator::new(ScriptedReply::Text("unused".into())));
    let server = TestServer::start(generator.clone()).await;
    let session = Session::open(&server).await;

    let reply = session.call_tool(3, json!({ "topic": 42 })).await;

    assert!(reply.get("result").is_none(), "{reply}");
    assert_eq!(reply["error"]["code"], json!(-32602));
    assert_eq!(generator.call_count(), 0);

    server.stop().await;
}

#[tokio::test]
async fn cancelled_notification_drops_in_flight_backend_call() {
    let generator = Arc::new(
        ScriptedGenerator::new(ScriptedReply::Text("never".into()))
            .with_delay(Duration::from_secs(60)),
    );
    let server = TestServer::start(generator.clone()).await;
    let session = Session::open(&server).await;

    let pending = tokio::spawn({
        let session = session.clone();
        async move { session.call_tool(4, json!({ "topic": "slow topic" })).await }
    });

    wait_until("backend call to start", || generator.in_flight_count() == 1).await;

    session
        .notify(
            "notifications/cancelled",
            json!({ "requestId": 4, "reason": "client gave up" }),
        )
        .await;

    wait_until("backend call to be dropped", || generator.in_flight_count() == 0).await;
    assert_eq!(generator.call_count(), 1);
    assert_eq!(generator.completed_count(), 0);

    pending.abort();
    server.stop().await;
}
