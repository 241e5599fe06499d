//! Shared HTTP test fixture: the real router wired to a local stand-in for
//! the chat completions API.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

pub const PHOTO_REPLY: &str = "\
Plant: Monstera
Species: Monstera deliciosa
Care Recommendations:
- Watering: Water every 14 days
- Light: Bright indirect light
HEALTH ASSESSMENT: A few yellow leaves at the base.";

pub const CONTENT_REPLY: &str = "\
Plant Name: Pothos
Species: Epipremnum aureum
Care Recommendations:
- Watering: Weekly
- Light: Tolerates low light";

/// Plant name that makes the stand-in upstream answer 429.
pub const FAILING_PLANT: &str = "QuotaExceeded";

type Captured = Arc<Mutex<Vec<Value>>>;

pub struct TestApp {
    pub server: TestServer,
    captured: Captured,
}

impl TestApp {
    pub fn upstream_requests(&self) -> Vec<Value> {
        self.captured.lock().unwrap().clone()
    }
}

async fn chat_completions(State(captured): State<Captured>, Json(body): Json<Value>) -> Response {
    captured.lock().unwrap().push(body.clone());

    let content = &body["messages"][0]["content"];
    if content.as_str().is_some_and(|text| text.contains(FAILING_PLANT)) {
        return (StatusCode::TOO_MANY_REQUESTS, "quota exceeded").into_response();
    }

    let reply = if content.is_array() {
        PHOTO_REPLY
    } else {
        CONTENT_REPLY
    };

    Json(json!({ "choices": [{ "message": { "role": "assistant", "content": reply } }] }))
        .into_response()
}

async fn spawn_upstream(captured: Captured) -> SocketAddr {
    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(captured);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        let captured = Captured::default();
        let addr = spawn_upstream(captured.clone()).await;

        let args = Args::parse_from([
            "plantcare-api".to_string(),
            "--openai-api-key".to_string(),
            "sk-test".to_string(),
            "--openai-base-url".to_string(),
            format!("http://{}/v1", addr),
            "--root-path".to_string(),
            String::new(),
        ]);

        let app_state = state(Arc::new(args)).await.unwrap();
        let server = TestServer::new(router(app_state).unwrap()).unwrap();

        TestApp { server, captured }
    }
}
