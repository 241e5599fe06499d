use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use test_context::test_context;

    use crate::application::http::test::TestApp;

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_health(ctx: &mut TestApp) {
        let response = ctx.server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_openapi_document_lists_routes(ctx: &mut TestApp) {
        let response = ctx.server.get("/api-docs/openapi.json").await;

        response.assert_status_ok();
        let paths = response.json::<Value>()["paths"].clone();
        assert!(paths.get("/health").is_some());
        assert!(paths.get("/analyzePlantPhoto").is_some());
        assert!(paths.get("/generatePlantContent").is_some());
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_metrics_endpoint(ctx: &mut TestApp) {
        ctx.server.get("/metrics").await.assert_status_ok();
    }
}
