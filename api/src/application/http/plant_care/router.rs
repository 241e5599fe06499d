use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    analyze_plant_photo::{__path_analyze_plant_photo, analyze_plant_photo},
    generate_plant_content::{__path_generate_plant_content, generate_plant_content},
};
use crate::application::http::server::app_state::AppState;

/// Base64 inflates the 10MB image limit by a third; leave room for the JSON around it.
const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_plant_photo, generate_plant_content))]
pub struct PlantCareApiDoc;

pub fn plant_care_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analyzePlantPhoto", state.args.server.root_path),
            post(analyze_plant_photo),
        )
        .route(
            &format!("{}/generatePlantContent", state.args.server.root_path),
            post(generate_plant_content),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use test_context::test_context;

    use crate::application::http::test::{FAILING_PLANT, PHOTO_REPLY, TestApp};

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_analyze_plant_photo(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/analyzePlantPhoto")
            .json(&json!({ "base64Image": "/9j/4A==", "plantName": "Monstera" }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["rawResponse"], json!(PHOTO_REPLY));
        assert_eq!(body["recommendations"]["name"], json!("Monstera"));
        assert_eq!(body["recommendations"]["species"], json!("Monstera deliciosa"));
        assert_eq!(body["recommendations"]["watering_frequency"], json!(14));
        assert_eq!(
            body["recommendations"]["specific_issues"],
            json!("Yellowing leaves")
        );

        let upstream = ctx.upstream_requests();
        assert_eq!(upstream.len(), 1);
        assert_eq!(
            upstream[0]["messages"][0]["content"][1]["image_url"]["url"],
            json!("data:image/jpeg;base64,/9j/4A==")
        );
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_analyze_plant_photo_requires_image(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/analyzePlantPhoto")
            .json(&json!({ "plantName": "Monstera" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "error": "Base64 image is required" })
        );
        assert!(ctx.upstream_requests().is_empty());
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_analyze_plant_photo_rejects_invalid_base64(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/analyzePlantPhoto")
            .json(&json!({ "base64Image": "%%%" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["success"], json!(false));
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_generate_plant_content(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/generatePlantContent")
            .json(&json!({ "plantName": "Pothos", "species": "Epipremnum aureum" }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["recommendations"]["name"], json!("Pothos"));
        assert_eq!(body["recommendations"]["light"], json!("Low light"));
        assert_eq!(
            body["recommendations"]["interesting_facts"]
                .as_array()
                .map(Vec::len),
            Some(4)
        );
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_generate_plant_content_requires_name(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/generatePlantContent")
            .json(&json!({ "species": "Epipremnum aureum" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["error"],
            json!("Plant name is required")
        );
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_generate_plant_content_rejects_blank_name(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/generatePlantContent")
            .json(&json!({ "plantName": "   " }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "error": "Plant name is required" })
        );
        assert!(ctx.upstream_requests().is_empty());
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_upstream_failure(ctx: &mut TestApp) {
        let response = ctx
            .server
            .post("/generatePlantContent")
            .json(&json!({ "plantName": FAILING_PLANT }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("429"));
    }
}
