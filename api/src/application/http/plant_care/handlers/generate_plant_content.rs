use axum::extract::State;
use plantcare_core::domain::plant_care::{
    ports::PlantCareService, value_objects::GeneratePlantContentInput,
};

use crate::application::http::{
    plant_care::{
        handlers::analyze_plant_photo::PlantCareResponse, validators::GeneratePlantContentRequest,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/generatePlantContent",
    tag = "plant-care",
    summary = "Generate plant care content",
    description = "Returns structured care recommendations for a named plant, without a photo",
    responses(
        (status = 200, body = PlantCareResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = GeneratePlantContentRequest
)]
pub async fn generate_plant_content(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GeneratePlantContentRequest>,
) -> Result<Response<PlantCareResponse>, ApiError> {
    let analysis = state
        .service
        .generate_plant_content(GeneratePlantContentInput {
            plant_name: payload.plant_name,
            species: payload.species,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis.into()))
}
