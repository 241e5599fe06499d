use axum::extract::State;
use plantcare_core::domain::plant_care::{
    entities::{PlantCareAnalysis, PlantCareRecord},
    ports::PlantCareService,
    value_objects::AnalyzePlantPhotoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    plant_care::validators::{AnalyzePlantPhotoRequest, decode_image},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

/// Envelope expected by the mobile client.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantCareResponse {
    pub success: bool,
    pub recommendations: PlantCareRecord,
    #[serde(rename = "rawResponse")]
    pub raw_response: String,
}

impl From<PlantCareAnalysis> for PlantCareResponse {
    fn from(analysis: PlantCareAnalysis) -> Self {
        Self {
            success: true,
            recommendations: analysis.recommendations,
            raw_response: analysis.raw_response,
        }
    }
}

#[utoipa::path(
    post,
    path = "/analyzePlantPhoto",
    tag = "plant-care",
    summary = "Analyze a plant photo",
    description = "Identifies the plant in a photo and returns structured care recommendations",
    responses(
        (status = 200, body = PlantCareResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = AnalyzePlantPhotoRequest
)]
pub async fn analyze_plant_photo(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzePlantPhotoRequest>,
) -> Result<Response<PlantCareResponse>, ApiError> {
    let image = decode_image(&payload.base64_image)?;

    let analysis = state
        .service
        .analyze_plant_photo(AnalyzePlantPhotoInput {
            image_data: image.data,
            mime_type: image.mime_type,
            plant_name: payload.plant_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis.into()))
}
