use utoipa::OpenApi;

use crate::application::http::{health::__path_health, plant_care::router::PlantCareApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Plantcare API",
        description = "Plant identification and care recommendations"
    ),
    paths(health)
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every route group merged in.
    pub fn document() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(PlantCareApiDoc::openapi());
        openapi
    }
}
