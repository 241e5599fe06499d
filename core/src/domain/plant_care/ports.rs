use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    plant_care::{
        entities::PlantCareAnalysis,
        value_objects::{AnalyzePlantPhotoInput, GeneratePlantContentInput},
    },
};

/// LLM Client trait for calling vision-capable text generation models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for plant care analysis
#[cfg_attr(test, mockall::automock)]
pub trait PlantCareService: Send + Sync {
    fn analyze_plant_photo(
        &self,
        input: AnalyzePlantPhotoInput,
    ) -> impl Future<Output = Result<PlantCareAnalysis, CoreError>> + Send;

    fn generate_plant_content(
        &self,
        input: GeneratePlantContentInput,
    ) -> impl Future<Output = Result<PlantCareAnalysis, CoreError>> + Send;
}
