use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    plant_care::{
        entities::PlantCareAnalysis,
        interpreter::interpret,
        ports::{LLMClient, PlantCareService},
        prompts::{plant_content_prompt, plant_photo_prompt},
        value_objects::{AnalyzePlantPhotoInput, GeneratePlantContentInput},
    },
};

impl<LLM> PlantCareService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(image_bytes = input.image_data.len()))]
    async fn analyze_plant_photo(
        &self,
        input: AnalyzePlantPhotoInput,
    ) -> Result<PlantCareAnalysis, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid);
        }

        tracing::info!(plant_name = ?input.plant_name, "Starting plant photo analysis");

        let prompt = plant_photo_prompt(input.plant_name.as_deref());
        let raw_response = self
            .llm_client
            .generate_with_image(prompt, input.image_data, input.mime_type)
            .await?;

        tracing::info!("Plant photo analysis successful");

        Ok(PlantCareAnalysis {
            recommendations: interpret(&raw_response),
            raw_response,
        })
    }

    #[instrument(skip(self, input), fields(plant_name = %input.plant_name))]
    async fn generate_plant_content(
        &self,
        input: GeneratePlantContentInput,
    ) -> Result<PlantCareAnalysis, CoreError> {
        let plant_name = input.plant_name.trim();
        if plant_name.is_empty() {
            return Err(CoreError::Invalid);
        }

        tracing::info!(species = ?input.species, "Generating plant content");

        let prompt = plant_content_prompt(plant_name, input.species.as_deref());
        let raw_response = self.llm_client.generate_with_text(prompt).await?;

        tracing::info!("Plant content generation successful");

        Ok(PlantCareAnalysis {
            recommendations: interpret(&raw_response),
            raw_response,
        })
    }
}
