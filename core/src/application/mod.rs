use std::sync::Arc;

use crate::{
    domain::common::{PlantcareConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::OpenAILLMClient,
};

pub type PlantcareService = Service<OpenAILLMClient>;

/// Builds the service graph once at startup. The model client is created here
/// and owned by the returned service; handlers receive it through app state.
pub async fn create_service(config: PlantcareConfig) -> Result<Arc<PlantcareService>, CoreError> {
    if config.llm.openai_api_key.trim().is_empty() {
        return Err(CoreError::Configuration(
            "OPENAI_API_KEY is not configured".to_string(),
        ));
    }

    let llm_client = OpenAILLMClient::new(&config.llm)?;

    tracing::info!(
        model = %config.llm.openai_model,
        base_url = %config.llm.openai_base_url,
        "LLM client initialized"
    );

    Ok(Arc::new(Service::new(llm_client)))
}
