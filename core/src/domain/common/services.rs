use crate::domain::plant_care::ports::LLMClient;

/// Application service. Holds the injected adapters; the domain service
/// traits are implemented on it in their own modules.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
