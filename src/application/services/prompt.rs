use std::sync::Arc;
use tracing::instrument;

use crate::domain::{
    parse_structured, ports::LlmService, DomainError, Generation, GenerationConfig, PersonInfo,
    PromptStrategy,
};

const EXTRACTION_INSTRUCTION: &str = "Extract the person's name and age from the text below. \
Respond with only a JSON object of the form {\"name\": string, \"age\": integer} and nothing else.";

pub struct PromptService {
    llm: Arc<dyn LlmService>,
    defaults: GenerationConfig,
}

impl PromptService {
    pub fn new(llm: Arc<dyn LlmService>, defaults: GenerationConfig) -> Self {
        Self { llm, defaults }
    }

    /// Renders `option` as a prompting strategy over `user_input` and returns
    /// the trimmed completion. Token counting is best effort.
    #[instrument(skip(self, user_input, config))]
    pub async fn generate(
        &self,
        user_input: Option<&str>,
        option: Option<&str>,
        config: Option<GenerationConfig>,
    ) -> Result<Generation, DomainError> {
        let (user_input, option) = match (user_input, option) {
            (Some(input), Some(option)) if !input.is_empty() && !option.is_empty() => {
                (input, option)
            }
            _ => return Err(DomainError::validation("Missing input or option")),
        };

        let strategy = PromptStrategy::from_tag(option);
        let prompt = strategy.render(user_input);

        let tokens = match self.llm.count_tokens(&prompt).await {
            Ok(count) => Some(count),
            Err(e) => {
                tracing::warn!(error = %e, "token count unavailable");
                None
            }
        };

        let config = config.unwrap_or_default().merged_over(&self.defaults);
        let raw = self.llm.complete(&prompt, &config).await?;

        tracing::info!(strategy = %strategy, tokens, "completion generated");
        Ok(Generation {
            response: raw.trim().to_string(),
            tokens,
        })
    }

    /// Asks the model for a `{name, age}` object describing `user_input`.
    #[instrument(skip(self, user_input))]
    pub async fn extract_person(&self, user_input: Option<&str>) -> Result<PersonInfo, DomainError> {
        let user_input = match user_input {
            Some(input) if !input.is_empty() => input,
            _ => return Err(DomainError::validation("Missing userInput")),
        };

        let prompt = format!("{EXTRACTION_INSTRUCTION}\n\nText:\n{user_input}");
        let config = GenerationConfig::default()
            .with_temperature(0.0)
            .merged_over(&self.defaults);
        let raw = self.llm.complete(&prompt, &config).await?;

        parse_structured::<PersonInfo>(&raw).map_err(|fallback| {
            tracing::warn!(raw = %fallback.text(), "extraction reply was not valid JSON");
            DomainError::from(fallback)
        })
    }
}
