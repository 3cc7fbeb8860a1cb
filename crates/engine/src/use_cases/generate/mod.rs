//! Generation passthrough: a prompt goes to the model unchanged and the
//! reply comes back unchanged.

use std::sync::Arc;

use chimera_domain::{DomainError, Prompt};

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest};

pub struct GenerateUseCases {
    pub text: Arc<GenerateText>,
}

impl GenerateUseCases {
    pub fn new(text: Arc<GenerateText>) -> Self {
        Self { text }
    }
}

pub struct GenerateText {
    llm: Arc<dyn LlmPort>,
}

impl GenerateText {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    pub async fn execute(&self, prompt: Option<String>) -> Result<String, GenerateError> {
        let prompt = Prompt::from_optional(prompt)?;
        let response = self
            .llm
            .generate(LlmRequest::new(prompt.into_inner()))
            .await?;
        Ok(response.content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] DomainError),
    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),
}
