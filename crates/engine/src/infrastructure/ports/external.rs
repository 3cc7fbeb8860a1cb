//! External service port traits (LLM).

use async_trait::async_trait;

use super::error::LlmError;

// =============================================================================
// LLM Types
// =============================================================================

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 1,
            top_p: 1.0,
            max_output_tokens: 2048,
        }
    }
}

/// Harm categories the provider filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmCategory {
    Harassment,
    HateSpeech,
    SexuallyExplicit,
    DangerousContent,
}

impl HarmCategory {
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Harassment => "HARM_CATEGORY_HARASSMENT",
            Self::HateSpeech => "HARM_CATEGORY_HATE_SPEECH",
            Self::SexuallyExplicit => "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            Self::DangerousContent => "HARM_CATEGORY_DANGEROUS_CONTENT",
        }
    }
}

/// Blocking threshold applied to a harm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockThreshold {
    BlockMediumAndAbove,
}

impl BlockThreshold {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: BlockThreshold,
}

/// Medium-and-above blocking on all four categories.
pub fn default_safety_settings() -> Vec<SafetySetting> {
    HarmCategory::ALL
        .into_iter()
        .map(|category| SafetySetting {
            category,
            threshold: BlockThreshold::BlockMediumAndAbove,
        })
        .collect()
}

/// A single-prompt text generation request.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub prompt: String,
    pub params: GenerationParams,
    pub safety_settings: Vec<SafetySetting>,
}

impl LlmRequest {
    /// Request with the canonical generation parameters and safety settings.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            params: GenerationParams::default(),
            safety_settings: default_safety_settings(),
        }
    }
}

/// Response from the LLM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmResponse {
    /// The generated text content
    pub content: String,
}

// =============================================================================
// LLM Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}
