//! Text generation and text-to-text generation tasks.

use crate::client::validation::require_text;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextGenerationParameters {
    /// Number of top tokens considered when sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Nucleus sampling threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    /// (Default: 1.0) Range 0.0-100.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Range 0.0-100.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,

    /// Range 0-250. Number of new tokens to generate, not counting the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,

    /// Range 0-120 seconds. Soft limit; combine with `max_new_tokens`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<f64>,

    /// (Default: true) When false the generated text excludes the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_full_text: Option<bool>,

    /// (Default: 1) Number of sequences to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_return_sequences: Option<u32>,
}

impl TextGenerationParameters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TextGenerationRequest {
    /// Prompt to generate from.
    pub inputs: String,
    #[serde(skip_serializing_if = "TextGenerationParameters::is_empty")]
    pub parameters: TextGenerationParameters,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl TextGenerationRequest {
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_parameters(mut self, parameters: TextGenerationParameters) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Same body as [`TextGenerationRequest`], routed to encoder-decoder models.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Text2TextGenerationRequest {
    pub inputs: String,
    #[serde(skip_serializing_if = "TextGenerationParameters::is_empty")]
    pub parameters: TextGenerationParameters,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl Text2TextGenerationRequest {
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedText {
    #[serde(default)]
    pub generated_text: String,
}

/// One entry per returned sequence (`num_return_sequences`).
pub type TextGenerationResponse = Vec<GeneratedText>;
pub type Text2TextGenerationResponse = Vec<GeneratedText>;

impl InferenceRequest for TextGenerationRequest {
    type Response = TextGenerationResponse;
    const TASK: Task = Task::TextGeneration;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.inputs, "inputs", "inputs are required")
    }
}

impl InferenceRequest for Text2TextGenerationRequest {
    type Response = Text2TextGenerationResponse;
    const TASK: Task = Task::Text2TextGeneration;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.inputs, "inputs", "inputs are required")
    }
}

impl InferenceClient {
    pub async fn text_generation(
        &self,
        request: &TextGenerationRequest,
    ) -> Result<TextGenerationResponse> {
        self.infer(request).await
    }

    pub async fn text2text_generation(
        &self,
        request: &Text2TextGenerationRequest,
    ) -> Result<Text2TextGenerationResponse> {
        self.infer(request).await
    }
}
