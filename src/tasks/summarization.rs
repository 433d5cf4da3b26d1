//! Summarization task.

use crate::client::validation::require_list;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Generation knobs for summarization. Only fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummarizationParameters {
    /// Minimum length in tokens of the output summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    /// Maximum length in tokens of the output summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Number of top tokens considered when sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Nucleus sampling: tokens are added from most to least probable until their
    /// probabilities sum past `top_p`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    /// (Default: 1.0) Range 0.0-100.0. 0 means `top_k = 1`, 100 approaches uniform sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Range 0.0-100.0. Penalizes tokens already used in previous generation passes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,

    /// Range 0-120 seconds. Soft limit on query time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<f64>,
}

impl SummarizationParameters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SummarizationRequest {
    /// Texts to summarize.
    pub inputs: Vec<String>,
    #[serde(skip_serializing_if = "SummarizationParameters::is_empty")]
    pub parameters: SummarizationParameters,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl SummarizationRequest {
    pub fn new(inputs: Vec<String>) -> Self {
        Self {
            inputs,
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_parameters(mut self, parameters: SummarizationParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizationOutput {
    /// The summarized input string.
    #[serde(default)]
    pub summary_text: String,
}

pub type SummarizationResponse = Vec<SummarizationOutput>;

impl InferenceRequest for SummarizationRequest {
    type Response = SummarizationResponse;
    const TASK: Task = Task::Summarization;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_list(&self.inputs, "inputs", "inputs are required")
    }
}

impl InferenceClient {
    /// Summarize each input text.
    pub async fn summarization(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummarizationResponse> {
        self.infer(request).await
    }
}
