//! Feature extraction (embeddings).

use crate::client::validation::require_list;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeatureExtractionRequest {
    /// Texts to extract features from.
    pub inputs: Vec<String>,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl FeatureExtractionRequest {
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
}

/// Raw per-token hidden states: input × batch × token × dimension.
pub type FeatureExtractionResponse = Vec<Vec<Vec<Vec<f32>>>>;

/// One pooled vector per input, as returned by sentence-embedding models.
pub type FeatureExtractionReducedResponse = Vec<Vec<f32>>;

impl InferenceRequest for FeatureExtractionRequest {
    type Response = FeatureExtractionResponse;
    const TASK: Task = Task::FeatureExtraction;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_list(&self.inputs, "inputs", "inputs are required")
    }
}

impl InferenceClient {
    pub async fn feature_extraction(
        &self,
        request: &FeatureExtractionRequest,
    ) -> Result<FeatureExtractionResponse> {
        self.infer(request).await
    }

    /// Feature extraction for models that pool token states into one vector per input.
    pub async fn feature_extraction_with_automatic_reduction(
        &self,
        request: &FeatureExtractionRequest,
    ) -> Result<FeatureExtractionReducedResponse> {
        self.infer_as::<_, FeatureExtractionReducedResponse>(request)
            .await
    }
}
