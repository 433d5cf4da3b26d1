//! Translation.

use crate::client::validation::require_list;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
pub struct TranslationRequest {
    /// Texts to translate. The language pair is fixed by the model.
    pub inputs: Vec<String>,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl TranslationRequest {
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationOutput {
    pub translation_text: String,
}

pub type TranslationResponse = Vec<TranslationOutput>;

impl InferenceRequest for TranslationRequest {
    type Response = TranslationResponse;
    const TASK: Task = Task::Translation;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_list(&self.inputs, "inputs", "inputs are required")
    }
}

impl InferenceClient {
    pub async fn translation(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        self.infer(request).await
    }
}
