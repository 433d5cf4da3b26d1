//! Text classification.

use crate::client::validation::require_text;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
pub struct TextClassificationRequest {
    /// Text to classify.
    pub inputs: String,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl TextClassificationRequest {
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationLabel {
    /// Class label (model specific).
    #[serde(default)]
    pub label: String,
    /// Likelihood that the text belongs to this class.
    #[serde(default)]
    pub score: f32,
}

/// One list of scored labels per input.
pub type TextClassificationResponse = Vec<Vec<ClassificationLabel>>;

impl InferenceRequest for TextClassificationRequest {
    type Response = TextClassificationResponse;
    const TASK: Task = Task::TextClassification;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.inputs, "inputs", "inputs are required")
    }
}

impl InferenceClient {
    pub async fn text_classification(
        &self,
        request: &TextClassificationRequest,
    ) -> Result<TextClassificationResponse> {
        self.infer(request).await
    }
}
