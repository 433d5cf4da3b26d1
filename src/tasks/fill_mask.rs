//! Masked-token prediction.

use crate::client::validation::require_list;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
pub struct FillMaskRequest {
    /// (Required) Texts containing the model's mask token (e.g. `[MASK]`, check the model card).
    pub inputs: Vec<String>,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl FillMaskRequest {
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
pub struct FillMaskPrediction {
    /// Full sequence with the mask filled in (may contain special tokens).
    #[serde(default)]
    pub sequence: String,
    /// Probability of this token.
    #[serde(default)]
    pub score: f64,
    /// Token id.
    #[serde(default)]
    pub token: u64,
    /// String form of the token.
    #[serde(default)]
    pub token_str: String,
}

pub type FillMaskResponse = Vec<FillMaskPrediction>;

impl InferenceRequest for FillMaskRequest {
    type Response = FillMaskResponse;
    const TASK: Task = Task::FillMask;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_list(&self.inputs, "inputs", "inputs are required")
    }
}

impl InferenceClient {
    pub async fn fill_mask(&self, request: &FillMaskRequest) -> Result<FillMaskResponse> {
        self.infer(request).await
    }
}
