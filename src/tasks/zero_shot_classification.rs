//! Zero-shot classification.

use crate::client::validation::require_list;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ZeroShotClassificationParameters {
    /// (Required) Candidate classes. At most 10 per request; run several requests (with
    /// `multi_label`) for more.
    pub candidate_labels: Vec<String>,

    /// (Default: false) Set when classes can overlap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_label: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ZeroShotClassificationRequest {
    pub inputs: Vec<String>,
    pub parameters: ZeroShotClassificationParameters,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl ZeroShotClassificationRequest {
    pub fn new(inputs: Vec<String>, candidate_labels: Vec<String>) -> Self {
        Self {
            inputs,
            parameters: ZeroShotClassificationParameters {
                candidate_labels,
                multi_label: None,
            },
            ..Default::default()
        }
    }

    pub fn with_multi_label(mut self, multi_label: bool) -> Self {
        self.parameters.multi_label = Some(multi_label);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZeroShotClassification {
    /// The input text.
    #[serde(default)]
    pub sequence: String,
    /// Candidate labels sorted by descending probability.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Probabilities in the same order as `labels`.
    #[serde(default)]
    pub scores: Vec<f64>,
}

pub type ZeroShotClassificationResponse = Vec<ZeroShotClassification>;

impl InferenceRequest for ZeroShotClassificationRequest {
    type Response = ZeroShotClassificationResponse;
    const TASK: Task = Task::ZeroShotClassification;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_list(&self.inputs, "inputs", "inputs are required")?;
        require_list(
            &self.parameters.candidate_labels,
            "parameters.candidate_labels",
            "candidate_labels are required",
        )
    }
}

impl InferenceClient {
    pub async fn zero_shot_classification(
        &self,
        request: &ZeroShotClassificationRequest,
    ) -> Result<ZeroShotClassificationResponse> {
        self.infer(request).await
    }
}
