//! Extractive question answering.

use crate::client::validation::require_text;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionAnsweringInputs {
    /// (Required) The question; its answer must be contained in `context`.
    pub question: String,
    /// (Required) Text that contains the answer.
    pub context: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionAnsweringRequest {
    pub inputs: QuestionAnsweringInputs,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl QuestionAnsweringRequest {
    pub fn new(question: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            inputs: QuestionAnsweringInputs {
                question: question.into(),
                context: context.into(),
            },
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnsweringResponse {
    /// The answer, as found in the context.
    #[serde(default)]
    pub answer: String,
    /// How likely the answer is correct.
    #[serde(default)]
    pub score: f64,
    /// Character offset where the answer starts in the context.
    #[serde(default)]
    pub start: usize,
    /// Character offset where the answer ends in the context.
    #[serde(default)]
    pub end: usize,
}

impl InferenceRequest for QuestionAnsweringRequest {
    type Response = QuestionAnsweringResponse;
    const TASK: Task = Task::QuestionAnswering;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.inputs.question, "inputs.question", "question is required")?;
        require_text(&self.inputs.context, "inputs.context", "context is required")
    }
}

impl InferenceClient {
    /// Find the answer to a question inside a context passage.
    pub async fn question_answering(
        &self,
        request: &QuestionAnsweringRequest,
    ) -> Result<QuestionAnsweringResponse> {
        self.infer(request).await
    }
}
