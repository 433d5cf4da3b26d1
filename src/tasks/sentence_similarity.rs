//! Sentence similarity.

use crate::client::validation::{require_list, require_text};
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SentenceSimilarityInputs {
    /// Sentence every other sentence is compared against.
    pub source_sentence: String,
    pub sentences: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SentenceSimilarityRequest {
    pub inputs: SentenceSimilarityInputs,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl SentenceSimilarityRequest {
    pub fn new(source_sentence: impl Into<String>, sentences: Vec<String>) -> Self {
        Self {
            inputs: SentenceSimilarityInputs {
                source_sentence: source_sentence.into(),
                sentences,
            },
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// One similarity score per entry of `sentences`, in order.
pub type SentenceSimilarityResponse = Vec<f32>;

const MISSING_INPUTS: &str = "source_sentence and sentences are required";

impl InferenceRequest for SentenceSimilarityRequest {
    type Response = SentenceSimilarityResponse;
    const TASK: Task = Task::SentenceSimilarity;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.inputs.source_sentence, "inputs.source_sentence", MISSING_INPUTS)?;
        require_list(&self.inputs.sentences, "inputs.sentences", MISSING_INPUTS)
    }
}

impl InferenceClient {
    pub async fn sentence_similarity(
        &self,
        request: &SentenceSimilarityRequest,
    ) -> Result<SentenceSimilarityResponse> {
        self.infer(request).await
    }
}
