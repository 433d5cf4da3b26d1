//! Inference tasks.
//!
//! Each submodule holds the request and response shapes of one task together with the
//! matching operation on [`InferenceClient`](crate::InferenceClient). All of them run
//! through the same validate → resolve → POST → decode pipeline.

mod conversational;
mod feature_extraction;
mod fill_mask;
mod question_answering;
mod sentence_similarity;
mod summarization;
mod table_question_answering;
mod text_classification;
mod text_generation;
mod token_classification;
mod translation;
mod zero_shot_classification;

pub use conversational::{
    Conversation, ConversationalInputs, ConversationalParameters, ConversationalRequest,
    ConversationalResponse,
};
pub use feature_extraction::{
    FeatureExtractionReducedResponse, FeatureExtractionRequest, FeatureExtractionResponse,
};
pub use fill_mask::{FillMaskPrediction, FillMaskRequest, FillMaskResponse};
pub use question_answering::{
    QuestionAnsweringInputs, QuestionAnsweringRequest, QuestionAnsweringResponse,
};
pub use sentence_similarity::{
    SentenceSimilarityInputs, SentenceSimilarityRequest, SentenceSimilarityResponse,
};
pub use summarization::{
    SummarizationOutput, SummarizationParameters, SummarizationRequest, SummarizationResponse,
};
pub use table_question_answering::{
    TableQuestionAnsweringInputs, TableQuestionAnsweringRequest, TableQuestionAnsweringResponse,
};
pub use text_classification::{
    ClassificationLabel, TextClassificationRequest, TextClassificationResponse,
};
pub use text_generation::{
    GeneratedText, Text2TextGenerationRequest, Text2TextGenerationResponse,
    TextGenerationParameters, TextGenerationRequest, TextGenerationResponse,
};
pub use token_classification::{
    AggregationStrategy, TokenClassificationParameters, TokenClassificationRequest,
    TokenClassificationResponse, TokenEntity,
};
pub use translation::{TranslationOutput, TranslationRequest, TranslationResponse};
pub use zero_shot_classification::{
    ZeroShotClassification, ZeroShotClassificationParameters, ZeroShotClassificationRequest,
    ZeroShotClassificationResponse,
};

use std::fmt;
use std::str::FromStr;

/// Tasks exposed by the inference service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Summarization,
    TextGeneration,
    Text2TextGeneration,
    ZeroShotClassification,
    QuestionAnswering,
    TableQuestionAnswering,
    FillMask,
    FeatureExtraction,
    SentenceSimilarity,
    Conversational,
    TextClassification,
    TokenClassification,
    Translation,
}

impl Task {
    pub const ALL: [Task; 13] = [
        Task::Summarization,
        Task::TextGeneration,
        Task::Text2TextGeneration,
        Task::ZeroShotClassification,
        Task::QuestionAnswering,
        Task::TableQuestionAnswering,
        Task::FillMask,
        Task::FeatureExtraction,
        Task::SentenceSimilarity,
        Task::Conversational,
        Task::TextClassification,
        Task::TokenClassification,
        Task::Translation,
    ];

    /// Task identifier as used by the service (URL path segment and `/api/tasks` key).
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Summarization => "summarization",
            Task::TextGeneration => "text-generation",
            Task::Text2TextGeneration => "text2text-generation",
            Task::ZeroShotClassification => "zero-shot-classification",
            Task::QuestionAnswering => "question-answering",
            Task::TableQuestionAnswering => "table-question-answering",
            Task::FillMask => "fill-mask",
            Task::FeatureExtraction => "feature-extraction",
            Task::SentenceSimilarity => "sentence-similarity",
            Task::Conversational => "conversational",
            Task::TextClassification => "text-classification",
            Task::TokenClassification => "token-classification",
            Task::Translation => "translation",
        }
    }

    /// Feature-extraction and sentence-similarity are the only tasks served by
    /// multi-task models, so they are addressed through `/pipeline/<task>/<model>`.
    pub fn uses_pipeline_path(&self) -> bool {
        matches!(self, Task::FeatureExtraction | Task::SentenceSimilarity)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                crate::Error::validation_with_context(
                    format!("unknown task: {}", s),
                    crate::ErrorContext::new().with_field_path("task"),
                )
            })
    }
}
