//! Token classification (named-entity recognition).

use crate::client::validation::require_text;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};

/// How token-level predictions are merged into entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationStrategy {
    /// Every token is classified without further aggregation.
    None,
    /// B- and I- tags of the same entity are merged.
    #[default]
    Simple,
    /// Like `Simple`, but a word takes the tag of its first token.
    First,
    /// Like `Simple`, but scores are averaged across a word's tokens.
    Average,
    /// Like `Simple`, but a word takes the tag of its highest-scoring token.
    Max,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenClassificationParameters {
    pub aggregation_strategy: AggregationStrategy,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenClassificationRequest {
    /// Text to classify.
    pub inputs: String,
    pub parameters: TokenClassificationParameters,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl TokenClassificationRequest {
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            ..Default::default()
        }
    }

    pub fn with_aggregation_strategy(mut self, strategy: AggregationStrategy) -> Self {
        self.parameters.aggregation_strategy = strategy;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenEntity {
    /// Entity type (model specific). With `AggregationStrategy::None` the service reports
    /// it under `entity` instead.
    #[serde(default, alias = "entity")]
    pub entity_group: String,
    pub score: f64,
    /// The captured text.
    #[serde(default)]
    pub word: String,
    /// Character offsets in the input; disambiguate repeated words.
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}

pub type TokenClassificationResponse = Vec<TokenEntity>;

impl InferenceRequest for TokenClassificationRequest {
    type Response = TokenClassificationResponse;
    const TASK: Task = Task::TokenClassification;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.inputs, "inputs", "inputs are required")
    }
}

impl InferenceClient {
    pub async fn token_classification(
        &self,
        request: &TokenClassificationRequest,
    ) -> Result<TokenClassificationResponse> {
        self.infer(request).await
    }
}
