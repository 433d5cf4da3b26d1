//! Conversational task.

use crate::client::validation::require_text;
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Same knobs as summarization; only fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversationalParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<f64>,
}

impl ConversationalParameters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationalInputs {
    /// (Required) Last user input.
    pub text: String,
    /// Earlier model replies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub generated_responses: Vec<String>,
    /// Earlier user inputs; same length as `generated_responses`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub past_user_inputs: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationalRequest {
    pub inputs: ConversationalInputs,
    #[serde(skip_serializing_if = "ConversationalParameters::is_empty")]
    pub parameters: ConversationalParameters,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl ConversationalRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inputs: ConversationalInputs {
                text: text.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Continue from the state returned by a previous turn.
    pub fn with_history(mut self, conversation: Conversation) -> Self {
        self.inputs.past_user_inputs = conversation.past_user_inputs;
        self.inputs.generated_responses = conversation.generated_responses;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Model outputs so far, including this turn.
    #[serde(default)]
    pub generated_responses: Vec<String>,
    /// User inputs so far, including this turn.
    #[serde(default)]
    pub past_user_inputs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationalResponse {
    /// The model's answer.
    #[serde(default)]
    pub generated_text: String,
    /// State to send back with the next user input.
    #[serde(default)]
    pub conversation: Conversation,
}

impl InferenceRequest for ConversationalRequest {
    type Response = ConversationalResponse;
    const TASK: Task = Task::Conversational;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.inputs.text, "inputs.text", "text is required")
    }
}

impl InferenceClient {
    pub async fn conversational(
        &self,
        request: &ConversationalRequest,
    ) -> Result<ConversationalResponse> {
        self.infer(request).await
    }
}
