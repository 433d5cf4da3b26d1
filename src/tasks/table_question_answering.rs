//! Question answering over a table.

use crate::client::validation::{require_map, require_text};
use crate::client::{InferenceClient, InferenceRequest};
use crate::tasks::Task;
use crate::types::Options;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TableQuestionAnsweringInputs {
    /// (Required) Plain-text query to ask the table.
    pub query: String,
    /// (Required) Column header → cell values. All columns must have the same length.
    pub table: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TableQuestionAnsweringRequest {
    pub inputs: TableQuestionAnsweringInputs,
    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    #[serde(skip)]
    pub model: Option<String>,
}

impl TableQuestionAnsweringRequest {
    pub fn new(query: impl Into<String>, table: HashMap<String, Vec<String>>) -> Self {
        Self {
            inputs: TableQuestionAnsweringInputs {
                query: query.into(),
                table,
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
pub struct TableQuestionAnsweringResponse {
    /// The plain-text answer.
    #[serde(default)]
    pub answer: String,
    /// Coordinates of the cells referenced in the answer.
    #[serde(default)]
    pub coordinates: Vec<Vec<usize>>,
    /// Contents of the referenced cells.
    #[serde(default)]
    pub cells: Vec<String>,
    /// Aggregator used to compute the answer (e.g. `SUM`, `COUNT`, `NONE`).
    #[serde(default)]
    pub aggregator: String,
}

impl InferenceRequest for TableQuestionAnsweringRequest {
    type Response = TableQuestionAnsweringResponse;
    const TASK: Task = Task::TableQuestionAnswering;

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.inputs.query, "inputs.query", "query is required")?;
        require_map(&self.inputs.table, "inputs.table", "table is required")
    }
}

impl InferenceClient {
    pub async fn table_question_answering(
        &self,
        request: &TableQuestionAnsweringRequest,
    ) -> Result<TableQuestionAnsweringResponse> {
        self.infer(request).await
    }
}
