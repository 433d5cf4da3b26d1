//! Endpoint resolution and the recommended-model cache

use crate::client::builder::ClientConfig;
use crate::tasks::Task;
use crate::transport::{HttpExecutor, HttpRequest};
use crate::{Error, Result};
use reqwest::header::ACCEPT;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Turns a model reference and a task into the URL a request is posted to.
///
/// When no model is given (and no default is configured) the service's recommended model
/// for the task is used. The task → model map is fetched once per resolver; concurrent
/// first lookups share that single fetch, and a failed fetch is retried on the next call.
pub struct EndpointResolver {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpExecutor>,
    recommended: OnceCell<HashMap<String, String>>,
}

impl EndpointResolver {
    pub fn new(config: Arc<ClientConfig>, transport: Arc<dyn HttpExecutor>) -> Self {
        Self {
            config,
            transport,
            recommended: OnceCell::new(),
        }
    }

    pub async fn resolve(&self, model: Option<&str>, task: Task) -> Result<String> {
        let model = match model.filter(|m| !m.is_empty()) {
            Some(m) => m,
            None => self.config.default_model.as_deref().unwrap_or(""),
        };

        // A URL bypasses task routing entirely.
        if is_url(model) {
            return Ok(model.to_string());
        }

        let model = if model.is_empty() {
            self.recommended_model(task).await?
        } else {
            model.to_string()
        };

        let base = &self.config.inference_endpoint;
        if task.uses_pipeline_path() {
            Ok(format!("{}/pipeline/{}/{}", base, task, model))
        } else {
            Ok(format!("{}/models/{}", base, model))
        }
    }

    /// Recommended model for `task`. An empty string means the service lists the task but
    /// recommends nothing for it.
    pub async fn recommended_model(&self, task: Task) -> Result<String> {
        let models = self.recommended_models().await?;
        models
            .get(task.as_str())
            .cloned()
            .ok_or_else(|| Error::NoRecommendedModel {
                task: task.to_string(),
            })
    }

    pub async fn recommended_models(&self) -> Result<&HashMap<String, String>> {
        if let Some(models) = self.recommended.get() {
            debug!(tasks = models.len(), "recommended models served from cache");
            return Ok(models);
        }
        self.recommended
            .get_or_try_init(|| self.fetch_recommended_models())
            .await
    }

    async fn fetch_recommended_models(&self) -> Result<HashMap<String, String>> {
        let url = format!("{}/api/tasks", self.config.endpoint);
        debug!(url = url.as_str(), "fetching recommended models");
        let start = Instant::now();

        let request = HttpRequest::get(&url).header(ACCEPT, "application/json");
        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(crate::client::core::remote_error(
                response.status.as_u16(),
                &response.body,
            ));
        }

        let tasks: HashMap<String, serde_json::Value> = serde_json::from_slice(&response.body)?;
        let models: HashMap<String, String> = tasks
            .into_iter()
            .map(|(task, details)| {
                let model = details
                    .get("widgetModels")
                    .and_then(|v| v.as_array())
                    .and_then(|v| v.first())
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                (task, model)
            })
            .collect();

        info!(
            tasks = models.len(),
            duration_ms = start.elapsed().as_millis(),
            "hf-inference-rust recommended models loaded"
        );
        Ok(models)
    }
}

fn is_url(model: &str) -> bool {
    model.starts_with("http://") || model.starts_with("https://")
}
