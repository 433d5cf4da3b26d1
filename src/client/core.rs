//! Generic task pipeline: validate, resolve, POST, decode.

use crate::client::builder::{ClientConfig, InferenceClientBuilder};
use crate::client::endpoint::EndpointResolver;
use crate::tasks::Task;
use crate::transport::{HttpExecutor, HttpRequest};
use crate::types::ErrorResponse;
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// A typed request for one inference task.
///
/// Implementors describe which task they target, which model they reference, and which
/// fields must be present; [`InferenceClient::infer`] does the rest.
pub trait InferenceRequest: Serialize + Send + Sync {
    /// Shape of a successful response body.
    type Response: DeserializeOwned + Send;

    const TASK: Task;

    /// Model name or URL. `None` (or empty) falls back to the client default, then to the
    /// service's recommended model.
    fn model(&self) -> Option<&str>;

    /// Check required fields. Must not perform I/O.
    fn validate(&self) -> Result<()>;
}

/// Client for the Hugging Face Inference API.
///
/// Cloning is cheap; clones share the transport and the recommended-model cache.
#[derive(Clone)]
pub struct InferenceClient {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) transport: Arc<dyn HttpExecutor>,
    pub(crate) resolver: Arc<EndpointResolver>,
}

impl InferenceClient {
    /// Client with default endpoints and the token taken from the environment or keyring.
    pub fn new() -> Result<Self> {
        InferenceClientBuilder::new().build()
    }

    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        InferenceClientBuilder::new().token(token).build()
    }

    pub fn builder() -> InferenceClientBuilder {
        InferenceClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL a request for `task` would be posted to.
    pub async fn resolve_url(&self, model: Option<&str>, task: Task) -> Result<String> {
        self.resolver.resolve(model, task).await
    }

    /// Model the service recommends for `task` (may be empty).
    pub async fn recommended_model(&self, task: Task) -> Result<String> {
        self.resolver.recommended_model(task).await
    }

    /// Full task → recommended model map, as cached by this client.
    pub async fn recommended_models(&self) -> Result<HashMap<String, String>> {
        Ok(self.resolver.recommended_models().await?.clone())
    }

    /// Validate, resolve, POST and decode into the request's own response type.
    pub async fn infer<R: InferenceRequest>(&self, request: &R) -> Result<R::Response> {
        self.infer_as::<R, R::Response>(request).await
    }

    /// Same pipeline as [`infer`](Self::infer) but decodes into `T`.
    pub async fn infer_as<R, T>(&self, request: &R) -> Result<T>
    where
        R: InferenceRequest,
        T: DeserializeOwned,
    {
        request.validate()?;
        let body = self.post(request.model(), R::TASK, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST `payload` as JSON to the endpoint resolved for `model` and `task`.
    pub(crate) async fn post<P>(&self, model: Option<&str>, task: Task, payload: &P) -> Result<Bytes>
    where
        P: Serialize + ?Sized,
    {
        let url = self.resolver.resolve(model, task).await?;
        let body = serde_json::to_vec(payload)?;

        let mut request = HttpRequest::post(url, body)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token)?;
        }

        let start = Instant::now();
        let response = self.transport.execute(request).await?;
        let status = response.status.as_u16();

        if !response.is_success() {
            info!(
                http_status = status,
                task = task.as_str(),
                duration_ms = start.elapsed().as_millis(),
                "hf-inference-rust request failed"
            );
            return Err(remote_error(status, &response.body));
        }

        debug!(
            http_status = status,
            task = task.as_str(),
            bytes = response.body.len(),
            duration_ms = start.elapsed().as_millis(),
            "hf-inference-rust request succeeded"
        );
        Ok(response.body)
    }
}

/// Build a remote-service error, preferring the service's own message over the raw body.
pub(crate) fn remote_error(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(payload) => Error::Remote {
            status,
            message: payload.error.into_message(),
            estimated_time: payload.estimated_time,
        },
        Err(_) => Error::Remote {
            status,
            message: String::from_utf8_lossy(body).into_owned(),
            estimated_time: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{SummarizationRequest, TextGenerationRequest};
    use crate::transport::testing::StubTransport;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;

    fn client(stub: Arc<StubTransport>, token: Option<&str>) -> InferenceClient {
        let builder = InferenceClient::builder()
            .ignore_env()
            .endpoint("https://hub.test")
            .inference_endpoint("https://api.test")
            .transport(stub);
        let builder = match token {
            Some(t) => builder.token(t),
            None => builder.anonymous(),
        };
        builder.build().unwrap()
    }

    #[tokio::test]
    async fn post_sends_json_headers_and_bearer_token() {
        let stub = Arc::new(StubTransport::new().respond(200, r#"[{"summary_text":"X"}]"#));
        let client = client(stub.clone(), Some("hf_test"));

        let request = SummarizationRequest::new(vec!["A long text".into()]).with_model("t5-base");
        let response = client.infer(&request).await.unwrap();
        assert_eq!(response[0].summary_text, "X");

        let sent = &stub.requests()[0];
        assert_eq!(sent.method, reqwest::Method::POST);
        assert_eq!(sent.url, "https://api.test/models/t5-base");
        assert_eq!(sent.headers[CONTENT_TYPE], "application/json");
        assert_eq!(sent.headers[ACCEPT], "application/json");
        assert_eq!(sent.headers[AUTHORIZATION], "Bearer hf_test");

        let body: serde_json::Value = serde_json::from_slice(sent.body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"inputs": ["A long text"]}));
    }

    #[tokio::test]
    async fn anonymous_client_sends_no_authorization() {
        let stub = Arc::new(StubTransport::new().respond(200, "[]"));
        let client = client(stub.clone(), None);
        client
            .infer(&TextGenerationRequest::new("Once upon a time").with_model("gpt2"))
            .await
            .unwrap();
        assert!(stub.requests()[0].headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn structured_service_error_is_surfaced() {
        let stub = Arc::new(StubTransport::new().respond(
            503,
            r#"{"error":"Model t5-base is currently loading","estimated_time":20.0}"#,
        ));
        let client = client(stub, None);
        let err = client
            .infer(&SummarizationRequest::new(vec!["text".into()]).with_model("t5-base"))
            .await
            .unwrap_err();
        match err {
            Error::Remote {
                status,
                message,
                estimated_time,
            } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Model t5-base is currently loading");
                assert_eq!(estimated_time, Some(20.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unstructured_service_error_carries_raw_body() {
        let stub = Arc::new(StubTransport::new().respond(502, "Bad Gateway"));
        let client = client(stub, None);
        let err = client
            .infer(&SummarizationRequest::new(vec!["text".into()]).with_model("t5-base"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let stub = Arc::new(StubTransport::new().fail("request error"));
        let client = client(stub, None);
        let err = client
            .infer(&SummarizationRequest::new(vec!["text".into()]).with_model("t5-base"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.to_string().contains("request error"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_serialization_error() {
        let stub = Arc::new(StubTransport::new().respond(200, r#"{"unexpected":true}"#));
        let client = client(stub, None);
        let err = client
            .infer(&SummarizationRequest::new(vec!["text".into()]).with_model("t5-base"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn clones_share_the_recommended_model_cache() {
        let stub = Arc::new(
            StubTransport::new()
                .respond(200, r#"{"summarization":{"widgetModels":["facebook/bart-large-cnn"]}}"#),
        );
        let client = client(stub.clone(), None);
        let clone = client.clone();

        assert_eq!(
            client.recommended_model(Task::Summarization).await.unwrap(),
            "facebook/bart-large-cnn"
        );
        assert_eq!(
            clone.resolve_url(None, Task::Summarization).await.unwrap(),
            "https://api.test/models/facebook/bart-large-cnn"
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn separate_clients_keep_separate_caches() {
        let tasks = r#"{"summarization":{"widgetModels":["facebook/bart-large-cnn"]}}"#;
        let first = Arc::new(StubTransport::new().respond(200, tasks));
        let second = Arc::new(StubTransport::new().respond(200, tasks));

        client(first.clone(), None)
            .recommended_models()
            .await
            .unwrap();
        client(second.clone(), None)
            .recommended_models()
            .await
            .unwrap();

        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
    }
}
