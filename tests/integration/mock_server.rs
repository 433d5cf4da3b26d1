//! Mock HTTP server setup for integration tests

use hf_inference_rust::InferenceClient;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Test fixture that manages a mock server playing both the hub and the inference API
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Client whose hub and inference endpoints both point at the mock server
    pub fn create_test_client(&self, token: Option<&str>) -> hf_inference_rust::Result<InferenceClient> {
        let builder = InferenceClient::builder()
            .ignore_env()
            .endpoint(&self.base_url)
            .inference_endpoint(&self.base_url);
        match token {
            Some(t) => builder.token(t).build(),
            None => builder.anonymous().build(),
        }
    }

    /// Mock `GET /api/tasks`, expected to be hit `hits` times
    pub async fn mock_tasks(&self, body: &str, hits: usize) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", "/api/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    /// Create a mock for a JSON response to a POST
    pub async fn mock_json_response(&self, path: &str, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a POST that must carry the JSON headers and exactly `expected_body`
    pub async fn mock_strict_post(
        &self,
        path: &str,
        authorization: Matcher,
        expected_body: serde_json::Value,
        response: &str,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", path)
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .match_header("authorization", authorization)
            .match_body(Matcher::Json(expected_body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response)
            .expect(1)
            .create_async()
            .await
    }

    /// Mock that must never be hit
    pub async fn mock_untouched(&self, method: &str, path: impl Into<Matcher>) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .with_status(500)
            .expect(0)
            .create_async()
            .await
    }
}
