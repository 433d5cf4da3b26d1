//! Integration tests for remote and transport error surfacing

use crate::integration::mock_server::MockServerFixture;
use hf_inference_rust::{Error, InferenceClient, SummarizationRequest};

fn request() -> SummarizationRequest {
    SummarizationRequest::new(vec!["text".into()]).with_model("t5-base")
}

#[tokio::test]
async fn test_structured_error_message() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            "/models/t5-base",
            503,
            r#"{"error":"Model t5-base is currently loading","estimated_time":20.0}"#,
        )
        .await;

    let client = fixture.create_test_client(None).unwrap();
    let err = client.summarization(&request()).await.unwrap_err();

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
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_classification() {
    let fixture = MockServerFixture::new().await;
    let test_cases = vec![
        (400, r#"{"error":"Bad request"}"#, "Bad request"),
        (401, r#"{"error":"Authorization header is correct, but the token seems invalid"}"#, "token seems invalid"),
        (404, "Not Found", "Not Found"),
        (500, r#"{"error":["first","second"]}"#, "first; second"),
    ];

    let client = fixture.create_test_client(None).unwrap();
    for (status, body, expected) in test_cases {
        let mock = fixture.mock_json_response("/models/t5-base", status, body).await;
        let err = client.summarization(&request()).await.unwrap_err();
        assert_eq!(err.status(), Some(status as u16), "status {}", status);
        assert!(
            err.to_string().contains(expected),
            "status {}: {} should contain {}",
            status,
            err,
            expected
        );
        mock.remove_async().await;
    }
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on port 9 (discard) on test machines.
    let client = InferenceClient::builder()
        .ignore_env()
        .endpoint("http://127.0.0.1:9")
        .inference_endpoint("http://127.0.0.1:9")
        .anonymous()
        .build()
        .unwrap();
    let err = client.summarization(&request()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}
