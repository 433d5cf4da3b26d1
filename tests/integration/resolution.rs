//! Endpoint resolution against a mock hub

use crate::integration::mock_server::MockServerFixture;
use hf_inference_rust::{
    Error, FeatureExtractionRequest, SummarizationRequest, Task, TranslationRequest,
};
use mockito::Matcher;

const TASKS: &str = r#"{
    "summarization": {"widgetModels": ["facebook/bart-large-cnn"]},
    "feature-extraction": {"widgetModels": ["facebook/bart-base"]},
    "fill-mask": {"widgetModels": []}
}"#;

#[tokio::test]
async fn test_recommended_model_fetched_once() {
    let fixture = MockServerFixture::new().await;
    let tasks = fixture.mock_tasks(TASKS, 1).await;
    let inference = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/models/facebook/bart-large-cnn")
            .with_status(200)
            .with_body(r#"[{"summary_text":"short"}]"#)
            .expect(2)
            .create_async()
            .await
    };

    let client = fixture.create_test_client(None).unwrap();
    let request = SummarizationRequest::new(vec!["long text".into()]);
    for _ in 0..2 {
        let response = client.summarization(&request).await.unwrap();
        assert_eq!(response[0].summary_text, "short");
    }

    tasks.assert_async().await;
    inference.assert_async().await;
}

#[tokio::test]
async fn test_pipeline_path_for_feature_extraction() {
    let fixture = MockServerFixture::new().await;
    let _tasks = fixture.mock_tasks(TASKS, 1).await;
    let inference = fixture
        .mock_json_response(
            "/pipeline/feature-extraction/facebook/bart-base",
            200,
            "[[0.5,0.25]]",
        )
        .await;

    let client = fixture.create_test_client(None).unwrap();
    let vectors = client
        .feature_extraction_with_automatic_reduction(&FeatureExtractionRequest::new(vec![
            "hello".into(),
        ]))
        .await
        .unwrap();

    assert_eq!(vectors, vec![vec![0.5, 0.25]]);
    inference.assert_async().await;
}

#[tokio::test]
async fn test_url_model_bypasses_hub() {
    let fixture = MockServerFixture::new().await;
    let tasks = fixture.mock_untouched("GET", "/api/tasks").await;
    let dedicated = fixture
        .mock_json_response("/dedicated/endpoint", 200, "[[0.5]]")
        .await;

    let client = fixture.create_test_client(None).unwrap();
    let url = format!("{}/dedicated/endpoint", fixture.base_url);
    let request = FeatureExtractionRequest::new(vec!["hello".into()]).with_model(&url);
    client
        .feature_extraction_with_automatic_reduction(&request)
        .await
        .unwrap();

    assert_eq!(
        client.resolve_url(Some(&url), Task::Summarization).await.unwrap(),
        url
    );
    tasks.assert_async().await;
    dedicated.assert_async().await;
}

#[tokio::test]
async fn test_task_without_recommendation() {
    let fixture = MockServerFixture::new().await;
    let _tasks = fixture.mock_tasks(TASKS, 1).await;
    let untouched = fixture.mock_untouched("POST", Matcher::Any).await;

    let client = fixture.create_test_client(None).unwrap();
    let err = client
        .translation(&TranslationRequest::new(vec!["hello".into()]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NoRecommendedModel { ref task } if task == "translation"));
    untouched.assert_async().await;
}

#[tokio::test]
async fn test_hub_failure_is_retried_on_next_call() {
    let fixture = MockServerFixture::new().await;
    let broken = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", "/api/tasks")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .expect(1)
            .create_async()
            .await
    };

    let client = fixture.create_test_client(None).unwrap();
    let err = client.recommended_model(Task::Summarization).await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
    broken.assert_async().await;
    broken.remove_async().await;

    let _tasks = fixture.mock_tasks(TASKS, 1).await;
    assert_eq!(
        client.recommended_model(Task::Summarization).await.unwrap(),
        "facebook/bart-large-cnn"
    );
}
