//! Task round trips over HTTP

use crate::integration::mock_server::MockServerFixture;
use hf_inference_rust::{
    QuestionAnsweringRequest, SummarizationRequest, TextGenerationParameters,
    TextGenerationRequest, ZeroShotClassificationRequest,
};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_summarization_round_trip() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_strict_post(
            "/models/t5-base",
            Matcher::Exact("Bearer hf_test".into()),
            json!({"inputs": ["This is a test input"]}),
            r#"[{"summary_text": "This is a summary"}]"#,
        )
        .await;

    let client = fixture.create_test_client(Some("hf_test")).unwrap();
    let response = client
        .summarization(&SummarizationRequest::new(vec!["This is a test input".into()]).with_model("t5-base"))
        .await
        .unwrap();

    assert_eq!(response[0].summary_text, "This is a summary");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_anonymous_request_has_no_authorization() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_strict_post(
            "/models/gpt2",
            Matcher::Missing,
            json!({
                "inputs": "The answer to the universe is",
                "parameters": {"max_new_tokens": 5}
            }),
            r#"[{"generated_text": "The answer to the universe is 42"}]"#,
        )
        .await;

    let client = fixture.create_test_client(None).unwrap();
    let request = TextGenerationRequest::new("The answer to the universe is")
        .with_model("gpt2")
        .with_parameters(TextGenerationParameters {
            max_new_tokens: Some(5),
            ..Default::default()
        });
    let response = client.text_generation(&request).await.unwrap();

    assert_eq!(response[0].generated_text, "The answer to the universe is 42");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_zero_shot_body_carries_candidate_labels() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_strict_post(
            "/models/facebook/bart-large-mnli",
            Matcher::Any,
            json!({
                "inputs": ["I would like to get reimbursed"],
                "parameters": {"candidate_labels": ["refund", "faq"], "multi_label": false}
            }),
            r#"[{"sequence":"I would like to get reimbursed","labels":["refund","faq"],"scores":[0.9,0.1]}]"#,
        )
        .await;

    let client = fixture.create_test_client(None).unwrap();
    let request = ZeroShotClassificationRequest::new(
        vec!["I would like to get reimbursed".into()],
        vec!["refund".into(), "faq".into()],
    )
    .with_multi_label(false)
    .with_model("facebook/bart-large-mnli");
    let response = client.zero_shot_classification(&request).await.unwrap();

    assert_eq!(response[0].labels, vec!["refund", "faq"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_validation_happens_before_any_request() {
    let fixture = MockServerFixture::new().await;
    let untouched = fixture.mock_untouched("POST", Matcher::Any).await;
    let hub = fixture.mock_untouched("GET", Matcher::Any).await;

    let client = fixture.create_test_client(Some("hf_test")).unwrap();
    let err = client
        .question_answering(&QuestionAnsweringRequest::new(
            "",
            "Paris is the capital of France.",
        ))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "question is required");
    assert!(err.is_missing_field());
    untouched.assert_async().await;
    hub.assert_async().await;
}
