//! Summarize a paragraph with the service's recommended model.
//!
//! Run with: HUGGINGFACEHUB_API_TOKEN=hf_... cargo run --example summarization

use hf_inference_rust::{InferenceClient, SummarizationParameters, SummarizationRequest};

#[tokio::main]
async fn main() -> hf_inference_rust::Result<()> {
    let client = InferenceClient::new()?;

    let request = SummarizationRequest::new(vec![
        "The tower is 324 metres (1,063 ft) tall, about the same height as an 81-storey \
         building, and the tallest structure in Paris. Its base is square, measuring 125 \
         metres (410 ft) on each side."
            .to_string(),
    ])
    .with_parameters(SummarizationParameters {
        max_length: Some(60),
        ..Default::default()
    });

    let response = client.summarization(&request).await?;
    println!("{}", response[0].summary_text);
    Ok(())
}
