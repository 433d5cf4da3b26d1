//! Score sentences against a source sentence.
//!
//! Run with: HUGGINGFACEHUB_API_TOKEN=hf_... cargo run --example sentence_similarity

use hf_inference_rust::{InferenceClient, SentenceSimilarityRequest};

#[tokio::main]
async fn main() -> hf_inference_rust::Result<()> {
    let client = InferenceClient::new()?;

    let request = SentenceSimilarityRequest::new(
        "That is a happy person",
        vec![
            "That is a happy dog".to_string(),
            "That is a very happy person".to_string(),
            "Today is a sunny day".to_string(),
        ],
    )
    .with_model("sentence-transformers/all-MiniLM-L6-v2");

    let scores = client.sentence_similarity(&request).await?;
    for (sentence, score) in request.inputs.sentences.iter().zip(scores) {
        println!("{score:.4}  {sentence}");
    }
    Ok(())
}
