//! Extractive question answering.
//!
//! Run with: HUGGINGFACEHUB_API_TOKEN=hf_... cargo run --example question_answering

use hf_inference_rust::{InferenceClient, QuestionAnsweringRequest};

#[tokio::main]
async fn main() -> hf_inference_rust::Result<()> {
    let client = InferenceClient::new()?;

    let request = QuestionAnsweringRequest::new(
        "What's my name?",
        "My name is Clara and I live in Berkeley.",
    );
    let res = client.question_answering(&request).await?;

    println!("Answer: {}", res.answer);
    println!("Score: {}", res.score);
    println!("Start: {}", res.start);
    println!("End: {}", res.end);
    Ok(())
}
