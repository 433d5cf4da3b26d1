//! Ask a question about a small table.
//!
//! Run with: HUGGINGFACEHUB_API_TOKEN=hf_... cargo run --example table_question_answering

use hf_inference_rust::{InferenceClient, TableQuestionAnsweringRequest};
use std::collections::HashMap;

#[tokio::main]
async fn main() -> hf_inference_rust::Result<()> {
    let client = InferenceClient::new()?;

    let table = HashMap::from([
        (
            "Repository".to_string(),
            vec!["Transformers".to_string(), "Datasets".to_string(), "Tokenizers".to_string()],
        ),
        (
            "Stars".to_string(),
            vec!["36542".to_string(), "4512".to_string(), "3934".to_string()],
        ),
        (
            "Contributors".to_string(),
            vec!["651".to_string(), "77".to_string(), "34".to_string()],
        ),
    ]);

    let res = client
        .table_question_answering(&TableQuestionAnsweringRequest::new(
            "How many stars does the transformers repository have?",
            table,
        ))
        .await?;

    println!("Answer: {}", res.answer);
    println!("Coordinates: {:?}", res.coordinates);
    println!("Cells: {:?}", res.cells);
    println!("Aggregator: {}", res.aggregator);
    Ok(())
}
