//! hf-inference-cli — run Hugging Face Inference API tasks from the command line
//!
//! Usage:
//!   hf-inference-cli tasks                              List recommended models per task
//!   hf-inference-cli resolve <task> [--model <m>]       Show the URL a task call would use
//!   hf-inference-cli summarize <text> [--model <m>]     Summarize text
//!   hf-inference-cli qa --question <q> --context <c>    Answer a question from a context

use anyhow::{bail, Context};
use hf_inference_rust::{
    FeatureExtractionRequest, FillMaskRequest, InferenceClient, QuestionAnsweringRequest,
    SentenceSimilarityRequest, SummarizationRequest, Task, TextClassificationRequest,
    TextGenerationRequest, TranslationRequest,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    if let Err(e) = run(&args).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"hf-inference-cli — Hugging Face Inference API from the command line

USAGE:
    hf-inference-cli <COMMAND> [ARGS] [--model <name-or-url>]

COMMANDS:
    tasks                               List the recommended model for every task
    resolve <task>                      Print the URL a call for <task> would be posted to
    summarize <text>                    Summarize text
    generate <text>                     Continue a prompt
    translate <text>                    Translate text (language pair is set by the model)
    classify <text>                     Classify text
    fill-mask <text>                    Fill the mask token in <text>
    qa --question <q> --context <c>     Extractive question answering
    similarity <source> <sentence>...   Score sentences against a source sentence
    embed <text>                        Sentence embedding for <text>
    version                             Show version information
    help                                Show this help message

ENVIRONMENT:
    HUGGINGFACEHUB_API_TOKEN            Access token (falls back to HF_TOKEN, then the keyring)
    HF_ENDPOINT, HF_INFERENCE_ENDPOINT  Override service endpoints
    RUST_LOG                            Log filter (default: warn)"#
    );
}

/// Remove `--flag <value>` from `args` and return the value.
fn take_flag(args: &mut Vec<String>, flag: &str) -> anyhow::Result<Option<String>> {
    let Some(i) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if i + 1 >= args.len() {
        bail!("{flag} needs a value");
    }
    let value = args.remove(i + 1);
    args.remove(i);
    Ok(Some(value))
}

fn first_arg(args: &[String], what: &str) -> anyhow::Result<String> {
    match args.first() {
        Some(a) => Ok(a.clone()),
        None => bail!("missing <{what}>"),
    }
}

async fn run(args: &[String]) -> anyhow::Result<()> {
    let command = args[0].as_str();
    let mut rest: Vec<String> = args[1..].to_vec();
    let model = take_flag(&mut rest, "--model")?;
    let model = model.as_deref();

    match command {
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        "version" | "--version" | "-V" => {
            println!("hf-inference-cli {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let client = InferenceClient::new().context("failed to create client")?;

    match command {
        "tasks" => {
            let mut models: Vec<(String, String)> =
                client.recommended_models().await?.into_iter().collect();
            models.sort();
            for (task, model) in models {
                let model = if model.is_empty() { "-" } else { model.as_str() };
                println!("{task:<32} {model}");
            }
        }
        "resolve" => {
            let task: Task = first_arg(&rest, "task")?.parse()?;
            println!("{}", client.resolve_url(model, task).await?);
        }
        "summarize" => {
            let mut req = SummarizationRequest::new(vec![first_arg(&rest, "text")?]);
            req.model = model.map(String::from);
            for out in client.summarization(&req).await? {
                println!("{}", out.summary_text);
            }
        }
        "generate" => {
            let mut req = TextGenerationRequest::new(first_arg(&rest, "text")?);
            req.model = model.map(String::from);
            for out in client.text_generation(&req).await? {
                println!("{}", out.generated_text);
            }
        }
        "translate" => {
            let mut req = TranslationRequest::new(vec![first_arg(&rest, "text")?]);
            req.model = model.map(String::from);
            for out in client.translation(&req).await? {
                println!("{}", out.translation_text);
            }
        }
        "classify" => {
            let mut req = TextClassificationRequest::new(first_arg(&rest, "text")?);
            req.model = model.map(String::from);
            for labels in client.text_classification(&req).await? {
                for l in labels {
                    println!("{:<24} {:.4}", l.label, l.score);
                }
            }
        }
        "fill-mask" => {
            let mut req = FillMaskRequest::new(vec![first_arg(&rest, "text")?]);
            req.model = model.map(String::from);
            for p in client.fill_mask(&req).await? {
                println!("{:.4} {}", p.score, p.sequence);
            }
        }
        "qa" => {
            let question = take_flag(&mut rest, "--question")?.unwrap_or_default();
            let context = take_flag(&mut rest, "--context")?.unwrap_or_default();
            let mut req = QuestionAnsweringRequest::new(question, context);
            req.model = model.map(String::from);
            let answer = client.question_answering(&req).await?;
            println!("{} (score {:.4}, {}..{})", answer.answer, answer.score, answer.start, answer.end);
        }
        "similarity" => {
            let source = first_arg(&rest, "source")?;
            let mut req = SentenceSimilarityRequest::new(source, rest[1..].to_vec());
            req.model = model.map(String::from);
            let scores = client.sentence_similarity(&req).await?;
            for (sentence, score) in req.inputs.sentences.iter().zip(scores) {
                println!("{score:.4} {sentence}");
            }
        }
        "embed" => {
            let mut req = FeatureExtractionRequest::new(vec![first_arg(&rest, "text")?]);
            req.model = model.map(String::from);
            let vectors = client.feature_extraction_with_automatic_reduction(&req).await?;
            println!("{}", serde_json::to_string(&vectors)?);
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
