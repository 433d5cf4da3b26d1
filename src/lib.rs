//! # hf-inference-rust
//!
//! Typed async client for the Hugging Face Inference API.
//!
//! ## Overview
//!
//! Every task follows the same round trip: check the request's required fields, resolve
//! the endpoint URL, POST the request as JSON, and decode the task's response shape.
//! When a request names no model (and the client has no default), the service's
//! recommended model for the task is looked up once and cached by the client.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hf_inference_rust::{InferenceClient, SummarizationRequest};
//!
//! #[tokio::main]
//! async fn main() -> hf_inference_rust::Result<()> {
//!     let client = InferenceClient::with_token("hf_...")?;
//!
//!     let request = SummarizationRequest::new(vec![
//!         "The tower is 324 metres (1,063 ft) tall, about the same height as an 81-storey building.".into(),
//!     ]);
//!     let summary = client.summarization(&request).await?;
//!     println!("{}", summary[0].summary_text);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, endpoint resolution |
//! | [`tasks`] | Request/response types and operations, one module per task |
//! | [`transport`] | Injectable HTTP executor and the reqwest-backed default |
//! | [`types`] | Options and error payloads shared by all tasks |

pub mod client;
pub mod tasks;
pub mod transport;
pub mod types;

pub use client::{ClientConfig, EndpointResolver, InferenceClient, InferenceClientBuilder, InferenceRequest};
pub use tasks::*;
pub use transport::{HttpExecutor, HttpRequest, HttpResponse, ReqwestTransport, TransportError};
pub use types::Options;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
