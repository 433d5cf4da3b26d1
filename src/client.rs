//! Inference client.
//!
//! Keep the public surface small: a builder, the client, and the endpoint resolver it owns.
//! Per-task operations live next to their request types under `src/tasks/`.

pub mod builder;
pub mod core;
pub mod endpoint;
pub(crate) mod validation;

pub use self::builder::{ClientConfig, InferenceClientBuilder};
pub use self::core::{InferenceClient, InferenceRequest};
pub use self::endpoint::EndpointResolver;
