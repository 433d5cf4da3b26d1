//! Client builder and the immutable configuration it produces.

use crate::client::core::InferenceClient;
use crate::client::endpoint::EndpointResolver;
use crate::transport::{HttpExecutor, ReqwestTransport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;

pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";
pub const DEFAULT_INFERENCE_ENDPOINT: &str = "https://api-inference.huggingface.co";

const KEYRING_SERVICE: &str = "huggingface";
const KEYRING_USER: &str = "api-token";

/// Immutable client configuration, fixed at [`InferenceClientBuilder::build`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Hub endpoint used for metadata lookups (`/api/tasks`).
    pub endpoint: String,
    /// Base URL for inference calls.
    pub inference_endpoint: String,
    /// Model reference used when a request does not name one.
    pub default_model: Option<String>,
    pub token: Option<String>,
}

/// Builder for creating clients with custom configuration.
///
/// Unset values fall back to the environment:
/// - `HF_ENDPOINT`, `HF_INFERENCE_ENDPOINT`, `HF_DEFAULT_MODEL`
/// - `HUGGINGFACEHUB_API_TOKEN`, then `HF_TOKEN`, then the OS keyring
///   (service `huggingface`, user `api-token`) for the access token
pub struct InferenceClientBuilder {
    endpoint: Option<String>,
    inference_endpoint: Option<String>,
    model: Option<String>,
    token: Option<String>,
    anonymous: bool,
    ignore_env: bool,
    transport: Option<Arc<dyn HttpExecutor>>,
}

impl InferenceClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            inference_endpoint: None,
            model: None,
            token: None,
            anonymous: false,
            ignore_env: false,
            transport: None,
        }
    }

    /// Hub endpoint for metadata lookups.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Base URL for inference calls.
    pub fn inference_endpoint(mut self, url: impl Into<String>) -> Self {
        self.inference_endpoint = Some(url.into());
        self
    }

    /// Default model name or URL used when a request leaves its model unset.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Send no credential and skip the environment/keyring lookup.
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self.token = None;
        self
    }

    /// Use only explicitly set values: no environment variables and no keyring lookup.
    pub fn ignore_env(mut self) -> Self {
        self.ignore_env = true;
        self
    }

    /// Inject the HTTP executor. Defaults to a [`ReqwestTransport`].
    pub fn transport(mut self, transport: Arc<dyn HttpExecutor>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<InferenceClient> {
        let ignore_env = self.ignore_env;
        let from_env = |key: &str| match ignore_env {
            true => None,
            false => env_non_empty(key),
        };

        let endpoint = normalize_endpoint(
            self.endpoint
                .or_else(|| from_env("HF_ENDPOINT"))
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            "builder.endpoint",
        )?;
        let inference_endpoint = normalize_endpoint(
            self.inference_endpoint
                .or_else(|| from_env("HF_INFERENCE_ENDPOINT"))
                .unwrap_or_else(|| DEFAULT_INFERENCE_ENDPOINT.to_string()),
            "builder.inference_endpoint",
        )?;
        let default_model = self
            .model
            .or_else(|| from_env("HF_DEFAULT_MODEL"))
            .filter(|m| !m.is_empty());

        let token = match (self.anonymous, ignore_env) {
            (true, _) => None,
            (false, true) => self.token.filter(|t| !t.is_empty()),
            (false, false) => self.token.or_else(lookup_token).filter(|t| !t.is_empty()),
        };

        let transport: Arc<dyn HttpExecutor> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new()?),
        };

        let config = Arc::new(ClientConfig {
            endpoint,
            inference_endpoint,
            default_model,
            token,
        });
        let resolver = Arc::new(EndpointResolver::new(config.clone(), transport.clone()));

        Ok(InferenceClient {
            config,
            transport,
            resolver,
        })
    }
}

impl Default for InferenceClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn lookup_token() -> Option<String> {
    // 1. Environment
    if let Some(token) =
        env_non_empty("HUGGINGFACEHUB_API_TOKEN").or_else(|| env_non_empty("HF_TOKEN"))
    {
        return Some(token);
    }

    // 2. Keyring
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    match entry.get_password() {
        Ok(token) => Some(token),
        Err(e) => {
            tracing::debug!("no token in keyring: {}", e);
            None
        }
    }
}

/// Accept only absolute http(s) URLs and drop any trailing slash so paths can be appended.
fn normalize_endpoint(raw: String, field_path: &str) -> Result<String> {
    let parsed = url::Url::parse(&raw).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid endpoint URL: {}", e),
            ErrorContext::new()
                .with_field_path(field_path)
                .with_details(raw.clone())
                .with_source("client_builder"),
        )
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("unsupported endpoint scheme: {}", parsed.scheme()),
            ErrorContext::new()
                .with_field_path(field_path)
                .with_details(raw)
                .with_source("client_builder"),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
