//! Required-field checks shared by the task requests.
//!
//! Every check fails with [`Error::Validation`] before the client touches the network.

use crate::{Error, ErrorContext, Result};
use std::collections::HashMap;

fn missing(field_path: &str, message: &str) -> Error {
    Error::validation_with_context(
        message,
        ErrorContext::new()
            .with_field_path(field_path)
            .with_source("request_validator"),
    )
}

pub(crate) fn require_text(value: &str, field_path: &str, message: &str) -> Result<()> {
    if value.is_empty() {
        return Err(missing(field_path, message));
    }
    Ok(())
}

pub(crate) fn require_list<T>(values: &[T], field_path: &str, message: &str) -> Result<()> {
    if values.is_empty() {
        return Err(missing(field_path, message));
    }
    Ok(())
}

pub(crate) fn require_map<K, V>(values: &HashMap<K, V>, field_path: &str, message: &str) -> Result<()> {
    if values.is_empty() {
        return Err(missing(field_path, message));
    }
    Ok(())
}
