//! Structured error types for the date format engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
  #[error("invalid date {input:?}: {reason}")]
  InvalidDate { input: String, reason: String },

  #[error("config: {key}: unrecognized value {value:?}")]
  Config { key: String, value: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl FormatError {
  pub fn invalid_date(input: &str, reason: impl Into<String>) -> Self {
    Self::InvalidDate {
      input: input.to_string(),
      reason: reason.into(),
    }
  }

  pub fn config(key: &str, value: &str) -> Self {
    Self::Config {
      key: key.to_string(),
      value: value.to_string(),
    }
  }
}
