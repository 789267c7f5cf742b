//! Request/response types for the binary's JSON-lines contract.

use serde::{Deserialize, Serialize};

/// One request line. A missing or `null` date formats to an empty string.
#[derive(Debug, Default, Deserialize)]
pub struct FormatRequest {
  #[serde(default)]
  pub date: Option<String>,
}

impl FormatRequest {
  pub fn new(date: impl Into<String>) -> Self {
    Self {
      date: Some(date.into()),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
  pub formatted: String,
}

/// Emitted in place of a response when a line cannot be handled.
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      input: None,
    }
  }

  pub fn with_input(mut self, input: impl Into<String>) -> Self {
    self.input = Some(input.into());
    self
  }
}
