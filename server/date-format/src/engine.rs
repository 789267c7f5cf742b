//! Core engine: applies the configured mode to each request.

use log::warn;

use crate::config::{Config, Mode};
use crate::error::FormatError;
use crate::eu;
use crate::strict;
use crate::types::{FormatRequest, FormatResponse};

pub struct Formatter {
  config: Config,
}

impl Formatter {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Format one date. Only strict mode can fail.
  pub fn format(&self, date: Option<&str>) -> Result<String, FormatError> {
    match self.config.mode {
      Mode::Permissive => Ok(eu::format_date_eu(date)),
      Mode::Strict => strict::format_date_eu_strict(date).map_err(|e| {
        warn!("rejected date: {}", e);
        e
      }),
    }
  }

  pub fn process(&self, req: &FormatRequest) -> Result<FormatResponse, FormatError> {
    let formatted = self.format(req.date.as_deref())?;
    Ok(FormatResponse { formatted })
  }

  /// Handle one input line: a JSON request if it starts with `{` (after
  /// leading whitespace), otherwise the raw date text, untrimmed.
  pub fn process_line(&self, line: &str) -> Result<FormatResponse, FormatError> {
    let req = if line.trim_start().starts_with('{') {
      serde_json::from_str::<FormatRequest>(line)?
    } else {
      FormatRequest::new(line)
    };
    self.process(&req)
  }
}
