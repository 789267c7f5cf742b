//! Engine configuration with sane defaults.

use std::env;
use std::str::FromStr;

use crate::error::FormatError;

pub const MODE_ENV: &str = "DATE_FORMAT_MODE";

/// How malformed input is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
  /// Reorder segments verbatim; never fails.
  #[default]
  Permissive,
  /// Validate against the calendar; reject bad input.
  Strict,
}

impl FromStr for Mode {
  type Err = FormatError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "permissive" => Ok(Mode::Permissive),
      "strict" => Ok(Mode::Strict),
      _ => Err(FormatError::config("mode", s)),
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
  pub mode: Mode,
}

impl Config {
  /// Read `DATE_FORMAT_MODE`; unset means the default.
  pub fn from_env() -> Result<Self, FormatError> {
    match env::var(MODE_ENV) {
      Ok(v) => {
        let mode = v.parse::<Mode>().map_err(|_| FormatError::config(MODE_ENV, &v))?;
        Ok(Self { mode })
      }
      Err(_) => Ok(Self::default()),
    }
  }
}
