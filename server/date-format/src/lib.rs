//! Date Format Engine: ISO-style dates (YYYY-MM-DD) to EU display dates (DD.MM.YYYY).
//!
//! `format_date_eu` is the permissive core: it reorders the dash-separated
//! segments verbatim and never fails. `format_date_eu_strict` validates the
//! date against the calendar first. `Formatter` picks between the two from
//! its `Config`; `stream::run` drives it over input lines for the binary.
//!
//! No DB, no network; pure computation.

pub mod config;
pub mod engine;
pub mod error;
pub mod eu;
pub mod serde_eu;
pub mod stream;
pub mod strict;
pub mod types;

pub use config::{Config, Mode};
pub use engine::Formatter;
pub use error::FormatError;
pub use eu::format_date_eu;
pub use strict::{format_date_eu_strict, format_naive_date_eu, parse_iso_date};
pub use types::{FormatRequest, FormatResponse};
