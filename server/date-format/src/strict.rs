//! Calendar-validated ISO -> EU reformatting.

use chrono::NaiveDate;

use crate::error::FormatError;

pub const ISO_FORMAT: &str = "%Y-%m-%d";
pub const EU_FORMAT: &str = "%d.%m.%Y";

/// Parse `YYYY-MM-DD` into a calendar date.
///
/// The shape is checked before chrono sees the input: exactly three
/// segments of 4, 2 and 2 ASCII digits. chrono alone would accept signs,
/// leading whitespace and unpadded fields.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, FormatError> {
  check_shape(s)?;
  NaiveDate::parse_from_str(s, ISO_FORMAT)
    .map_err(|e| FormatError::invalid_date(s, e.to_string()))
}

fn check_shape(s: &str) -> Result<(), FormatError> {
  let parts: Vec<&str> = s.split('-').collect();
  if parts.len() != 3 {
    return Err(FormatError::invalid_date(
      s,
      format!("expected 3 segments, got {}", parts.len()),
    ));
  }
  let fields = [(parts[0], 4, "year"), (parts[1], 2, "month"), (parts[2], 2, "day")];
  for (part, width, name) in fields {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
      return Err(FormatError::invalid_date(
        s,
        format!("{} must be {} ASCII digits", name, width),
      ));
    }
  }
  Ok(())
}

/// Render a calendar date as zero-padded `DD.MM.YYYY`.
pub fn format_naive_date_eu(date: &NaiveDate) -> String {
  date.format(EU_FORMAT).to_string()
}

/// Like [`crate::format_date_eu`], but rejects anything that is not a real date.
///
/// Absent or empty input still gives an empty string.
pub fn format_date_eu_strict(date: Option<&str>) -> Result<String, FormatError> {
  match date {
    Some(d) if !d.is_empty() => Ok(format_naive_date_eu(&parse_iso_date(d)?)),
    _ => Ok(String::new()),
  }
}
