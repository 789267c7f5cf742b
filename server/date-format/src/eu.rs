//! Permissive ISO -> EU reformatting.

use log::debug;

/// Rendered in place of a segment the input does not have.
pub const MISSING_SEGMENT: &str = "undefined";

/// Reformat `YYYY-MM-DD` into `DD.MM.YYYY`.
///
/// Segments are copied as text: no padding, no numeric checks. Absent or
/// empty input gives an empty string. With fewer than three segments the
/// missing ones render as [`MISSING_SEGMENT`]; segments past the third are
/// dropped.
pub fn format_date_eu(date: Option<&str>) -> String {
  let date = match date {
    Some(d) if !d.is_empty() => d,
    _ => return String::new(),
  };

  let mut parts = date.split('-');
  let year = parts.next().unwrap_or(MISSING_SEGMENT);
  let month = parts.next().unwrap_or(MISSING_SEGMENT);
  let day = parts.next().unwrap_or(MISSING_SEGMENT);

  let segments = date.matches('-').count() + 1;
  if segments != 3 {
    debug!("format_date_eu: expected 3 segments, got {} in {:?}", segments, date);
  }

  format!("{}.{}.{}", day, month, year)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reorders_well_formed_dates() {
    assert_eq!(format_date_eu(Some("2024-03-07")), "07.03.2024");
    assert_eq!(format_date_eu(Some("1999-12-31")), "31.12.1999");
  }

  #[test]
  fn empty_and_absent_give_empty_string() {
    assert_eq!(format_date_eu(Some("")), "");
    assert_eq!(format_date_eu(None), "");
  }

  #[test]
  fn segments_are_kept_verbatim() {
    assert_eq!(format_date_eu(Some("2024-3-7")), "7.3.2024");
    assert_eq!(format_date_eu(Some("0099-003-0007")), "0007.003.0099");
    assert_eq!(format_date_eu(Some("yyyy-mm-dd")), "dd.mm.yyyy");
  }

  #[test]
  fn missing_segments_render_placeholder() {
    assert_eq!(format_date_eu(Some("2024-03")), "undefined.03.2024");
    assert_eq!(format_date_eu(Some("2024")), "undefined.undefined.2024");
  }

  #[test]
  fn extra_segments_are_dropped() {
    assert_eq!(format_date_eu(Some("2024-03-07-extra")), "07.03.2024");
  }

  #[test]
  fn empty_segments_stay_empty() {
    assert_eq!(format_date_eu(Some("-")), "undefined..");
    assert_eq!(format_date_eu(Some("2024--07")), "07..2024");
  }
}
