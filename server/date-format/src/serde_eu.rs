//! Serde adapter for `NaiveDate` fields written as `DD.MM.YYYY`.
//!
//! Use with `#[serde(with = "date_format::serde_eu")]`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

use crate::strict::{format_naive_date_eu, EU_FORMAT};

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  serializer.serialize_str(&format_naive_date_eu(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
  D: Deserializer<'de>,
{
  let s = String::deserialize(deserializer)?;
  NaiveDate::parse_from_str(&s, EU_FORMAT).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use serde::{Deserialize, Serialize};

  #[derive(Debug, PartialEq, Serialize, Deserialize)]
  struct Departure {
    #[serde(with = "crate::serde_eu")]
    date: NaiveDate,
  }

  #[test]
  fn writes_eu_format() {
    let dep = Departure {
      date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
    };
    assert_eq!(serde_json::to_string(&dep).unwrap(), r#"{"date":"07.03.2024"}"#);
  }

  #[test]
  fn reads_eu_format() {
    let dep: Departure = serde_json::from_str(r#"{"date":"31.12.1999"}"#).unwrap();
    assert_eq!(dep.date, NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
  }

  #[test]
  fn rejects_iso_input() {
    assert!(serde_json::from_str::<Departure>(r#"{"date":"1999-12-31"}"#).is_err());
  }
}
