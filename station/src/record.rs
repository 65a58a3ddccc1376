use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use ecosense::Observation;
use serde_json::Value;

pub type RawRecord = BTreeMap<String, Value>;

#[derive(Debug)]
pub enum SourceError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    InvalidDatetime(String),
    MissingTimestamp,
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Csv(e) => write!(f, "csv error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::InvalidDatetime(v) => write!(f, "invalid datetime: {v}"),
            Self::MissingTimestamp => write!(f, "record has no timestamp or date field"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for SourceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

// every field that is not the timestamp or the location is kept verbatim
// as a metric value; dropping junk is the sanitizer's job downstream
pub fn into_observation(
    mut record: RawRecord,
    default_location: &str,
) -> Result<Observation, SourceError> {
    let raw_timestamp = record
        .remove("timestamp")
        .or_else(|| record.remove("date"))
        .ok_or(SourceError::MissingTimestamp)?;
    let text = match raw_timestamp {
        Value::String(text) => text,
        other => other.to_string(),
    };
    let datetime = parse_datetime(&text)?;

    let location = match record.remove("location") {
        Some(Value::String(location)) => location,
        _ => default_location.to_string(),
    };

    let mut observation = Observation::new(datetime, location);
    observation.metrics = record;
    Ok(observation)
}

pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, SourceError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    let patterns = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S%.f",
    ];
    for pattern in patterns {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc));
        }
    }

    Err(SourceError::InvalidDatetime(value.to_string()))
}
