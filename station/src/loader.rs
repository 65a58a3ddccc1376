use std::fs;
use std::path::Path;

use ecosense::Observation;
use serde_json::Value;

use crate::record::{RawRecord, SourceError, into_observation};

pub fn load_observations(
    file_path: impl AsRef<Path>,
    default_location: impl Into<String>,
) -> Result<Vec<Observation>, SourceError> {
    let default_location = default_location.into();
    let mut reader = csv::Reader::from_path(file_path)?;
    let headers = reader.headers()?.clone();

    let mut out = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = RawRecord::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert(header.to_string(), parse_cell(cell));
        }
        out.push(into_observation(record, &default_location)?);
    }
    Ok(out)
}

pub fn load_raw_records(file_path: impl AsRef<Path>) -> Result<Vec<RawRecord>, SourceError> {
    let text = fs::read_to_string(file_path)?;
    let records: Vec<RawRecord> = serde_json::from_str(&text)?;
    Ok(records)
}

fn parse_cell(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Value::from(number),
        _ => Value::from(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_cell;
    use serde_json::Value;

    #[test]
    fn numeric_cells_parse_as_numbers() {
        assert_eq!(parse_cell("7.2"), Value::from(7.2));
        assert_eq!(parse_cell(" 450 "), Value::from(450.0));
    }

    #[test]
    fn junk_cells_stay_strings_or_null() {
        assert_eq!(parse_cell("N/A"), Value::from("N/A"));
        assert_eq!(parse_cell(""), Value::Null);
        assert_eq!(parse_cell("NaN"), Value::from("NaN"));
    }
}
