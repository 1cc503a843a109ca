//! Loading of the static price dataset.
//!
//! The input is an ordered JSON array of `{"date": ..., "price(USD)": ...}`
//! records, assumed ascending by date. Order is preserved; nothing here
//! sorts or deduplicates.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::Sample;
use crate::error::{GraphError, GraphResult};

/// One raw dataset record as it appears in the JSON resource.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleRecord {
    pub date: String,
    #[serde(rename = "price(USD)")]
    pub price_usd: Decimal,
}

/// Parses the whole dataset, preserving record order.
pub fn samples_from_json(json: &str) -> GraphResult<Vec<Sample>> {
    let records: Vec<SampleRecord> = serde_json::from_str(json)
        .map_err(|err| GraphError::InvalidData(format!("dataset is not valid JSON: {err}")))?;

    records.into_iter().map(sample_from_record).collect()
}

/// Converts one record, accepting full RFC 3339 timestamps or bare
/// `YYYY-MM-DD` dates (read as UTC midnight).
pub fn sample_from_record(record: SampleRecord) -> GraphResult<Sample> {
    let time = parse_iso8601_utc(&record.date)?;
    Sample::from_decimal(time, record.price_usd)
}

fn parse_iso8601_utc(text: &str) -> GraphResult<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|err| GraphError::InvalidData(format!("invalid ISO-8601 date {text:?}: {err}")))?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        GraphError::InvalidData(format!("date {text:?} has no UTC midnight"))
    })?;
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc))
}
