use chrono::{DateTime, Datelike, Days, Months, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Display formatting family used for a whole axis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateLabelFormat {
    /// "Jan 2019", used for year and month granularities.
    MonthYear,
    /// "14 Jan", used for week and day granularities.
    DayMonth,
}

/// One date tick: position plus pre-formatted display text.
#[derive(Debug, Clone, PartialEq)]
pub struct DateLabel {
    pub unix_seconds: i64,
    pub text: String,
}

/// Date axis tick set for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DateLabels {
    pub labels: Vec<DateLabel>,
    pub format: DateLabelFormat,
}

/// Calendar unit and stride between consecutive ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Granularity {
    Years(u32),
    Months(u32),
    Weeks(u64),
    Days(u64),
}

/// Coarse-to-fine candidates. The first granularity that produces enough
/// labels wins, so labels never outnumber what the coarser spacing allows
/// while a minimum density is kept.
const GRANULARITY_LADDER: [Granularity; 13] = [
    Granularity::Years(10),
    Granularity::Years(5),
    Granularity::Years(2),
    Granularity::Years(1),
    Granularity::Months(6),
    Granularity::Months(3),
    Granularity::Months(2),
    Granularity::Months(1),
    Granularity::Weeks(2),
    Granularity::Weeks(1),
    Granularity::Days(4),
    Granularity::Days(2),
    Granularity::Days(1),
];

/// Derives date axis ticks between `earliest` and `latest`.
///
/// Each granularity emits ticks at period boundaries strictly after the
/// floor of `earliest` and strictly before `latest`. When even one-day
/// spacing cannot reach `min_count` labels (a span under `min_count` days),
/// the short one-day result is returned as-is.
pub fn date_labels(
    earliest: DateTime<Utc>,
    latest: DateTime<Utc>,
    min_count: usize,
) -> GraphResult<DateLabels> {
    if earliest >= latest {
        return Err(GraphError::InvalidData(
            "date label window must have earliest < latest".to_owned(),
        ));
    }
    if min_count == 0 {
        return Err(GraphError::InvalidData(
            "date label minimum count must be > 0".to_owned(),
        ));
    }

    let mut finest = None;
    for granularity in GRANULARITY_LADDER {
        let candidate = labels_at_granularity(earliest, latest, granularity)?;
        if candidate.labels.len() >= min_count {
            return Ok(candidate);
        }
        finest = Some(candidate);
    }

    // Ladder ends at one-day spacing, so `finest` is always populated here.
    finest.ok_or_else(|| GraphError::InvalidData("date label ladder is empty".to_owned()))
}

fn labels_at_granularity(
    earliest: DateTime<Utc>,
    latest: DateTime<Utc>,
    granularity: Granularity,
) -> GraphResult<DateLabels> {
    let format = display_format(granularity);
    let floor = floor_to_granularity(earliest, granularity)?;

    let mut labels = Vec::new();
    let mut cursor = advance(floor, granularity)?;
    while cursor < latest {
        labels.push(DateLabel {
            unix_seconds: cursor.timestamp(),
            text: format_label(cursor, format),
        });
        cursor = advance(cursor, granularity)?;
    }

    Ok(DateLabels { labels, format })
}

fn display_format(granularity: Granularity) -> DateLabelFormat {
    match granularity {
        Granularity::Years(_) | Granularity::Months(_) => DateLabelFormat::MonthYear,
        Granularity::Weeks(_) | Granularity::Days(_) => DateLabelFormat::DayMonth,
    }
}

fn format_label(time: DateTime<Utc>, format: DateLabelFormat) -> String {
    match format {
        DateLabelFormat::MonthYear => time.format("%b %Y").to_string(),
        DateLabelFormat::DayMonth => time.format("%-d %b").to_string(),
    }
}

/// Floors a timestamp to the start of its calendar unit.
///
/// Multi-period strides still floor to the single unit (a 10-year stride
/// starts from the year boundary, not a decade boundary). Weeks floor to
/// the ISO Monday.
fn floor_to_granularity(
    time: DateTime<Utc>,
    granularity: Granularity,
) -> GraphResult<DateTime<Utc>> {
    match granularity {
        Granularity::Years(_) => utc_midnight(time.year(), 1, 1),
        Granularity::Months(_) => utc_midnight(time.year(), time.month(), 1),
        Granularity::Weeks(_) => {
            let day = utc_midnight(time.year(), time.month(), time.day())?;
            let days_past_monday = u64::from(time.weekday().num_days_from_monday());
            day.checked_sub_days(Days::new(days_past_monday))
                .ok_or_else(|| GraphError::InvalidData("week floor out of range".to_owned()))
        }
        Granularity::Days(_) => utc_midnight(time.year(), time.month(), time.day()),
    }
}

fn advance(time: DateTime<Utc>, granularity: Granularity) -> GraphResult<DateTime<Utc>> {
    let stepped = match granularity {
        Granularity::Years(count) => time.checked_add_months(Months::new(count * 12)),
        Granularity::Months(count) => time.checked_add_months(Months::new(count)),
        Granularity::Weeks(count) => time.checked_add_days(Days::new(count * 7)),
        Granularity::Days(count) => time.checked_add_days(Days::new(count)),
    };

    stepped.ok_or_else(|| GraphError::InvalidData("date label step out of range".to_owned()))
}

fn utc_midnight(year: i32, month: u32, day: u32) -> GraphResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| GraphError::InvalidData(format!("invalid date {year}-{month:02}-{day:02}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn week_floor_lands_on_monday() {
        // 2019-01-10 is a Thursday; its ISO week starts 2019-01-07.
        let floored =
            floor_to_granularity(utc(2019, 1, 10), Granularity::Weeks(1)).expect("floor");
        assert_eq!(floored, utc(2019, 1, 7));
    }

    #[test]
    fn year_floor_ignores_multi_year_stride() {
        let floored =
            floor_to_granularity(utc(2017, 6, 15), Granularity::Years(10)).expect("floor");
        assert_eq!(floored, utc(2017, 1, 1));
    }

    #[test]
    fn month_advance_handles_short_months() {
        let stepped = advance(utc(2019, 1, 31), Granularity::Months(1)).expect("advance");
        assert_eq!(stepped, utc(2019, 2, 28));
    }
}
