use chrono::{DateTime, TimeZone, Utc};
use pricegraph::core::{DateLabelFormat, date_labels};

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

#[test]
fn decade_span_settles_on_two_year_ticks() {
    let labels = date_labels(utc(2010, 1, 1), utc(2020, 1, 1), 3).expect("labels");

    // 10-year spacing yields zero ticks (2020 is excluded), 5-year yields
    // one, 2-year is the first rung with enough.
    assert_eq!(labels.format, DateLabelFormat::MonthYear);
    let texts: Vec<&str> = labels.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["Jan 2012", "Jan 2014", "Jan 2016", "Jan 2018"]);
}

#[test]
fn latest_boundary_is_exclusive() {
    // A tick landing exactly on `latest` must not be emitted.
    let labels = date_labels(utc(2010, 1, 1), utc(2020, 1, 1), 1).expect("labels");
    assert_eq!(labels.labels.len(), 1);
    assert_eq!(labels.labels[0].unix_seconds, utc(2015, 1, 1).timestamp());
}

#[test]
fn ticks_start_strictly_after_the_floored_earliest() {
    // Earliest sits exactly on a day boundary; the boundary itself is not
    // a tick at any day granularity.
    let labels = date_labels(utc(2019, 1, 1), utc(2019, 1, 5), 3).expect("labels");

    assert_eq!(labels.format, DateLabelFormat::DayMonth);
    let texts: Vec<&str> = labels.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["2 Jan", "3 Jan", "4 Jan"]);
}

#[test]
fn fifty_day_window_uses_two_week_ticks() {
    let labels = date_labels(utc(2019, 2, 20), utc(2019, 4, 10), 3).expect("labels");

    assert_eq!(labels.format, DateLabelFormat::DayMonth);
    let texts: Vec<&str> = labels.labels.iter().map(|l| l.text.as_str()).collect();
    // 2019-02-20 is a Wednesday; its ISO week floor is Monday 02-18.
    assert_eq!(texts, vec!["4 Mar", "18 Mar", "1 Apr"]);
}

#[test]
fn month_scale_spans_format_with_year() {
    let labels = date_labels(utc(2018, 3, 10), utc(2019, 2, 5), 4).expect("labels");

    assert_eq!(labels.format, DateLabelFormat::MonthYear);
    assert!(labels.labels.len() >= 4);
    for label in &labels.labels {
        assert!(label.unix_seconds > utc(2018, 3, 1).timestamp());
        assert!(label.unix_seconds < utc(2019, 2, 5).timestamp());
    }
}

#[test]
fn span_shorter_than_minimum_falls_back_to_single_days() {
    // 2.5 days cannot produce five labels at any granularity; the one-day
    // result is returned however short.
    let earliest = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
    let latest = Utc.with_ymd_and_hms(2019, 1, 3, 12, 0, 0).unwrap();

    let labels = date_labels(earliest, latest, 5).expect("labels");
    assert_eq!(labels.format, DateLabelFormat::DayMonth);
    let texts: Vec<&str> = labels.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["2 Jan", "3 Jan"]);
}

#[test]
fn minimum_density_holds_whenever_the_span_allows_it() {
    let cases = [
        (utc(2015, 6, 1), utc(2023, 2, 1), 4),
        (utc(2019, 1, 1), utc(2019, 12, 31), 5),
        (utc(2019, 3, 1), utc(2019, 3, 29), 3),
    ];

    for (earliest, latest, min_count) in cases {
        let labels = date_labels(earliest, latest, min_count).expect("labels");
        assert!(
            labels.labels.len() >= min_count,
            "{earliest} .. {latest} produced {} labels, wanted >= {min_count}",
            labels.labels.len()
        );
    }
}

#[test]
fn degenerate_window_is_rejected() {
    assert!(date_labels(utc(2019, 1, 1), utc(2019, 1, 1), 3).is_err());
    assert!(date_labels(utc(2019, 1, 2), utc(2019, 1, 1), 3).is_err());
}
