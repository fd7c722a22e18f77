use crate::{Config, HeadingAliases, LocationVisit, ParsePolicy};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

/// Test helper to create a default `Config` rooted at `tmp_dir`.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(tmp_dir: &Path) -> Config {
    Config {
        notes_dir: tmp_dir.join("notes"),
        locations_dir: tmp_dir.join("locations"),
        date_format: "%A, %d %b %Y".to_string(),
        parse_policy: ParsePolicy::FirstMatch,
        headings: HeadingAliases::default(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).expect("valid time")
}

pub fn mk_visit(name: &str, start: NaiveDateTime, end: NaiveDateTime) -> LocationVisit {
    LocationVisit::new(name, "", (51.5, -0.12), start, end).expect("valid visit")
}
