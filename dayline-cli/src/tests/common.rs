use crate::cli_modes::Day;
use chrono::{NaiveDate, NaiveDateTime};
use dayline_core::{Config, HeadingAliases, LocationVisit, ParsePolicy, parse_entry};
use std::path::Path;

/// Test helper to create a `Config` rooted at `tmp_dir`.
pub fn mk_config(tmp_dir: &Path) -> Config {
    Config {
        notes_dir: tmp_dir.join("notes"),
        locations_dir: tmp_dir.join("locations"),
        date_format: "%Y-%m-%d".to_string(),
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

/// 2025-08-15: coffee, a 9-11am run and a 1pm lunch, at the park from 08:30
/// to 11:00.
pub fn mk_day() -> Day {
    let d = date(2025, 8, 15);
    let entry = parse_entry(
        Some("- Coffee\n- 9-11am Run"),
        Some("- 1pm Lunch"),
        None,
        d,
        ParsePolicy::FirstMatch,
    );
    let park = LocationVisit::new("Park", "", (1.0, 1.0), at(d, 8, 30), at(d, 11, 0))
        .expect("valid visit");
    Day {
        date: d,
        entry,
        visits: vec![park],
    }
}
