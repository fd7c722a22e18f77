use chrono::{Duration, NaiveDate};
use std::path::Path;

use crate::error::{Error, Result};

/// Storage format of journal dates.
pub const JOURNAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a journal date in `YYYY-MM-DD` form.
///
/// ```
/// # use chrono::NaiveDate;
/// # use dayline_core::dates::parse_journal_date;
/// let date = parse_journal_date("2025-08-15").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
/// assert!(parse_journal_date("15/08/2025").is_err());
/// ```
pub fn parse_journal_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), JOURNAL_DATE_FORMAT).map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

/// Resolves a user-supplied date: `today`, `yesterday`, `tomorrow`
/// (case-insensitive, relative to `reference_date`) or a `YYYY-MM-DD` date.
pub fn resolve_date_token(token: &str, reference_date: NaiveDate) -> Result<NaiveDate> {
    match token.trim().to_lowercase().as_str() {
        "today" => Ok(reference_date),
        "yesterday" => Ok(reference_date - Duration::days(1)),
        "tomorrow" => Ok(reference_date + Duration::days(1)),
        _ => parse_journal_date(token),
    }
}

/// Reads the journal date from a day note file name such as
/// `2025-08-15.md` or `2025-08-15 Friday.md`.
pub fn date_from_file_name(path: &Path) -> Option<NaiveDate> {
    let stem = path.file_stem()?.to_str()?;
    let prefix = stem.get(..10)?;
    NaiveDate::parse_from_str(prefix, JOURNAL_DATE_FORMAT).ok()
}
