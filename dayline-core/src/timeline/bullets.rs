use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::estimate::estimate_range;
use super::time_token::{ParsePolicy, parse_time_token};
use super::TimeRange;
use crate::Daypart;

static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-•*]\s*").expect("valid bullet marker regex"));

/// One non-blank line of a daypart's journal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    /// The line without bullet marker and without a leading time token.
    pub text: String,
    /// The line without bullet marker, time token included.
    pub raw_text: String,
    /// Set when the line starts with a recognizable time.
    pub explicit_start: Option<NaiveDateTime>,
    /// Set only when the line starts with a time range.
    pub explicit_end: Option<NaiveDateTime>,
    /// The bullet's slice of its daypart window, by line position.
    pub estimated_range: TimeRange,
    pub daypart: Daypart,
    /// Position across the whole day: morning first, then afternoon, then night.
    pub sequence_index: usize,
}

impl Bullet {
    pub fn has_explicit_time(&self) -> bool {
        self.explicit_start.is_some()
    }
}

/// Splits one daypart's text into bullets.
///
/// Blank lines, and lines holding nothing but a bullet marker, are dropped and
/// take no part in sequencing or estimation. Sequence indices start at
/// `offset`. An absent or empty block yields no bullets.
pub fn extract_bullets(
    text: Option<&str>,
    daypart: Daypart,
    date: NaiveDate,
    offset: usize,
    policy: ParsePolicy,
) -> Vec<Bullet> {
    let Some(text) = text else {
        return Vec::new();
    };
    let lines: Vec<&str> = text
        .lines()
        .map(strip_marker)
        .filter(|line| !line.is_empty())
        .collect();

    let window = daypart.window(date);
    let count = lines.len();
    lines
        .into_iter()
        .enumerate()
        .map(|(position, line)| {
            let (explicit_start, explicit_end, rest) = match parse_time_token(line, policy) {
                Some(token) => (
                    Some(date.and_time(token.start)),
                    token.end.map(|end| date.and_time(end)),
                    token.remainder,
                ),
                None => (None, None, line),
            };
            let text = if rest.is_empty() { line } else { rest };
            Bullet {
                text: text.to_string(),
                raw_text: line.to_string(),
                explicit_start,
                explicit_end,
                estimated_range: estimate_range(window, position, count),
                daypart,
                sequence_index: offset + position,
            }
        })
        .collect()
}

fn strip_marker(line: &str) -> &str {
    let stripped = match BULLET_MARKER.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    };
    stripped.trim()
}
