use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumString};

/// What to do when a time form's shape matches but its numbers don't
/// validate (e.g. `13pm`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, Display, EnumString, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ParsePolicy {
    /// The first form whose shape matches decides the line. A validation
    /// failure means no time was found.
    #[default]
    FirstMatch,
    /// A validation failure rejects only that form and the next form is tried.
    Fallthrough,
}

/// A time or time range recognized at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeToken<'a> {
    pub start: NaiveTime,
    /// Only set when a range was written.
    pub end: Option<NaiveTime>,
    /// The text after the token and its separator.
    pub remainder: &'a str,
}

enum Attempt<'a> {
    NoMatch,
    Rejected,
    Matched(TimeToken<'a>),
}

type Matcher = fn(&str) -> Attempt<'_>;

/// Time forms in priority order. First success wins.
const MATCHERS: [(&str, Matcher); 4] = [
    ("shared meridiem range", shared_meridiem_range),
    ("meridiem range", meridiem_range),
    ("12-hour time", twelve_hour_time),
    ("24-hour time", twenty_four_hour_time),
];

// `9-11am`, `9:30-11:30 pm`
static SHARED_MERIDIEM_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<h1>[0-9]{1,2})(?::(?P<m1>[0-9]{2}))?\s*-\s*(?P<h2>[0-9]{1,2})(?::(?P<m2>[0-9]{2}))?\s*(?P<mer>am|pm)\b\s*[-–:]?\s*(?P<rest>.*)$",
    )
    .expect("valid shared meridiem regex")
});

// `9am-2pm`, `9:30 am – 2:30 pm`
static MERIDIEM_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<h1>[0-9]{1,2})(?::(?P<m1>[0-9]{2}))?\s*(?P<mer1>am|pm)\s*[-–]\s*(?P<h2>[0-9]{1,2})(?::(?P<m2>[0-9]{2}))?\s*(?P<mer2>am|pm)\b\s*[-–:]?\s*(?P<rest>.*)$",
    )
    .expect("valid meridiem range regex")
});

// `9am`, `9:30 pm:`, `11am -`
static TWELVE_HOUR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<h>[0-9]{1,2})(?::(?P<m>[0-9]{2}))?\s*(?P<mer>am|pm)\b\s*[-–:]?\s*(?P<rest>.*)$",
    )
    .expect("valid 12-hour regex")
});

// `14:00`, `9:30 -`
static TWENTY_FOUR_HOUR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<h>[0-9]{1,2}):(?P<m>[0-9]{2})\s*[-–:]?\s*(?P<rest>.*)$")
        .expect("valid 24-hour regex")
});

/// Recognizes a time or time range at the start of `text`.
///
/// Forms are tried in this order, case-insensitively:
/// 1. **Shared meridiem range**: `9-11am`, `9:30-11:30pm`. Both ends take the
///    trailing meridiem.
/// 2. **Meridiem range**: `9am-2pm`, `9:30am – 2:30pm`.
/// 3. **12-hour time**: `9am`, `2:30 pm`.
/// 4. **24-hour time**: `14:00`, `9:30`.
///
/// Any of them may be followed by a separator (`-`, `–` or `:`), which is
/// dropped together with the token. 12-hour hours must be in `1..=12` and
/// minutes in `0..=59`; `12am` is midnight and `12pm` is noon.
///
/// Returns `None` when no form applies. How a form that matches in shape but
/// fails validation is handled depends on `policy`.
pub fn parse_time_token(text: &str, policy: ParsePolicy) -> Option<TimeToken<'_>> {
    let line = text.trim();
    for (form, matcher) in MATCHERS {
        match matcher(line) {
            Attempt::Matched(token) => return Some(token),
            Attempt::Rejected => {
                tracing::trace!(form, line, "time token out of range");
                if policy == ParsePolicy::FirstMatch {
                    return None;
                }
            }
            Attempt::NoMatch => {}
        }
    }
    None
}

fn shared_meridiem_range(line: &str) -> Attempt<'_> {
    let Some(caps) = SHARED_MERIDIEM_RANGE.captures(line) else {
        return Attempt::NoMatch;
    };
    let start = twelve_hour(&caps, "h1", "m1", "mer");
    let end = twelve_hour(&caps, "h2", "m2", "mer");
    range_attempt(start, end, remainder(&caps))
}

fn meridiem_range(line: &str) -> Attempt<'_> {
    let Some(caps) = MERIDIEM_RANGE.captures(line) else {
        return Attempt::NoMatch;
    };
    let start = twelve_hour(&caps, "h1", "m1", "mer1");
    let end = twelve_hour(&caps, "h2", "m2", "mer2");
    range_attempt(start, end, remainder(&caps))
}

fn twelve_hour_time(line: &str) -> Attempt<'_> {
    let Some(caps) = TWELVE_HOUR.captures(line) else {
        return Attempt::NoMatch;
    };
    single_attempt(twelve_hour(&caps, "h", "m", "mer"), remainder(&caps))
}

fn twenty_four_hour_time(line: &str) -> Attempt<'_> {
    let Some(caps) = TWENTY_FOUR_HOUR.captures(line) else {
        return Attempt::NoMatch;
    };
    let time = number(&caps, "h")
        .zip(number(&caps, "m"))
        .filter(|&(h, m)| h <= 23 && m <= 59)
        .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0));
    single_attempt(time, remainder(&caps))
}

fn range_attempt<'a>(
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    remainder: &'a str,
) -> Attempt<'a> {
    match (start, end) {
        (Some(start), Some(end)) => Attempt::Matched(TimeToken {
            start,
            end: Some(end),
            remainder,
        }),
        _ => Attempt::Rejected,
    }
}

fn single_attempt(time: Option<NaiveTime>, remainder: &str) -> Attempt<'_> {
    match time {
        Some(start) => Attempt::Matched(TimeToken {
            start,
            end: None,
            remainder,
        }),
        None => Attempt::Rejected,
    }
}

/// Converts the captured hour/minute/meridiem groups into a time of day.
fn twelve_hour(caps: &Captures, hour: &str, minute: &str, meridiem: &str) -> Option<NaiveTime> {
    let h = number(caps, hour)?;
    let m = match caps.name(minute) {
        Some(_) => number(caps, minute)?,
        None => 0,
    };
    if h == 0 || h > 12 || m > 59 {
        return None;
    }
    let is_pm = caps.name(meridiem)?.as_str().eq_ignore_ascii_case("pm");
    let h24 = match (h, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (_, true) => h + 12,
        (_, false) => h,
    };
    NaiveTime::from_hms_opt(h24, m, 0)
}

fn number(caps: &Captures, group: &str) -> Option<u32> {
    caps.name(group)?.as_str().parse().ok()
}

fn remainder<'a>(caps: &Captures<'a>) -> &'a str {
    caps.name("rest").map_or("", |rest| rest.as_str().trim())
}
