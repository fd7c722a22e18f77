//! Mapping between scrubber positions and timestamps.
//!
//! The scrubber always shows 06:00 to 23:00 of the journal day. Positions are
//! percentages along that window. Nothing here affects parsed data.
use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::TimeRange;
use crate::LocationVisit;
use crate::daypart::at_hour;

const DISPLAY_START_HOUR: u32 = 6;
const DISPLAY_END_HOUR: u32 = 23;

/// Narrowest width, in percent, a visit bar is drawn with.
pub const MIN_VISIT_WIDTH: f64 = 2.0;

/// The 06:00 to 23:00 window shown by the scrubber on `date`.
pub fn display_window(date: NaiveDate) -> TimeRange {
    TimeRange::new(
        at_hour(date, DISPLAY_START_HOUR),
        at_hour(date, DISPLAY_END_HOUR),
    )
}

/// Timestamp at `percent` along the display window of `date`, to the second.
/// `percent` is clamped to `[0, 100]`; NaN counts as 0.
pub fn position_to_instant(percent: f64, date: NaiveDate) -> NaiveDateTime {
    let window = display_window(date);
    let seconds = window.duration().num_seconds() as f64 * clamp_percent(percent) / 100.0;
    window.start + Duration::seconds(seconds.round() as i64)
}

/// Position of `instant` along the display window of its own date, clamped
/// to `[0, 100]`.
pub fn instant_to_position(instant: NaiveDateTime) -> f64 {
    position_in(display_window(instant.date()), instant)
}

/// Position of the "now" marker, shown only while viewing today.
pub fn now_position(date: NaiveDate, now: NaiveDateTime) -> Option<f64> {
    (now.date() == date).then(|| instant_to_position(now))
}

/// `(left, width)` in percent of the bar drawn for `visit` on the timeline of
/// `date`. Both ends are clamped to that day's window, so a stay running past
/// midnight reaches the right edge. Short visits are widened to
/// [`MIN_VISIT_WIDTH`].
pub fn visit_span(visit: &LocationVisit, date: NaiveDate) -> (f64, f64) {
    let window = display_window(date);
    let left = position_in(window, visit.start_time);
    let right = position_in(window, visit.end_time);
    (left, (right - left).max(MIN_VISIT_WIDTH))
}

fn position_in(window: TimeRange, instant: NaiveDateTime) -> f64 {
    let clamped = instant.clamp(window.start, window.end);
    let elapsed = (clamped - window.start).num_milliseconds() as f64;
    elapsed / window.duration().num_milliseconds() as f64 * 100.0
}

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}
