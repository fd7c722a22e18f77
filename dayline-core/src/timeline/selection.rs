use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::bullets::Bullet;
use super::query::{bullet_at, bullet_time_range, location_index_at};
use super::scrub::{instant_to_position, position_to_instant};
use crate::LocationVisit;

/// What the scrubber highlights. Owned by the caller and recomputed on every
/// scrub or click; nothing is remembered between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Selection {
    /// Scrubber position in percent.
    pub position: f64,
    pub instant: NaiveDateTime,
    /// `sequence_index` of the highlighted bullet.
    pub bullet: Option<usize>,
    /// Index of the highlighted visit in the visit list.
    pub location: Option<usize>,
}

/// Selection for a scrub to `percent`: the first active bullet and the first
/// visit covering that instant.
pub fn select_at_position(
    bullets: &[Bullet],
    visits: &[LocationVisit],
    percent: f64,
    date: NaiveDate,
) -> Selection {
    let instant = position_to_instant(percent, date);
    Selection {
        position: instant_to_position(instant),
        instant,
        bullet: bullet_at(bullets, instant).map(|b| b.sequence_index),
        location: location_index_at(visits, instant),
    }
}

/// Selection after clicking a bullet: the scrubber jumps to the start of the
/// bullet's span and only that bullet is highlighted.
pub fn select_bullet(bullet: &Bullet) -> Selection {
    let instant = bullet_time_range(bullet).start;
    Selection {
        position: instant_to_position(instant),
        instant,
        bullet: Some(bullet.sequence_index),
        location: None,
    }
}

/// Selection after clicking the visit at `index`. `None` if there is no such
/// visit.
pub fn select_location(visits: &[LocationVisit], index: usize) -> Option<Selection> {
    let visit = visits.get(index)?;
    Some(Selection {
        position: instant_to_position(visit.start_time),
        instant: visit.start_time,
        bullet: None,
        location: Some(index),
    })
}
