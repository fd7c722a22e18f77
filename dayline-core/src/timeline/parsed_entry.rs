use chrono::NaiveDate;
use serde::Serialize;

use super::bullets::{Bullet, extract_bullets};
use super::time_token::ParsePolicy;
use crate::Daypart;
use crate::dates::parse_journal_date;
use crate::error::Result;

/// The bullets of one journal day, per daypart and in day order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedEntry {
    pub morning: Vec<Bullet>,
    pub afternoon: Vec<Bullet>,
    pub night: Vec<Bullet>,
    /// Morning, afternoon and night concatenated. `all[i].sequence_index == i`.
    pub all: Vec<Bullet>,
}

impl ParsedEntry {
    pub fn daypart(&self, daypart: Daypart) -> &[Bullet] {
        match daypart {
            Daypart::Morning => &self.morning,
            Daypart::Afternoon => &self.afternoon,
            Daypart::Night => &self.night,
        }
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Parses the three daypart blocks of the journal day `date`.
pub fn parse_entry(
    morning: Option<&str>,
    afternoon: Option<&str>,
    night: Option<&str>,
    date: NaiveDate,
    policy: ParsePolicy,
) -> ParsedEntry {
    let morning = extract_bullets(morning, Daypart::Morning, date, 0, policy);
    let afternoon = extract_bullets(afternoon, Daypart::Afternoon, date, morning.len(), policy);
    let night = extract_bullets(
        night,
        Daypart::Night,
        date,
        morning.len() + afternoon.len(),
        policy,
    );

    let all: Vec<Bullet> = morning
        .iter()
        .chain(&afternoon)
        .chain(&night)
        .cloned()
        .collect();
    tracing::debug!(
        %date,
        morning = morning.len(),
        afternoon = afternoon.len(),
        night = night.len(),
        "parsed journal entry"
    );

    ParsedEntry {
        morning,
        afternoon,
        night,
        all,
    }
}

/// Like [`parse_entry`], with the date given as `YYYY-MM-DD`.
pub fn parse_entry_on(
    morning: Option<&str>,
    afternoon: Option<&str>,
    night: Option<&str>,
    date: &str,
    policy: ParsePolicy,
) -> Result<ParsedEntry> {
    let date = parse_journal_date(date)?;
    Ok(parse_entry(morning, afternoon, night, date, policy))
}
