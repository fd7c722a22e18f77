use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::timeline::TimeRange;

/// A stay at one place, as recorded by location history.
///
/// Field names on disk follow the stored form: `lat`, `lng`, `startTime`,
/// `endTime`, `duration` (minutes) and `placeId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationVisit {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(rename = "duration")]
    pub duration_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl LocationVisit {
    /// Builds a visit, deriving `duration_minutes` (rounded) from its bounds.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        (latitude, longitude): (f64, f64),
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<Self> {
        let visit = Self {
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
            start_time,
            end_time,
            duration_minutes: ((end_time - start_time).num_seconds() as f64 / 60.0).round() as i64,
            place_id: None,
        };
        visit.validate()?;
        Ok(visit)
    }

    pub fn with_place_id(mut self, place_id: Option<String>) -> Self {
        self.place_id = place_id;
        self
    }

    /// Checks `start_time <= end_time`.
    pub fn validate(&self) -> Result<()> {
        if self.start_time > self.end_time {
            return Err(Error::InvalidVisit {
                name: self.name.clone(),
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    pub fn span(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }

    /// Whether `instant` is within the visit, both bounds included.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.span().contains(instant)
    }
}
