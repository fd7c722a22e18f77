//! Google Takeout "Semantic Location History" import.
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::Deserialize;
use std::collections::BTreeMap;

use super::LocationVisit;
use crate::error::Result;

const UNKNOWN_LOCATION: &str = "Unknown Location";
const E7: f64 = 1e7;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SemanticLocationHistory {
    #[serde(default)]
    timeline_objects: Vec<TimelineObject>,
}

/// Activity segments are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineObject {
    place_visit: Option<PlaceVisit>,
}

#[derive(Debug, Deserialize)]
struct PlaceVisit {
    location: Option<TakeoutLocation>,
    duration: Option<TakeoutDuration>,
}

#[derive(Debug, Deserialize)]
struct TakeoutLocation {
    #[serde(rename = "latitudeE7")]
    latitude_e7: Option<i64>,
    #[serde(rename = "longitudeE7")]
    longitude_e7: Option<i64>,
    name: Option<String>,
    address: Option<String>,
    #[serde(rename = "placeId")]
    place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TakeoutDuration {
    start_timestamp: String,
    end_timestamp: String,
}

/// Totals of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub total_places: usize,
    pub total_dates: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl ImportStats {
    /// Accounts for `places` visits written to the file of `date`.
    pub fn record(&mut self, date: NaiveDate, places: usize) {
        self.total_places += places;
        self.total_dates += 1;
        self.first_date = Some(self.first_date.map_or(date, |d| d.min(date)));
        self.last_date = Some(self.last_date.map_or(date, |d| d.max(date)));
    }
}

/// Extracts place visits from a Semantic Location History JSON document.
///
/// Timestamps are converted into `tz` and kept as local wall-clock times, the
/// same way journal bullets are anchored. Visits with neither coordinates nor
/// a name, and visits with unreadable or inverted timestamps, are skipped.
pub fn parse_semantic_location_history<Tz: TimeZone>(
    json: &str,
    tz: &Tz,
) -> Result<Vec<LocationVisit>> {
    let history: SemanticLocationHistory = serde_json::from_str(json)?;
    Ok(history
        .timeline_objects
        .into_iter()
        .filter_map(|object| object.place_visit)
        .filter_map(|visit| to_location_visit(visit, tz))
        .collect())
}

fn to_location_visit<Tz: TimeZone>(visit: PlaceVisit, tz: &Tz) -> Option<LocationVisit> {
    let location = visit.location?;
    let duration = visit.duration?;

    let latitude = location.latitude_e7.unwrap_or(0) as f64 / E7;
    let longitude = location.longitude_e7.unwrap_or(0) as f64 / E7;
    let name = location.name.filter(|name| !name.is_empty());
    if latitude == 0.0 && longitude == 0.0 && name.is_none() {
        return None;
    }

    let start = local_time(&duration.start_timestamp, tz)?;
    let end = local_time(&duration.end_timestamp, tz)?;
    let name = name.unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
    match LocationVisit::new(
        name,
        location.address.unwrap_or_default(),
        (latitude, longitude),
        start,
        end,
    ) {
        Ok(visit) => Some(visit.with_place_id(location.place_id)),
        Err(error) => {
            tracing::warn!(%error, "skipping place visit");
            None
        }
    }
}

fn local_time<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<NaiveDateTime> {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(instant) => Some(instant.with_timezone(tz).naive_local()),
        Err(error) => {
            tracing::warn!(timestamp, %error, "skipping place visit with unreadable timestamp");
            None
        }
    }
}

/// Groups visits by the local date they start on, each day sorted by start.
pub fn group_by_date(visits: Vec<LocationVisit>) -> BTreeMap<NaiveDate, Vec<LocationVisit>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<LocationVisit>> = BTreeMap::new();
    for visit in visits {
        grouped.entry(visit.start_time.date()).or_default().push(visit);
    }
    for day in grouped.values_mut() {
        day.sort_by_key(|visit| visit.start_time);
    }
    grouped
}
