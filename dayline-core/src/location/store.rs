use anyhow::{Context, Result};
use chrono::TimeZone;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use super::takeout::{ImportStats, group_by_date, parse_semantic_location_history};
use super::LocationVisit;
use crate::paths::visits_path;

/// Reads the visits stored at `path`. A missing file means no visits.
pub fn read_visits(path: &Path) -> Result<Vec<LocationVisit>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let visits: Vec<LocationVisit> =
        serde_json::from_str(&s).with_context(|| format!("parsing {}", path.display()))?;
    for visit in &visits {
        visit
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
    }
    Ok(visits)
}

/// Writes `visits` to `path`, replacing any previous content.
pub fn write_visits(path: &Path, visits: &[LocationVisit]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating parent directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(visits)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

/// Imports Takeout history files into per-day visit files under
/// `locations_dir`.
///
/// Files without a `.json` extension are ignored and unreadable documents are
/// skipped with a warning. Visits from all files are merged before writing,
/// and each day's file is replaced by the imported visits.
pub fn import_takeout_files<Tz: TimeZone>(
    files: &[PathBuf],
    locations_dir: &Path,
    tz: &Tz,
) -> Result<ImportStats> {
    let mut visits = Vec::new();
    for file in files {
        if !is_json(file) {
            tracing::debug!(path = %file.display(), "skipping non-JSON file");
            continue;
        }
        let s = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
        match parse_semantic_location_history(&s, tz) {
            Ok(parsed) => {
                tracing::debug!(path = %file.display(), places = parsed.len(), "parsed location history");
                visits.extend(parsed);
            }
            Err(error) => tracing::warn!(path = %file.display(), %error, "skipping location history"),
        }
    }

    let mut stats = ImportStats::default();
    for (date, day) in group_by_date(visits) {
        write_visits(&visits_path(locations_dir, date), &day)?;
        stats.record(date, day.len());
    }
    Ok(stats)
}

fn is_json(p: &Path) -> bool {
    p.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
