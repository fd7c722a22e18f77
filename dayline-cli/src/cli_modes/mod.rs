mod import_mode;
mod query_mode;
mod show_mode;

pub use import_mode::import_mode;
pub use query_mode::query_mode;
pub use show_mode::show_mode;

use crate::Cli;
use anyhow::Result;
use chrono::NaiveDate;
use dayline_core::dates::{date_from_file_name, resolve_date_token};
use dayline_core::day_note::read_day_note;
use dayline_core::location::read_visits;
use dayline_core::paths::{day_path, visits_path};
use dayline_core::{Config, LocationVisit, ParsedEntry};

/// Everything shown for one journal day.
pub struct Day {
    pub date: NaiveDate,
    pub entry: ParsedEntry,
    pub visits: Vec<LocationVisit>,
}

/// Resolves the day from `--on`, the `--note` file name or `today`, then
/// reads its note and visits.
pub fn load_day(cli: &Cli, config: &Config, today: NaiveDate) -> Result<Day> {
    let date = match (&cli.on, &cli.note) {
        (Some(on), _) => resolve_date_token(on, today)?,
        (None, Some(note)) => date_from_file_name(note).unwrap_or(today),
        (None, None) => today,
    };
    let note_path = cli
        .note
        .clone()
        .unwrap_or_else(|| day_path(&config.notes_dir, date));
    let locations_path = cli
        .locations
        .clone()
        .unwrap_or_else(|| visits_path(&config.locations_dir, date));

    let entry = read_day_note(&note_path, &config.headings)?.parse(date, config.parse_policy);
    let visits = read_visits(&locations_path)?;
    tracing::debug!(
        %date,
        note = %note_path.display(),
        bullets = entry.len(),
        visits = visits.len(),
        "loaded day"
    );
    Ok(Day {
        date,
        entry,
        visits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{at, date, mk_config};
    use clap::Parser;
    use dayline_core::location::write_visits;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_the_configured_day() {
        let dir = tempdir().unwrap();
        let config = mk_config(dir.path());
        let d = date(2025, 8, 15);
        let note = day_path(&config.notes_dir, d);
        fs::create_dir_all(note.parent().unwrap()).unwrap();
        fs::write(&note, "## Morning\n- 9am Run\n## Evening\n- Dinner").unwrap();
        let visit = LocationVisit::new("Park", "", (1.0, 1.0), at(d, 9, 0), at(d, 10, 0)).unwrap();
        write_visits(&visits_path(&config.locations_dir, d), &[visit]).unwrap();

        let cli = Cli::parse_from(["dayline", "--on", "2025-08-15"]);
        let day = load_day(&cli, &config, date(2025, 9, 1)).unwrap();
        assert_eq!(day.date, d);
        assert_eq!(day.entry.len(), 2);
        assert_eq!(day.entry.night[0].text, "Dinner");
        assert_eq!(day.visits.len(), 1);
    }

    #[test]
    fn note_file_name_sets_the_date() {
        let dir = tempdir().unwrap();
        let config = mk_config(dir.path());
        let note = dir.path().join("2025-08-16 Saturday.md");
        fs::write(&note, "## Afternoon\n- 2pm Swim").unwrap();

        let cli = Cli::parse_from(["dayline", "--note", note.to_str().unwrap()]);
        let day = load_day(&cli, &config, date(2025, 9, 1)).unwrap();
        assert_eq!(day.date, date(2025, 8, 16));
        assert_eq!(
            day.entry.afternoon[0].explicit_start,
            Some(at(date(2025, 8, 16), 14, 0))
        );
        assert!(day.visits.is_empty());
    }

    #[test]
    fn missing_day_is_empty_and_bad_dates_fail() {
        let dir = tempdir().unwrap();
        let config = mk_config(dir.path());
        let cli = Cli::parse_from(["dayline", "--on", "yesterday"]);
        let day = load_day(&cli, &config, date(2025, 1, 1)).unwrap();
        assert_eq!(day.date, date(2024, 12, 31));
        assert!(day.entry.is_empty());

        let cli = Cli::parse_from(["dayline", "--on", "someday"]);
        assert!(load_day(&cli, &config, date(2025, 1, 1)).is_err());
    }
}
