//! On-disk layout: `{root}/YYYY/MM/YYYY-MM-DD.{md,json}`.
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub fn day_file_name(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y-%m-%d"))
}

pub fn visits_file_name(date: NaiveDate) -> String {
    format!("{}.json", date.format("%Y-%m-%d"))
}

pub fn day_dir(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(date.format("%Y").to_string())
        .join(date.format("%m").to_string())
}

/// Day note of `date` under the notes root.
pub fn day_path(root: &Path, date: NaiveDate) -> PathBuf {
    day_dir(root, date).join(day_file_name(date))
}

/// Visit list of `date` under the locations root.
pub fn visits_path(root: &Path, date: NaiveDate) -> PathBuf {
    day_dir(root, date).join(visits_file_name(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::date;

    #[test]
    fn nests_by_year_and_month() {
        let root = Path::new("/journal");
        let d = date(2025, 3, 7);
        assert_eq!(day_path(root, d), PathBuf::from("/journal/2025/03/2025-03-07.md"));
        assert_eq!(
            visits_path(root, d),
            PathBuf::from("/journal/2025/03/2025-03-07.json")
        );
    }
}
