use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::timeline::TimeRange;

/// One of the three fixed blocks a journal day is written in.
///
/// Variants are declared in day order, so `Ord` and [`Daypart::iter`] follow
/// morning, afternoon, night.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    AsRefStr,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Daypart {
    Morning,
    Afternoon,
    Night,
}

impl Daypart {
    /// `(start_hour, end_hour)` of the daypart's window. Not user configurable.
    pub const fn hours(self) -> (u32, u32) {
        match self {
            Daypart::Morning => (6, 12),
            Daypart::Afternoon => (12, 18),
            Daypart::Night => (18, 23),
        }
    }

    /// The window of this daypart on `date`. Estimated slices tile it.
    pub fn window(self, date: NaiveDate) -> TimeRange {
        let (start, end) = self.hours();
        TimeRange::new(at_hour(date, start), at_hour(date, end))
    }
}

/// `date` at `hour:00`, for hours in `0..=23`.
pub(crate) fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    midnight(date) + Duration::hours(i64::from(hour))
}

pub(crate) fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is a valid time")
}

/// Maps day note section headings to dayparts.
///
/// Seeded with the canonical names plus `evening` (for night). Keys are
/// stored lowercased, so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingAliases {
    map: HashMap<String, Daypart>,
}

impl Default for HeadingAliases {
    fn default() -> Self {
        let mut map: HashMap<String, Daypart> = Daypart::iter()
            .map(|daypart| (daypart.as_ref().to_string(), daypart))
            .collect();
        map.insert("evening".to_string(), Daypart::Night);
        Self { map }
    }
}

impl HeadingAliases {
    /// Resolves a heading word (e.g. `"Morning"`, `"evening"`) to its daypart.
    pub fn resolve(&self, word: &str) -> Option<Daypart> {
        self.map.get(&word.to_lowercase()).copied()
    }

    /// Whether `word` is one of the canonical daypart names.
    pub fn is_canonical(word: &str) -> bool {
        Daypart::from_str(word).is_ok()
    }

    /// Adds user-defined aliases, given as `(alias, target)` pairs.
    ///
    /// The target must already resolve (a canonical name or a known alias);
    /// unknown targets are ignored, as are aliases that would shadow a
    /// canonical daypart name.
    pub fn extend<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (alias, target) in pairs {
            if Self::is_canonical(alias) {
                tracing::debug!(alias, "ignoring heading alias that shadows a daypart");
                continue;
            }
            match self.resolve(target) {
                Some(daypart) => {
                    self.map.insert(alias.to_lowercase(), daypart);
                }
                None => tracing::debug!(alias, target, "ignoring heading alias with unknown target"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{at, date};

    #[test]
    fn windows_follow_fixed_hours() {
        let d = date(2025, 8, 15);
        let morning = Daypart::Morning.window(d);
        assert_eq!(morning.start, at(d, 6, 0));
        assert_eq!(morning.end, at(d, 12, 0));
        let night = Daypart::Night.window(d);
        assert_eq!(night.start, at(d, 18, 0));
        assert_eq!(night.end, at(d, 23, 0));
    }

    #[test]
    fn iterates_in_day_order() {
        let order: Vec<Daypart> = Daypart::iter().collect();
        assert_eq!(
            order,
            vec![Daypart::Morning, Daypart::Afternoon, Daypart::Night]
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Daypart::from_str("Afternoon").unwrap(), Daypart::Afternoon);
        assert_eq!(Daypart::Night.to_string(), "night");
        assert!(Daypart::from_str("noon").is_err());
    }

    #[test]
    fn default_aliases_include_evening() {
        let aliases = HeadingAliases::default();
        assert_eq!(aliases.resolve("Evening"), Some(Daypart::Night));
        assert_eq!(aliases.resolve("MORNING"), Some(Daypart::Morning));
        assert_eq!(aliases.resolve("highlights"), None);
    }

    #[test]
    fn extend_skips_canonical_and_unknown_targets() {
        let mut aliases = HeadingAliases::default();
        aliases.extend([
            ("Mañana", "morning"),
            ("tarde", "afternoon"),
            ("night", "morning"),
            ("lunch", "noon"),
        ]);
        assert_eq!(aliases.resolve("mañana"), Some(Daypart::Morning));
        assert_eq!(aliases.resolve("Tarde"), Some(Daypart::Afternoon));
        assert_eq!(aliases.resolve("night"), Some(Daypart::Night));
        assert_eq!(aliases.resolve("lunch"), None);
    }
}
