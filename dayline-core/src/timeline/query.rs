use chrono::{Duration, NaiveDateTime};

use super::bullets::Bullet;
use super::TimeRange;
use crate::LocationVisit;

/// How long a bullet with an explicit start but no end counts as active.
pub fn default_explicit_duration() -> Duration {
    Duration::hours(1)
}

/// The span a bullet covers on the timeline.
///
/// Explicit times win: `[start, end]`, with a missing end defaulting to one
/// hour after the start. Bullets without explicit times use their estimated
/// range.
pub fn bullet_time_range(bullet: &Bullet) -> TimeRange {
    match bullet.explicit_start {
        Some(start) => TimeRange::new(
            start,
            bullet
                .explicit_end
                .unwrap_or_else(|| start + default_explicit_duration()),
        ),
        None => bullet.estimated_range,
    }
}

fn is_active(bullet: &Bullet, instant: NaiveDateTime) -> bool {
    bullet_time_range(bullet).contains(instant)
}

/// Every bullet active at `instant`, in sequence order.
///
/// Spans are closed at both ends, explicit or estimated, so the end of a
/// daypart window still matches its last bullet. On the boundary of two
/// estimated slices both bullets are active and [`bullet_at`] picks the
/// earlier one. A range written backwards (`11pm-1am`) is never active.
pub fn bullets_at(bullets: &[Bullet], instant: NaiveDateTime) -> Vec<&Bullet> {
    bullets.iter().filter(|b| is_active(b, instant)).collect()
}

/// The first bullet, in sequence order, active at `instant`.
pub fn bullet_at(bullets: &[Bullet], instant: NaiveDateTime) -> Option<&Bullet> {
    bullets.iter().find(|b| is_active(b, instant))
}

/// Index of the first visit whose `[start_time, end_time]` contains `instant`.
pub fn location_index_at(visits: &[LocationVisit], instant: NaiveDateTime) -> Option<usize> {
    visits.iter().position(|visit| visit.contains(instant))
}

/// The first visit (in list order) covering `instant`, both ends inclusive.
pub fn location_at(visits: &[LocationVisit], instant: NaiveDateTime) -> Option<&LocationVisit> {
    location_index_at(visits, instant).map(|i| &visits[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{at, date, mk_visit};
    use crate::timeline::{ParsePolicy, parse_entry};

    #[test]
    fn explicit_start_defaults_to_one_hour() {
        let d = date(2025, 8, 15);
        let entry = parse_entry(Some("- 9am - Went for a run"), None, None, d, ParsePolicy::default());
        let bullets = &entry.all;
        assert_eq!(bullet_at(bullets, at(d, 9, 30)).unwrap().text, "Went for a run");
        assert!(bullet_at(bullets, at(d, 10, 0)).is_some());
        // Outside the one-hour default the bullet is not active, even though
        // its estimated range (the whole morning) covers the instant.
        assert!(bullet_at(bullets, at(d, 10, 1)).is_none());
        assert!(bullet_at(bullets, at(d, 8, 59)).is_none());
        assert_eq!(bullets[0].estimated_range, crate::Daypart::Morning.window(d));
    }

    #[test]
    fn midpoint_of_three_untimed_bullets_is_the_middle_one() {
        let d = date(2025, 8, 15);
        let entry = parse_entry(
            Some("- Coffee\n- Emails\n- Walk"),
            None,
            None,
            d,
            ParsePolicy::default(),
        );
        assert_eq!(bullet_at(&entry.all, at(d, 9, 0)).unwrap().text, "Emails");
        assert_eq!(bullets_at(&entry.all, at(d, 9, 0)).len(), 1);
    }

    #[test]
    fn estimated_boundary_goes_to_the_earlier_bullet() {
        let d = date(2025, 8, 15);
        let entry = parse_entry(Some("- Coffee\n- Emails"), None, None, d, ParsePolicy::default());
        assert_eq!(bullet_at(&entry.all, at(d, 9, 0)).unwrap().text, "Coffee");
        assert_eq!(bullets_at(&entry.all, at(d, 9, 0)).len(), 2);
        assert_eq!(bullet_at(&entry.all, at(d, 9, 1)).unwrap().text, "Emails");
    }

    #[test]
    fn window_end_matches_the_last_bullet() {
        let d = date(2025, 8, 15);
        let entry = parse_entry(Some("- Coffee\n- Emails"), None, None, d, ParsePolicy::default());
        // Nothing is written for the afternoon, so noon is only the end of
        // the morning window.
        assert_eq!(bullet_at(&entry.all, at(d, 12, 0)).unwrap().text, "Emails");
        assert!(bullet_at(&entry.all, at(d, 12, 1)).is_none());
    }

    #[test]
    fn overlapping_bullets_are_all_returned_in_order() {
        let d = date(2025, 8, 15);
        let entry = parse_entry(
            Some("- 9-11am Workshop\n- 10am Coffee break\n- Notes"),
            None,
            None,
            d,
            ParsePolicy::default(),
        );
        let active: Vec<&str> = bullets_at(&entry.all, at(d, 10, 30))
            .into_iter()
            .map(|b| b.text.as_str())
            .collect();
        // `Notes` has no explicit time and its estimated slice is 10:00-12:00.
        assert_eq!(active, vec!["Workshop", "Coffee break", "Notes"]);
        assert_eq!(bullet_at(&entry.all, at(d, 10, 30)).unwrap().sequence_index, 0);
    }

    #[test]
    fn backwards_range_is_never_active() {
        let d = date(2025, 8, 15);
        let entry = parse_entry(None, None, Some("- 11-1pm Odd"), d, ParsePolicy::default());
        let bullet = &entry.all[0];
        assert_eq!(bullet.explicit_start, Some(at(d, 23, 0)));
        assert_eq!(bullet.explicit_end, Some(at(d, 13, 0)));
        assert!(bullets_at(&entry.all, at(d, 23, 0)).is_empty());
        assert!(bullets_at(&entry.all, at(d, 18, 0)).is_empty());
    }

    #[test]
    fn bullet_time_range_prefers_explicit_times() {
        let d = date(2025, 8, 15);
        let entry = parse_entry(
            Some("- 9-11am Workshop\n- 10am Coffee\n- Notes"),
            None,
            None,
            d,
            ParsePolicy::default(),
        );
        assert_eq!(
            bullet_time_range(&entry.all[0]),
            TimeRange::new(at(d, 9, 0), at(d, 11, 0))
        );
        assert_eq!(
            bullet_time_range(&entry.all[1]),
            TimeRange::new(at(d, 10, 0), at(d, 11, 0))
        );
        assert_eq!(bullet_time_range(&entry.all[2]), entry.all[2].estimated_range);
    }

    #[test]
    fn location_bounds_are_inclusive() {
        let d = date(2025, 8, 15);
        let visits = vec![
            mk_visit("Home", at(d, 6, 0), at(d, 8, 30)),
            mk_visit("Office", at(d, 9, 0), at(d, 17, 0)),
            mk_visit("Gym", at(d, 17, 0), at(d, 18, 0)),
        ];
        assert_eq!(location_at(&visits, at(d, 8, 30)).unwrap().name, "Home");
        assert_eq!(location_at(&visits, at(d, 9, 0)).unwrap().name, "Office");
        // Both Office and Gym contain 17:00; list order decides.
        assert_eq!(location_index_at(&visits, at(d, 17, 0)), Some(1));
        assert_eq!(location_index_at(&visits, at(d, 17, 30)), Some(2));
        assert!(location_at(&visits, at(d, 8, 45)).is_none());
        assert!(location_at(&[], at(d, 8, 45)).is_none());
    }
}
