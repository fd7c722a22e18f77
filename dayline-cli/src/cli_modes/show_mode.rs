use super::Day;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use chrono::NaiveDateTime;
use dayline_core::Daypart;
use dayline_core::timeline::{bullet_at, location_index_at, now_position, visit_span};
use serde_json::json;
use strum::IntoEnumIterator;

/// What the day view marks as happening now.
#[derive(Debug, Default, PartialEq)]
struct NowHighlight {
    position: Option<f64>,
    /// `sequence_index` of the active bullet.
    bullet: Option<usize>,
    /// Index of the active visit.
    location: Option<usize>,
}

pub fn show_mode(cli: &Cli, day: &Day, now: NaiveDateTime, renderer: &Renderer) -> Result<()> {
    let highlight = now_highlight(day, now);

    if cli.json {
        let spans: Vec<_> = day
            .visits
            .iter()
            .map(|visit| {
                let (left, width) = visit_span(visit, day.date);
                json!({ "left": left, "width": width })
            })
            .collect();
        let value = json!({
            "date": day.date.to_string(),
            "entry": &day.entry,
            "visits": &day.visits,
            "visitSpans": spans,
            "nowPosition": highlight.position,
            "nowBullet": highlight.bullet,
            "nowLocation": highlight.location,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    renderer.print_day_heading(day.date);
    if day.entry.is_empty() && day.visits.is_empty() {
        renderer.print_info("Nothing recorded for this day.");
        return Ok(());
    }
    for daypart in Daypart::iter() {
        renderer.print_daypart(daypart, day.entry.daypart(daypart), highlight.bullet);
    }
    renderer.print_visits(&day.visits, day.date, highlight.location);
    if let Some(position) = highlight.position {
        renderer.print_position("now", position, now);
    }
    Ok(())
}

/// Bullet and visit active at `now`, only while viewing today.
fn now_highlight(day: &Day, now: NaiveDateTime) -> NowHighlight {
    match now_position(day.date, now) {
        Some(position) => NowHighlight {
            position: Some(position),
            bullet: bullet_at(&day.entry.all, now).map(|b| b.sequence_index),
            location: location_index_at(&day.visits, now),
        },
        None => NowHighlight::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{at, date, mk_day};

    #[test]
    fn marks_what_is_happening_now_on_today() {
        let day = mk_day();
        let highlight = now_highlight(&day, at(day.date, 10, 0));
        assert_eq!(highlight.bullet, Some(1));
        assert_eq!(highlight.location, Some(0));
        assert!((highlight.position.unwrap() - 400.0 / 17.0).abs() < 1e-9);

        let lunch = now_highlight(&day, at(day.date, 13, 30));
        assert_eq!(lunch.bullet, Some(2));
        assert_eq!(lunch.location, None);
    }

    #[test]
    fn other_days_have_no_highlight() {
        let day = mk_day();
        let highlight = now_highlight(&day, at(date(2025, 8, 16), 10, 0));
        assert_eq!(highlight, NowHighlight::default());
    }
}
