use super::Day;
use crate::{Cli, render::Renderer};
use anyhow::{Result, anyhow, bail};
use chrono::{NaiveDateTime, NaiveTime};
use dayline_core::timeline::{
    bullet_at, bullets_at, instant_to_position, location_index_at, parse_time_token,
    select_at_position,
};
use dayline_core::{Bullet, ParsePolicy, Selection};
use serde_json::json;

/// Answers "what was happening at `--at`/`--scrub`" for the loaded day.
pub fn query_mode(cli: &Cli, day: &Day, renderer: &Renderer) -> Result<()> {
    let selection = match (&cli.at, cli.scrub) {
        (Some(at), _) => {
            let time = parse_time_of_day(at)
                .ok_or_else(|| anyhow!("invalid time `{at}` (expected e.g. `14:30` or `2:30pm`)"))?;
            select_at_instant(day, day.date.and_time(time))
        }
        (None, Some(percent)) => {
            select_at_position(&day.entry.all, &day.visits, percent, day.date)
        }
        (None, None) => bail!("nothing to query"),
    };

    let active: Vec<&Bullet> = if cli.all {
        bullets_at(&day.entry.all, selection.instant)
    } else {
        selection
            .bullet
            .and_then(|index| day.entry.all.iter().find(|b| b.sequence_index == index))
            .into_iter()
            .collect()
    };
    let location = selection.location.and_then(|index| day.visits.get(index));

    if cli.json {
        let value = json!({
            "date": day.date.to_string(),
            "selection": selection,
            "bullets": active,
            "location": location,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    renderer.print_day_heading(day.date);
    renderer.print_position("at", selection.position, selection.instant);
    if active.is_empty() {
        renderer.print_info("No bullet at this time.");
    }
    for bullet in &active {
        renderer.print_bullet(bullet, selection.bullet == Some(bullet.sequence_index));
    }
    match location {
        Some(visit) => renderer.print_visit(visit, day.date, true),
        None => renderer.print_info("No known place at this time."),
    }
    Ok(())
}

/// A lone time of day such as `14:30`, `9am` or `2:30 pm`.
fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    parse_time_token(input.trim(), ParsePolicy::FirstMatch)
        .filter(|token| token.end.is_none() && token.remainder.is_empty())
        .map(|token| token.start)
}

/// Like a scrub, but at an exact instant, which may lie outside the display
/// window.
fn select_at_instant(day: &Day, instant: NaiveDateTime) -> Selection {
    Selection {
        position: instant_to_position(instant),
        instant,
        bullet: bullet_at(&day.entry.all, instant).map(|b| b.sequence_index),
        location: location_index_at(&day.visits, instant),
    }
}
