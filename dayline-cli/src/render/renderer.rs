use super::theme::OneDark;
use chrono::{NaiveDate, NaiveDateTime};
use dayline_core::location::ImportStats;
use dayline_core::timeline::{bullet_time_range, visit_span};
use dayline_core::{Bullet, Daypart, LocationVisit};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

/// Columns of the 06:00 to 23:00 bar drawn next to each visit.
const BAR_COLUMNS: usize = 34;

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::skin(),
            opts: config.unwrap_or_else(|| RenderOptions {
                date_format: "%A, %d %b %Y".to_string(),
                use_color: true,
            }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_day_heading(&self, date: NaiveDate) {
        self.print_md(&format!("# {}", date.format(&self.opts.date_format)));
    }

    /// Prints one daypart section. `highlight` is the `sequence_index` of the
    /// bullet to mark.
    pub fn print_daypart(&self, daypart: Daypart, bullets: &[Bullet], highlight: Option<usize>) {
        if bullets.is_empty() {
            return;
        }
        self.print_md(&format!("## {}", capitalize(daypart.as_ref())));
        for bullet in bullets {
            self.print_bullet(bullet, highlight == Some(bullet.sequence_index));
        }
    }

    pub fn print_bullet(&self, bullet: &Bullet, highlighted: bool) {
        let marker = if highlighted { ">" } else { " " };
        let mut span = format!("{:<13}", bullet_span(bullet));
        let mut text = bullet.text.clone();
        if self.opts.use_color {
            span = if bullet.has_explicit_time() {
                span.with(OneDark::daypart(bullet.daypart)).to_string()
            } else {
                span.with(OneDark::COMMENT).to_string()
            };
            text = if highlighted {
                text.with(Color::White).bold().to_string()
            } else {
                text.with(OneDark::FG).to_string()
            };
        }
        println!("{marker} {span} {text}");
    }

    /// Prints the visits of `date`. `highlight` is the index of the visit to mark.
    pub fn print_visits(&self, visits: &[LocationVisit], date: NaiveDate, highlight: Option<usize>) {
        if visits.is_empty() {
            return;
        }
        self.print_md("## Places");
        for (i, visit) in visits.iter().enumerate() {
            self.print_visit(visit, date, highlight == Some(i));
        }
    }

    pub fn print_visit(&self, visit: &LocationVisit, date: NaiveDate, highlighted: bool) {
        let marker = if highlighted { ">" } else { " " };
        let mut span = format!(
            "{:<13}",
            format!(
                "{}-{}",
                visit.start_time.format("%H:%M"),
                visit.end_time.format("%H:%M")
            )
        );
        let (left, width) = visit_span(visit, date);
        let mut bar = bar(left, width);
        let mut name = visit.name.clone();
        if self.opts.use_color {
            span = span.with(OneDark::CYAN).to_string();
            bar = bar.with(OneDark::GREEN).to_string();
            name = if highlighted {
                name.with(Color::White).bold().to_string()
            } else {
                name.with(OneDark::FG).to_string()
            };
        }
        println!("{marker} {span} {bar} {name}");
    }

    /// Prints the scrubber position and the instant it maps to.
    pub fn print_position(&self, label: &str, position: f64, instant: NaiveDateTime) {
        let mut line = format!("{label}: {} ({position:.1}%)", instant.format("%H:%M:%S"));
        if self.opts.use_color {
            line = line.with(OneDark::RED).to_string();
        }
        println!("{line}");
    }

    pub fn print_import_stats(&self, stats: &ImportStats) {
        match (stats.first_date, stats.last_date) {
            (Some(first), Some(last)) => self.print_info(&format!(
                "Imported {} places across {} days ({first} to {last}).",
                stats.total_places, stats.total_dates
            )),
            _ => self.print_info("No place visits found."),
        }
    }
}

/// `HH:MM-HH:MM` for explicit spans, `~HH:MM-HH:MM` for estimates and a bare
/// `HH:MM` for an explicit start without end.
fn bullet_span(bullet: &Bullet) -> String {
    match (bullet.explicit_start, bullet.explicit_end) {
        (Some(start), Some(end)) => format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")),
        (Some(start), None) => start.format("%H:%M").to_string(),
        _ => {
            let range = bullet_time_range(bullet);
            format!("~{}-{}", range.start.format("%H:%M"), range.end.format("%H:%M"))
        }
    }
}

fn bar(left: f64, width: f64) -> String {
    let cols = BAR_COLUMNS as f64;
    let from = ((left / 100.0 * cols).floor() as usize).min(BAR_COLUMNS - 1);
    let to = (((left + width) / 100.0 * cols).ceil() as usize).clamp(from + 1, BAR_COLUMNS);
    (0..BAR_COLUMNS)
        .map(|col| if (from..to).contains(&col) { '#' } else { '.' })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{at, date, mk_day};
    use dayline_core::{ParsePolicy, parse_entry};

    #[test]
    fn bullet_spans() {
        let entry = parse_entry(
            Some("- 9-10am Run\n- 11:00 Call\n- Coffee"),
            None,
            None,
            date(2025, 8, 15),
            ParsePolicy::FirstMatch,
        );
        assert_eq!(bullet_span(&entry.all[0]), "09:00-10:00");
        assert_eq!(bullet_span(&entry.all[1]), "11:00");
        assert_eq!(bullet_span(&entry.all[2]), "~10:00-12:00");
    }

    #[test]
    fn bar_covers_the_visit() {
        assert_eq!(bar(0.0, 100.0), "#".repeat(BAR_COLUMNS));
        let short = bar(50.0, 2.0);
        assert_eq!(short.matches('#').count(), 1);
        assert!(short.starts_with(&".".repeat(17)));
        assert_eq!(bar(100.0, 2.0).chars().last(), Some('#'));
    }

    #[test]
    fn capitalizes_daypart_names() {
        assert_eq!(capitalize(Daypart::Afternoon.as_ref()), "Afternoon");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn lines_do_not_panic_without_color() {
        let day = mk_day();
        let renderer = Renderer::new(Some(RenderOptions {
            date_format: "%Y-%m-%d".to_string(),
            use_color: false,
        }));
        renderer.print_daypart(Daypart::Morning, day.entry.daypart(Daypart::Morning), Some(1));
        renderer.print_visits(&day.visits, day.date, Some(0));
        renderer.print_position("now", 50.0, at(day.date, 14, 30));
    }
}
