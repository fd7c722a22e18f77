//! Markdown day notes holding the three daypart blocks of one day.
//!
//! ```text
//! ---
//! tags: [work]
//! ---
//! ## Morning
//! - 9am - Went for a run
//! ## Afternoon
//! - Lunch
//! ## Evening
//! - 7-9pm Dinner
//! ```
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::timeline::{ParsePolicy, ParsedEntry, parse_entry};
use crate::{Daypart, HeadingAliases};

/// Raw text of the three dayparts of a day. `None` for absent or blank blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayText {
    pub morning: Option<String>,
    pub afternoon: Option<String>,
    pub night: Option<String>,
}

impl DayText {
    pub fn get(&self, daypart: Daypart) -> Option<&str> {
        match daypart {
            Daypart::Morning => self.morning.as_deref(),
            Daypart::Afternoon => self.afternoon.as_deref(),
            Daypart::Night => self.night.as_deref(),
        }
    }

    /// Runs the bullet parser over the three blocks.
    pub fn parse(&self, date: NaiveDate, policy: ParsePolicy) -> ParsedEntry {
        parse_entry(
            self.morning.as_deref(),
            self.afternoon.as_deref(),
            self.night.as_deref(),
            date,
            policy,
        )
    }
}

/// Splits a day note into daypart blocks.
///
/// Front matter is skipped. Each `## ` heading whose first word resolves
/// through `aliases` starts that daypart's block; any other `## ` heading ends
/// the current block. Text before the first heading is ignored and repeated
/// headings append to the same block.
pub fn parse_day_note(content: &str, aliases: &HeadingAliases) -> DayText {
    let mut blocks: BTreeMap<Daypart, Vec<&str>> = BTreeMap::new();
    let mut current: Option<Daypart> = None;

    for line in skip_front_matter(content).lines() {
        if let Some(heading) = line.strip_prefix("## ") {
            current = heading_daypart(heading, aliases);
            continue;
        }
        if let Some(daypart) = current {
            blocks.entry(daypart).or_default().push(line);
        }
    }

    let mut block = |daypart: Daypart| {
        blocks
            .remove(&daypart)
            .map(|lines| lines.join("\n").trim().to_string())
            .filter(|text| !text.is_empty())
    };
    DayText {
        morning: block(Daypart::Morning),
        afternoon: block(Daypart::Afternoon),
        night: block(Daypart::Night),
    }
}

/// Reads and splits the day note at `path`. A missing note is an empty day.
pub fn read_day_note(path: &Path, aliases: &HeadingAliases) -> Result<DayText> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no day note");
        return Ok(DayText::default());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_day_note(&content, aliases))
}

fn heading_daypart(heading: &str, aliases: &HeadingAliases) -> Option<Daypart> {
    let word = heading.split_whitespace().next()?;
    aliases.resolve(word.trim_end_matches(|c: char| !c.is_alphanumeric()))
}

fn skip_front_matter(content: &str) -> &str {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return content;
    };
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == "---" {
            return &rest[offset..];
        }
    }
    // Unterminated front matter: treat the whole file as body.
    content
}
