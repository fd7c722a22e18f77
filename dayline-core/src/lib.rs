pub mod config;
pub mod dates;
pub mod day_note;
pub mod daypart;
pub mod error;
pub mod location;
pub mod paths;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use day_note::DayText;
pub use daypart::{Daypart, HeadingAliases};
pub use error::{Error, Result};
pub use location::LocationVisit;
pub use timeline::{Bullet, ParsePolicy, ParsedEntry, Selection, TimeRange, parse_entry};
