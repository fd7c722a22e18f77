//! Location visits: the second event stream of the timeline.
mod store;
mod takeout;
mod visit;

pub use store::{import_takeout_files, read_visits, write_visits};
pub use takeout::{ImportStats, group_by_date, parse_semantic_location_history};
pub use visit::LocationVisit;
