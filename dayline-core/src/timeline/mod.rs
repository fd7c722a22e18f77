//! Bullet-time parsing and timeline queries.
//!
//! Journal text for a day is split into [`Bullet`]s per [`Daypart`](crate::Daypart),
//! each with an explicit time (when the user wrote one) and an estimated
//! range. The query functions answer "what was happening at this instant"
//! for bullets and location visits. Everything here is a pure function of its
//! inputs.
mod bullets;
mod estimate;
mod parsed_entry;
mod query;
mod range;
mod scrub;
mod selection;
mod time_token;

pub use bullets::{Bullet, extract_bullets};
pub use estimate::estimate_range;
pub use parsed_entry::{ParsedEntry, parse_entry, parse_entry_on};
pub use query::{
    bullet_at, bullet_time_range, bullets_at, default_explicit_duration, location_at,
    location_index_at,
};
pub use range::TimeRange;
pub use scrub::{
    MIN_VISIT_WIDTH, display_window, instant_to_position, now_position, position_to_instant,
    visit_span,
};
pub use selection::{Selection, select_at_position, select_bullet, select_location};
pub use time_token::{ParsePolicy, TimeToken, parse_time_token};
