use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised by the library. Journal text never produces one of these:
/// unparseable text degrades to estimated times instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid journal date `{input}`, expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("location visit `{name}` ends before it starts ({start} > {end})")]
    InvalidVisit {
        name: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("malformed location history: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
