use thiserror::Error;

/// Failures produced while normalizing picker/user input into canonical
/// deadline values. All variants are local and synchronous; callers surface
/// them to the user and nothing is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid date '{0}', expected DD.MM.YYYY or YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTimeFormat(String),

    #[error("task does not repeat")]
    NotRecurring,

    #[error("event ends before it starts ({end} < {start})")]
    EndBeforeStart { start: String, end: String },
}
