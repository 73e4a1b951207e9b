//! Error types for facility-engine operations.
//!
//! Every variant is a configuration error raised while building a
//! [`Facility`](crate::facility::Facility). The availability search itself
//! never fails: an exhausted window is reported as `None`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacilityError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Duplicate weekday: {0}")]
    DuplicateWeekday(String),

    #[error("Slot count mismatch: {days} days configured but {slots} slot values given")]
    SlotCountMismatch { days: usize, slots: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FacilityError>;
