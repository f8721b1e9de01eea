//! Error types for building and loading DST rules.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DstError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u8),

    #[error("Invalid day of week: {0} (expected 1-7, 1 = Sunday)")]
    InvalidDayOfWeek(u8),

    /// Ordinals past the 4th are rejected because "last <weekday>" rules are
    /// not supported.
    #[error("Invalid ordinal: {0} (expected 1-4; \"last\" occurrence rules are not supported)")]
    InvalidOrdinal(u8),

    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(u8),

    #[error("Invalid UTC offset: {0} minutes (expected -1439..=1439)")]
    InvalidOffset(i32),

    #[error("Invalid abbreviation: {0:?} (expected non-empty visible ASCII)")]
    InvalidAbbrev(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DstError>;
