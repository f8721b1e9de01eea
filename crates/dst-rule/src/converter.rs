//! The seam between rule data and whatever turns it into local times.
//!
//! This crate only describes rules. Computing the instant at which "the 2nd
//! Sunday in March at 02:00" falls in a given year is the job of a
//! [`TimeConverter`] supplied by the caller.

use chrono::{DateTime, FixedOffset, Utc};

use crate::abbrev::Abbrev;
use crate::pair::DstRulePair;
use crate::rule::DstRule;

/// The offset and label in effect at some instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalOffset<'a> {
    pub offset: FixedOffset,
    pub abbrev: &'a Abbrev,
}

impl<'a> LocalOffset<'a> {
    /// The offset and label a rule puts in effect once it has fired.
    pub fn of(rule: &'a DstRule) -> Self {
        LocalOffset {
            offset: rule.utc_offset(),
            abbrev: rule.abbrev(),
        }
    }

    /// Express a UTC instant in this local offset.
    pub fn apply(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset)
    }
}

/// Resolves which rule of a pair applies at a UTC instant.
///
/// Implementations must be deterministic: the same `(rules, year, instant)`
/// always yields the same answer. For rules following the northern
/// hemisphere convention (start month before end month), the start
/// transition instant precedes the end transition instant within `year`.
pub trait TimeConverter {
    fn local_offset<'r>(
        &self,
        rules: &'r DstRulePair,
        year: i32,
        instant: DateTime<Utc>,
    ) -> LocalOffset<'r>;

    /// Convenience wrapper over [`TimeConverter::local_offset`] returning
    /// the instant in local time.
    fn to_local(
        &self,
        rules: &DstRulePair,
        year: i32,
        instant: DateTime<Utc>,
    ) -> DateTime<FixedOffset> {
        self.local_offset(rules, year, instant).apply(instant)
    }
}
