//! The `DstRule` value type: one annual local-time change between standard
//! and daylight time.
//!
//! A rule reads as "on the `ordinal`'th `day_of_week` of `month`, at `hour`
//! local time, start using `offset_minutes` and call the zone `abbrev`".
//! For example, US Eastern time since 2007:
//!
//! ```rust
//! use dst_rule::DstRule;
//!
//! // 2nd Sunday in March, 02:00 local -> UTC-4, "EDT"
//! const EDT: DstRule = DstRule::from_static(3, 1, 2, 2, -240, "EDT");
//! // 1st Sunday in November, 02:00 local -> UTC-5, "EST"
//! const EST: DstRule = DstRule::from_static(11, 1, 1, 2, -300, "EST");
//!
//! assert_eq!(EDT.posix_date(), "M3.2.0/2");
//! assert_eq!(EST.abbrev(), "EST");
//! ```
//!
//! Rules are always expressed in local time. "Last <weekday> of month"
//! rules are not supported; an ordinal of 5 is rejected rather than guessed.

use std::fmt;

use chrono::{FixedOffset, Month, Weekday};
use serde::{Deserialize, Serialize};

use crate::abbrev::{is_visible_ascii, Abbrev};
use crate::error::{DstError, Result};

/// Highest supported weekday occurrence within a month.
pub const MAX_ORDINAL: u8 = 4;

/// Largest absolute UTC offset a rule may carry, in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Indexed by `day_of_week - 1`.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Indexed by `month - 1`.
const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// A single DST transition rule.
///
/// Fields are private and there are no setters: once built, a rule never
/// changes. Rules are plain data, so shared `static`/`const` rules can be
/// read from any thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RuleFields", into = "RuleFields")]
pub struct DstRule {
    month: u8,
    day_of_week: u8,
    ordinal: u8,
    hour: u8,
    offset_minutes: i32,
    abbrev: Abbrev,
}

impl DstRule {
    /// Build a rule from literals, for `const` and `static` items.
    ///
    /// # Panics
    /// Panics if any field is out of range. Inside a `const` item this is a
    /// compile error instead.
    pub const fn from_static(
        month: u8,
        day_of_week: u8,
        ordinal: u8,
        hour: u8,
        offset_minutes: i32,
        abbrev: &'static str,
    ) -> Self {
        assert!(month_in_range(month), "month must be 1-12");
        assert!(
            day_of_week_in_range(day_of_week),
            "day of week must be 1-7 (1 = Sunday)"
        );
        assert!(ordinal_in_range(ordinal), "ordinal must be 1-4");
        assert!(hour_in_range(hour), "hour must be 0-23");
        assert!(
            offset_in_range(offset_minutes),
            "offset must be within -1439..=1439 minutes"
        );
        assert!(
            is_visible_ascii(abbrev),
            "abbreviation must be non-empty visible ASCII"
        );

        DstRule {
            month,
            day_of_week,
            ordinal,
            hour,
            offset_minutes,
            abbrev: Abbrev::from_static(abbrev),
        }
    }

    /// Build a rule from runtime values, validating every field.
    ///
    /// # Arguments
    /// - `month` -- 1-12
    /// - `day_of_week` -- 1-7, 1 = Sunday
    /// - `ordinal` -- which occurrence of `day_of_week` in `month`, 1-4
    /// - `hour` -- local hour of the change, 0-23
    /// - `offset_minutes` -- UTC offset to apply after the change
    /// - `abbrev` -- zone label to show after the change
    ///
    /// # Errors
    /// Returns the `DstError` variant naming the first field found out of
    /// range.
    pub fn new(
        month: u8,
        day_of_week: u8,
        ordinal: u8,
        hour: u8,
        offset_minutes: i32,
        abbrev: impl Into<Abbrev>,
    ) -> Result<Self> {
        let abbrev = abbrev.into();

        if !month_in_range(month) {
            return Err(DstError::InvalidMonth(month));
        }
        if !day_of_week_in_range(day_of_week) {
            return Err(DstError::InvalidDayOfWeek(day_of_week));
        }
        if !ordinal_in_range(ordinal) {
            return Err(DstError::InvalidOrdinal(ordinal));
        }
        if !hour_in_range(hour) {
            return Err(DstError::InvalidHour(hour));
        }
        if !offset_in_range(offset_minutes) {
            return Err(DstError::InvalidOffset(offset_minutes));
        }
        if !is_visible_ascii(abbrev.as_str()) {
            return Err(DstError::InvalidAbbrev(abbrev.as_str().to_string()));
        }

        Ok(DstRule {
            month,
            day_of_week,
            ordinal,
            hour,
            offset_minutes,
            abbrev,
        })
    }

    /// Like [`DstRule::new`], taking the month and weekday as `chrono` enums.
    pub fn from_chrono(
        month: Month,
        weekday: Weekday,
        ordinal: u8,
        hour: u8,
        offset_minutes: i32,
        abbrev: impl Into<Abbrev>,
    ) -> Result<Self> {
        DstRule::new(
            month.number_from_month() as u8,
            weekday.number_from_sunday() as u8,
            ordinal,
            hour,
            offset_minutes,
            abbrev,
        )
    }

    /// Month of the change, 1-12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of week of the change, 1-7 with 1 = Sunday.
    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Which occurrence of [`day_of_week`](Self::day_of_week) in the month,
    /// e.g. 2 for "second Sunday".
    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// Local hour at which the change takes effect.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minutes to add to UTC to get local time after the change.
    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    pub fn abbrev(&self) -> &Abbrev {
        &self.abbrev
    }

    pub fn weekday(&self) -> Weekday {
        WEEKDAYS[(self.day_of_week - 1) as usize]
    }

    pub fn calendar_month(&self) -> Month {
        MONTHS[(self.month - 1) as usize]
    }

    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.offset_minutes * 60)
            .expect("offset range is checked on construction")
    }

    /// The POSIX TZ `Mm.w.d/h` form of this rule's date and time, with
    /// Sunday as day 0.
    pub fn posix_date(&self) -> String {
        format!(
            "M{}.{}.{}/{}",
            self.month,
            self.ordinal,
            self.day_of_week - 1,
            self.hour
        )
    }
}

impl fmt::Display for DstRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (UTC{})",
            self.abbrev,
            self.posix_date(),
            self.utc_offset()
        )
    }
}

const fn month_in_range(month: u8) -> bool {
    month >= 1 && month <= 12
}

const fn day_of_week_in_range(day_of_week: u8) -> bool {
    day_of_week >= 1 && day_of_week <= 7
}

const fn ordinal_in_range(ordinal: u8) -> bool {
    ordinal >= 1 && ordinal <= MAX_ORDINAL
}

const fn hour_in_range(hour: u8) -> bool {
    hour <= 23
}

const fn offset_in_range(offset_minutes: i32) -> bool {
    offset_minutes >= -MAX_OFFSET_MINUTES && offset_minutes <= MAX_OFFSET_MINUTES
}

/// Serialized shape of a rule. Deserialization goes through
/// [`DstRule::new`] so out-of-range documents are rejected.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFields {
    month: u8,
    day_of_week: u8,
    ordinal: u8,
    hour: u8,
    offset_minutes: i32,
    abbrev: Abbrev,
}

impl TryFrom<RuleFields> for DstRule {
    type Error = DstError;

    fn try_from(fields: RuleFields) -> Result<Self> {
        DstRule::new(
            fields.month,
            fields.day_of_week,
            fields.ordinal,
            fields.hour,
            fields.offset_minutes,
            fields.abbrev,
        )
    }
}

impl From<DstRule> for RuleFields {
    fn from(rule: DstRule) -> Self {
        RuleFields {
            month: rule.month,
            day_of_week: rule.day_of_week,
            ordinal: rule.ordinal,
            hour: rule.hour,
            offset_minutes: rule.offset_minutes,
            abbrev: rule.abbrev,
        }
    }
}
