//! # dst-rule
//!
//! Immutable daylight saving time transition rules.
//!
//! A [`DstRule`] says when a zone's local time changes (the Nth weekday of a
//! month at a local hour) and what it changes to (a UTC offset and a short
//! label such as `EDT`). A zone's DST is described by a [`DstRulePair`]: one
//! rule into daylight time, one back to standard time.
//!
//! ## Quick start
//!
//! ```rust
//! use dst_rule::{presets, DstRule, DstRulePair};
//!
//! let eastern = &presets::US_EASTERN;
//! assert_eq!(eastern.start().month(), 3);
//! assert_eq!(eastern.start().ordinal(), 2);
//! assert_eq!(eastern.end().offset_minutes(), -300);
//!
//! // Rules loaded at runtime are validated.
//! let start = DstRule::new(10, 1, 1, 2, 660, "AEDT").unwrap();
//! let end = DstRule::new(4, 1, 1, 3, 600, "AEST").unwrap();
//! let sydney = DstRulePair::new(start, end);
//! assert!(sydney.observes_dst());
//!
//! assert!(DstRule::new(13, 1, 1, 2, 0, "UTC").is_err());
//! ```
//!
//! This crate does not compute transition dates. That belongs to a
//! [`TimeConverter`] provided by the caller.
//!
//! ## Modules
//!
//! - [`rule`] — the `DstRule` value type
//! - [`abbrev`] — zone abbreviations (`EDT`, `EST`, ...)
//! - [`pair`] — start/end rule pairs
//! - [`presets`] — US zone constants
//! - [`converter`] — interface for the external time converter
//! - [`config`] — JSON loading of rule pairs
//! - [`error`] — Error types

pub mod abbrev;
pub mod config;
pub mod converter;
pub mod error;
pub mod pair;
pub mod presets;
pub mod rule;

pub use abbrev::Abbrev;
pub use config::{load_rule_pair, load_rule_pair_from_reader};
pub use converter::{LocalOffset, TimeConverter};
pub use error::DstError;
pub use pair::DstRulePair;
pub use rule::DstRule;
