//! Loading rule pairs from JSON configuration.
//!
//! A document holds one pair:
//!
//! ```json
//! {
//!   "start": {"month": 3, "day_of_week": 1, "ordinal": 2, "hour": 2, "offset_minutes": -240, "abbrev": "EDT"},
//!   "end":   {"month": 11, "day_of_week": 1, "ordinal": 1, "hour": 2, "offset_minutes": -300, "abbrev": "EST"}
//! }
//! ```
//!
//! Every rule is validated while deserializing, so a loaded pair obeys the
//! same ranges as one built with [`DstRule::new`](crate::DstRule::new).

use std::io::Read;

use tracing::{debug, warn};

use crate::error::{DstError, Result};
use crate::pair::DstRulePair;

/// Parse a rule pair from a JSON string.
///
/// # Errors
/// Returns `DstError::Config` if the JSON is malformed, has unknown or
/// missing fields, or any rule field is out of range.
pub fn load_rule_pair(json: &str) -> Result<DstRulePair> {
    let pair: DstRulePair = serde_json::from_str(json).map_err(config_error)?;
    log_loaded(&pair);
    Ok(pair)
}

/// Parse a rule pair from a reader (e.g. an open config file).
///
/// # Errors
/// Same as [`load_rule_pair`], plus I/O failures while reading.
pub fn load_rule_pair_from_reader(reader: impl Read) -> Result<DstRulePair> {
    let pair: DstRulePair = serde_json::from_reader(reader).map_err(config_error)?;
    log_loaded(&pair);
    Ok(pair)
}

/// Serialize a rule pair to pretty-printed JSON.
pub fn to_json(pair: &DstRulePair) -> Result<String> {
    serde_json::to_string_pretty(pair).map_err(|e| DstError::Config(e.to_string()))
}

fn config_error(err: serde_json::Error) -> DstError {
    warn!(error = %err, "rejected DST rule configuration");
    DstError::Config(err.to_string())
}

fn log_loaded(pair: &DstRulePair) {
    debug!(
        start = %pair.start(),
        end = %pair.end(),
        observes_dst = pair.observes_dst(),
        "loaded DST rule pair"
    );
}
