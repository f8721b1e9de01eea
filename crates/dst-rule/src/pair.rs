//! The start/end pair of rules that together describe one zone's DST.

use serde::{Deserialize, Serialize};

use crate::rule::DstRule;

/// Exactly one start-of-DST rule and one end-of-DST rule.
///
/// Like [`DstRule`], a pair is immutable once built and is normally a
/// `const` per zone (see [`crate::presets`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DstRulePair {
    start: DstRule,
    end: DstRule,
}

impl DstRulePair {
    pub const fn new(start: DstRule, end: DstRule) -> Self {
        DstRulePair { start, end }
    }

    /// A zone that never observes DST: both transitions use the same rule,
    /// so the offset and label never change.
    pub fn standard_only(rule: DstRule) -> Self {
        DstRulePair {
            start: rule.clone(),
            end: rule,
        }
    }

    /// The change into daylight time.
    pub fn start(&self) -> &DstRule {
        &self.start
    }

    /// The change back to standard time.
    pub fn end(&self) -> &DstRule {
        &self.end
    }

    /// False when both transitions are the same rule.
    pub fn observes_dst(&self) -> bool {
        self.start != self.end
    }

    /// Rule whose offset and label apply during daylight time.
    pub fn dst_rule(&self) -> &DstRule {
        &self.start
    }

    /// Rule whose offset and label apply during standard time.
    pub fn std_rule(&self) -> &DstRule {
        &self.end
    }
}
