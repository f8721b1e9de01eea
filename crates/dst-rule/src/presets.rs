//! Rule pairs for US zones under the rules in effect since 2007.
//!
//! DST starts on the 2nd Sunday in March and ends on the 1st Sunday in
//! November, both at 02:00 local time.

use crate::pair::DstRulePair;
use crate::rule::DstRule;

pub const US_EASTERN: DstRulePair = DstRulePair::new(
    DstRule::from_static(3, 1, 2, 2, -240, "EDT"),
    DstRule::from_static(11, 1, 1, 2, -300, "EST"),
);

pub const US_CENTRAL: DstRulePair = DstRulePair::new(
    DstRule::from_static(3, 1, 2, 2, -300, "CDT"),
    DstRule::from_static(11, 1, 1, 2, -360, "CST"),
);

pub const US_MOUNTAIN: DstRulePair = DstRulePair::new(
    DstRule::from_static(3, 1, 2, 2, -360, "MDT"),
    DstRule::from_static(11, 1, 1, 2, -420, "MST"),
);

pub const US_PACIFIC: DstRulePair = DstRulePair::new(
    DstRule::from_static(3, 1, 2, 2, -420, "PDT"),
    DstRule::from_static(11, 1, 1, 2, -480, "PST"),
);

/// Arizona stays on MST all year.
pub const US_ARIZONA: DstRulePair = DstRulePair::new(
    DstRule::from_static(3, 1, 2, 2, -420, "MST"),
    DstRule::from_static(3, 1, 2, 2, -420, "MST"),
);

/// All presets with a short name, in declaration order.
pub const ALL: [(&str, DstRulePair); 5] = [
    ("us-eastern", US_EASTERN),
    ("us-central", US_CENTRAL),
    ("us-mountain", US_MOUNTAIN),
    ("us-pacific", US_PACIFIC),
    ("us-arizona", US_ARIZONA),
];

/// Look up a preset by the short names in [`ALL`], ignoring ASCII case.
pub fn by_name(name: &str) -> Option<DstRulePair> {
    ALL.iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
        .map(|(_, pair)| pair.clone())
}
