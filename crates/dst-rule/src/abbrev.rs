//! Short time zone labels such as `EDT` or `EST`.
//!
//! Historically these were stored in a `char[4]` buffer: three visible
//! characters plus a terminator. `Abbrev` keeps the text as an immutable
//! string instead. The three character width is a convention reported by
//! [`Abbrev::is_conventional`], not a hard limit, so four letter labels such
//! as `AEDT` are representable.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Conventional maximum number of visible characters in an abbreviation.
pub const CONVENTIONAL_MAX_LEN: usize = 3;

/// An immutable zone name abbreviation.
///
/// Borrowed (`'static`) and owned forms of the same text compare, order and
/// hash identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abbrev(Cow<'static, str>);

impl Abbrev {
    /// Wrap a string literal without allocating. Usable in `const` items.
    pub const fn from_static(text: &'static str) -> Self {
        Abbrev(Cow::Borrowed(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes. Valid abbreviations are ASCII, so this is also the
    /// number of characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the label fits the historical 1-3 visible character form.
    pub fn is_conventional(&self) -> bool {
        !self.is_empty() && self.len() <= CONVENTIONAL_MAX_LEN && is_visible_ascii(&self.0)
    }
}

/// Non-empty and made only of visible (graphic) ASCII characters.
pub(crate) const fn is_visible_ascii(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_graphic() {
            return false;
        }
        i += 1;
    }
    true
}

impl From<&str> for Abbrev {
    fn from(text: &str) -> Self {
        Abbrev(Cow::Owned(text.to_string()))
    }
}

impl From<String> for Abbrev {
    fn from(text: String) -> Self {
        Abbrev(Cow::Owned(text))
    }
}

impl AsRef<str> for Abbrev {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Abbrev {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Abbrev {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Abbrev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
