//! Tri-state flags
//!
//! The acquisition layer hands over boolean-like fields as raw strings, and
//! the same meaning arrives under several encodings ("是" or "1" for yes).
//! Rules compare [`Flag`] values instead of string literals.

use serde::{Deserialize, Serialize};

/// Normalized yes/no field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Flag {
    /// Explicitly affirmative
    Yes,
    /// Explicitly negative
    No,
    /// Absent, blank or not a recognized code
    #[default]
    Unknown,
}

impl Flag {
    /// Parse a generic yes/no field (`是`/`1`/`true`, `否`/`0`/`false`)
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(value) = raw.map(str::trim) else {
            return Self::Unknown;
        };
        match value {
            "是" | "1" => Self::Yes,
            "否" | "0" => Self::No,
            v if v.eq_ignore_ascii_case("true") => Self::Yes,
            v if v.eq_ignore_ascii_case("false") => Self::No,
            _ => Self::Unknown,
        }
    }

    /// Parse the autopsy field (`1` yes, `2` no, `3` or blank not filled in)
    ///
    /// Any other non-blank value counts as an explicit answer.
    pub fn parse_autopsy(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("" | "-" | "3") => Self::Unknown,
            Some("是" | "1") => Self::Yes,
            Some(_) => Self::No,
        }
    }

    /// Whether the flag is explicitly affirmative
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}
