//! Rule settings
//!
//! Values rules depend on that differ between sites. Deserialized as the
//! `[rules]` table of the application configuration.

use mrqc_domain::constants::SEQUENCE_WINDOW;
use serde::{Deserialize, Serialize};

/// Site-specific rule parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Window length of the simple-sequence heuristic
    pub sequence_window: usize,
    /// City keyword expected in local addresses
    pub local_city: String,
    /// District keywords, any of which marks a same-district address
    pub local_districts: Vec<String>,
    /// Account names that must not appear as the coder
    pub restricted_coders: Vec<String>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            sequence_window: SEQUENCE_WINDOW,
            local_city: "上海".to_string(),
            local_districts: vec!["徐汇".to_string(), "浦东".to_string()],
            restricted_coders: vec!["超级用户".to_string(), "admin".to_string()],
        }
    }
}

impl RuleSettings {
    /// Whether the address names one of the local districts
    pub fn in_district(&self, address: &str) -> bool {
        self.local_districts
            .iter()
            .any(|district| address.contains(district.as_str()))
    }

    /// Whether the address names the local city
    pub fn in_city(&self, address: &str) -> bool {
        address.contains(self.local_city.as_str())
    }

    /// District keywords quoted for messages, e.g. `'徐汇'或'浦东'`
    pub fn districts_quoted(&self) -> String {
        self.local_districts
            .iter()
            .map(|district| format!("'{district}'"))
            .collect::<Vec<_>>()
            .join("或")
    }

    /// Whether `coder` is a restricted account
    pub fn is_restricted_coder(&self, coder: &str) -> bool {
        self.restricted_coders.iter().any(|name| name == coder)
    }
}
