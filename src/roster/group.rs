use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

fn default_color() -> String { "#808080".to_string() }

/// A parliamentary group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyGroup {
    pub code: String,
    pub name: String,
    /// Display order, lowest first.
    #[serde(default)]
    pub rank: u32,
    #[serde(default = "default_color")]
    pub color: String,
}

/// Filter key for group membership. Deputies whose group code does not
/// resolve to a known group share the `Unaffiliated` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    Group(Arc<str>),
    Unaffiliated,
}

impl GroupKey {
    pub fn group(code: &str) -> Self { GroupKey::Group(Arc::from(code)) }

    pub fn code(&self) -> Option<&str> {
        match self {
            GroupKey::Group(code) => Some(code),
            GroupKey::Unaffiliated => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Group(code) => f.write_str(code),
            GroupKey::Unaffiliated => f.write_str("unaffiliated"),
        }
    }
}
