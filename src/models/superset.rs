use std::fmt;

use serde::{Deserialize, Serialize};

use super::de::null_as_default;
use super::item::CatalogItem;

// ---------------------------------------------------------------------------
// AppearsAs — how a part shows up inside its superset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppearsAs {
    Alternate,
    Counterpart,
    Extra,
    Regular,
    Other(String),
}

impl AppearsAs {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alternate => "A",
            Self::Counterpart => "C",
            Self::Extra => "E",
            Self::Regular => "R",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for AppearsAs {
    fn from(s: String) -> Self {
        match s.as_str() {
            "A" => Self::Alternate,
            "C" => Self::Counterpart,
            "E" => Self::Extra,
            "R" => Self::Regular,
            _ => Self::Other(s),
        }
    }
}

impl From<AppearsAs> for String {
    fn from(a: AppearsAs) -> Self {
        match a {
            AppearsAs::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AppearsAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SupersetEntry / SupersetGroup
// ---------------------------------------------------------------------------

/// One item that contains the queried item.
///
/// `item.color_id` is the color of the enclosing [`SupersetGroup`]; the
/// service does not repeat it per entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupersetEntry {
    pub quantity: u32,
    pub appears_as: AppearsAs,
    pub item: CatalogItem,
}

/// Superset entries that share one color of the queried item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupersetGroup {
    pub color_id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<SupersetEntry>,
}
