use serde::{Deserialize, Serialize};

use super::de::null_as_default;
use super::item::CatalogItem;

/// One item contained in the queried item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsetEntry {
    pub color_id: u32,
    pub quantity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_quantity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_alternate: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_counterpart: bool,
    pub item: CatalogItem,
}

/// Server-side grouping of subset entries by match number. Only used while
/// decoding; callers see the flattened entries.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MatchGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<SubsetEntry>,
}
