use std::fmt;

use serde::{Deserialize, Serialize};

use super::de::{null_as_default, Decimal};

// ---------------------------------------------------------------------------
// ItemType — catalog item kind
// ---------------------------------------------------------------------------

/// The kind of a catalog item.
///
/// Unrecognized wire values are kept in [`ItemType::Other`] so that new item
/// types added by the service still decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Minifig,
    Part,
    Set,
    Book,
    Gear,
    Catalog,
    Instruction,
    UnsortedLot,
    OriginalBox,
    Other(String),
}

impl ItemType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Minifig => "MINIFIG",
            Self::Part => "PART",
            Self::Set => "SET",
            Self::Book => "BOOK",
            Self::Gear => "GEAR",
            Self::Catalog => "CATALOG",
            Self::Instruction => "INSTRUCTION",
            Self::UnsortedLot => "UNSORTED_LOT",
            Self::OriginalBox => "ORIGINAL_BOX",
            Self::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "MINIFIG" => Self::Minifig,
            "PART" => Self::Part,
            "SET" => Self::Set,
            "BOOK" => Self::Book,
            "GEAR" => Self::Gear,
            "CATALOG" => Self::Catalog,
            "INSTRUCTION" => Self::Instruction,
            "UNSORTED_LOT" => Self::UnsortedLot,
            "ORIGINAL_BOX" => Self::OriginalBox,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for ItemType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ItemType> for String {
    fn from(t: ItemType) -> Self {
        match t {
            ItemType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CatalogItem — one catalog entry
// ---------------------------------------------------------------------------

/// A catalog entry. Only `no` and `type` are guaranteed; every other field
/// depends on which endpoint produced the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub no: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim_x: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim_y: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim_z: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_released: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_obsolete: bool,
}

impl CatalogItem {
    /// A bare item reference with every optional field unset.
    pub fn new(item_type: ItemType, no: impl Into<String>) -> Self {
        Self {
            no: no.into(),
            item_type,
            color_id: None,
            name: None,
            category_id: None,
            alternate_no: None,
            image_url: None,
            thumbnail_url: None,
            weight: None,
            dim_x: None,
            dim_y: None,
            dim_z: None,
            year_released: None,
            description: None,
            language_code: None,
            is_obsolete: false,
        }
    }
}
