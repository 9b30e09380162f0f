use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::de::{loose_bool, null_as_default, Decimal};
use super::item::CatalogItem;

// ---------------------------------------------------------------------------
// Query enums
// ---------------------------------------------------------------------------

/// Closed set of documented codes plus `Other` holding any unrecognized wire
/// value verbatim, serialized as the bare wire string.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(s) => s,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                match v {
                    $name::Other(s) => s,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Which statistics the price guide covers.
    pub enum GuideType {
        /// Last six months of sales.
        Sold => "sold",
        /// Items currently for sale.
        Stock => "stock",
    }
}

wire_enum! {
    pub enum NewOrUsed {
        New => "N",
        Used => "U",
    }
}

wire_enum! {
    /// Whether prices include VAT from VAT-enabled stores.
    pub enum Vat {
        Exclude => "N",
        Include => "Y",
        /// Norway VAT.
        Norway => "O",
    }
}

// ---------------------------------------------------------------------------
// PriceDetail — one listing or one past sale
// ---------------------------------------------------------------------------

/// A lot currently offered for sale (`guide_type=stock`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(deserialize_with = "loose_bool")]
    pub shipping_available: bool,
}

/// A completed sale (`guide_type=sold`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDetail {
    pub quantity: u32,
    pub unit_price: Decimal,
    pub seller_country_code: String,
    pub buyer_country_code: String,
    pub date_ordered: DateTime<Utc>,
}

/// A price-guide record. The service does not tag the record kind, so the
/// variant is chosen from the fields present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PriceDetail {
    Listing(ListingDetail),
    Sale(SaleDetail),
}

const SALE_FIELDS: [&str; 3] = ["date_ordered", "seller_country_code", "buyer_country_code"];
const LISTING_FIELDS: [&str; 1] = ["shipping_available"];

impl<'de> Deserialize<'de> for PriceDetail {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let has_any = |fields: &[&str]| fields.iter().any(|f| record.contains_key(*f));

        if has_any(&SALE_FIELDS) {
            serde_json::from_value(record.into())
                .map(PriceDetail::Sale)
                .map_err(de::Error::custom)
        } else if has_any(&LISTING_FIELDS) {
            serde_json::from_value(record.into())
                .map(PriceDetail::Listing)
                .map_err(de::Error::custom)
        } else {
            Err(de::Error::custom(
                "price detail has neither sale fields nor `shipping_available`",
            ))
        }
    }
}

impl PriceDetail {
    pub fn quantity(&self) -> u32 {
        match self {
            Self::Listing(d) => d.quantity,
            Self::Sale(d) => d.quantity,
        }
    }

    pub fn unit_price(&self) -> &Decimal {
        match self {
            Self::Listing(d) => &d.unit_price,
            Self::Sale(d) => &d.unit_price,
        }
    }
}

// ---------------------------------------------------------------------------
// PriceGuide — aggregate statistics for one item/color/condition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceGuide {
    pub item: CatalogItem,
    pub new_or_used: NewOrUsed,
    pub currency_code: String,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub avg_price: Decimal,
    pub qty_avg_price: Decimal,
    pub unit_quantity: u32,
    pub total_quantity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_detail: Vec<PriceDetail>,
}
