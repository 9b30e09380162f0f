//! Request URL construction for the catalog endpoints.
//!
//! Optional query parameters are `Option`s: `None` leaves the parameter out of
//! the query string, while `Some(0)`, `Some(false)` or `Some("")` are sent as
//! given. Parameters are emitted in a fixed order. Enum-valued parameters
//! are sent as their wire code; an `Other` value is sent verbatim.
//!
//! # Example
//!
//! ```rust
//! use bricklink_sdk::url_builder::{Endpoint, SubsetParams};
//! use bricklink_sdk::ItemType;
//! use url::Url;
//!
//! let base = Url::parse("https://api.bricklink.com/api/store/v1").unwrap();
//! let params = SubsetParams { color_id: Some(0), break_minifigs: Some(true), ..Default::default() };
//! let url = Endpoint::Subsets { item_type: &ItemType::Set, no: "6020-1", params: &params }
//!     .url(&base)
//!     .unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "https://api.bricklink.com/api/store/v1/items/SET/6020-1/subsets?color_id=0&break_minifigs=true"
//! );
//! ```

use std::fmt::Display;

use url::Url;

use crate::error::{BricklinkError, Result};
use crate::models::{GuideType, ItemType, NewOrUsed, Vat};

// ---------------------------------------------------------------------------
// Query parameter sets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupersetParams {
    pub color_id: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsetParams {
    pub color_id: Option<u32>,
    /// Whether the set includes the original box.
    pub r#box: Option<bool>,
    /// Whether the set includes the original instructions.
    pub instruction: Option<bool>,
    /// Break minifigs down into their parts.
    pub break_minifigs: Option<bool>,
    /// Break sub-sets down into their parts.
    pub break_subsets: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceGuideParams {
    pub color_id: Option<u32>,
    pub guide_type: Option<GuideType>,
    pub new_or_used: Option<NewOrUsed>,
    /// Only include stores located in this country.
    pub country_code: Option<String>,
    /// Only include stores located in this region.
    pub region: Option<String>,
    /// Currency the prices are returned in.
    pub currency_code: Option<String>,
    pub vat: Option<Vat>,
}

// ---------------------------------------------------------------------------
// UrlBuilder
// ---------------------------------------------------------------------------

/// Appends path segments and optional query parameters to a base URL.
///
/// Methods return `&mut Self` for chaining.
pub struct UrlBuilder {
    base: Url,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl UrlBuilder {
    pub fn new(base: &Url) -> Self {
        Self {
            base: base.clone(),
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Append one path segment. Reserved characters are percent-escaped.
    pub fn segment(&mut self, segment: impl Display) -> &mut Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append `key=value` only when a value was supplied.
    pub fn param<T: Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.query.push((key, v.to_string()));
        }
        self
    }

    pub fn build(&self) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                BricklinkError::InvalidArgument(format!("base URL cannot take a path: {}", self.base))
            })?;
            path.pop_if_empty().extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

/// One of the five catalog endpoints together with its arguments.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    Item {
        item_type: &'a ItemType,
        no: &'a str,
    },
    ItemImage {
        item_type: &'a ItemType,
        no: &'a str,
        color_id: u32,
    },
    Supersets {
        item_type: &'a ItemType,
        no: &'a str,
        params: &'a SupersetParams,
    },
    Subsets {
        item_type: &'a ItemType,
        no: &'a str,
        params: &'a SubsetParams,
    },
    PriceGuide {
        item_type: &'a ItemType,
        no: &'a str,
        params: &'a PriceGuideParams,
    },
}

impl Endpoint<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Item { .. } => "item",
            Self::ItemImage { .. } => "item_image",
            Self::Supersets { .. } => "supersets",
            Self::Subsets { .. } => "subsets",
            Self::PriceGuide { .. } => "price_guide",
        }
    }

    /// Full request URL under `base`.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut b = UrlBuilder::new(base);
        match *self {
            Self::Item { item_type, no } => {
                b.segment("items").segment(item_type).segment(no);
            }
            Self::ItemImage {
                item_type,
                no,
                color_id,
            } => {
                b.segment("items")
                    .segment(item_type)
                    .segment(no)
                    .segment("images")
                    .segment(color_id);
            }
            Self::Supersets {
                item_type,
                no,
                params,
            } => {
                b.segment("items")
                    .segment(item_type)
                    .segment(no)
                    .segment("supersets")
                    .param("color_id", params.color_id);
            }
            Self::Subsets {
                item_type,
                no,
                params,
            } => {
                b.segment("items")
                    .segment(item_type)
                    .segment(no)
                    .segment("subsets")
                    .param("color_id", params.color_id)
                    .param("box", params.r#box)
                    .param("instruction", params.instruction)
                    .param("break_minifigs", params.break_minifigs)
                    .param("break_subsets", params.break_subsets);
            }
            Self::PriceGuide {
                item_type,
                no,
                params,
            } => {
                b.segment("items")
                    .segment(item_type)
                    .segment(no)
                    .segment("price")
                    .param("color_id", params.color_id)
                    .param("guide_type", params.guide_type.as_ref().map(|g| g.as_str()))
                    .param("new_or_used", params.new_or_used.as_ref().map(|n| n.as_str()))
                    .param("country_code", params.country_code.as_deref())
                    .param("region", params.region.as_deref())
                    .param("currency_code", params.currency_code.as_deref())
                    .param("vat", params.vat.as_ref().map(|v| v.as_str()));
            }
        }
        b.build()
    }
}
