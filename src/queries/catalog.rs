//! Catalog item queries: item details, images, supersets, subsets, and the
//! price guide.

use crate::decode;
use crate::error::Result;
use crate::models::{CatalogItem, ItemType, PriceGuide, SubsetEntry, SupersetGroup};
use crate::url_builder::{Endpoint, PriceGuideParams, SubsetParams, SupersetParams};
use crate::BricklinkClient;

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface for the BrickLink catalog.
///
/// Every method issues exactly one signed GET request.
pub struct CatalogQuery<'a> {
    client: &'a BricklinkClient,
}

impl<'a> CatalogQuery<'a> {
    /// Create a new `CatalogQuery` bound to the given client.
    pub fn new(client: &'a BricklinkClient) -> Self {
        Self { client }
    }

    /// Get the catalog entry for an item.
    pub fn get_item(&self, item_type: &ItemType, no: &str) -> Result<CatalogItem> {
        let data = self.client.fetch(Endpoint::Item { item_type, no })?;
        decode::item(data)
    }

    /// Get the image URLs of an item in one color.
    ///
    /// The returned item carries `color_id`, `thumbnail_url`, `type`, and `no`.
    pub fn get_item_image(
        &self,
        item_type: &ItemType,
        no: &str,
        color_id: u32,
    ) -> Result<CatalogItem> {
        let data = self.client.fetch(Endpoint::ItemImage {
            item_type,
            no,
            color_id,
        })?;
        decode::item_image(data)
    }

    /// List the items that contain this item, grouped by the item's color.
    pub fn get_supersets(
        &self,
        item_type: &ItemType,
        no: &str,
        params: &SupersetParams,
    ) -> Result<Vec<SupersetGroup>> {
        let data = self.client.fetch(Endpoint::Supersets {
            item_type,
            no,
            params,
        })?;
        decode::supersets(data)
    }

    /// List the items this item is made of, in server order.
    pub fn get_subsets(
        &self,
        item_type: &ItemType,
        no: &str,
        params: &SubsetParams,
    ) -> Result<Vec<SubsetEntry>> {
        let data = self.client.fetch(Endpoint::Subsets {
            item_type,
            no,
            params,
        })?;
        decode::subsets(data)
    }

    /// Get price statistics for an item.
    pub fn get_price_guide(
        &self,
        item_type: &ItemType,
        no: &str,
        params: &PriceGuideParams,
    ) -> Result<PriceGuide> {
        let data = self.client.fetch(Endpoint::PriceGuide {
            item_type,
            no,
            params,
        })?;
        decode::price_guide(data)
    }
}
