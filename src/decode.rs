//! Maps validated `data` payloads onto the catalog models.
//!
//! Each decoder is all-or-nothing: a missing required field anywhere in the
//! payload fails the whole call with [`BricklinkError::MalformedPayload`].
//! Missing optional fields are left unset.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{BricklinkError, Result};
use crate::models::de::null_as_default;
use crate::models::subset::MatchGroup;
use crate::models::{AppearsAs, CatalogItem, PriceGuide, SubsetEntry, SupersetEntry, SupersetGroup};

fn decode<T: DeserializeOwned>(entity: &'static str, data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|e| BricklinkError::payload(entity, e))
}

/// Unrecognized codes still decode; note them so new service values show up
/// in logs.
fn warn_unknown(item: &CatalogItem) {
    if !item.item_type.is_known() {
        tracing::warn!(item_type = %item.item_type, no = %item.no, "unrecognized item type");
    }
}

/// `GET /items/{type}/{no}`
pub fn item(data: Value) -> Result<CatalogItem> {
    let item: CatalogItem = decode("item", data)?;
    warn_unknown(&item);
    Ok(item)
}

/// `GET /items/{type}/{no}/images/{color_id}`
pub fn item_image(data: Value) -> Result<CatalogItem> {
    let item: CatalogItem = decode("item image", data)?;
    warn_unknown(&item);
    Ok(item)
}

#[derive(Deserialize)]
struct RawSupersetGroup {
    color_id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    entries: Vec<RawSupersetEntry>,
}

#[derive(Deserialize)]
struct RawSupersetEntry {
    quantity: u32,
    appears_as: AppearsAs,
    item: CatalogItem,
}

/// `GET /items/{type}/{no}/supersets`
///
/// The group's `color_id` is copied onto every entry's item.
pub fn supersets(data: Value) -> Result<Vec<SupersetGroup>> {
    let raw: Vec<RawSupersetGroup> = decode("superset", data)?;
    let groups: Vec<SupersetGroup> = raw
        .into_iter()
        .map(|group| SupersetGroup {
            color_id: group.color_id,
            entries: group
                .entries
                .into_iter()
                .map(|entry| {
                    warn_unknown(&entry.item);
                    if let AppearsAs::Other(code) = &entry.appears_as {
                        tracing::warn!(appears_as = %code, no = %entry.item.no, "unrecognized appears_as code");
                    }
                    SupersetEntry {
                        quantity: entry.quantity,
                        appears_as: entry.appears_as,
                        item: CatalogItem {
                            color_id: Some(group.color_id),
                            ..entry.item
                        },
                    }
                })
                .collect(),
        })
        .collect();

    tracing::debug!(
        groups = groups.len(),
        entries = groups.iter().map(|g| g.entries.len()).sum::<usize>(),
        "decoded supersets"
    );
    Ok(groups)
}

/// `GET /items/{type}/{no}/subsets`
///
/// Match groups are concatenated in order into one list.
pub fn subsets(data: Value) -> Result<Vec<SubsetEntry>> {
    let groups: Vec<MatchGroup> = decode("subset", data)?;
    let entries: Vec<SubsetEntry> = groups.into_iter().flat_map(|g| g.entries).collect();
    entries.iter().for_each(|e| warn_unknown(&e.item));
    tracing::debug!(entries = entries.len(), "decoded subsets");
    Ok(entries)
}

/// `GET /items/{type}/{no}/price`
pub fn price_guide(data: Value) -> Result<PriceGuide> {
    let guide: PriceGuide = decode("price guide", data)?;
    warn_unknown(&guide.item);
    if !guide.new_or_used.is_known() {
        tracing::warn!(new_or_used = %guide.new_or_used, "unrecognized condition code");
    }
    Ok(guide)
}
