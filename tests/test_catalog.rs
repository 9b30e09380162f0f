//! Tests for the catalog query interface over a canned-response transport.

mod common;

use bricklink_sdk::{
    AppearsAs, BricklinkClient, BricklinkError, CatalogItem, Decimal, GuideType, ItemType, NewOrUsed,
    PriceDetail, PriceGuideParams, SubsetParams, SupersetParams,
};
use common::{
    client_with, item_payload, ok, price_guide_payload, subset_payload, superset_payload, FakeTransport,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

const BASE: &str = "https://api.bricklink.com/api/store/v1";

// ---------------------------------------------------------------------------
// get_item
// ---------------------------------------------------------------------------

#[test]
fn get_item_decodes_every_field() {
    let (client, requests) = client_with(ok(item_payload()));
    let item = client.catalog().get_item(&ItemType::Part, "3001").unwrap();

    assert_eq!(requests.lock().unwrap().as_slice(), [format!("{BASE}/items/PART/3001")]);
    assert_eq!(item.no, "3001");
    assert_eq!(item.item_type, ItemType::Part);
    assert_eq!(item.name.as_deref(), Some("Brick 2 x 4"));
    assert_eq!(item.category_id, Some(5));
    assert_eq!(item.weight, Some(Decimal::from("2.32")));
    assert_eq!(item.dim_z, Some(Decimal::from("1.20")));
    assert_eq!(item.year_released, Some(1954));
    assert_eq!(item.language_code.as_deref(), Some("en"));
    assert!(!item.is_obsolete);
    assert_eq!(item.color_id, None);
}

#[test]
fn get_item_without_weight_keeps_other_fields() {
    let mut payload = item_payload();
    payload.as_object_mut().unwrap().remove("weight");
    let (client, _) = client_with(ok(payload));

    let item = client.catalog().get_item(&ItemType::Part, "3001").unwrap();
    assert_eq!(item.weight, None);
    assert_eq!(item.name.as_deref(), Some("Brick 2 x 4"));
    assert_eq!(item.dim_x, Some(Decimal::from("4.00")));
    assert_eq!(item.alternate_no.as_deref(), Some("3001old"));
}

#[test]
fn get_item_without_no_is_malformed_payload() {
    let mut payload = item_payload();
    payload.as_object_mut().unwrap().remove("no");
    let (client, _) = client_with(ok(payload));

    let err = client.catalog().get_item(&ItemType::Part, "3001").unwrap_err();
    assert!(matches!(err, BricklinkError::MalformedPayload { entity: "item", .. }));
}

#[test]
fn get_item_preserves_unknown_type() {
    let (client, _) = client_with(ok(json!({ "no": "x1", "type": "HOLOGRAM" })));
    let item = client.catalog().get_item(&ItemType::Part, "x1").unwrap();
    assert_eq!(item.item_type, ItemType::Other("HOLOGRAM".to_string()));
    assert!(!item.item_type.is_known());
    assert_eq!(serde_json::to_value(&item).unwrap()["type"], "HOLOGRAM");
}

#[test]
fn item_round_trip_keeps_every_source_field() {
    let source = item_payload();
    let (client, _) = client_with(ok(source.clone()));
    let item = client.catalog().get_item(&ItemType::Part, "3001").unwrap();

    let reserialized = serde_json::to_value(&item).unwrap();
    for (key, value) in source.as_object().unwrap() {
        assert_eq!(&reserialized[key.as_str()], value, "field {key}");
    }
}

#[test]
fn item_round_trip_keeps_numeric_dimensions_numeric() {
    let source = json!({
        "no": "3001", "type": "PART",
        "weight": 2.32, "dim_x": 4, "dim_y": 2, "dim_z": 1.2
    });
    let (client, _) = client_with(ok(source.clone()));
    let item = client.catalog().get_item(&ItemType::Part, "3001").unwrap();
    assert_eq!(item.weight.as_ref().and_then(Decimal::to_f64), Some(2.32));

    let reserialized = serde_json::to_value(&item).unwrap();
    for key in ["weight", "dim_x", "dim_y", "dim_z"] {
        assert!(reserialized[key].is_number(), "field {key}");
        assert_eq!(reserialized[key], source[key], "field {key}");
    }
}

#[test]
fn null_is_obsolete_reads_as_false() {
    let (client, _) = client_with(ok(json!({ "no": "3001", "type": "PART", "is_obsolete": null })));
    let item = client.catalog().get_item(&ItemType::Part, "3001").unwrap();
    assert!(!item.is_obsolete);
}

#[test]
fn sparse_item_round_trip_adds_no_optional_fields() {
    let (client, _) = client_with(ok(json!({ "no": "3001", "type": "PART", "name": "Brick" })));
    let item = client.catalog().get_item(&ItemType::Part, "3001").unwrap();
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        json!({ "no": "3001", "type": "PART", "name": "Brick", "is_obsolete": false })
    );
}

#[test]
fn api_error_is_surfaced() {
    let (client, _) = client_with(json!({
        "meta": { "code": 404, "message": "RESOURCE_NOT_FOUND", "description": "no such item" },
        "data": {}
    }));
    let err = client.catalog().get_item(&ItemType::Part, "nope").unwrap_err();
    assert!(err.is_not_found());
}

// ---------------------------------------------------------------------------
// get_item_image
// ---------------------------------------------------------------------------

#[test]
fn get_item_image_decodes_color_and_thumbnail() {
    let (client, requests) = client_with(ok(json!({
        "color_id": 11,
        "thumbnail_url": "//img.bricklink.com/P/11/3001.jpg",
        "type": "PART",
        "no": "3001"
    })));
    let item = client.catalog().get_item_image(&ItemType::Part, "3001", 11).unwrap();

    assert_eq!(requests.lock().unwrap()[0], format!("{BASE}/items/PART/3001/images/11"));
    assert_eq!(item.color_id, Some(11));
    assert_eq!(item.thumbnail_url.as_deref(), Some("//img.bricklink.com/P/11/3001.jpg"));
    assert_eq!(item.name, None);
}

// ---------------------------------------------------------------------------
// get_supersets
// ---------------------------------------------------------------------------

#[test]
fn supersets_inject_group_color_into_items() {
    let (client, requests) = client_with(ok(superset_payload()));
    let groups = client
        .catalog()
        .get_supersets(&ItemType::Part, "3001", &SupersetParams::default())
        .unwrap();

    assert_eq!(requests.lock().unwrap()[0], format!("{BASE}/items/PART/3001/supersets"));
    assert_eq!(groups.len(), 2);
    assert_eq!(groups.iter().map(|g| g.entries.len()).sum::<usize>(), 3);

    assert_eq!(groups[0].color_id, 5);
    assert_eq!(groups[0].entries[0].item.color_id, Some(5));
    assert_eq!(groups[0].entries[0].appears_as, AppearsAs::Regular);

    let eleven = &groups[1];
    assert_eq!(eleven.color_id, 11);
    assert!(eleven.entries.iter().all(|e| e.item.color_id == Some(11)));
    assert_eq!(eleven.entries[0].appears_as, AppearsAs::Alternate);
    assert_eq!(eleven.entries[1].appears_as, AppearsAs::Extra);
    assert_eq!(eleven.entries[1].quantity, 4);
    assert_eq!(eleven.entries[1].item.item_type, ItemType::Minifig);
}

#[test]
fn supersets_send_color_filter() {
    let (client, requests) = client_with(ok(json!([])));
    let groups = client
        .catalog()
        .get_supersets(&ItemType::Part, "3001", &SupersetParams { color_id: Some(0) })
        .unwrap();
    assert!(groups.is_empty());
    assert_eq!(requests.lock().unwrap()[0], format!("{BASE}/items/PART/3001/supersets?color_id=0"));
}

#[test]
fn supersets_group_without_color_is_malformed() {
    let (client, _) = client_with(ok(json!([{ "entries": [] }])));
    let err = client
        .catalog()
        .get_supersets(&ItemType::Part, "3001", &SupersetParams::default())
        .unwrap_err();
    assert!(matches!(err, BricklinkError::MalformedPayload { .. }));
}

#[test]
fn unknown_appears_as_is_preserved() {
    let (client, _) = client_with(ok(json!([{
        "color_id": 1,
        "entries": [{ "quantity": 1, "appears_as": "Z", "item": { "no": "1", "type": "SET" } }]
    }])));
    let groups = client
        .catalog()
        .get_supersets(&ItemType::Part, "3001", &SupersetParams::default())
        .unwrap();
    assert_eq!(groups[0].entries[0].appears_as, AppearsAs::Other("Z".to_string()));
}

// ---------------------------------------------------------------------------
// get_subsets
// ---------------------------------------------------------------------------

#[test]
fn subsets_are_flattened_in_order() {
    let (client, requests) = client_with(ok(subset_payload()));
    let params = SubsetParams { break_minifigs: Some(true), ..Default::default() };
    let entries = client.catalog().get_subsets(&ItemType::Set, "6020-1", &params).unwrap();

    assert_eq!(
        requests.lock().unwrap()[0],
        format!("{BASE}/items/SET/6020-1/subsets?break_minifigs=true")
    );
    let nos: Vec<&str> = entries.iter().map(|e| e.item.no.as_str()).collect();
    assert_eq!(nos, ["3001", "3002", "3003", "3004", "3005"]);
    assert_eq!(entries[1].color_id, 11);
    assert_eq!(entries[3].quantity, 6);
}

#[test]
fn subset_flags_decode() {
    let (client, _) = client_with(ok(json!([{
        "match_no": 3,
        "entries": [{
            "color_id": 0,
            "quantity": 1,
            "extra_quantity": 2,
            "is_alternate": true,
            "is_counterpart": false,
            "item": { "no": "970c00", "type": "PART" }
        }]
    }])));
    let entries = client
        .catalog()
        .get_subsets(&ItemType::Minifig, "cas001", &SubsetParams::default())
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].extra_quantity, 2);
    assert!(entries[0].is_alternate);
    assert!(!entries[0].is_counterpart);
}

#[test]
fn subsets_empty_groups_yield_nothing() {
    let (client, _) = client_with(ok(json!([{ "match_no": 0, "entries": [] }])));
    let entries = client
        .catalog()
        .get_subsets(&ItemType::Set, "1-1", &SubsetParams::default())
        .unwrap();
    assert!(entries.is_empty());
}

// ---------------------------------------------------------------------------
// get_price_guide
// ---------------------------------------------------------------------------

#[test]
fn price_guide_with_listings() {
    let (client, requests) = client_with(ok(price_guide_payload(json!([
        { "quantity": 10, "unit_price": "0.0500", "shipping_available": true },
        { "quantity": 2, "unit_price": "0.0700", "shipping_available": "N" }
    ]))));
    let params = PriceGuideParams {
        guide_type: Some(GuideType::Stock),
        new_or_used: Some(NewOrUsed::Used),
        ..Default::default()
    };
    let guide = client.catalog().get_price_guide(&ItemType::Part, "3001", &params).unwrap();

    assert_eq!(
        requests.lock().unwrap()[0],
        format!("{BASE}/items/PART/3001/price?guide_type=stock&new_or_used=U")
    );
    assert_eq!(guide.item, CatalogItem::new(ItemType::Part, "3001"));
    assert_eq!(guide.new_or_used, NewOrUsed::Used);
    assert_eq!(guide.currency_code, "USD");
    assert_eq!(guide.avg_price.as_text(), Some("0.1234"));
    assert_eq!(guide.qty_avg_price.to_f64(), Some(0.0987));
    assert_eq!(guide.unit_quantity, 120);
    assert_eq!(guide.total_quantity, 5400);

    assert_eq!(guide.price_detail.len(), 2);
    match &guide.price_detail[1] {
        PriceDetail::Listing(l) => {
            assert_eq!(l.quantity, 2);
            assert!(!l.shipping_available);
        }
        other => panic!("expected listing, got {other:?}"),
    }
    assert_eq!(guide.price_detail[0].unit_price().to_string(), "0.0500");
}

#[test]
fn price_guide_keeps_unknown_condition_code() {
    let mut payload = price_guide_payload(json!([]));
    payload["new_or_used"] = json!("X");
    let (client, requests) = client_with(ok(payload));
    let params = PriceGuideParams {
        guide_type: Some(GuideType::from("weekly")),
        new_or_used: Some(NewOrUsed::from("X")),
        ..Default::default()
    };
    let guide = client.catalog().get_price_guide(&ItemType::Part, "3001", &params).unwrap();

    assert_eq!(
        requests.lock().unwrap()[0],
        format!("{BASE}/items/PART/3001/price?guide_type=weekly&new_or_used=X")
    );
    assert_eq!(guide.new_or_used, NewOrUsed::Other("X".to_string()));
    assert!(!guide.new_or_used.is_known());
}

#[test]
fn price_guide_with_sales() {
    let (client, _) = client_with(ok(price_guide_payload(json!([
        {
            "quantity": 3,
            "unit_price": "0.1100",
            "seller_country_code": "CZ",
            "buyer_country_code": "US",
            "date_ordered": "2024-03-01T08:30:00.000Z"
        }
    ]))));
    let params = PriceGuideParams { guide_type: Some(GuideType::Sold), ..Default::default() };
    let guide = client.catalog().get_price_guide(&ItemType::Part, "3001", &params).unwrap();

    match &guide.price_detail[0] {
        PriceDetail::Sale(s) => {
            assert_eq!(s.seller_country_code, "CZ");
            assert_eq!(s.buyer_country_code, "US");
            assert_eq!(s.date_ordered.to_rfc3339(), "2024-03-01T08:30:00+00:00");
        }
        other => panic!("expected sale, got {other:?}"),
    }
    assert_eq!(guide.price_detail[0].quantity(), 3);
}

#[test]
fn price_guide_numeric_prices_are_accepted() {
    let mut payload = price_guide_payload(json!([]));
    payload["min_price"] = json!(0.01);
    let (client, _) = client_with(ok(payload));
    let guide = client
        .catalog()
        .get_price_guide(&ItemType::Part, "3001", &PriceGuideParams::default())
        .unwrap();
    assert_eq!(guide.min_price.to_f64(), Some(0.01));
    assert!(guide.price_detail.is_empty());
}

#[test]
fn price_guide_missing_aggregate_is_malformed() {
    let mut payload = price_guide_payload(json!([]));
    payload.as_object_mut().unwrap().remove("avg_price");
    let (client, _) = client_with(ok(payload));
    let err = client
        .catalog()
        .get_price_guide(&ItemType::Part, "3001", &PriceGuideParams::default())
        .unwrap_err();
    assert!(matches!(err, BricklinkError::MalformedPayload { entity: "price guide", .. }));
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[test]
fn each_call_issues_exactly_one_request() {
    let (client, requests) = client_with(ok(item_payload()));
    client.catalog().get_item(&ItemType::Part, "3001").unwrap();
    client.catalog().get_item(&ItemType::Part, "3001").unwrap();
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[test]
fn custom_base_url_is_used() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let client = BricklinkClient::builder()
        .base_url("http://localhost:9999/api/store/v1")
        .transport(FakeTransport::recording(ok(item_payload()), requests.clone()))
        .build()
        .unwrap();
    client.catalog().get_item(&ItemType::Set, "10179-1").unwrap();
    assert_eq!(requests.lock().unwrap()[0], "http://localhost:9999/api/store/v1/items/SET/10179-1");
    assert_eq!(client.to_string(), "BricklinkClient(base_url=http://localhost:9999/api/store/v1)");
}

#[test]
fn build_without_credentials_or_transport_fails() {
    let err = BricklinkClient::builder().build().unwrap_err();
    assert!(matches!(err, BricklinkError::InvalidArgument(_)));
}

#[test]
fn build_with_bad_base_url_fails() {
    let err = BricklinkClient::builder()
        .base_url("not a url")
        .transport(FakeTransport::recording(json!({}), Default::default()))
        .build()
        .unwrap_err();
    assert!(matches!(err, BricklinkError::InvalidUrl(_)));
}
