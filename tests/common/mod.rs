//! Shared test fixtures for the BrickLink SDK integration tests.
//!
//! Provides `client_with()` which builds a `BricklinkClient` backed by a
//! canned-response transport, plus sample envelopes for each endpoint.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bricklink_sdk::{BricklinkClient, Result, Transport};
use serde_json::{json, Value};
use url::Url;

/// Transport that answers every GET with the same document and records the
/// requested URLs.
pub struct FakeTransport {
    response: Value,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeTransport {
    pub fn recording(response: Value, requests: Arc<Mutex<Vec<String>>>) -> Self {
        Self { response, requests }
    }
}

impl Transport for FakeTransport {
    fn get_json(&self, url: &Url) -> Result<Value> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(self.response.clone())
    }
}

/// Build a client whose every request returns `response`.
///
/// Returns the client and the shared list of requested URLs.
pub fn client_with(response: Value) -> (BricklinkClient, Arc<Mutex<Vec<String>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let client = BricklinkClient::builder()
        .transport(FakeTransport::recording(response, requests.clone()))
        .build()
        .unwrap();
    (client, requests)
}

/// Wrap `data` in a successful envelope.
pub fn ok(data: Value) -> Value {
    json!({
        "meta": { "code": 200, "message": "OK", "description": "OK" },
        "data": data
    })
}

pub fn item_payload() -> Value {
    json!({
        "no": "3001",
        "name": "Brick 2 x 4",
        "type": "PART",
        "category_id": 5,
        "alternate_no": "3001old",
        "image_url": "//img.bricklink.com/PL/3001.jpg",
        "thumbnail_url": "//img.bricklink.com/P/5/3001.jpg",
        "weight": "2.32",
        "dim_x": "4.00",
        "dim_y": "2.00",
        "dim_z": "1.20",
        "year_released": 1954,
        "description": "",
        "is_obsolete": false,
        "language_code": "en"
    })
}

/// Two color groups: color 5 with one entry, color 11 with two.
pub fn superset_payload() -> Value {
    json!([
        {
            "color_id": 5,
            "entries": [
                {
                    "quantity": 2,
                    "appears_as": "R",
                    "item": { "no": "6020-1", "name": "Magic Shop", "type": "SET", "category_id": 67 }
                }
            ]
        },
        {
            "color_id": 11,
            "entries": [
                {
                    "quantity": 1,
                    "appears_as": "A",
                    "item": { "no": "375-2", "name": "Castle", "type": "SET", "category_id": 67 }
                },
                {
                    "quantity": 4,
                    "appears_as": "E",
                    "item": { "no": "cas001", "name": "Knight", "type": "MINIFIG", "category_id": 8 }
                }
            ]
        }
    ])
}

fn subset_entry(no: &str, color_id: u32, quantity: u32) -> Value {
    json!({
        "color_id": color_id,
        "quantity": quantity,
        "extra_quantity": 0,
        "is_alternate": false,
        "is_counterpart": false,
        "item": { "no": no, "name": no, "type": "PART", "category_id": 5 }
    })
}

/// Two match groups of sizes 2 and 3.
pub fn subset_payload() -> Value {
    json!([
        { "match_no": 0, "entries": [subset_entry("3001", 5, 4), subset_entry("3002", 11, 2)] },
        {
            "match_no": 1,
            "entries": [subset_entry("3003", 1, 1), subset_entry("3004", 1, 6), subset_entry("3005", 7, 3)]
        }
    ])
}

pub fn price_guide_payload(details: Value) -> Value {
    json!({
        "item": { "no": "3001", "type": "PART" },
        "new_or_used": "U",
        "currency_code": "USD",
        "min_price": "0.0100",
        "max_price": "1.5000",
        "avg_price": "0.1234",
        "qty_avg_price": "0.0987",
        "unit_quantity": 120,
        "total_quantity": 5400,
        "price_detail": details
    })
}
