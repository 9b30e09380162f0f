//! Response envelope validation.
//!
//! Every BrickLink response wraps its payload as
//! `{"meta": {"code", "message", "description"}, "data": ...}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BricklinkError, Result};

pub const SUCCESS_CODE: i64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub description: String,
}

/// Return the `data` payload of a successful envelope.
///
/// A non-200 `meta.code` becomes [`BricklinkError::Api`]; a document without
/// a usable `meta` object or without `data` is a
/// [`BricklinkError::MalformedResponse`].
pub fn into_data(document: Value) -> Result<Value> {
    let Value::Object(mut fields) = document else {
        return Err(BricklinkError::MalformedResponse(
            "envelope is not a JSON object".to_string(),
        ));
    };

    let meta = fields
        .remove("meta")
        .ok_or_else(|| BricklinkError::MalformedResponse("missing `meta`".to_string()))?;
    let meta: Meta = serde_json::from_value(meta)
        .map_err(|e| BricklinkError::MalformedResponse(format!("invalid `meta`: {e}")))?;

    if meta.code != SUCCESS_CODE {
        tracing::warn!(code = meta.code, message = %meta.message, "BrickLink API error");
        return Err(BricklinkError::Api {
            code: meta.code,
            message: meta.message,
            description: meta.description,
        });
    }

    fields
        .remove("data")
        .ok_or_else(|| BricklinkError::MalformedResponse("missing `data`".to_string()))
}
