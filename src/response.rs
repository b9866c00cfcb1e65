//! Response classification and JSON decoding.
//!
//! The service's prediction/insights/coach schemas are not defined by this
//! crate, so decoding is schema-agnostic: any 2xx JSON body passes through as
//! `serde_json::Value`. 204 and empty bodies decode to `Value::Null` rather
//! than a parse error; non-2xx statuses keep their raw body text for the
//! caller's diagnostics.

use serde_json::Value;

use crate::transport::RawResponse;
use crate::{Error, Result};

/// Classify a raw response and decode its body.
pub fn decode(response: RawResponse) -> Result<Value> {
    if !(200..300).contains(&response.status) {
        return Err(Error::Http {
            status: response.status,
            body: response.body,
        });
    }
    if response.status == 204 || response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body).map_err(Error::decode)
}
