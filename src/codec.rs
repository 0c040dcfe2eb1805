//! JSON encoding of stored records, with the fallbacks the data layer relies
//! on when a blob is missing or unreadable.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::coerce;

pub fn encode<T: Serialize + ?Sized>(record: &T) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

/// Decode a list blob. Absent text, text that is not JSON, or JSON that is
/// not an array yields an empty list. Inside an array each record decodes on
/// its own, so one bad element never costs the others.
pub fn decode_collection<T: DeserializeOwned>(key: &str, raw: Option<String>) -> Vec<T> {
    let Some(text) = raw else {
        return Vec::new();
    };

    match decode::<Value>(&text) {
        Ok(Value::Array(elements)) => {
            let total = elements.len();
            let items: Vec<T> = coerce::items(Value::Array(elements));
            if items.len() < total {
                tracing::warn!(
                    "Dropped {} unreadable record(s) from {}",
                    total - items.len(),
                    key
                );
            }
            items
        }
        Ok(_) => {
            tracing::warn!("Discarding {} blob that is not a list", key);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("Discarding malformed {} blob: {}", key, e);
            Vec::new()
        }
    }
}

/// Decode a singleton blob. Absent, `null` or malformed text yields `None`.
pub fn decode_singleton<T: DeserializeOwned>(key: &str, raw: Option<String>) -> Option<T> {
    let text = raw?;

    match decode::<Option<T>>(&text) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("Discarding malformed {} blob: {}", key, e);
            None
        }
    }
}
