use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

// Default URLs
pub static DEFAULT_BASE_URL: &str = "https://api.chapa.co";

// Endpoints
pub static INITIALIZE_PAYMENT_PATH: &str = "/v1/transaction/initialize";
pub static VERIFY_PAYMENT_PATH: &str = "/v1/transaction/verify";
pub static TRANSFERS_PATH: &str = "/v1/transfers";
pub static BULK_TRANSFERS_PATH: &str = "/v1/bulk-transfers";
pub static TRANSACTIONS_PATH: &str = "/v1/transactions";
pub static BANKS_PATH: &str = "/v1/banks";

// Status reported by Chapa when an operation went through
pub static SUCCESS_STATUS: &str = "success";

/// Deserializes `null` into the default value of `T`.
///
/// Chapa sends `"data": null` on most failures; combined with `#[serde(default)]` this makes
/// absent and null fields behave the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a free-form JSON object, turning anything else (`null`, `[]`, ...) into `None`.
pub(crate) fn object_or_none<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(map.into_iter().collect()),
        _ => None,
    })
}
