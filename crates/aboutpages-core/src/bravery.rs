//! Global shields defaults as pushed on `bravery-defaults-updated`

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{AdControl, CookieControl};

/// Feature-default toggles owned by the browser's resource engine.
///
/// Every field is optional: an absent field renders as "unset" (unchecked
/// checkbox, no select value) until the browser pushes a value. A field
/// holding a value this page does not understand reads as unset too, so the
/// rest of the push still applies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BraveryDefaults {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub ad_control: Option<AdControl>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cookie_control: Option<CookieControl>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub https_everywhere: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub safe_browsing: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub no_script: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub flash: Option<bool>,
}

/// Read a field as `Some` only when it has the expected shape
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => {
            tracing::debug!("Ignoring unrecognized bravery default: {}", value);
            Ok(None)
        }
    }
}
