//! Catalog Models
//!
//! Data structures matching the catalog API payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Product summary shown as one card in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    /// Decimal kept as text, displayed as-is
    #[serde(deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            image: None,
            description: None,
            stock: None,
        }
    }

    /// Explicit image URL; only an empty string counts as missing
    pub fn explicit_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }

    pub fn in_stock(&self) -> bool {
        self.stock.is_some_and(|n| n > 0)
    }
}

/// Wrapped list envelope: `{ products, total, page, limit }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Product reference embedded in a detail record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductSummary {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(deserialize_with = "lenient_string")]
    pub category_id: String,
}

/// Full product record for the detail page.
///
/// Every field defaults when missing, `null` or of an unexpected type: the
/// detail endpoint is trusted as-is and a partial record renders partially.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub product_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_map")]
    pub specifications: BTreeMap<String, String>,
    /// Decimal kept as text (e.g. "4.5")
    #[serde(deserialize_with = "lenient_string")]
    pub rating: String,
    #[serde(deserialize_with = "lenient_list")]
    pub reviews: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub manufacturer: String,
    #[serde(deserialize_with = "lenient_string")]
    pub warranty: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub product: ProductSummary,
}

/// Display text of a JSON scalar; `null` is empty, objects and arrays keep
/// their JSON text.
fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accept a JSON string, number, bool or null where the API documents a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_text)
}

/// Object of scalars as text; anything but an object is an empty map.
fn lenient_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(fields) => fields
            .into_iter()
            .map(|(key, value)| (key, value_text(value)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

/// Array of scalars as text; anything but an array is an empty list.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(value_text).collect(),
        _ => Vec::new(),
    })
}

/// `T` when the value fits, `T::default()` for `null` or a mismatch.
fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}
