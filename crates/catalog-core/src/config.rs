//! Widget Configuration
//!
//! Compiled-in default origin, optionally overridden at build time by
//! `PRODUCT_CARD_API_BASE` and at runtime by element attributes.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://13b25d97-e1b6-4387-8784-f994731917e9-00-om5kx3mzfcvd.worf.repl.co";

/// Attribute overriding the API origin
pub const ATTR_API_BASE: &str = "api-base";
/// Attribute opening the widget on one product's detail page
pub const ATTR_PRODUCT_ID: &str = "product-id";

pub fn default_api_base() -> String {
    option_env!("PRODUCT_CARD_API_BASE")
        .filter(|base| !base.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub api_base: String,
    pub product_id: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            product_id: None,
        }
    }
}

impl WidgetConfig {
    /// Build from element attributes; blank values fall back to defaults
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();
        if let Some(base) = present(ATTR_API_BASE) {
            config.api_base = base;
        }
        config.product_id = present(ATTR_PRODUCT_ID);
        config
    }

    pub fn observed_attributes() -> [&'static str; 2] {
        [ATTR_API_BASE, ATTR_PRODUCT_ID]
    }
}
