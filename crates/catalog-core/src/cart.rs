//! Add-to-Cart Port
//!
//! Views never talk to the host page directly; they hand an `AddToCart` to
//! whatever sink they were given. Delivery is fire-and-forget.

use serde::{Deserialize, Serialize};

/// Event name the hosting page listens for
pub const ADD_TO_CART_EVENT: &str = "product-add-to-cart";

/// Payload of the add-to-cart notification: `{ "productId": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub product_id: String,
}

impl AddToCart {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

pub trait CartSink {
    fn add_to_cart(&self, request: AddToCart);
}

impl<F> CartSink for F
where
    F: Fn(AddToCart),
{
    fn add_to_cart(&self, request: AddToCart) {
        self(request)
    }
}
