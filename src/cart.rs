//! DOM Cart Dispatch
//!
//! `CartSink` implementation for the browser: the add-to-cart request becomes
//! a bubbling, composed `CustomEvent` so listeners outside the shadow root see
//! it. Mounted custom elements dispatch on their host element, the standalone
//! page dispatches on `window`.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, EventTarget};

use catalog_core::{AddToCart, CartSink, ADD_TO_CART_EVENT};

use crate::element;

/// Dispatches on the host of element `instance`, or on `window` when `None`
#[derive(Debug, Clone, Copy)]
pub struct DomCartSink {
    instance: Option<u32>,
}

impl DomCartSink {
    pub fn for_instance(instance: u32) -> Self {
        Self {
            instance: Some(instance),
        }
    }

    pub fn window() -> Self {
        Self { instance: None }
    }

    /// Wrap as the callback the widget components take
    pub fn into_callback(self) -> Callback<String> {
        Callback::new(move |product_id: String| self.add_to_cart(AddToCart::new(product_id)))
    }

    fn target(&self) -> Option<EventTarget> {
        match self.instance {
            Some(id) => element::host_of(id).map(Into::into),
            None => web_sys::window().map(Into::into),
        }
    }
}

impl CartSink for DomCartSink {
    fn add_to_cart(&self, request: AddToCart) {
        let Some(target) = self.target() else {
            tracing::warn!(product_id = %request.product_id, "no target for add-to-cart event");
            return;
        };
        if let Err(e) = dispatch(&target, &request) {
            tracing::error!(product_id = %request.product_id, error = ?e, "add-to-cart dispatch failed");
        } else {
            tracing::debug!(product_id = %request.product_id, "add-to-cart dispatched");
        }
    }
}

fn dispatch(target: &EventTarget, request: &AddToCart) -> Result<(), JsValue> {
    let detail = serde_wasm_bindgen::to_value(request)?;
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(ADD_TO_CART_EVENT, &init)?;
    target.dispatch_event(&event)?;
    Ok(())
}
