//! `<product-card>` Custom Element
//!
//! Thin adapter between the host page and the widget:
//! - connected: build the shadow root contents and mount a `ProductWidget`
//! - disconnected: drop the mount handle (unmounts, disposes fetch cycles)
//! - observed attribute changed: remount with the new configuration
//!
//! The element class is defined in a small JS snippet because wasm-bindgen
//! cannot subclass `HTMLElement`; it only forwards lifecycle callbacks here.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ShadowRoot};

use catalog_core::WidgetConfig;

use crate::cart::DomCartSink;
use crate::components::ProductWidget;

pub const TAG_NAME: &str = "product-card";

/// Property on the host element holding its instance id
const INSTANCE_KEY: &str = "__productCardInstance";

const WIDGET_CSS: &str = include_str!("../style/widget.css");

#[wasm_bindgen(inline_js = r#"
export function define_widget_element(tag, observed, onConnect, onDisconnect, onAttribute) {
    if (customElements.get(tag)) {
        return false;
    }
    class WidgetElement extends HTMLElement {
        static get observedAttributes() { return observed; }
        constructor() {
            super();
            this.attachShadow({ mode: "open" });
        }
        connectedCallback() { onConnect(this); }
        disconnectedCallback() { onDisconnect(this); }
        attributeChangedCallback(name, oldValue, newValue) {
            onAttribute(this, name, oldValue, newValue);
        }
    }
    customElements.define(tag, WidgetElement);
    return true;
}
"#)]
extern "C" {
    fn define_widget_element(
        tag: &str,
        observed: &js_sys::Array,
        on_connect: &JsValue,
        on_disconnect: &JsValue,
        on_attribute: &JsValue,
    ) -> bool;
}

/// A mounted widget: its host and the Leptos mount handle
struct Mounted {
    host: HtmlElement,
    _handle: Box<dyn Any>,
}

thread_local! {
    static NEXT_INSTANCE: Cell<u32> = const { Cell::new(1) };
    static INSTANCES: RefCell<HashMap<u32, Mounted>> = RefCell::new(HashMap::new());
}

/// Define `<product-card>` once per page
pub fn register() {
    let observed: js_sys::Array = WidgetConfig::observed_attributes()
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect();

    let on_connect = Closure::<dyn FnMut(HtmlElement)>::new(connect);
    let on_disconnect = Closure::<dyn FnMut(HtmlElement)>::new(disconnect);
    let on_attribute = Closure::<dyn FnMut(HtmlElement, String, Option<String>, Option<String>)>::new(
        |host: HtmlElement, name: String, old: Option<String>, new: Option<String>| {
            if !needs_remount(is_mounted(&host), old.as_deref(), new.as_deref()) {
                return;
            }
            tracing::debug!(attribute = %name, "product-card attribute changed, remounting");
            disconnect(host.clone());
            connect(host);
        },
    );

    let defined = define_widget_element(
        TAG_NAME,
        &observed,
        on_connect.as_ref(),
        on_disconnect.as_ref(),
        on_attribute.as_ref(),
    );

    if defined {
        // Lives as long as the element definition, i.e. the page
        on_connect.forget();
        on_disconnect.forget();
        on_attribute.forget();
        tracing::info!(tag = TAG_NAME, "custom element registered");
    } else {
        tracing::debug!(tag = TAG_NAME, "custom element already registered");
    }
}

/// Whether the current document already uses `<product-card>`
pub fn used_on_page() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(TAG_NAME).ok().flatten())
        .is_some()
}

/// Host element of a mounted instance
pub fn host_of(instance: u32) -> Option<HtmlElement> {
    INSTANCES.with(|m| m.borrow().get(&instance).map(|mounted| mounted.host.clone()))
}

fn instance_of(host: &HtmlElement) -> Option<u32> {
    js_sys::Reflect::get(host, &JsValue::from_str(INSTANCE_KEY))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as u32)
}

fn is_mounted(host: &HtmlElement) -> bool {
    instance_of(host).is_some_and(|id| host_of(id).is_some())
}

/// Attribute callbacks also fire while an element already in the page is
/// upgraded, before `connectedCallback`; only a mounted widget remounts.
fn needs_remount(mounted: bool, old: Option<&str>, new: Option<&str>) -> bool {
    mounted && old != new
}

fn connect(host: HtmlElement) {
    if is_mounted(&host) {
        return;
    }
    let Some(shadow) = host.shadow_root() else {
        tracing::warn!("product-card has no shadow root, skipping mount");
        return;
    };
    let container = match prepare_shadow(&shadow) {
        Ok(container) => container,
        Err(e) => {
            tracing::error!(error = ?e, "failed to prepare product-card shadow root");
            return;
        }
    };

    let config = WidgetConfig::from_attributes(|name| host.get_attribute(name));
    let instance = NEXT_INSTANCE.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    if let Err(e) = js_sys::Reflect::set(&host, &JsValue::from_str(INSTANCE_KEY), &JsValue::from(instance)) {
        tracing::warn!(error = ?e, "could not tag product-card host with its instance id");
    }

    tracing::info!(instance, api_base = %config.api_base, product_id = ?config.product_id, "mounting product-card");
    let on_add_to_cart = DomCartSink::for_instance(instance).into_callback();
    let handle = leptos::mount::mount_to(container, move || {
        view! { <ProductWidget config=config on_add_to_cart=on_add_to_cart /> }
    });

    INSTANCES.with(|m| {
        m.borrow_mut().insert(
            instance,
            Mounted {
                host,
                _handle: Box::new(handle),
            },
        )
    });
}

fn disconnect(host: HtmlElement) {
    let Some(instance) = instance_of(&host) else {
        return;
    };
    // Drop outside the borrow: unmounting runs view cleanups
    let removed = INSTANCES.with(|m| m.borrow_mut().remove(&instance));
    if removed.is_some() {
        tracing::info!(instance, "unmounting product-card");
    }
    drop(removed);
}

/// Reset the shadow root to `<style>` + an empty mount container
fn prepare_shadow(shadow: &ShadowRoot) -> Result<HtmlElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    shadow.set_inner_html("");

    let style = document.create_element("style")?;
    style.set_text_content(Some(WIDGET_CSS));
    shadow.append_child(&style)?;

    let container = document.create_element("div")?;
    container.set_class_name("product-card-host");
    shadow.append_child(&container)?;

    container.dyn_into::<HtmlElement>().map_err(JsValue::from)
}
