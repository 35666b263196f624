//! Widget Context
//!
//! Shared state provided via Leptos Context API to every view of one widget.

use leptos::prelude::*;

/// Which page the widget is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    Grid,
    Detail(String),
}

/// Widget-wide signals provided via context
#[derive(Clone, Copy)]
pub struct WidgetContext {
    /// API origin for this instance
    pub api_base: StoredValue<String>,
    /// Current page - read
    pub view: ReadSignal<WidgetView>,
    /// Current page - write
    set_view: WriteSignal<WidgetView>,
    /// Injected add-to-cart port
    on_add_to_cart: Callback<String>,
}

impl WidgetContext {
    pub fn new(
        api_base: String,
        view: (ReadSignal<WidgetView>, WriteSignal<WidgetView>),
        on_add_to_cart: Callback<String>,
    ) -> Self {
        Self {
            api_base: StoredValue::new(api_base),
            view: view.0,
            set_view: view.1,
            on_add_to_cart,
        }
    }

    /// Show the detail page for `product_id`
    pub fn open_product(&self, product_id: String) {
        self.set_view.set(WidgetView::Detail(product_id));
    }

    pub fn back_to_grid(&self) {
        self.set_view.set(WidgetView::Grid);
    }

    pub fn add_to_cart(&self, product_id: String) {
        self.on_add_to_cart.run(product_id);
    }
}

pub fn use_widget_context() -> WidgetContext {
    use_context::<WidgetContext>().expect("WidgetContext should be provided")
}
