//! Product Widget Component
//!
//! Root of one widget instance: provides `WidgetContext` and switches
//! between the product grid and a product detail page.

use leptos::prelude::*;

use catalog_core::WidgetConfig;

use crate::components::{ProductDetailsPage, ProductGrid};
use crate::context::{WidgetContext, WidgetView};

/// A configured product catalog: grid first, or a detail page when
/// `config.product_id` is set
#[component]
pub fn ProductWidget(
    config: WidgetConfig,
    #[prop(into)] on_add_to_cart: Callback<String>,
) -> impl IntoView {
    let WidgetConfig {
        api_base,
        product_id,
    } = config;
    let initial = product_id.map(WidgetView::Detail).unwrap_or(WidgetView::Grid);
    let (current_view, set_current_view) = signal(initial);

    provide_context(WidgetContext::new(
        api_base,
        (current_view, set_current_view),
        on_add_to_cart,
    ));

    view! {
        <div class="product-card-container">
            {move || match current_view.get() {
                WidgetView::Grid => view! { <ProductGrid /> }.into_any(),
                WidgetView::Detail(id) => view! { <ProductDetailsPage product_id=id /> }.into_any(),
            }}
        </div>
    }
}
