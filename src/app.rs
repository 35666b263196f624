//! Product Card Standalone App
//!
//! Demo page used when no `<product-card>` element is on the page: the
//! widget with default configuration, controls that preview the loading and
//! error states, and a cart counter fed by the add-to-cart callback.

use leptos::prelude::*;

use catalog_core::{
    products_url, AddToCart, CartSink, GridView, WidgetConfig, LIST_ERROR_HEADING, SKELETON_CARDS,
};

use crate::cart::DomCartSink;
use crate::components::{GridStateView, ProductWidget};

const DEMO_ERROR_MESSAGE: &str =
    "Unable to connect to the API endpoint. Please check your connection and try again.";

/// What the demo area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoState {
    Products,
    Loading,
    Error,
}

impl DemoState {
    const ALL: [DemoState; 3] = [DemoState::Products, DemoState::Loading, DemoState::Error];

    fn label(self) -> &'static str {
        match self {
            DemoState::Products => "Show Products",
            DemoState::Loading => "Show Loading",
            DemoState::Error => "Show Error",
        }
    }

    fn test_id(self) -> &'static str {
        match self {
            DemoState::Products => "button-show-products",
            DemoState::Loading => "button-show-loading",
            DemoState::Error => "button-show-error",
        }
    }

    /// Canned grid for the preview states; `None` means the live widget
    fn preview(self) -> Option<GridView> {
        match self {
            DemoState::Products => None,
            DemoState::Loading => Some(GridView::Skeleton(SKELETON_CARDS)),
            DemoState::Error => Some(GridView::Failed {
                heading: LIST_ERROR_HEADING,
                message: DEMO_ERROR_MESSAGE.to_string(),
            }),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = WidgetConfig::default();
    let source = products_url(&config.api_base);
    let (cart_count, set_cart_count) = signal(0u32);
    let (demo_state, set_demo_state) = signal(DemoState::Products);

    let dispatch = DomCartSink::window();
    let on_add_to_cart = Callback::new(move |product_id: String| {
        set_cart_count.update(|n| *n += 1);
        dispatch.add_to_cart(AddToCart::new(product_id));
    });
    // Retry from the error preview goes back to the live grid
    let back_to_products = Callback::new(move |_: ()| set_demo_state.set(DemoState::Products));

    view! {
        <div class="product-card-container">
            <header class="detail-header">
                <div>
                    <h1>"Product Catalog"</h1>
                    <p class="muted">"Live products from " {source}</p>
                </div>
                <span class="detail-badge" data-testid="text-cart-count">
                    {move || format!("Cart: {}", cart_count.get())}
                </span>
            </header>

            <div class="actions demo-controls">
                {DemoState::ALL
                    .into_iter()
                    .map(|state| view! {
                        <button
                            class=move || if demo_state.get() == state { "" } else { "outline" }
                            data-testid=state.test_id()
                            on:click=move |_| set_demo_state.set(state)
                        >
                            {state.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match demo_state.get().preview() {
                None => view! {
                    <ProductWidget config=config.clone() on_add_to_cart=on_add_to_cart />
                }
                .into_any(),
                Some(grid) => view! { <GridStateView grid=grid on_retry=back_to_products /> }.into_any(),
            }}
        </div>
    }
}
