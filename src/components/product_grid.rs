//! Product Grid Component
//!
//! Fetches the product list and lays out skeletons, the error alert,
//! the empty notice or one card per product.

use leptos::prelude::*;

use catalog_core::{grid_view, products_url, GridView, ProductListShape, EMPTY_NOTICE};

use crate::components::{ErrorAlert, ProductCard, SkeletonCard};
use crate::context::use_widget_context;
use crate::fetch::{use_fetch_cycle, FetchHandle};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_widget_context();
    let url = Signal::derive(move || Some(products_url(&ctx.api_base.get_value())));
    let FetchHandle { state, retry } = use_fetch_cycle::<ProductListShape>(url);

    view! {
        {move || view! { <GridStateView grid=state.with(grid_view) on_retry=retry /> }}
    }
}

/// Layout of one `GridView`. Cards need a `WidgetContext`; the other states
/// render anywhere.
#[component]
pub fn GridStateView(grid: GridView, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    match grid {
        GridView::Skeleton(count) => view! {
            <div class="product-grid" data-testid="grid-loading">
                {(0..count).map(|_| view! { <SkeletonCard /> }).collect_view()}
            </div>
        }
        .into_any(),
        GridView::Failed { heading, message } => view! {
            <ErrorAlert heading=heading message=message on_retry=on_retry />
        }
        .into_any(),
        GridView::Empty => view! {
            <div class="notice" data-testid="text-no-products">
                <p>{EMPTY_NOTICE}</p>
            </div>
        }
        .into_any(),
        GridView::Cards(cards) => view! {
            <div class="product-grid" data-testid="grid-products">
                {cards
                    .into_iter()
                    .map(|card| view! { <ProductCard card=card /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
