//! Product Card Component
//!
//! One product in the grid. Clicking the image or the name opens the
//! detail page; the add-to-cart button does not.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use catalog_core::{default_image, CardView, ImageSize};

use crate::context::use_widget_context;

#[component]
pub fn ProductCard(card: CardView) -> impl IntoView {
    let ctx = use_widget_context();
    let CardView {
        id,
        name,
        price_label,
        image_url,
        stock_label,
    } = card;

    let open = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| ctx.open_product(id.clone())
    };
    let add = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.add_to_cart(id.clone());
        }
    };

    view! {
        <div class="card interactive" data-testid=format!("card-product-{}", id)>
            <div class="card-image" on:click=open.clone()>
                <img
                    src=image_url
                    alt=name.clone()
                    data-testid=format!("img-product-{}", id)
                    on:error=move |ev| swap_to_default(&ev, ImageSize::Card)
                />
            </div>
            <div class="card-body">
                <h3 class="card-title" data-testid=format!("text-product-name-{}", id) on:click=open>
                    {name}
                </h3>
                <p class="card-price" data-testid=format!("text-product-price-{}", id)>
                    {price_label}
                </p>
                <div class="card-footer">
                    <span class="muted">{stock_label}</span>
                    <button data-testid=format!("button-add-to-cart-{}", id) on:click=add>
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// `<img>` error handler: show the default photo instead of a broken image.
/// The default itself failing leaves it alone, so this fires at most once.
pub(crate) fn swap_to_default(ev: &web_sys::Event, size: ImageSize) {
    let Some(img) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };
    let fallback = default_image(size);
    if img.src() != fallback {
        tracing::debug!(failed = %img.src(), "product image failed, using default");
        img.set_src(&fallback);
    }
}
