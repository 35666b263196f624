//! Product Details Page Component
//!
//! Detail view for one product id: header with a back button, then the
//! skeleton, error alert, not-found notice or the full product sheet.

use leptos::prelude::*;

use catalog_core::{
    detail_view, product_details_url, DetailModel, DetailView, ImageSize, ProductDetailShape,
    NOT_FOUND_NOTICE,
};

use crate::components::product_card::swap_to_default;
use crate::components::{DetailSkeleton, ErrorAlert, RatingStars};
use crate::context::use_widget_context;
use crate::fetch::{use_fetch_cycle, FetchHandle};

const KEY_FEATURES: [&str; 5] = [
    "High-quality construction and materials",
    "Modern design with attention to detail",
    "Reliable performance for everyday use",
    "Backed by manufacturer warranty",
    "Fast and secure shipping available",
];

#[component]
pub fn ProductDetailsPage(#[prop(into)] product_id: String) -> impl IntoView {
    let ctx = use_widget_context();
    let url = {
        let product_id = product_id.clone();
        Signal::derive(move || product_details_url(&ctx.api_base.get_value(), &product_id))
    };
    // A blank id never fetches and shows "not found" straight away
    let has_id = url.with_untracked(Option::is_some);
    let FetchHandle { state, retry } = use_fetch_cycle::<ProductDetailShape>(url);

    let content = move || {
        let current = if has_id {
            state.with(detail_view)
        } else {
            DetailView::NotFound
        };
        match current {
            DetailView::Skeleton => view! {
                <DetailHeader subtitle=None badge=None />
                <DetailSkeleton />
            }
            .into_any(),
            DetailView::Failed { heading, message } => view! {
                <DetailHeader subtitle=Some("Unable to load product") badge=None />
                <div class="detail-layout">
                    <ErrorAlert heading=heading message=message on_retry=retry />
                </div>
            }
            .into_any(),
            DetailView::NotFound => view! {
                <DetailHeader subtitle=None badge=None />
                <div class="notice" data-testid="text-product-not-found">
                    <p>{NOT_FOUND_NOTICE}</p>
                </div>
            }
            .into_any(),
            DetailView::Loaded(model) => {
                let badge = format!("Product ID: {}", model.product_id);
                view! {
                    <DetailHeader
                        subtitle=Some("View product information and specifications")
                        badge=Some(badge)
                    />
                    <DetailSheet model=*model />
                }
                .into_any()
            }
        }
    };

    view! { <div class="product-details">{content}</div> }
}

/// Back button, title and the optional product id badge
#[component]
fn DetailHeader(subtitle: Option<&'static str>, badge: Option<String>) -> impl IntoView {
    let ctx = use_widget_context();

    view! {
        <header class="detail-header">
            <div>
                <button class="ghost" data-testid="button-back" on:click=move |_| ctx.back_to_grid()>
                    "← Back to Products"
                </button>
                {subtitle.map(|subtitle| view! {
                    <h1>"Product Details"</h1>
                    <p class="muted">{subtitle}</p>
                })}
            </div>
            {badge.map(|badge| view! { <span class="detail-badge">{badge}</span> })}
        </header>
    }
}

#[component]
fn InfoRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="label">{label}</span>
            <span class="value">{value}</span>
        </div>
    }
}

/// Image, information table, specifications, reviews and actions
#[component]
fn DetailSheet(model: DetailModel) -> impl IntoView {
    let ctx = use_widget_context();
    let DetailModel {
        product_id,
        name,
        price_label,
        description,
        image_url,
        manufacturer,
        warranty,
        rating,
        filled_stars,
        specifications,
        reviews,
    } = model;

    let add = {
        let product_id = product_id.clone();
        move |_: web_sys::MouseEvent| ctx.add_to_cart(product_id.clone())
    };

    view! {
        <div class="detail-layout">
            <div class="card detail-image">
                <img
                    src=image_url
                    alt=name.clone()
                    data-testid="img-product-detail"
                    on:error=move |ev| swap_to_default(&ev, ImageSize::Detail)
                />
            </div>

            <div class="detail-info">
                <div>
                    <h2 class="detail-name" data-testid="text-product-name">{name}</h2>
                    <p class="detail-price" data-testid="text-product-price">{price_label.clone()}</p>
                    <p class="muted">{description}</p>
                </div>

                <div class="card card-body">
                    <h3>"Product Information"</h3>
                    <InfoRow label="Product ID" value=product_id />
                    <InfoRow label="Price" value=price_label />
                    <div class="info-row">
                        <span class="label">"Availability"</span>
                        <span class="value available">"Available"</span>
                    </div>
                    <InfoRow label="Manufacturer" value=manufacturer />
                    <InfoRow label="Warranty" value=warranty />
                    <div class="info-row">
                        <span class="label">"Rating"</span>
                        <span class="value">
                            <RatingStars filled=filled_stars />
                            {rating}
                        </span>
                    </div>
                </div>

                <div class="card card-body">
                    <h3>"Specifications"</h3>
                    {specifications
                        .into_iter()
                        .map(|(label, value)| view! { <InfoRow label=label value=value /> })
                        .collect_view()}
                </div>

                {(!reviews.is_empty()).then(move || view! {
                    <div class="card card-body" data-testid="section-reviews">
                        <h3>"Customer Reviews"</h3>
                        {reviews
                            .into_iter()
                            .map(|review| view! { <p class="review">{format!("\"{}\"", review)}</p> })
                            .collect_view()}
                    </div>
                })}

                <div class="actions">
                    <button class="large add" data-testid="button-add-to-cart" on:click=add>
                        "🛒 Add to Cart"
                    </button>
                    <button class="large outline" aria-label="Add to wishlist">"♡"</button>
                </div>

                <div class="card card-body">
                    <h3>"Key Features"</h3>
                    <ul class="muted">
                        {KEY_FEATURES.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
