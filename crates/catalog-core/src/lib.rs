//! Catalog Core
//!
//! Framework-independent half of the product widget:
//! - models: catalog payloads as they arrive from the API
//! - state: `FetchState` and the ticketed `FetchCycle`
//! - shape: pluggable response-shape decoders (list / detail)
//! - transport: HTTP GET abstraction (reqwest in production, stubs in tests)
//! - view: pure render projections of a `FetchState`
//! - image, endpoint, cart, config: small helpers used by the views

mod cart;
mod config;
mod endpoint;
mod error;
mod image;
mod models;
mod shape;
mod state;
mod transport;
mod view;

#[cfg(test)]
mod tests;

pub use cart::{AddToCart, CartSink, ADD_TO_CART_EVENT};
pub use config::{default_api_base, WidgetConfig, ATTR_API_BASE, ATTR_PRODUCT_ID, DEFAULT_API_BASE};
pub use endpoint::{product_details_url, products_url, PRODUCTS_PATH, PRODUCT_DETAILS_PATH};
pub use error::{FetchError, FetchResult};
pub use image::{default_image, fallback_image, image_for, ImageSize};
pub use models::{Product, ProductDetails, ProductListResponse, ProductSummary};
pub use shape::{ProductDetailShape, ProductListShape, ResponseShape};
pub use state::{fetch, fetch_resource, FetchCycle, FetchState, Ticket};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use view::{
    card_view, detail_view, filled_stars, grid_view, parse_rating, price_label, stock_label,
    CardView, DetailModel, DetailView, GridView, DETAIL_ERROR_HEADING, EMPTY_NOTICE,
    LIST_ERROR_HEADING, MAX_STARS, NOT_FOUND_NOTICE, SKELETON_CARDS,
};
