//! UI Components
//!
//! Leptos components of the product widget.

mod error_alert;
mod product_card;
mod product_details;
mod product_grid;
mod product_widget;
mod rating_stars;
mod skeleton;

pub use error_alert::ErrorAlert;
pub use product_card::ProductCard;
pub use product_details::ProductDetailsPage;
pub use product_grid::{GridStateView, ProductGrid};
pub use product_widget::ProductWidget;
pub use rating_stars::RatingStars;
pub use skeleton::{DetailSkeleton, SkeletonCard};
