//! Render Projections
//!
//! Pure functions from `FetchState` to what a view shows. The Leptos
//! components only lay these out.

use crate::image::{fallback_image, image_for, ImageSize};
use crate::models::{Product, ProductDetails};
use crate::state::FetchState;

/// Placeholder cards shown while the list loads
pub const SKELETON_CARDS: usize = 8;
pub const MAX_STARS: usize = 5;

pub const LIST_ERROR_HEADING: &str = "Failed to load products";
pub const DETAIL_ERROR_HEADING: &str = "Failed to load product";
pub const EMPTY_NOTICE: &str = "No products available";
pub const NOT_FOUND_NOTICE: &str = "Product not found";

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Skeleton(usize),
    Failed { heading: &'static str, message: String },
    Empty,
    Cards(Vec<CardView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub price_label: String,
    pub image_url: String,
    pub stock_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Skeleton,
    Failed { heading: &'static str, message: String },
    NotFound,
    Loaded(Box<DetailModel>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel {
    /// Id sent with add-to-cart
    pub product_id: String,
    pub name: String,
    pub price_label: String,
    pub description: String,
    pub image_url: String,
    pub manufacturer: String,
    pub warranty: String,
    pub rating: String,
    pub filled_stars: usize,
    pub specifications: Vec<(String, String)>,
    pub reviews: Vec<String>,
}

pub fn price_label(price: &str) -> String {
    format!("${}", price)
}

pub fn stock_label(product: &Product) -> &'static str {
    if product.in_stock() {
        "In Stock"
    } else {
        "Available"
    }
}

pub fn card_view(product: &Product) -> CardView {
    CardView {
        id: product.id.clone(),
        name: product.name.clone(),
        price_label: price_label(&product.price),
        image_url: image_for(product),
        stock_label: stock_label(product),
    }
}

pub fn grid_view(state: &FetchState<Vec<Product>>) -> GridView {
    match state {
        FetchState::Idle | FetchState::Loading => GridView::Skeleton(SKELETON_CARDS),
        FetchState::Failed(message) => GridView::Failed {
            heading: LIST_ERROR_HEADING,
            message: message.clone(),
        },
        FetchState::Loaded(products) if products.is_empty() => GridView::Empty,
        FetchState::Loaded(products) => GridView::Cards(products.iter().map(card_view).collect()),
    }
}

pub fn detail_view(state: &FetchState<Option<ProductDetails>>) -> DetailView {
    match state {
        FetchState::Idle | FetchState::Loading => DetailView::Skeleton,
        FetchState::Failed(message) => DetailView::Failed {
            heading: DETAIL_ERROR_HEADING,
            message: message.clone(),
        },
        FetchState::Loaded(None) => DetailView::NotFound,
        FetchState::Loaded(Some(details)) => DetailView::Loaded(Box::new(detail_model(details))),
    }
}

fn detail_model(details: &ProductDetails) -> DetailModel {
    DetailModel {
        product_id: details.product_id.clone(),
        name: details.product.name.clone(),
        price_label: price_label(&details.product.price),
        description: details.description.clone(),
        image_url: fallback_image(&details.product.name, ImageSize::Detail),
        manufacturer: details.manufacturer.clone(),
        warranty: details.warranty.clone(),
        rating: details.rating.clone(),
        filled_stars: filled_stars(&details.rating),
        specifications: details
            .specifications
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        reviews: details.reviews.clone(),
    }
}

/// Leading number of `text`, the way `parseFloat` reads it: "4.5 / 5" is 4.5,
/// "4.5e1" is 45 and "Infinity" is infinite
pub fn parse_rating(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    let sign_len = text.len() - unsigned.len();
    if unsigned.starts_with("Infinity") {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let bytes = unsigned.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };
    let whole = digits(0);
    let mut end = whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return None;
    }
    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut start = end + 1;
        if matches!(bytes.get(start), Some(b'+' | b'-')) {
            start += 1;
        }
        let exponent = digits(start);
        if exponent > 0 {
            end = start + exponent;
        }
    }
    text[..sign_len + end].parse().ok()
}

/// Filled stars for a rating: floor, capped to `MAX_STARS`, never negative
pub fn filled_stars(rating: &str) -> usize {
    match parse_rating(rating) {
        Some(r) if r > 0.0 => (r.floor() as usize).min(MAX_STARS),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_shows_eight_skeletons() {
        assert_eq!(grid_view(&FetchState::Loading), GridView::Skeleton(8));
        assert_eq!(grid_view(&FetchState::Idle), GridView::Skeleton(SKELETON_CARDS));
    }

    #[test]
    fn test_empty_list_shows_notice() {
        assert_eq!(grid_view(&FetchState::Loaded(vec![])), GridView::Empty);
    }

    #[test]
    fn test_failed_keeps_message() {
        let view = grid_view(&FetchState::Failed("HTTP error! status: 502".to_string()));
        assert_eq!(
            view,
            GridView::Failed {
                heading: LIST_ERROR_HEADING,
                message: "HTTP error! status: 502".to_string()
            }
        );
    }

    #[test]
    fn test_card_labels() {
        let mut p = Product::new("9", "Mechanical Keyboard", "129.99");
        p.stock = Some(0);
        let card = card_view(&p);
        assert_eq!(card.price_label, "$129.99");
        assert_eq!(card.stock_label, "Available");
        assert!(card.image_url.contains("photo-1541140532154-b024d705b90a"));

        p.stock = Some(4);
        assert_eq!(card_view(&p).stock_label, "In Stock");
    }

    #[test]
    fn test_parse_rating_like_parse_float() {
        assert_eq!(parse_rating("4.5"), Some(4.5));
        assert_eq!(parse_rating(" 3.9 out of 5"), Some(3.9));
        assert_eq!(parse_rating("5"), Some(5.0));
        assert_eq!(parse_rating(".5"), Some(0.5));
        assert_eq!(parse_rating("-1"), Some(-1.0));
        assert_eq!(parse_rating("n/a"), None);
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("."), None);
    }

    #[test]
    fn test_parse_rating_exponent_and_infinity() {
        assert_eq!(parse_rating("4.5e1"), Some(45.0));
        assert_eq!(parse_rating("2E-1 stars"), Some(0.2));
        assert_eq!(parse_rating("3e"), Some(3.0));
        assert_eq!(parse_rating("3e+x"), Some(3.0));
        assert_eq!(parse_rating("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_rating("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_rating("+4"), Some(4.0));
        assert_eq!(parse_rating("inf"), None);

        assert_eq!(filled_stars("4.5e1"), MAX_STARS);
        assert_eq!(filled_stars("Infinity"), MAX_STARS);
        assert_eq!(filled_stars("-Infinity"), 0);
    }

    #[test]
    fn test_filled_stars() {
        assert_eq!(filled_stars("4.8"), 4);
        assert_eq!(filled_stars("5.0"), 5);
        assert_eq!(filled_stars("7"), 5);
        assert_eq!(filled_stars("0.9"), 0);
        assert_eq!(filled_stars("-2"), 0);
        assert_eq!(filled_stars("unrated"), 0);
    }

    #[test]
    fn test_detail_not_found() {
        assert_eq!(detail_view(&FetchState::Loaded(None)), DetailView::NotFound);
    }

    #[test]
    fn test_detail_model_uses_record_product_id() {
        let mut details = ProductDetails::default();
        details.product_id = "p-42".to_string();
        details.product.name = "Smart Watch".to_string();
        details.product.price = "199".to_string();
        details.specifications.insert("Strap".to_string(), "Silicone".to_string());
        details.specifications.insert("Battery".to_string(), "2 days".to_string());

        let DetailView::Loaded(model) = detail_view(&FetchState::Loaded(Some(details))) else {
            panic!("expected loaded detail view");
        };
        assert_eq!(model.product_id, "p-42");
        assert_eq!(model.price_label, "$199");
        assert!(model.image_url.contains("photo-1523275335684-37898b6baf30"));
        assert_eq!(model.specifications[0].0, "Battery");
    }
}
