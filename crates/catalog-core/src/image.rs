//! Image Fallback Resolution
//!
//! Products without an explicit image get a stock photo picked by keyword.

use crate::models::Product;

const PHOTO_HOST: &str = "https://images.unsplash.com";

/// Keyword groups checked in order; the first group with a hit wins.
/// Keywords overlap ("Gaming Mouse"), so the order is part of the contract.
const KEYWORD_PHOTOS: &[(&[&str], &str)] = &[
    (&["headphone", "audio"], "photo-1505740420928-5e560c06d30e"),
    (&["watch"], "photo-1523275335684-37898b6baf30"),
    (&["laptop", "macbook"], "photo-1496181133206-80ce9b88a853"),
    (&["phone", "iphone"], "photo-1511707171634-5f897ff02aa9"),
    (&["mouse"], "photo-1527814050087-3793815479db"),
    (&["keyboard"], "photo-1541140532154-b024d705b90a"),
    (&["tablet", "ipad"], "photo-1544244015-0df4b3ffc6b0"),
    (&["controller", "gaming"], "photo-1593305841991-05c297ba4575"),
];

const DEFAULT_PHOTO: &str = "photo-1560472354-b33ff0c44a43";

/// Crop requested from the photo host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// Grid card, 400x300
    Card,
    /// Detail page, 800x600
    Detail,
}

impl ImageSize {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ImageSize::Card => (400, 300),
            ImageSize::Detail => (800, 600),
        }
    }
}

fn photo_url(photo: &str, size: ImageSize) -> String {
    let (w, h) = size.dimensions();
    format!("{PHOTO_HOST}/{photo}?ixlib=rb-4.0.3&auto=format&fit=crop&w={w}&h={h}")
}

/// Card image: the explicit URL untouched, else the keyword fallback
pub fn image_for(product: &Product) -> String {
    match product.explicit_image() {
        Some(url) => url.to_string(),
        None => fallback_image(&product.name, ImageSize::Card),
    }
}

pub fn fallback_image(name: &str, size: ImageSize) -> String {
    let name = name.to_lowercase();
    let photo = KEYWORD_PHOTOS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map(|(_, photo)| *photo)
        .unwrap_or(DEFAULT_PHOTO);
    photo_url(photo, size)
}

pub fn default_image(size: ImageSize) -> String {
    photo_url(DEFAULT_PHOTO, size)
}
