//! Catalog API endpoints

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const PRODUCTS_PATH: &str = "/api/products";
pub const PRODUCT_DETAILS_PATH: &str = "/api/product-details";

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn trim_base(base: &str) -> &str {
    base.trim().trim_end_matches('/')
}

pub fn products_url(base: &str) -> String {
    format!("{}{}", trim_base(base), PRODUCTS_PATH)
}

/// Detail URL for `id`; `None` when there is no id to fetch
pub fn product_details_url(base: &str, id: &str) -> Option<String> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    Some(format!(
        "{}{}/{}",
        trim_base(base),
        PRODUCT_DETAILS_PATH,
        utf8_percent_encode(id, SEGMENT)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_url() {
        assert_eq!(products_url("https://shop.example"), "https://shop.example/api/products");
        assert_eq!(products_url("https://shop.example/"), "https://shop.example/api/products");
    }

    #[test]
    fn test_details_url() {
        assert_eq!(
            product_details_url("https://shop.example", "42").as_deref(),
            Some("https://shop.example/api/product-details/42")
        );
    }

    #[test]
    fn test_details_url_escapes_segment() {
        assert_eq!(
            product_details_url("https://shop.example", "a/b c").as_deref(),
            Some("https://shop.example/api/product-details/a%2Fb%20c")
        );
    }

    #[test]
    fn test_missing_id_means_no_fetch() {
        assert_eq!(product_details_url("https://shop.example", ""), None);
        assert_eq!(product_details_url("https://shop.example", "   "), None);
    }
}
