//! Response Shapes
//!
//! Each view plugs in the decoder for the payload it expects.

use serde_json::Value;

use crate::error::{FetchError, FetchResult};
use crate::models::{Product, ProductDetails};

/// Turns a successful response body into a view payload
pub trait ResponseShape {
    type Output;

    fn decode(body: &str) -> FetchResult<Self::Output>;
}

/// `GET /api/products`: a bare array, or an object with a `products` array
pub struct ProductListShape;

impl ResponseShape for ProductListShape {
    type Output = Vec<Product>;

    fn decode(body: &str) -> FetchResult<Vec<Product>> {
        let value: Value = serde_json::from_str(body).map_err(FetchError::decode)?;
        let items = match value {
            Value::Array(_) => value,
            Value::Object(mut fields) => match fields.remove("products") {
                Some(list @ Value::Array(_)) => list,
                _ => return Err(FetchError::InvalidFormat),
            },
            _ => return Err(FetchError::InvalidFormat),
        };
        serde_json::from_value(items).map_err(|_| FetchError::InvalidFormat)
    }
}

/// `GET /api/product-details/{id}`: taken as-is, `null` means no such product.
/// Mistyped fields fall back to defaults; only a body that is not an object
/// fails to decode.
pub struct ProductDetailShape;

impl ResponseShape for ProductDetailShape {
    type Output = Option<ProductDetails>;

    fn decode(body: &str) -> FetchResult<Option<ProductDetails>> {
        let value: Value = serde_json::from_str(body).map_err(FetchError::decode)?;
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value).map(Some).map_err(FetchError::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FetchState;
    use crate::view::{detail_view, DetailView};

    #[test]
    fn test_bare_array() {
        let items = ProductListShape::decode(r#"[{"id":"1","name":"A","price":"1"},{"id":"2","name":"B","price":"2"}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "B");
    }

    #[test]
    fn test_wrapped_array() {
        let body = r#"{"products":[{"id":"1","name":"A","price":"1"}],"total":1,"page":1,"limit":20}"#;
        assert_eq!(ProductListShape::decode(body).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(ProductListShape::decode("[]").unwrap().is_empty());
        assert!(ProductListShape::decode(r#"{"products":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_other_shapes_are_invalid_format() {
        for body in [
            r#"{"items":[]}"#,
            r#"{"products":{"id":"1"}}"#,
            r#""products""#,
            "42",
            "null",
            r#"[{"sku":"1"}]"#,
        ] {
            assert_eq!(ProductListShape::decode(body), Err(FetchError::InvalidFormat), "body: {}", body);
        }
    }

    #[test]
    fn test_non_json_body_is_decode_error() {
        let err = ProductListShape::decode("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_detail_null_is_not_found() {
        assert_eq!(ProductDetailShape::decode("null").unwrap(), None);
    }

    #[test]
    fn test_detail_accepts_partial_object() {
        let details = ProductDetailShape::decode(r#"{"productId":"42"}"#).unwrap().unwrap();
        assert_eq!(details.product_id, "42");
        assert_eq!(details.product.name, "");
    }

    #[test]
    fn test_detail_mistyped_fields_still_render() {
        let body = r#"{
            "productId": "42",
            "specifications": {"Weight": 250, "Color": "Black"},
            "reviews": null,
            "rating": 4.2,
            "product": {"id": 42, "name": "Wireless Headphones", "price": 199.99}
        }"#;
        let details = ProductDetailShape::decode(body).unwrap();
        let DetailView::Loaded(model) = detail_view(&FetchState::Loaded(details)) else {
            panic!("expected a loaded detail view");
        };
        assert_eq!(model.name, "Wireless Headphones");
        assert_eq!(model.price_label, "$199.99");
        assert!(model.reviews.is_empty());
        assert_eq!(
            model.specifications,
            vec![
                ("Color".to_string(), "Black".to_string()),
                ("Weight".to_string(), "250".to_string())
            ]
        );
        assert_eq!(model.filled_stars, 4);
    }

    #[test]
    fn test_detail_null_collections_default() {
        let details = ProductDetailShape::decode(r#"{"productId":"42","reviews":null,"specifications":null,"product":null}"#)
            .unwrap()
            .unwrap();
        assert!(details.reviews.is_empty());
        assert!(details.specifications.is_empty());
        assert_eq!(details.product.name, "");
    }

    #[test]
    fn test_detail_non_object_body_is_decode_error() {
        let err = ProductDetailShape::decode("42").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
