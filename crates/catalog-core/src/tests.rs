//! Fetch Cycle Scenario Tests
//!
//! Full round trips against an in-memory transport.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::*;

const BASE: &str = "https://catalog.test";

/// Replays canned responses in order and records every requested URL
#[derive(Default)]
struct StubTransport {
    replies: RefCell<VecDeque<FetchResult<RawResponse>>>,
    requests: RefCell<Vec<String>>,
}

impl StubTransport {
    fn with(replies: impl IntoIterator<Item = FetchResult<RawResponse>>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            requests: RefCell::default(),
        }
    }

    fn ok(body: &str) -> FetchResult<RawResponse> {
        Ok(RawResponse::new(200, body))
    }

    fn status(code: u16) -> FetchResult<RawResponse> {
        Ok(RawResponse::new(code, ""))
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> FetchResult<RawResponse> {
        self.requests.borrow_mut().push(url.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::transport("no reply queued")))
    }
}

async fn load_grid(transport: &StubTransport) -> GridView {
    let state = fetch::<ProductListShape, _>(transport, &products_url(BASE)).await;
    grid_view(&state)
}

#[tokio::test]
async fn test_wrapped_single_product_renders_one_card() {
    let transport = StubTransport::with([StubTransport::ok(
        r#"{"products":[{"id":"1","name":"iPhone 15","price":"999"}]}"#,
    )]);

    let GridView::Cards(cards) = load_grid(&transport).await else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].price_label, "$999");
    assert_eq!(cards[0].image_url, fallback_image("phone", ImageSize::Card));
    assert_eq!(transport.requests(), vec![format!("{}/api/products", BASE)]);
}

#[tokio::test]
async fn test_card_count_matches_input_length() {
    for n in [1usize, 3, 12] {
        let items: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"id":"{i}","name":"Item {i}","price":"{i}.00"}}"#))
            .collect();
        let bare = format!("[{}]", items.join(","));
        let wrapped = format!(r#"{{"products":{bare},"total":{n}}}"#);

        for body in [bare, wrapped] {
            let transport = StubTransport::with([StubTransport::ok(&body)]);
            match load_grid(&transport).await {
                GridView::Cards(cards) => assert_eq!(cards.len(), n),
                other => panic!("expected {} cards, got {:?}", n, other),
            }
        }
    }
}

#[tokio::test]
async fn test_unexpected_shape_fails_with_format_message() {
    let transport = StubTransport::with([StubTransport::ok(r#"{"data":[]}"#)]);
    assert_eq!(
        load_grid(&transport).await,
        GridView::Failed {
            heading: LIST_ERROR_HEADING,
            message: "Invalid response format".to_string()
        }
    );
}

#[tokio::test]
async fn test_empty_response_shows_notice() {
    let transport = StubTransport::with([StubTransport::ok("[]")]);
    assert_eq!(load_grid(&transport).await, GridView::Empty);
}

#[tokio::test]
async fn test_non_2xx_message_contains_status() {
    for code in [301u16, 404, 500, 503] {
        let transport = StubTransport::with([StubTransport::status(code)]);
        let state = fetch::<ProductListShape, _>(&transport, &products_url(BASE)).await;
        let message = state.failure().expect("should fail");
        assert!(message.contains(&code.to_string()), "{}", message);
    }
}

#[tokio::test]
async fn test_transport_error_message_is_kept() {
    let transport = StubTransport::with([Err(FetchError::transport("error sending request"))]);
    let state = fetch::<ProductListShape, _>(&transport, &products_url(BASE)).await;
    assert_eq!(state, FetchState::Failed("error sending request".to_string()));
}

#[tokio::test]
async fn test_retry_after_500_reissues_identical_request() {
    let transport = StubTransport::with([
        StubTransport::status(500),
        StubTransport::ok(r#"[{"id":"1","name":"Watch","price":"50"}]"#),
    ]);
    let url = products_url(BASE);
    let mut cycle = FetchCycle::new();

    let first = cycle.begin().unwrap();
    let outcome = fetch_resource::<ProductListShape, _>(&transport, &url).await;
    let state = cycle.complete(first, outcome).cloned().unwrap();
    assert!(state.failure().unwrap().contains("500"));

    // Retry control
    let second = cycle.begin().unwrap();
    assert!(cycle.state().is_loading());
    let outcome = fetch_resource::<ProductListShape, _>(&transport, &url).await;
    cycle.complete(second, outcome);

    assert_eq!(cycle.state().loaded().map(Vec::len), Some(1));
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn test_overlapping_retries_keep_latest_result() {
    let transport = StubTransport::with([
        StubTransport::ok(r#"[{"id":"old","name":"Old","price":"1"}]"#),
        StubTransport::ok(r#"[{"id":"new","name":"New","price":"2"}]"#),
    ]);
    let url = products_url(BASE);
    let mut cycle = FetchCycle::new();

    let first = cycle.begin().unwrap();
    let second = cycle.begin().unwrap();
    let first_outcome = fetch_resource::<ProductListShape, _>(&transport, &url).await;
    let second_outcome = fetch_resource::<ProductListShape, _>(&transport, &url).await;

    // Second resolves first; the first one arrives late and must not win
    assert!(cycle.complete(second, second_outcome).is_some());
    assert!(cycle.complete(first, first_outcome).is_none());
    assert_eq!(cycle.state().loaded().unwrap()[0].id, "new");
}

#[tokio::test]
async fn test_detail_rating_stars() {
    let body = r#"{
        "id": "d42",
        "productId": "42",
        "description": "Flagship phone",
        "specifications": {"Storage": "256GB"},
        "rating": "4.6",
        "reviews": ["Love it"],
        "manufacturer": "Apple",
        "warranty": "1 year",
        "product": {"id": "42", "name": "iPhone 15 Pro", "price": "1199", "categoryId": "phones"}
    }"#;
    let transport = StubTransport::with([StubTransport::ok(body)]);
    let url = product_details_url(BASE, "42").unwrap();
    let state = fetch::<ProductDetailShape, _>(&transport, &url).await;

    let DetailView::Loaded(model) = detail_view(&state) else {
        panic!("expected loaded detail");
    };
    assert_eq!(model.filled_stars, 4);
    assert_eq!(model.price_label, "$1199");
    assert_eq!(model.reviews.len(), 1);
    assert_eq!(transport.requests(), vec![format!("{}/api/product-details/42", BASE)]);
}

#[tokio::test]
async fn test_detail_rating_is_capped() {
    let transport = StubTransport::with([StubTransport::ok(r#"{"productId":"42","rating":"9.5"}"#)]);
    let url = product_details_url(BASE, "42").unwrap();
    let state = fetch::<ProductDetailShape, _>(&transport, &url).await;
    let DetailView::Loaded(model) = detail_view(&state) else {
        panic!("expected loaded detail");
    };
    assert_eq!(model.filled_stars, MAX_STARS);
}

#[tokio::test]
async fn test_disposed_view_ignores_late_response() {
    let transport = StubTransport::with([StubTransport::ok("[]")]);
    let mut cycle = FetchCycle::new();
    let ticket = cycle.begin().unwrap();

    cycle.dispose();
    let outcome = fetch_resource::<ProductListShape, _>(&transport, &products_url(BASE)).await;
    assert!(cycle.complete(ticket, outcome).is_none());
    assert!(cycle.state().is_loading());
}
