//! Rating Stars Component

use leptos::prelude::*;

use catalog_core::MAX_STARS;

#[component]
pub fn RatingStars(filled: usize) -> impl IntoView {
    view! {
        <span class="stars" aria-label=format!("{} of {} stars", filled.min(MAX_STARS), MAX_STARS)>
            {star_classes(filled)
                .into_iter()
                .map(|class| view! { <span class=class>"★"</span> })
                .collect_view()}
        </span>
    }
}

/// CSS class of each of the `MAX_STARS` stars, filled ones first
pub(crate) fn star_classes(filled: usize) -> Vec<&'static str> {
    (0..MAX_STARS)
        .map(|i| if i < filled { "star filled" } else { "star" })
        .collect()
}
