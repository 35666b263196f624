//! Error Alert Component

use leptos::prelude::*;

/// Destructive alert with a retry button
#[component]
pub fn ErrorAlert(
    heading: &'static str,
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="alert" role="alert">
            <div>
                <p class="alert-heading">{heading}</p>
                <p class="alert-message">{message}</p>
            </div>
            <button
                data-testid="button-retry"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_retry.run(());
                }
            >
                "↻ Retry"
            </button>
        </div>
    }
}
