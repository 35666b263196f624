//! Skeleton Placeholders
//!
//! Pulsing shapes shown while a fetch is in flight.

use leptos::prelude::*;

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="card">
            <div class="skeleton image"></div>
            <div class="card-body">
                <div class="skeleton line w-3-4"></div>
                <div class="skeleton line w-1-2"></div>
                <div class="card-footer">
                    <div class="skeleton chip"></div>
                    <div class="skeleton button"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="detail-layout" data-testid="detail-loading">
            <div class="skeleton square"></div>
            <div class="detail-info">
                <div>
                    <div class="skeleton line w-3-4"></div>
                    <div class="skeleton line w-1-2"></div>
                    <div class="skeleton line w-full"></div>
                    <div class="skeleton line w-full"></div>
                    <div class="skeleton line w-2-3"></div>
                </div>
                <div class="skeleton button"></div>
            </div>
        </div>
    }
}
