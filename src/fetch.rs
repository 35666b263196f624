//! Fetch Hook
//!
//! Binds a `catalog_core::FetchCycle` to a Leptos view: the cycle lives in a
//! `StoredValue` owned by the view, its state is mirrored into a signal.
//! When the view unmounts the stored cycle is disposed, so a response that
//! lands afterwards changes nothing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_core::{fetch_resource, FetchCycle, FetchState, HttpTransport, ResponseShape};

/// State of one fetching view plus its retry control
pub struct FetchHandle<T: Send + Sync + 'static> {
    pub state: ReadSignal<FetchState<T>>,
    pub retry: Callback<()>,
}

/// Fetch `url` whenever it changes; `None` leaves the view `Idle`.
pub fn use_fetch_cycle<S>(url: Signal<Option<String>>) -> FetchHandle<S::Output>
where
    S: ResponseShape + 'static,
    S::Output: Clone + Send + Sync + 'static,
{
    let cycle = StoredValue::new(FetchCycle::<S::Output>::new());
    let (state, set_state) = signal(FetchState::<S::Output>::Idle);

    let run = move |target: Option<String>| {
        let Some(url) = target else {
            return;
        };
        let Some(ticket) = cycle.try_update_value(|c| c.begin()).flatten() else {
            return;
        };
        set_state.set(FetchState::Loading);

        spawn_local(async move {
            let outcome = fetch_resource::<S, _>(&HttpTransport::new(), &url).await;
            let settled = cycle
                .try_update_value(|c| c.complete(ticket, outcome).cloned())
                .flatten();
            if let Some(next) = settled {
                set_state.try_set(next);
            }
        });
    };

    Effect::new(move |_| run(url.get()));

    let retry = Callback::new(move |_: ()| run(url.get_untracked()));

    on_cleanup(move || {
        cycle.try_update_value(|c| c.dispose());
    });

    FetchHandle { state, retry }
}
