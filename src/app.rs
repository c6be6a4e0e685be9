/// Main application entry point for the review board.
/// Starts exactly one review load when the root view is first displayed
/// and re-renders the table when it resolves.
use leptos::*;
use leptos::logging::{error, log};
use leptos_meta::*;
use leptos_router::*;

use crate::api::{self, LoadError};
use crate::components::reviews_table::ReviewsTable;
use crate::models::review::Review;
use crate::utils::leptos_owner::with_owner_safe;

/// Load status of the review collection, tracked explicitly so a failed
/// load is distinguishable from "nothing loaded yet".
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Pending,
    Loaded(Vec<Review>),
    Failed(LoadError),
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/review-board.css"/>
        <Title text="Product Reviews"/>
        <Router>
            <Routes>
                <Route path="" view=ReviewBoard/>
            </Routes>
        </Router>
    }
}

/// True while a resolved load may still be applied: the view is live and
/// no newer load has started since. The guard values are owned by the view
/// scope, so the reads must survive its disposal.
fn load_still_current(
    disposed: StoredValue<bool>,
    generation: StoredValue<u32>,
    this_generation: u32,
) -> bool {
    !disposed.try_get_value().unwrap_or(true)
        && generation.try_get_value() == Some(this_generation)
}

/// Root view: holds the review snapshot and swaps it wholesale on each
/// successful load.
#[component]
pub fn ReviewBoard() -> impl IntoView {
    let (load_state, set_load_state) = create_signal(LoadState::Pending);

    // Stale-result guards: a resolved fetch only applies if the view is
    // still mounted and no newer load has started since.
    let owner = Owner::current();
    let generation = store_value(0u32);
    let disposed = store_value(false);
    on_cleanup(move || disposed.set_value(true));

    let start_load = move || {
        let this_generation = generation.get_value() + 1;
        generation.set_value(this_generation);
        set_load_state.set(LoadState::Pending);

        spawn_local(async move {
            let result = api::fetch_reviews().await;

            if !load_still_current(disposed, generation, this_generation) {
                log!(
                    "[LOAD] Discarding stale load result (generation {})",
                    this_generation
                );
                return;
            }

            with_owner_safe(owner, "apply review load result", move || match result {
                Ok(reviews) => set_load_state.set(LoadState::Loaded(reviews)),
                Err(err) => {
                    error!("[LOAD] Review load failed: {}", err);
                    set_load_state.set(LoadState::Failed(err));
                }
            });
        });
    };

    // Fetch-on-mount: one load per view activation, never repeated on its
    // own. Effects do not run during server rendering, so the fetch only
    // ever starts in the browser.
    create_effect(move |_| start_load());

    view! {
        <div class="review-board">
            <h2>{ "WhatsApp Product Reviews" }</h2>
            {move || match load_state.get() {
                LoadState::Pending => view! {
                    <p class="load-status">{ "Loading reviews..." }</p>
                }.into_view(),
                LoadState::Failed(err) => view! {
                    <div class="load-error">
                        <p>{ format!("Failed to load reviews: {}", err) }</p>
                        <button on:click=move |_| start_load()>{ "Retry" }</button>
                    </div>
                }.into_view(),
                LoadState::Loaded(_) => ().into_view(),
            }}
            {move || {
                let reviews = match load_state.get() {
                    LoadState::Loaded(reviews) => reviews,
                    // Pending and Failed render the header-only table.
                    _ => Vec::new(),
                };
                view! { <ReviewsTable reviews=reviews /> }
            }}
        </div>
    }
}
