use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::errors::Errors;
use crate::services::api::{ApiClient, Location};

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(Vec<Location>),
    Error(String),
}

/// Projects the fetched rows onto the lines the dashboard shows: the
/// location name, one line per row, in response order.
fn display_lines(locations: &[Location]) -> Vec<String> {
    locations
        .iter()
        .map(|location| location.name.clone())
        .collect()
}

#[function_component(Locations)]
pub fn locations() -> Html {
    let state = use_state(|| LoadState::Loading);

    // Single fetch at mount; no polling, no refresh.
    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let api_client = ApiClient::new();

                match api_client.fetch_locations().await {
                    Ok(locations) => {
                        state.set(LoadState::Ready(locations));
                    }
                    Err(e) => {
                        log::error!("Failed to fetch locations: {}", e);
                        state.set(LoadState::Error(format!(
                            "Failed to fetch locations: {}",
                            e
                        )));
                    }
                }
            });

            || ()
        });
    }

    match &*state {
        LoadState::Loading => html! {
            <div class="text-center py-8">
                <p class="text-gray-600 dark:text-gray-400">{"Loading locations…"}</p>
            </div>
        },
        LoadState::Ready(locations) => html! {
            <ul class="locations-list space-y-2">
                { for display_lines(locations).into_iter().map(|name| html! {
                    <li class="p-2 border-b border-gray-200 dark:border-gray-700">{ name }</li>
                }) }
            </ul>
        },
        LoadState::Error(error) => html! {
            <Errors error={error.clone()} />
        },
    }
}
