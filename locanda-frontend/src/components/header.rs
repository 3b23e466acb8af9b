use yew::prelude::*;

// Static banner block; there is no navigation, the dashboard is a
// single render-once view.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="header-content">
                <div class="logo">
                    <h1>{"Locanda"}</h1>
                </div>
                <p class="tagline">{"Restaurant locations near you"}</p>
            </div>
        </header>
    }
}
