use yew::prelude::*;

mod components;
mod services;

use components::{header::Header, locations::Locations};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app">
            <Header />

            <main class="main-content">
                <Locations />
            </main>
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
