pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::components::{Footer, Navbar};
use crate::pages::home::Home;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::PAGE}>
            <Navbar />
            <main>
                <Home />
            </main>
            <Footer />
        </div>
    }
}
