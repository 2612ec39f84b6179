use chrono::{Datelike, Local};
use shared::constants::{OPENING_HOURS, RESTAURANT_ADDRESS, RESTAURANT_EMAIL, RESTAURANT_NAME, RESTAURANT_PHONE};
use yew::prelude::*;

use crate::components::Logo;
use crate::styles;

const QUICK_LINKS: [(&str, &str); 5] = [
    ("Inicio", "#"),
    ("Menú", "#menu"),
    ("Delivery", "#delivery"),
    ("Cómo Funciona", "#how-it-works"),
    ("Reservaciones", "#reservaciones"),
];

const SOCIAL_LINKS: [&str; 3] = ["Facebook", "Instagram", "Twitter"];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class={styles::FOOTER}>
            <div class="max-w-7xl mx-auto px-4 py-12 lg:px-8">
                <div class="grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-4">
                    <div>
                        <a href="#" class="mb-4 inline-flex"><Logo /></a>
                        <p class="mb-4 text-gray-400">
                            {"Donde la emoción del casino se encuentra con la comida rápida. Una experiencia gastronómica única llena de sorpresas."}
                        </p>
                        <div class="flex space-x-4">
                            { for SOCIAL_LINKS.iter().map(|name| html! {
                                <a key={*name} href="#" class={styles::FOOTER_LINK}>{ *name }</a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h3 class="mb-4 text-lg font-bold">{"Enlaces Rápidos"}</h3>
                        <ul class="space-y-2">
                            { for QUICK_LINKS.iter().map(|(label, href)| html! {
                                <li key={*label}><a href={*href} class={styles::FOOTER_LINK}>{ *label }</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3 class="mb-4 text-lg font-bold">{"Contacto"}</h3>
                        <ul class="space-y-3 text-gray-400">
                            <li>{ format!("📍 {}", RESTAURANT_ADDRESS) }</li>
                            <li>{ format!("📞 {}", RESTAURANT_PHONE) }</li>
                            <li>{ format!("✉️ {}", RESTAURANT_EMAIL) }</li>
                        </ul>
                    </div>

                    <div>
                        <h3 class="mb-4 text-lg font-bold">{"Horario"}</h3>
                        <ul class="space-y-2">
                            { for OPENING_HOURS.iter().map(|(days, hours)| html! {
                                <li key={*days} class="flex justify-between text-gray-400">
                                    <span>{ format!("{}:", days) }</span>
                                    <span>{ *hours }</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="mt-12 border-t border-gray-800 pt-8 text-center">
                    <p class="text-sm text-gray-400">
                        { format!("© {} {}. Todos los derechos reservados.", year, RESTAURANT_NAME) }
                    </p>
                </div>
            </div>
        </footer>
    }
}
