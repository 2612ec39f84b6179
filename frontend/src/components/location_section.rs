use shared::constants::{MAPS_URL, OPENING_HOURS, RESTAURANT_ADDRESS, RESTAURANT_ADDRESS_HINT, RESTAURANT_PHONE};
use yew::prelude::*;

use crate::components::SectionHeading;
use crate::styles;

fn contact_row(icon: &str, title: &str, body: Html) -> Html {
    html! {
        <div class="mb-6 flex items-start space-x-4">
            <div class="flex h-10 w-10 flex-shrink-0 items-center justify-center rounded-full bg-red-600">
                { icon.to_string() }
            </div>
            <div>
                <h4 class="mb-1 font-medium text-white">{ title.to_string() }</h4>
                { body }
            </div>
        </div>
    }
}

#[function_component(LocationSection)]
pub fn location_section() -> Html {
    html! {
        <section id="ubicacion" class="bg-black py-16 text-white">
            <div class="max-w-7xl mx-auto px-4 lg:px-8">
                <SectionHeading
                    title="Nuestra Ubicación"
                    subtitle={Some(AttrValue::from("Visítanos y vive la experiencia RouletteBite en persona. Estamos ubicados en una zona céntrica de fácil acceso."))}
                />
                <div class="grid grid-cols-1 gap-8 lg:grid-cols-5">
                    <div class="relative flex h-[400px] flex-col items-center justify-center overflow-hidden rounded-xl border border-[#D4AF37]/40 bg-neutral-900 lg:col-span-3">
                        <div class="mb-4 text-6xl">{"📍"}</div>
                        <p class="mb-6 px-6 text-center text-gray-300">{ RESTAURANT_ADDRESS }</p>
                        <a
                            href={MAPS_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center rounded-md bg-[#D4AF37] px-3 py-2 text-sm font-medium text-black shadow-lg transition-colors hover:bg-[#B8860B]"
                        >
                            {"Ver en Google Maps"}
                        </a>
                    </div>

                    <div class="lg:col-span-2">
                        <div class={classes!(styles::CARD, "h-full", "border-[#D4AF37]")}>
                            <h3 class="mb-6 font-serif text-2xl font-bold text-[#D4AF37]">{"Información de Contacto"}</h3>
                            { contact_row("📍", "Dirección", html! {
                                <>
                                    <p class="text-gray-300">{ RESTAURANT_ADDRESS }</p>
                                    <p class="mt-1 text-sm text-gray-400">{ RESTAURANT_ADDRESS_HINT }</p>
                                </>
                            }) }
                            { contact_row("📞", "Reservaciones", html! {
                                <>
                                    <p class="text-gray-300">{ RESTAURANT_PHONE }</p>
                                    <p class="mt-1 text-sm text-gray-400">{"Recomendamos reservar con anticipación"}</p>
                                </>
                            }) }
                            { contact_row("🕒", "Horario de Atención", html! {
                                <div class="space-y-2">
                                    { for OPENING_HOURS.iter().map(|(days, hours)| html! {
                                        <div key={*days} class="flex justify-between border-b border-gray-700 pb-2">
                                            <span class="text-gray-300">{ format!("{}:", days) }</span>
                                            <span class="font-medium text-[#D4AF37]">{ *hours }</span>
                                        </div>
                                    }) }
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
