use yew::prelude::*;

use crate::components::{FeaturedItems, HowItWorks, LocationSection, RouletteWheel, Testimonials};
use crate::config::{catalog, scroll_to_section};
use crate::models::{HERO_BACKGROUND, QUICK_INFO};
use crate::pages::delivery::DeliverySection;
use crate::pages::reservation::ReservationSection;
use crate::styles;

fn scroll_link(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

#[function_component(Hero)]
fn hero() -> Html {
    let segments = catalog()
        .map(|catalog| catalog.hero_wheel_segments())
        .unwrap_or_default();

    html! {
        <section class="relative flex min-h-screen items-center overflow-hidden pt-16">
            <div
                class="absolute inset-0 bg-cover bg-center"
                style={format!("background-image: url('{}');", HERO_BACKGROUND)}
            >
                <div class="absolute inset-0 bg-black/70"></div>
            </div>

            <div class={classes!(styles::CONTAINER_LG, "relative", "z-10", "w-full", "px-4", "py-20", "sm:px-6", "lg:px-8")}>
                <div class="grid grid-cols-1 items-center gap-12 lg:grid-cols-2">
                    <div class="text-center lg:text-left">
                        <h1 class={classes!(styles::TEXT_TITLE, "mb-6", "font-serif", "lg:text-6xl")}>
                            {"Ruleta de "}<span class={styles::TEXT_ACCENT}>{"Sabores"}</span>
                        </h1>
                        <p class={classes!(styles::TEXT_BODY, "mb-8", "text-lg", "md:text-xl")}>
                            {"Una experiencia gastronómica única donde la suerte decide tu comida. Gira la ruleta y descubre tu próximo plato favorito."}
                        </p>
                        <div class="flex flex-col justify-center gap-4 sm:flex-row lg:justify-start">
                            <a href="#delivery" class={styles::BUTTON_PRIMARY} onclick={scroll_link("delivery")}>
                                {"🛵 Pedir Delivery"}
                            </a>
                            <a href="#reservaciones" class={styles::BUTTON_SECONDARY} onclick={scroll_link("reservaciones")}>
                                {"Reservar Mesa"}
                            </a>
                        </div>
                    </div>

                    <div class="flex justify-center">
                        <RouletteWheel {segments} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(QuickInfo)]
fn quick_info() -> Html {
    html! {
        <div class="bg-[#D4AF37] py-4 text-black">
            <div class={classes!(styles::CONTAINER_LG, "flex", "flex-col", "items-center", "justify-around", "gap-3", "px-4", "font-medium", "md:flex-row")}>
                { for QUICK_INFO.iter().map(|(icon, text)| html! {
                    <div key={*text} class="flex items-center">
                        <span class="mr-2">{ *icon }</span>
                        <span>{ *text }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="bg-gradient-to-r from-red-900 to-black py-16 text-center">
            <div class="mx-auto max-w-3xl px-4">
                <h2 class="mb-4 font-serif text-3xl font-bold text-white md:text-4xl">
                    {"¿Listo para probar tu suerte?"}
                </h2>
                <p class={classes!(styles::TEXT_BODY, "mb-8", "text-lg")}>
                    {"Visítanos hoy y deja que la ruleta decida tu próxima comida favorita. ¡La fortuna favorece a los hambrientos!"}
                </p>
                <a href="#reservaciones" class={styles::BUTTON_GOLD} onclick={scroll_link("reservaciones")}>
                    {"Reservar Mesa"}
                </a>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <QuickInfo />
            <HowItWorks />
            <FeaturedItems />
            <LocationSection />
            <DeliverySection />
            <ReservationSection />
            <Testimonials />
            <CallToAction />
        </>
    }
}
