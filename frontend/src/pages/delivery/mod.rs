mod cart;
mod menu;
mod roulette;

use shared::constants::{DELIVERY_RADIUS, DELIVERY_TIME};
use yew::prelude::*;

use crate::components::SectionHeading;
use crate::hooks::use_cart;
use crate::styles;
use cart::DeliveryCart;
use menu::DeliveryMenu;
use roulette::DeliveryRoulette;

#[derive(Clone, Copy, PartialEq)]
enum DeliveryTab {
    Menu,
    Roulette,
}

const INFO_CARDS: [(&str, &str, &str); 3] = [
    ("🚚", "Envío Gratis", "En pedidos mayores a $25"),
    ("🕒", DELIVERY_TIME, "Tiempo de entrega"),
    ("📍", "Zona de Entrega", DELIVERY_RADIUS),
];

#[function_component(DeliverySection)]
pub fn delivery_section() -> Html {
    let tab = use_state(|| DeliveryTab::Menu);
    let cart = use_cart();

    let tab_button = |target: DeliveryTab, label: &'static str| {
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| tab.set(target))
        };
        let class = if *tab == target { styles::TAB_ACTIVE } else { styles::TAB_INACTIVE };
        html! { <button {class} {onclick}>{ label }</button> }
    };

    html! {
        <section id="delivery" class="bg-black py-16 text-white">
            <div class="max-w-7xl mx-auto px-4 lg:px-8">
                <SectionHeading
                    title="Delivery a Domicilio"
                    subtitle={Some(AttrValue::from("¡Lleva la experiencia RouletteBite a tu hogar! Ordena tu comida favorita o deja que la ruleta decida por ti."))}
                />

                <div class="mb-8 grid grid-cols-1 gap-4 md:grid-cols-3">
                    { for INFO_CARDS.iter().map(|(icon, title, text)| html! {
                        <div key={*title} class="flex items-center rounded-2xl border border-[#D4AF37] bg-neutral-900 p-4">
                            <div class="mr-4 flex h-12 w-12 items-center justify-center rounded-full bg-red-600 text-xl">{ *icon }</div>
                            <div>
                                <h3 class="font-bold text-white">{ *title }</h3>
                                <p class="text-sm text-gray-300">{ *text }</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="mb-8 flex justify-center">
                    <div class="flex space-x-2 rounded-full bg-neutral-900 p-1">
                        { tab_button(DeliveryTab::Menu, "Ver Menú") }
                        { tab_button(DeliveryTab::Roulette, "🎲 Ruleta Delivery") }
                    </div>
                </div>

                <div class="grid grid-cols-1 gap-8 lg:grid-cols-4">
                    <div class="lg:col-span-3">
                        {
                            match *tab {
                                DeliveryTab::Menu => html! { <DeliveryMenu on_add={cart.add.clone()} /> },
                                DeliveryTab::Roulette => html! { <DeliveryRoulette on_add={cart.add.clone()} /> },
                            }
                        }
                    </div>
                    <div class="lg:col-span-1">
                        <DeliveryCart cart={cart.clone()} />
                    </div>
                </div>
            </div>
        </section>
    }
}
