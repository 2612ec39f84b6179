use shared::catalog::MenuItem;
use yew::prelude::*;

use crate::components::WheelCanvas;
use crate::config::{catalog, get_asset_url};
use crate::hooks::use_spin_wheel;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct DeliveryRouletteProps {
    pub on_add: Callback<MenuItem>,
}

/// Spins over the orderable menu; the winning dish can go straight into the cart.
#[function_component(DeliveryRoulette)]
pub fn delivery_roulette(props: &DeliveryRouletteProps) -> Html {
    let segments = catalog()
        .map(|catalog| catalog.delivery_wheel_segments())
        .unwrap_or_default();
    let wheel = use_spin_wheel(segments);

    let Some(catalog) = catalog() else {
        return html! {};
    };

    let onspin = {
        let spin = wheel.spin.clone();
        Callback::from(move |_: MouseEvent| spin.emit(()))
    };

    let winner = wheel
        .result
        .as_ref()
        .and_then(|result| catalog.item(&result.segment.id));

    html! {
        <div class="text-center">
            <div class={classes!(styles::CARD, "mb-8", "border-[#D4AF37]")}>
                <h3 class="mb-4 text-xl font-bold text-white">{"🎲 Ruleta Delivery"}</h3>
                <p class={styles::TEXT_BODY}>
                    {"¿No sabes qué pedir? ¡Deja que la suerte decida! Gira la ruleta y descubre tu próxima comida a domicilio."}
                </p>
            </div>

            <div class="flex flex-col items-center">
                <div class="relative mb-6">
                    <WheelCanvas
                        segments={wheel.segments.clone()}
                        angle={wheel.angle}
                        size={350}
                        highlight={wheel.result.is_some()}
                    />
                </div>

                <button class={classes!(styles::BUTTON_GOLD, "mb-6")} onclick={onspin} disabled={wheel.is_spinning}>
                    if wheel.is_spinning {
                        {"Girando..."}
                    } else {
                        {"¡Girar Ruleta Delivery!"}
                    }
                </button>

                if let Some(item) = winner {
                    { winner_card(item, &props.on_add) }
                }
            </div>
        </div>
    }
}

fn winner_card(item: &MenuItem, on_add: &Callback<MenuItem>) -> Html {
    let onclick = {
        let on_add = on_add.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(item.clone()))
    };

    html! {
        <div class="w-full max-w-md">
            <div class={styles::CARD_RESULT}>
                <div class="mb-4 flex items-center justify-center">
                    <img src={get_asset_url(&item.image)} alt={item.name.clone()} class="h-20 w-20 rounded-full object-cover" />
                </div>
                <p class="text-sm text-gray-300">{"¡Tu comida es:"}</p>
                <h3 class="mb-2 text-xl font-bold text-white">{ format!("{}!", item.name) }</h3>
                <p class="mb-4 text-2xl font-bold text-[#D4AF37]">{ item.formatted_price() }</p>
                <button class={classes!(styles::BUTTON_PRIMARY, "w-full")} {onclick}>
                    {"+ Agregar al Carrito"}
                </button>
            </div>
        </div>
    }
}
