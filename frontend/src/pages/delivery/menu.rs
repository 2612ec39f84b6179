use shared::catalog::{CategoryFilter, MenuItem};
use yew::prelude::*;

use crate::config::{catalog, get_asset_url};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct DeliveryMenuProps {
    pub on_add: Callback<MenuItem>,
}

#[function_component(DeliveryMenu)]
pub fn delivery_menu(props: &DeliveryMenuProps) -> Html {
    let filter = use_state(CategoryFilter::default);

    let Some(catalog) = catalog() else {
        return html! {
            <p class={styles::TEXT_ERROR}>{"El menú no está disponible en este momento."}</p>
        };
    };

    let chips = CategoryFilter::options().into_iter().map(|option| {
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(option))
        };
        let class = if *filter == option { styles::CHIP_ACTIVE } else { styles::CHIP_INACTIVE };
        html! {
            <button key={option.to_string()} {class} {onclick}>{ option.to_string() }</button>
        }
    });

    let items = catalog.items_in(*filter);

    html! {
        <div>
            <div class="mb-6 flex flex-wrap justify-center gap-2">
                { for chips }
            </div>

            if items.is_empty() {
                <p class="py-8 text-center text-gray-400">{"No hay platos en esta categoría."}</p>
            } else {
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 xl:grid-cols-3">
                    { for items.into_iter().map(|item| menu_card(item, &props.on_add)) }
                </div>
            }
        </div>
    }
}

fn menu_card(item: &MenuItem, on_add: &Callback<MenuItem>) -> Html {
    let onclick = {
        let on_add = on_add.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(item.clone()))
    };

    html! {
        <div key={item.id.clone()} class={styles::CARD_HOVER}>
            <div class="relative h-40 overflow-hidden">
                <img src={get_asset_url(&item.image)} alt={item.name.clone()} class="h-full w-full object-cover" />
                if item.popular {
                    <span class={styles::BADGE}>{"Popular"}</span>
                }
            </div>
            <div class="p-4">
                <div class="mb-1 flex items-center justify-between">
                    <h3 class="font-bold text-white">{ item.name.clone() }</h3>
                    <span class="text-sm text-[#D4AF37]">{ format!("★ {:.1}", item.rating) }</span>
                </div>
                <p class="mb-3 text-sm text-gray-400">{ item.description.clone() }</p>
                <div class="flex items-center justify-between">
                    <span class={styles::TEXT_PRICE}>{ item.formatted_price() }</span>
                    <button class="rounded-full bg-red-600 px-4 py-1.5 text-sm font-bold text-white hover:bg-red-700" {onclick}>
                        {"+ Agregar"}
                    </button>
                </div>
            </div>
        </div>
    }
}
