use yew::prelude::*;

use crate::components::SectionHeading;
use crate::config::{catalog, get_asset_url};
use crate::styles;

#[function_component(FeaturedItems)]
pub fn featured_items() -> Html {
    let Some(catalog) = catalog() else {
        return html! {};
    };

    html! {
        <section id="menu" class="bg-black py-16 text-white">
            <div class="max-w-7xl mx-auto px-4 lg:px-8">
                <SectionHeading
                    title="Nuestros Platos Estrella"
                    subtitle={Some(AttrValue::from("Cada plato es una apuesta segura. Descubre las especialidades que hacen girar la ruleta."))}
                />
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                    { for catalog.featured().into_iter().map(|featured| html! {
                        <div key={featured.item.id.clone()} class={styles::CARD_HOVER}>
                            <div class="relative h-48 overflow-hidden">
                                <img
                                    src={get_asset_url(&featured.item.image)}
                                    alt={featured.item.name.clone()}
                                    class="h-full w-full object-cover transition-transform duration-500 hover:scale-110"
                                />
                                if let Some(badge) = featured.badge {
                                    <span class={styles::BADGE}>{ badge.to_string() }</span>
                                }
                            </div>
                            <div class="p-6">
                                <div class="mb-2 flex items-center justify-between">
                                    <h3 class={styles::TEXT_H3}>{ featured.item.name.clone() }</h3>
                                    <span class={styles::TEXT_PRICE}>{ featured.item.formatted_price() }</span>
                                </div>
                                <p class={styles::TEXT_SMALL}>{ featured.description.to_string() }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
