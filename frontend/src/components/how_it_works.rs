use yew::prelude::*;

use crate::components::SectionHeading;
use crate::models::HOW_IT_WORKS;

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="bg-white py-16">
            <div class="max-w-7xl mx-auto px-4 lg:px-8">
                <SectionHeading
                    title="Cómo Funciona"
                    subtitle={Some(AttrValue::from("En RouletteBite, convertimos la elección de comida en una experiencia emocionante de casino."))}
                    light=true
                />
                <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
                    { for HOW_IT_WORKS.iter().enumerate().map(|(i, step)| html! {
                        <div key={step.title} class="overflow-hidden rounded-xl border border-gray-200 bg-white shadow-lg text-black">
                            <div class="relative h-48 overflow-hidden">
                                <img src={step.image} alt={step.title} class="h-full w-full object-cover" />
                                <span class="absolute left-4 top-4 flex h-10 w-10 items-center justify-center rounded-full bg-red-600 font-bold text-white">
                                    { (i + 1).to_string() }
                                </span>
                            </div>
                            <div class="p-6 text-center">
                                <div class="mb-4 text-5xl">{ step.icon }</div>
                                <h3 class="mb-2 text-xl font-bold">{ step.title }</h3>
                                <p class="text-gray-600">{ step.description }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
