use yew::prelude::*;

use crate::components::SectionHeading;
use crate::models::{Testimonial, TESTIMONIALS};

fn stars(rating: u8) -> Html {
    html! {
        <div class="mb-4 flex">
            { for (0..5u8).map(|i| {
                let class = if i < rating { "text-[#D4AF37]" } else { "text-gray-300" };
                html! { <span key={i} class={classes!("text-xl", class)}>{"★"}</span> }
            }) }
        </div>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div key={testimonial.name} class="h-full rounded-xl border border-[#D4AF37] bg-white p-6 shadow-md hover:shadow-xl transition-shadow duration-300">
            { stars(testimonial.rating) }
            <p class="mb-4 text-gray-700">{ format!("\"{}\"", testimonial.comment) }</p>
            <div class="flex items-center">
                <div class="mr-3 h-12 w-12 overflow-hidden rounded-full">
                    <img src={testimonial.image} alt={testimonial.name} class="h-full w-full object-cover" />
                </div>
                <div>
                    <span class="block font-medium text-black">{ testimonial.name }</span>
                    <span class="text-sm text-gray-500">{ testimonial.date }</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="bg-white py-16">
            <div class="max-w-7xl mx-auto px-4 lg:px-8">
                <SectionHeading
                    title="Lo Que Dicen Nuestros Clientes"
                    subtitle={Some(AttrValue::from("Descubre por qué nuestros clientes aman la experiencia RouletteBite."))}
                    light=true
                />
                <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                    { for TESTIMONIALS.iter().map(testimonial_card) }
                </div>
            </div>
        </section>
    }
}
