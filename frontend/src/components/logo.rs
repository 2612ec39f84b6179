use yew::prelude::*;

/// Half red, half black roulette chip followed by the brand name.
#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <span class="flex items-center space-x-2">
            <span class="relative h-10 w-10 overflow-hidden rounded-full border-2 border-[#D4AF37]">
                <span class="absolute inset-y-0 left-0 w-1/2 bg-red-600"></span>
                <span class="absolute inset-y-0 right-0 w-1/2 bg-black"></span>
                <span class="absolute left-1/2 top-1/2 h-3 w-3 -translate-x-1/2 -translate-y-1/2 rounded-full bg-[#D4AF37]"></span>
            </span>
            <span class="font-serif text-xl font-bold">
                <span class="text-red-600">{"Roulette"}</span>
                <span class="text-[#D4AF37]">{"Bite"}</span>
            </span>
        </span>
    }
}
