use shared::spin_wheel::Segment;
use yew::prelude::*;

use crate::components::WheelCanvas;
use crate::hooks::use_spin_wheel;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RouletteWheelProps {
    pub segments: Vec<Segment>,
    #[prop_or(300)]
    pub size: u32,
}

/// Hero wheel: spin for a random dish and show what came up.
#[function_component(RouletteWheel)]
pub fn roulette_wheel(props: &RouletteWheelProps) -> Html {
    let wheel = use_spin_wheel(props.segments.clone());

    if wheel.segments.is_empty() {
        return html! {};
    }

    let onclick = {
        let spin = wheel.spin.clone();
        Callback::from(move |_: MouseEvent| spin.emit(()))
    };

    html! {
        <div class="flex flex-col items-center">
            <div class="relative mb-4">
                <WheelCanvas
                    segments={wheel.segments.clone()}
                    angle={wheel.angle}
                    size={props.size}
                    highlight={wheel.result.is_some()}
                />
            </div>

            <div class="mb-4">
                <button class={styles::BUTTON_GOLD} {onclick} disabled={wheel.is_spinning}>
                    if wheel.is_spinning {
                        <span class="flex items-center">
                            <span class="mr-2 inline-block h-4 w-4 rounded-full border-2 border-t-transparent border-black animate-spin"></span>
                            {"Girando..."}
                        </span>
                    } else {
                        {"¡Girar la Ruleta!"}
                    }
                </button>
            </div>

            if let Some(result) = &wheel.result {
                <div class="mt-4 rounded-md bg-red-600 p-3 text-center text-white animate-bounce-once">
                    <p class="text-sm">{"¡Tu comida es:"}</p>
                    <p class="text-xl font-bold">{ format!("{}!", result.segment.label) }</p>
                </div>
            }
        </div>
    }
}
