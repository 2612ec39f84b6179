use shared::reservation::{Table, FLOOR_PLAN};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct FloorPlanProps {
    pub selected: Option<&'static str>,
    pub on_select: Callback<&'static str>,
}

fn table_style(table: &Table) -> String {
    let (width, height) = table.footprint();
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; transform: rotate({}deg);",
        table.x,
        table.y + 40,
        width,
        height,
        table.rotation
    )
}

#[function_component(FloorPlan)]
pub fn floor_plan(props: &FloorPlanProps) -> Html {
    let legend = [
        ("bg-green-700", "Disponible"),
        ("bg-[#D4AF37]", "Seleccionada"),
        ("bg-red-900", "Ocupada"),
    ];

    html! {
        <div>
            <div class="mb-4 flex items-center justify-center space-x-6">
                { for legend.iter().map(|(color, label)| html! {
                    <div key={*label} class="flex items-center">
                        <div class={classes!("mr-2", "h-4", "w-4", "rounded-full", *color)}></div>
                        <span class="text-sm text-gray-300">{ *label }</span>
                    </div>
                }) }
            </div>

            <div class="relative mx-auto mb-6 h-[300px] w-full max-w-[500px] overflow-hidden rounded-lg border border-neutral-700 bg-neutral-800">
                <div class="absolute left-1/2 top-0 h-8 w-16 -translate-x-1/2 bg-neutral-600 text-center text-xs leading-8 text-gray-200">
                    {"Entrada"}
                </div>
                { for FLOOR_PLAN.iter().map(|table| {
                    let class = if !table.is_available() {
                        styles::TABLE_OCCUPIED
                    } else if props.selected == Some(table.id) {
                        styles::TABLE_SELECTED
                    } else {
                        styles::TABLE_AVAILABLE
                    };
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let id = table.id;
                        Callback::from(move |_: MouseEvent| on_select.emit(id))
                    };
                    html! {
                        <div
                            key={table.id}
                            {class}
                            style={table_style(table)}
                            title={format!("Mesa {}", table.number())}
                            {onclick}
                        >
                            { table.seats.to_string() }
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
