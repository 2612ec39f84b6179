mod floor_plan;

use chrono::Local;
use shared::constants::RESERVATION_TIME_SLOTS;
use shared::reservation::{PartySize, ReservationStep, ReservationWizard};
use shared::validation::{error_message, validate_phone, validate_reservation_date, validate_time_slot};
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::SectionHeading;
use crate::styles;
use floor_plan::FloorPlan;

fn edit_wizard(wizard: &UseStateHandle<ReservationWizard>, edit: impl FnOnce(&mut ReservationWizard)) {
    let mut next = (**wizard).clone();
    edit(&mut next);
    wizard.set(next);
}

#[function_component(ReservationSection)]
pub fn reservation_section() -> Html {
    let wizard = use_state(ReservationWizard::new);
    let error = use_state(|| None::<&'static str>);
    let name = use_state(String::new);
    let phone = use_state(String::new);

    let today = Local::now().date_naive();

    let on_date = {
        let wizard = wizard.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            match validate_reservation_date(&value, today) {
                Ok(_) => {
                    error.set(None);
                    edit_wizard(&wizard, |w| w.date = value);
                }
                Err(err) => {
                    error.set(Some(error_message(&err)));
                    edit_wizard(&wizard, |w| w.date.clear());
                }
            }
        })
    };

    let on_time = {
        let wizard = wizard.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            match validate_time_slot(&value) {
                Ok(()) => {
                    error.set(None);
                    edit_wizard(&wizard, |w| w.time = value);
                }
                Err(err) => error.set(Some(error_message(&err))),
            }
        })
    };

    let on_table = {
        let wizard = wizard.clone();
        Callback::from(move |id: &'static str| {
            edit_wizard(&wizard, |w| {
                w.toggle_table(id);
            });
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        let error = error.clone();
        let name = name.clone();
        let phone = phone.clone();
        Callback::from(move |_: MouseEvent| {
            if wizard.step == ReservationStep::Confirm {
                if name.trim().is_empty() {
                    error.set(Some("Ingresa tu nombre"));
                    return;
                }
                if let Err(err) = validate_phone(&phone) {
                    error.set(Some(error_message(&err)));
                    return;
                }
            }
            error.set(None);
            edit_wizard(&wizard, |w| {
                w.next_step();
            });
        })
    };

    let on_prev = {
        let wizard = wizard.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            edit_wizard(&wizard, |w| {
                w.prev_step();
            });
        })
    };

    let on_reset = {
        let wizard = wizard.clone();
        let name = name.clone();
        let phone = phone.clone();
        Callback::from(move |_: MouseEvent| {
            name.set(String::new());
            phone.set(String::new());
            edit_wizard(&wizard, ReservationWizard::reset);
        })
    };

    let text_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let body = if let Some(reservation) = wizard.reservation() {
        html! {
            <div class={classes!(styles::CARD, "text-center")}>
                <div class="mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-full bg-green-100 text-2xl">{"✅"}</div>
                <h3 class="mb-2 text-2xl font-bold text-[#D4AF37]">{"¡Reserva Confirmada!"}</h3>
                <p class="mb-6 text-gray-300">
                    { format!(
                        "Tu mesa ha sido reservada exitosamente. Te esperamos el {} a las {} (Mesa {}).",
                        reservation.date,
                        reservation.time,
                        reservation.table.number()
                    ) }
                </p>
                <button class={styles::BUTTON_GOLD} onclick={on_reset}>{"Hacer otra reserva"}</button>
            </div>
        }
    } else {
        match wizard.step {
            ReservationStep::Details => html! {
                <div class={styles::CARD}>
                    <h3 class="mb-6 text-xl font-bold text-white">{"Detalles de la Reserva"}</h3>
                    <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                        <div>
                            <label for="date" class={styles::TEXT_LABEL}>{"Fecha"}</label>
                            <input id="date" type="date" class={styles::INPUT}
                                min={today.format("%Y-%m-%d").to_string()}
                                value={wizard.date.clone()}
                                onchange={on_date} />
                        </div>
                        <div>
                            <label for="time" class={styles::TEXT_LABEL}>{"Hora"}</label>
                            <select id="time" class={styles::INPUT} onchange={on_time}>
                                <option value="" selected={wizard.time.is_empty()} disabled=true>{"Selecciona una hora"}</option>
                                { for RESERVATION_TIME_SLOTS.iter().map(|slot| html! {
                                    <option key={*slot} value={*slot} selected={wizard.time == *slot}>{ *slot }</option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="mt-6">
                        <span class={styles::TEXT_LABEL}>{"Número de Personas"}</span>
                        <div class="mt-2 flex space-x-3">
                            { for PartySize::iter().map(|size| {
                                let onclick = {
                                    let wizard = wizard.clone();
                                    Callback::from(move |_: MouseEvent| edit_wizard(&wizard, |w| w.party = Some(size)))
                                };
                                let class = if wizard.party == Some(size) { styles::CHIP_ACTIVE } else { styles::CHIP_INACTIVE };
                                html! { <button key={size.to_string()} {class} {onclick}>{ size.to_string() }</button> }
                            }) }
                        </div>
                    </div>

                    <div class="mt-8 flex justify-end">
                        <button class={styles::BUTTON_GOLD} onclick={on_next} disabled={!wizard.details_ready()}>
                            {"Continuar"}
                        </button>
                    </div>
                </div>
            },
            ReservationStep::Table => html! {
                <div class={styles::CARD}>
                    <h3 class="mb-6 text-xl font-bold text-white">{"Selecciona tu Mesa"}</h3>
                    <FloorPlan selected={wizard.selected_table} on_select={on_table} />
                    if let Some(table) = wizard.selected_table() {
                        <div class="mb-6 rounded-md bg-[#D4AF37]/10 p-3 text-center">
                            <p class="text-sm font-medium text-gray-200">
                                { format!("Mesa seleccionada: {} (Para {} personas)", table.number(), table.seats) }
                            </p>
                        </div>
                    }
                    <div class="flex justify-between">
                        <button class={styles::BUTTON_SECONDARY} onclick={on_prev}>{"Atrás"}</button>
                        <button class={styles::BUTTON_GOLD} onclick={on_next} disabled={wizard.selected_table.is_none()}>
                            {"Continuar"}
                        </button>
                    </div>
                </div>
            },
            ReservationStep::Confirm => {
                let summary = [
                    ("Fecha:", wizard.date.clone()),
                    ("Hora:", wizard.time.clone()),
                    ("Personas:", wizard.party.map(|p| p.to_string()).unwrap_or_default()),
                    ("Mesa:", wizard.selected_table().map(|t| format!("Mesa {}", t.number())).unwrap_or_default()),
                ];
                html! {
                    <div class={styles::CARD}>
                        <h3 class="mb-6 text-xl font-bold text-white">{"Confirma tu Reserva"}</h3>
                        <div class="mb-8 space-y-4 rounded-md bg-neutral-800 p-4">
                            { for summary.into_iter().map(|(label, value)| html! {
                                <div key={label} class="flex justify-between border-b border-neutral-700 pb-2">
                                    <span class="font-medium text-gray-200">{ label }</span>
                                    <span class="text-gray-300">{ value }</span>
                                </div>
                            }) }
                        </div>
                        <div class="mb-6 space-y-4">
                            <div>
                                <label for="name" class={styles::TEXT_LABEL}>{"Nombre"}</label>
                                <input id="name" class={styles::INPUT} placeholder="Tu nombre completo"
                                    value={(*name).clone()} oninput={text_input(&name)} />
                            </div>
                            <div>
                                <label for="reservation-phone" class={styles::TEXT_LABEL}>{"Teléfono"}</label>
                                <input id="reservation-phone" type="tel" class={styles::INPUT} placeholder="Tu número de teléfono"
                                    value={(*phone).clone()} oninput={text_input(&phone)} />
                            </div>
                        </div>
                        <div class="flex justify-between">
                            <button class={styles::BUTTON_SECONDARY} onclick={on_prev}>{"Atrás"}</button>
                            <button class={styles::BUTTON_GOLD} onclick={on_next}>{"Confirmar Reserva"}</button>
                        </div>
                    </div>
                }
            }
        }
    };

    html! {
        <section id="reservaciones" class="bg-neutral-950 py-16 text-white">
            <div class="max-w-3xl mx-auto px-4 lg:px-8">
                <SectionHeading
                    title="Reserva tu Mesa"
                    subtitle={Some(AttrValue::from("Asegura tu lugar en RouletteBite y prepárate para una experiencia gastronómica única."))}
                />

                <div class="mb-8 flex items-center justify-center">
                    { for ReservationStep::iter().map(|step| {
                        let class = if wizard.complete || step.number() < wizard.step.number() {
                            styles::STEP_DONE
                        } else if step == wizard.step {
                            styles::STEP_ACTIVE
                        } else {
                            styles::STEP_PENDING
                        };
                        html! {
                            <div key={step.number()} class="flex flex-col items-center px-4">
                                <div {class}>{ step.number().to_string() }</div>
                                <span class="mt-2 text-xs text-gray-400">{ step.title() }</span>
                            </div>
                        }
                    }) }
                </div>

                if let Some(message) = *error {
                    <p class={classes!(styles::TEXT_ERROR, "mb-4", "text-center")}>{ message }</p>
                }

                { body }
            </div>
        </section>
    }
}
