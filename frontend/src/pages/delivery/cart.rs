use gloo_timers::callback::Timeout;
use shared::cart::{format_price, CartLine, CheckoutForm, CheckoutStage, Order};
use shared::constants::ORDER_CONFIRMATION_MS;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::hooks::CartHandle;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct DeliveryCartProps {
    pub cart: CartHandle,
}

#[function_component(DeliveryCart)]
pub fn delivery_cart(props: &DeliveryCartProps) -> Html {
    let cart = &props.cart;
    let lines = cart.order.cart.lines();
    let total_items = cart.order.cart.total_items();

    let on_checkout = {
        let open = cart.open_checkout.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    };

    html! {
        <div class="sticky top-20">
            <div class={classes!(styles::CARD, "border-[#D4AF37]")}>
                <div class="mb-4 flex items-center justify-between text-white">
                    <h3 class="flex items-center text-lg font-bold">{"🛒 Mi Carrito"}</h3>
                    if total_items > 0 {
                        <span class="flex h-6 w-6 items-center justify-center rounded-full bg-red-600 text-xs text-white">
                            { total_items.to_string() }
                        </span>
                    }
                </div>

                if lines.is_empty() {
                    <div class="py-8 text-center text-gray-400">
                        <div class="mb-4 text-5xl">{"🛒"}</div>
                        <p>{"Tu carrito está vacío"}</p>
                        <p class="text-sm">{"¡Agrega algunos productos!"}</p>
                    </div>
                } else {
                    <div class="space-y-4">
                        { for lines.iter().map(|line| cart_line(line, cart)) }
                    </div>

                    <div class="my-4 h-px bg-gray-700"></div>
                    { totals(cart.order.cart.subtotal_cents(), cart.order.cart.delivery_fee_cents(), cart.order.cart.total_cents()) }

                    <button class={classes!(styles::BUTTON_GOLD, "mt-4", "w-full")} onclick={on_checkout}>
                        {"💳 Proceder al Pago"}
                    </button>
                }
            </div>

            <CheckoutModal cart={cart.clone()} />
        </div>
    }
}

fn cart_line(line: &CartLine, cart: &CartHandle) -> Html {
    let change = |quantity: u32| {
        let update = cart.update_quantity.clone();
        let id = line.id.clone();
        Callback::from(move |_: MouseEvent| update.emit((id.clone(), quantity)))
    };
    let on_remove = {
        let remove = cart.remove.clone();
        let id = line.id.clone();
        Callback::from(move |_: MouseEvent| remove.emit(id.clone()))
    };

    html! {
        <div key={line.id.clone()} class="flex items-center space-x-3 rounded-lg bg-neutral-800 p-3">
            <img src={get_asset_url(&line.image)} alt={line.name.clone()} class="h-12 w-12 rounded-lg object-cover" />
            <div class="flex-1">
                <h4 class="text-sm font-medium text-white">{ line.name.clone() }</h4>
                <p class="text-sm text-[#D4AF37]">{ format_price(line.price_cents) }</p>
            </div>
            <div class="flex items-center space-x-2">
                <button class={styles::BUTTON_SMALL} onclick={change(line.quantity.saturating_sub(1))}>{"−"}</button>
                <span class="text-white">{ line.quantity.to_string() }</span>
                <button class={styles::BUTTON_SMALL} onclick={change(line.quantity.saturating_add(1))}>{"+"}</button>
                <button class={classes!(styles::BUTTON_SMALL, "text-red-500")} onclick={on_remove}>{"🗑"}</button>
            </div>
        </div>
    }
}

fn totals(subtotal: u32, fee: u32, total: u32) -> Html {
    let fee_label = if fee == 0 { "Gratis".to_string() } else { format_price(fee) };
    html! {
        <div class="space-y-2 text-sm">
            <div class="flex justify-between text-gray-300">
                <span>{"Subtotal:"}</span>
                <span>{ format_price(subtotal) }</span>
            </div>
            <div class="flex justify-between text-gray-300">
                <span>{"Envío:"}</span>
                <span>{ fee_label }</span>
            </div>
            <div class="flex justify-between text-lg font-bold text-[#D4AF37]">
                <span>{"Total:"}</span>
                <span>{ format_price(total) }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CheckoutModalProps {
    cart: CartHandle,
}

#[function_component(CheckoutModal)]
fn checkout_modal(props: &CheckoutModalProps) -> Html {
    let cart = &props.cart;
    let address = use_state(String::new);
    let phone = use_state(String::new);
    let notes = use_state(String::new);

    // The confirmation closes itself after a few seconds
    {
        let dismiss = cart.dismiss_confirmation.clone();
        let address = address.clone();
        let phone = phone.clone();
        let notes = notes.clone();
        let reference = cart.order.confirmed_order().map(|order| order.reference.clone());
        use_effect_with(reference, move |reference| {
            let timeout = reference.as_ref().map(|_| {
                address.set(String::new());
                phone.set(String::new());
                notes.set(String::new());
                Timeout::new(ORDER_CONFIRMATION_MS, move || dismiss.emit(()))
            });
            move || drop(timeout)
        });
    }

    let input_handler = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_backdrop = {
        let close = cart.close_checkout.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_submit = {
        let confirm = cart.confirm.clone();
        let address = address.clone();
        let phone = phone.clone();
        let notes = notes.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            confirm.emit(CheckoutForm {
                address: (*address).clone(),
                phone: (*phone).clone(),
                notes: (*notes).clone(),
            });
        })
    };

    let body = match &cart.order.stage {
        CheckoutStage::Browsing => return html! {},
        CheckoutStage::Confirmed(order) => confirmation(order),
        CheckoutStage::Form => html! {
            <form class={styles::FORM} onsubmit={on_submit}>
                <div>
                    <label for="address" class={styles::TEXT_LABEL}>{"Dirección de Entrega"}</label>
                    <input id="address" class={styles::INPUT} placeholder="Tu dirección completa"
                        value={(*address).clone()} oninput={input_handler(&address)} />
                </div>
                <div>
                    <label for="phone" class={styles::TEXT_LABEL}>{"Teléfono"}</label>
                    <input id="phone" type="tel" class={styles::INPUT} placeholder="Tu número de teléfono"
                        value={(*phone).clone()} oninput={input_handler(&phone)} />
                </div>
                <div>
                    <label for="notes" class={styles::TEXT_LABEL}>{"Notas Especiales"}</label>
                    <input id="notes" class={styles::INPUT} placeholder="Instrucciones adicionales"
                        value={(*notes).clone()} oninput={input_handler(&notes)} />
                </div>

                if let Some(error) = &cart.checkout_error {
                    <p class={styles::TEXT_ERROR}>{ error.clone() }</p>
                }

                <div class="h-px bg-gray-700"></div>
                <div class="text-center">
                    <p class="mb-2 text-lg font-bold text-[#D4AF37]">
                        { format!("Total: {}", format_price(cart.order.cart.total_cents())) }
                    </p>
                    <button type="submit" class="w-full rounded-full bg-green-600 py-3 font-bold text-white hover:bg-green-700">
                        {"Confirmar Pedido"}
                    </button>
                </div>
            </form>
        },
    };

    let title = if cart.order.confirmed_order().is_some() {
        "¡Pedido Confirmado!"
    } else {
        "Finalizar Pedido"
    };

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={on_backdrop}>
            <div class={styles::MODAL} onclick={stop}>
                <h3 class="mb-4 text-center text-xl font-bold text-white">{ title }</h3>
                { body }
            </div>
        </div>
    }
}

fn confirmation(order: &Order) -> Html {
    html! {
        <div class="text-center">
            <div class="mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-full bg-green-100 text-2xl">
                {"✅"}
            </div>
            <h3 class="mb-2 text-xl font-bold text-green-400">{"¡Gracias por tu pedido!"}</h3>
            <p class="mb-4 text-gray-300">
                {"Tu comida estará lista en 30-45 minutos. Te enviaremos actualizaciones por SMS."}
            </p>
            <p class={styles::TEXT_SMALL}>{ format!("Pedido {}", order.reference) }</p>
            <p class="text-sm text-[#D4AF37]">{ format!("Total: {}", format_price(order.total_cents)) }</p>
        </div>
    }
}
