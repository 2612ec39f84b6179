use shared::cart::{CheckoutForm, DeliveryOrder};
use shared::catalog::MenuItem;
use shared::validation::error_message;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CartHandle {
    pub order: DeliveryOrder,
    pub checkout_error: Option<String>,
    pub add: Callback<MenuItem>,
    pub update_quantity: Callback<(String, u32)>,
    pub remove: Callback<String>,
    pub open_checkout: Callback<()>,
    pub close_checkout: Callback<()>,
    pub confirm: Callback<CheckoutForm>,
    pub dismiss_confirmation: Callback<()>,
}

// Edits a copy of the current order and stores it back.
fn edit_order(order: &UseStateHandle<DeliveryOrder>, edit: impl FnOnce(&mut DeliveryOrder)) {
    let mut next = (**order).clone();
    edit(&mut next);
    order.set(next);
}

fn order_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("RB-{}", id[..8].to_uppercase())
}

#[hook]
pub fn use_cart() -> CartHandle {
    let order = use_state(DeliveryOrder::new);
    let checkout_error = use_state(|| None::<String>);

    let add = {
        let order = order.clone();
        Callback::from(move |item: MenuItem| {
            log::debug!("adding {} to cart", item.id);
            edit_order(&order, |order| order.cart.add(&item));
        })
    };

    let update_quantity = {
        let order = order.clone();
        Callback::from(move |(id, quantity): (String, u32)| {
            edit_order(&order, |order| order.cart.update_quantity(&id, quantity));
        })
    };

    let remove = {
        let order = order.clone();
        Callback::from(move |id: String| {
            edit_order(&order, |order| {
                order.cart.remove(&id);
            });
        })
    };

    let open_checkout = {
        let order = order.clone();
        let checkout_error = checkout_error.clone();
        Callback::from(move |_| {
            checkout_error.set(None);
            edit_order(&order, |order| {
                order.open_checkout();
            });
        })
    };

    let close_checkout = {
        let order = order.clone();
        Callback::from(move |_| {
            edit_order(&order, |order| {
                order.close_checkout();
            });
        })
    };

    let confirm = {
        let order = order.clone();
        let checkout_error = checkout_error.clone();
        Callback::from(move |form: CheckoutForm| {
            let mut next = (*order).clone();
            match next.confirm(&form, order_reference()) {
                Ok(_) => {
                    checkout_error.set(None);
                    order.set(next);
                }
                Err(err) => {
                    log::warn!("checkout rejected: {}", err.code);
                    checkout_error.set(Some(error_message(&err).to_string()));
                }
            }
        })
    };

    let dismiss_confirmation = {
        let order = order.clone();
        Callback::from(move |_| edit_order(&order, DeliveryOrder::dismiss_confirmation))
    };

    CartHandle {
        order: (*order).clone(),
        checkout_error: (*checkout_error).clone(),
        add,
        update_quantity,
        remove,
        open_checkout,
        close_checkout,
        confirm,
        dismiss_confirmation,
    }
}
