use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::catalog::MenuItem;
use crate::constants::{DELIVERY_FEE_CENTS, FREE_DELIVERY_THRESHOLD_CENTS, MAX_LINE_QUANTITY};
use crate::validation::{validate_address, validate_phone};

/// Formats cents as a dollar amount, e.g. `1299` -> `"$12.99"`.
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Delivery is free from $25 upwards.
pub fn delivery_fee_for(subtotal_cents: u32) -> u32 {
    if subtotal_cents >= FREE_DELIVERY_THRESHOLD_CENTS {
        0
    } else {
        DELIVERY_FEE_CENTS
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price_cents: u32,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total_cents(&self) -> u32 {
        self.price_cents.saturating_mul(self.quantity)
    }
}

impl From<&MenuItem> for CartLine {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price_cents: item.price_cents,
            image: item.image.clone(),
            quantity: 1,
        }
    }
}

/// Cart lines keyed by item id, kept in the order they were first added.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, id: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.id == id)
            .map_or(0, |line| line.quantity)
    }

    /// Adds one unit of `item`, merging with an existing line.
    pub fn add(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY),
            None => self.lines.push(CartLine::from(item)),
        }
    }

    /// Sets the quantity of an existing line, capped at [`MAX_LINE_QUANTITY`]; zero removes it.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity.min(MAX_LINE_QUANTITY);
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    pub fn subtotal_cents(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.line_total_cents()))
    }

    pub fn delivery_fee_cents(&self) -> u32 {
        delivery_fee_for(self.subtotal_cents())
    }

    pub fn total_cents(&self) -> u32 {
        self.subtotal_cents().saturating_add(self.delivery_fee_cents())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CheckoutForm {
    pub address: String,
    pub phone: String,
    pub notes: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_address(&self.address)?;
        validate_phone(&self.phone)
    }
}

/// Snapshot of a confirmed order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    pub reference: String,
    pub lines: Vec<CartLine>,
    pub address: String,
    pub subtotal_cents: u32,
    pub delivery_fee_cents: u32,
    pub total_cents: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckoutStage {
    #[default]
    Browsing,
    Form,
    Confirmed(Order),
}

/// Cart plus the checkout flow wrapped around it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeliveryOrder {
    pub cart: Cart,
    pub stage: CheckoutStage,
}

impl DeliveryOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_checkout(&mut self) -> bool {
        if self.cart.is_empty() || self.stage != CheckoutStage::Browsing {
            return false;
        }
        self.stage = CheckoutStage::Form;
        true
    }

    /// Closes the checkout modal, from the form or from the confirmation.
    pub fn close_checkout(&mut self) -> bool {
        if self.stage == CheckoutStage::Browsing {
            return false;
        }
        self.stage = CheckoutStage::Browsing;
        true
    }

    /// Places the order: validates the delivery details, snapshots the cart
    /// and empties it.
    pub fn confirm(&mut self, form: &CheckoutForm, reference: String) -> Result<Order, ValidationError> {
        if self.stage != CheckoutStage::Form || self.cart.is_empty() {
            return Err(ValidationError::new("checkout_not_open"));
        }
        form.validate()?;

        let order = Order {
            reference,
            lines: self.cart.lines().to_vec(),
            address: form.address.trim().to_string(),
            subtotal_cents: self.cart.subtotal_cents(),
            delivery_fee_cents: self.cart.delivery_fee_cents(),
            total_cents: self.cart.total_cents(),
        };
        log::info!("order {} confirmed: {}", order.reference, format_price(order.total_cents));

        self.cart.clear();
        self.stage = CheckoutStage::Confirmed(order.clone());
        Ok(order)
    }

    pub fn dismiss_confirmation(&mut self) {
        if matches!(self.stage, CheckoutStage::Confirmed(_)) {
            self.stage = CheckoutStage::Browsing;
        }
    }

    pub fn confirmed_order(&self) -> Option<&Order> {
        match &self.stage {
            CheckoutStage::Confirmed(order) => Some(order),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn menu() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            address: "Av. Casino Real 123".to_string(),
            phone: "(123) 456-7890".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1299), "$12.99");
        assert_eq!(format_price(399), "$3.99");
        assert_eq!(format_price(2500), "$25.00");
        assert_eq!(format_price(5), "$0.05");
    }

    #[test]
    fn test_add_merges_lines() {
        let catalog = menu();
        let mut cart = Cart::new();
        cart.add(catalog.item("burger1").unwrap());
        cart.add(catalog.item("drink1").unwrap());
        cart.add(catalog.item("burger1").unwrap());

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].id, "burger1");
        assert_eq!(cart.quantity_of("burger1"), 2);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal_cents(), 2 * 1299 + 399);
    }

    #[test]
    fn test_update_quantity_and_remove() {
        let catalog = menu();
        let mut cart = Cart::new();
        cart.add(catalog.item("pizza1").unwrap());
        cart.add(catalog.item("wrap1").unwrap());

        cart.update_quantity("pizza1", 4);
        assert_eq!(cart.quantity_of("pizza1"), 4);

        cart.update_quantity("pizza1", 0);
        assert_eq!(cart.quantity_of("pizza1"), 0);
        assert_eq!(cart.lines().len(), 1);

        cart.update_quantity("missing", 3);
        assert_eq!(cart.lines().len(), 1);

        assert!(cart.remove("wrap1"));
        assert!(!cart.remove("wrap1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_delivery_fee_threshold() {
        assert_eq!(delivery_fee_for(2499), 399);
        assert_eq!(delivery_fee_for(2500), 0);

        let catalog = menu();
        let mut cart = Cart::new();
        cart.add(catalog.item("burger1").unwrap());
        assert_eq!(cart.delivery_fee_cents(), 399);
        assert_eq!(cart.total_cents(), 1299 + 399);

        cart.update_quantity("burger1", 2);
        assert_eq!(cart.delivery_fee_cents(), 0);
        assert_eq!(cart.total_cents(), 2598);
    }

    #[test]
    fn test_checkout_requires_items() {
        let mut order = DeliveryOrder::new();
        assert!(!order.open_checkout());
        assert_eq!(order.stage, CheckoutStage::Browsing);

        order.cart.add(menu().item("nachos1").unwrap());
        assert!(order.open_checkout());
        assert!(!order.open_checkout());
        assert!(order.close_checkout());
        assert_eq!(order.stage, CheckoutStage::Browsing);
    }

    #[test]
    fn test_confirm_snapshots_and_clears_cart() {
        let catalog = menu();
        let mut order = DeliveryOrder::new();
        order.cart.add(catalog.item("combo1").unwrap());
        order.cart.add(catalog.item("combo1").unwrap());
        assert!(order.open_checkout());

        let placed = order.confirm(&valid_form(), "RB-0001".to_string()).unwrap();
        assert_eq!(placed.reference, "RB-0001");
        assert_eq!(placed.lines.len(), 1);
        assert_eq!(placed.subtotal_cents, 3798);
        assert_eq!(placed.delivery_fee_cents, 0);
        assert_eq!(placed.total_cents, 3798);

        assert!(order.cart.is_empty());
        assert_eq!(order.confirmed_order(), Some(&placed));

        order.dismiss_confirmation();
        assert_eq!(order.stage, CheckoutStage::Browsing);
    }

    #[test]
    fn test_confirm_rejects_invalid_form() {
        let mut order = DeliveryOrder::new();
        order.cart.add(menu().item("drink1").unwrap());
        assert!(order.open_checkout());

        let mut form = valid_form();
        form.address = "   ".to_string();
        let err = order.confirm(&form, "RB-1".to_string()).unwrap_err();
        assert_eq!(err.code, "missing_address");

        form = valid_form();
        form.phone = "12".to_string();
        let err = order.confirm(&form, "RB-1".to_string()).unwrap_err();
        assert_eq!(err.code, "invalid_phone");

        assert_eq!(order.stage, CheckoutStage::Form);
        assert_eq!(order.cart.total_items(), 1);
    }

    #[test]
    fn test_confirm_outside_checkout_fails() {
        let mut order = DeliveryOrder::new();
        order.cart.add(menu().item("drink1").unwrap());
        let err = order.confirm(&valid_form(), "RB-2".to_string()).unwrap_err();
        assert_eq!(err.code, "checkout_not_open");
    }

    #[test]
    fn test_quantities_are_capped() {
        let catalog = menu();
        let mut cart = Cart::new();
        let burger = catalog.item("burger1").unwrap();
        cart.add(burger);

        cart.update_quantity("burger1", u32::MAX);
        assert_eq!(cart.quantity_of("burger1"), MAX_LINE_QUANTITY);
        cart.add(burger);
        assert_eq!(cart.quantity_of("burger1"), MAX_LINE_QUANTITY);
        assert_eq!(cart.subtotal_cents(), 1299 * MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_totals_saturate_instead_of_wrapping() {
        let line = CartLine {
            id: "gold".to_string(),
            name: "Gold Plate".to_string(),
            price_cents: u32::MAX / 2,
            image: String::new(),
            quantity: 3,
        };
        assert_eq!(line.line_total_cents(), u32::MAX);

        let cart = Cart {
            lines: vec![line.clone(), CartLine { id: "gold2".to_string(), ..line }],
        };
        assert_eq!(cart.subtotal_cents(), u32::MAX);
        assert_eq!(cart.total_cents(), u32::MAX);
    }

    #[test]
    fn test_close_checkout_from_confirmation() {
        let mut order = DeliveryOrder::new();
        assert!(!order.close_checkout());

        order.cart.add(menu().item("hotdog1").unwrap());
        assert!(order.open_checkout());
        order.confirm(&valid_form(), "RB-3".to_string()).unwrap();
        assert!(order.confirmed_order().is_some());

        assert!(order.close_checkout());
        assert_eq!(order.stage, CheckoutStage::Browsing);
        assert!(!order.close_checkout());
    }
}
