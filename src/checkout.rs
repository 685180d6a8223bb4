//! Checkout flow: turns a non-empty cart plus a shipping form into a
//! create-order request. The server call itself is the caller's job; on
//! success the caller clears the cart, on failure the cart is left
//! untouched so the user can retry.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::cart::Cart;
use crate::dto::orders::CreateOrderRequest;

/// Flat delivery rate (inside Dhaka), added on top of the cart total.
pub const SHIPPING_FEE: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShippingForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    /// Display-only; the order carries the free-form address. Defaults to
    /// Dhaka, the only zone the flat shipping rate covers.
    #[serde(default = "default_city")]
    pub city: String,
}

fn default_city() -> String {
    "Dhaka".to_string()
}

impl Default for ShippingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            city: default_city(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Build the order draft: validates the form, snapshots the cart lines and
/// computes `cart.total() + SHIPPING_FEE`. Does not mutate the cart.
pub fn build_order(
    cart: &Cart,
    form: &ShippingForm,
    user_id: Option<i64>,
    idempotency_key: Option<String>,
) -> Result<CreateOrderRequest, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    for (field, value) in [
        ("name", &form.name),
        ("phone", &form.phone),
        ("address", &form.address),
    ] {
        if value.trim().is_empty() {
            return Err(CheckoutError::MissingField(field));
        }
    }

    Ok(CreateOrderRequest {
        customer_name: form.name.clone(),
        phone: form.phone.clone(),
        address: form.address.clone(),
        total_amount: cart.total() + SHIPPING_FEE,
        items: cart.lines().to_vec(),
        user_id,
        idempotency_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn filled_form() -> ShippingForm {
        ShippingForm {
            name: "Rahim Uddin".into(),
            phone: "01700000000".into(),
            address: "House 12, Road 5, Dhanmondi".into(),
            ..ShippingForm::default()
        }
    }

    #[test]
    fn total_includes_shipping_fee() {
        // two units at 1050 plus the 60 taka flat rate
        let product = catalog::get(1).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 32);
        cart.add_item(product, 32);

        let draft = build_order(&cart, &filled_form(), None, None).unwrap();
        assert_eq!(draft.total_amount, 2160);
    }

    #[test]
    fn empty_cart_is_rejected() {
        let cart = Cart::new();
        let err = build_order(&cart, &filled_form(), None, None).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let product = catalog::get(1).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 32);

        let mut form = filled_form();
        form.phone = "   ".into();
        let err = build_order(&cart, &form, None, None).unwrap_err();
        assert_eq!(err, CheckoutError::MissingField("phone"));
    }

    #[test]
    fn draft_snapshots_cart_lines() {
        let product = catalog::get(2).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 34);

        let draft = build_order(&cart, &filled_form(), Some(9), None).unwrap();
        assert_eq!(draft.items, cart.lines().to_vec());
        assert_eq!(draft.user_id, Some(9));

        // later cart edits must not reach the draft
        cart.update_quantity(product.id, 34, 3);
        assert_eq!(draft.items[0].quantity, 1);
    }

    #[test]
    fn failed_submission_leaves_cart_for_retry() {
        let product = catalog::get(3).unwrap();
        let mut cart = Cart::new();
        cart.add_item(product, 36);

        let draft = build_order(&cart, &filled_form(), None, None).unwrap();
        // pretend the create-order call failed: the cart is untouched and a
        // second draft comes out identical
        let retry = build_order(&cart, &filled_form(), None, None).unwrap();
        assert_eq!(draft.items, retry.items);
        assert_eq!(draft.total_amount, retry.total_amount);
        assert!(!cart.is_empty());
    }

    #[test]
    fn city_defaults_to_dhaka() {
        assert_eq!(ShippingForm::default().city, "Dhaka");
    }
}
