//! Checkout quote computation.
//!
//! Pure pricing over the current cart: flat shipping with a free-shipping
//! threshold, a fixed tax rate, and two demo promo codes. Placing the
//! order itself is a front-end mock; all it does afterwards is clear the
//! cart.

use rust_decimal::Decimal;

use ecomdemo_core::Price;

use crate::cart::CartState;

/// Orders strictly above this subtotal ship free.
const FREE_SHIPPING_THRESHOLD_DOLLARS: i64 = 100;
/// Flat shipping charge below the threshold.
const FLAT_SHIPPING_CENTS: i64 = 10_00;
/// Promo code for 10% off the subtotal, case-insensitive.
const PROMO_SAVE10: &str = "save10";
/// Promo code waiving the shipping charge, case-insensitive.
const PROMO_FREESHIP: &str = "freeship";

/// A priced-out order, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutQuote {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub discount: Price,
    pub total: Price,
}

/// Price out the cart, optionally applying a promo code.
///
/// Unknown promo codes are ignored, not an error. Every derived amount is
/// rounded to cents before entering the total.
#[must_use]
pub fn quote(state: &CartState, promo_code: Option<&str>) -> CheckoutQuote {
    let currency = state.total_price.currency_code;
    let subtotal = state.total_price;

    let shipping = if subtotal.amount > Decimal::from(FREE_SHIPPING_THRESHOLD_DOLLARS) {
        Price::zero(currency)
    } else {
        Price::from_cents(FLAT_SHIPPING_CENTS, currency)
    };

    // 8% sales tax on the subtotal
    let tax = Price::new(subtotal.amount * Decimal::new(8, 2), currency).round_to_cents();

    let discount = match promo_code.map(str::trim) {
        // SAVE10: 10% off the subtotal
        Some(code) if code.eq_ignore_ascii_case(PROMO_SAVE10) => {
            Price::new(subtotal.amount * Decimal::new(10, 2), currency).round_to_cents()
        }
        // FREESHIP: refund whatever shipping came out to, zero included
        Some(code) if code.eq_ignore_ascii_case(PROMO_FREESHIP) => shipping,
        _ => Price::zero(currency),
    };

    let total = Price::new(
        subtotal.amount + shipping.amount + tax.amount - discount.amount,
        currency,
    )
    .round_to_cents();

    CheckoutQuote {
        subtotal,
        shipping,
        tax,
        discount,
        total,
    }
}
