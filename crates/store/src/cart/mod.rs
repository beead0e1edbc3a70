//! Cart, wishlist, and session state.
//!
//! [`CartState`] is the aggregate root. Every transition is a pure function
//! `(&self, input) -> Self`: the input state is never mutated, and the derived
//! totals are recomputed from the cart lines on every call. This keeps the
//! state trivially unit-testable and safe to snapshot from any context.
//!
//! Mutations funnel through [`Command`] and [`CartState::apply`]; pure queries
//! ([`CartState::is_in_wishlist`], [`CartState::cart_item_count`]) read the
//! state directly.

mod command;

pub use command::Command;

use ecomdemo_core::{CurrencyCode, Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::models::{ProductSnapshot, User};

/// A single cart line: a product snapshot plus a quantity.
///
/// Unique by product id within a cart. A quantity of zero is never stored;
/// zero-quantity updates delete the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: ProductSnapshot,
    pub quantity: u32,
}

impl CartItem {
    /// The product this line refers to.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity, rounded to cents.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The cart/wishlist/user portion of the state, without derived totals.
///
/// This is what gets persisted and what [`CartState::hydrate`] accepts;
/// totals are recomputed on the way back in, never trusted from storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub cart: Vec<CartItem>,
    pub wishlist: Vec<ProductSnapshot>,
    pub user: Option<User>,
}

/// The authoritative client-side state.
///
/// `total_items` and `total_price` are derived from `cart` and recomputed
/// after every mutation. `wishlist` has set semantics keyed by product id;
/// `cart` preserves insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub cart: Vec<CartItem>,
    pub wishlist: Vec<ProductSnapshot>,
    pub user: Option<User>,
    pub total_items: u32,
    pub total_price: Price,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            cart: Vec::new(),
            wishlist: Vec::new(),
            user: None,
            total_items: 0,
            total_price: Price::zero(CurrencyCode::default()),
        }
    }
}

impl CartState {
    /// Add one unit of `product` to the cart.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended. Always succeeds -
    /// stock validation is a front-end concern, not enforced here.
    #[must_use]
    pub fn add_to_cart(&self, product: ProductSnapshot) -> Self {
        let mut cart = self.cart.clone();
        match cart.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity += 1,
            None => cart.push(CartItem {
                product,
                quantity: 1,
            }),
        }
        self.with_cart(cart)
    }

    /// Remove the line for `product_id`. No-op if absent.
    #[must_use]
    pub fn remove_from_cart(&self, product_id: ProductId) -> Self {
        let cart: Vec<CartItem> = self
            .cart
            .iter()
            .filter(|item| item.product.id != product_id)
            .cloned()
            .collect();
        self.with_cart(cart)
    }

    /// Set the quantity for `product_id`, clamped to zero or above.
    ///
    /// A clamped quantity of zero removes the line. No-op if the product is
    /// not in the cart.
    #[must_use]
    pub fn update_quantity(&self, product_id: ProductId, quantity: i64) -> Self {
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        let cart: Vec<CartItem> = self
            .cart
            .iter()
            .map(|item| {
                if item.product.id == product_id {
                    CartItem {
                        product: item.product.clone(),
                        quantity: clamped,
                    }
                } else {
                    item.clone()
                }
            })
            .filter(|item| item.quantity > 0)
            .collect();
        self.with_cart(cart)
    }

    /// Empty the cart. Wishlist and user are untouched.
    #[must_use]
    pub fn clear_cart(&self) -> Self {
        self.with_cart(Vec::new())
    }

    /// Add `product` to the wishlist. Idempotent: duplicates are ignored.
    #[must_use]
    pub fn add_to_wishlist(&self, product: ProductSnapshot) -> Self {
        if self.is_in_wishlist(product.id) {
            return self.clone();
        }
        let mut wishlist = self.wishlist.clone();
        wishlist.push(product);
        Self {
            wishlist,
            ..self.clone()
        }
    }

    /// Remove `product_id` from the wishlist. No-op if absent.
    #[must_use]
    pub fn remove_from_wishlist(&self, product_id: ProductId) -> Self {
        Self {
            wishlist: self
                .wishlist
                .iter()
                .filter(|item| item.id != product_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Set the authenticated user. Cart and wishlist are untouched.
    #[must_use]
    pub fn login(&self, user: User) -> Self {
        Self {
            user: Some(user),
            ..self.clone()
        }
    }

    /// Clear the user, the cart, and the wishlist.
    ///
    /// Session-scoped data is discarded on logout, matching the shipped app.
    /// This also discards a guest cart built before logging in, which product
    /// may want to revisit.
    #[must_use]
    pub fn logout(&self) -> Self {
        Self::default()
    }

    /// Replace cart, wishlist, and user wholesale from a persisted snapshot.
    ///
    /// Totals are recomputed from the snapshot's cart; persisted totals are
    /// never trusted. Used once at startup.
    #[must_use]
    pub fn hydrate(&self, snapshot: StateSnapshot) -> Self {
        let (total_items, total_price) = totals(&snapshot.cart);
        Self {
            cart: snapshot.cart,
            wishlist: snapshot.wishlist,
            user: snapshot.user,
            total_items,
            total_price,
        }
    }

    /// The persistable portion of this state.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            cart: self.cart.clone(),
            wishlist: self.wishlist.clone(),
            user: self.user.clone(),
        }
    }

    /// Whether `product_id` is on the wishlist.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: ProductId) -> bool {
        self.wishlist.iter().any(|item| item.id == product_id)
    }

    /// Quantity of `product_id` in the cart, 0 if absent.
    #[must_use]
    pub fn cart_item_count(&self, product_id: ProductId) -> u32 {
        self.cart
            .iter()
            .find(|item| item.product.id == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Rebuild the state around a new cart, recomputing totals.
    fn with_cart(&self, cart: Vec<CartItem>) -> Self {
        let (total_items, total_price) = totals(&cart);
        Self {
            cart,
            wishlist: self.wishlist.clone(),
            user: self.user.clone(),
            total_items,
            total_price,
        }
    }
}

/// Derived totals: item count and cents-rounded price sum.
fn totals(cart: &[CartItem]) -> (u32, Price) {
    let total_items = cart.iter().map(|item| item.quantity).sum();
    let currency = cart
        .first()
        .map_or_else(CurrencyCode::default, |item| {
            item.product.price.currency_code
        });
    let total_price = cart
        .iter()
        .fold(Price::zero(currency), |acc, item| acc + item.line_total())
        .round_to_cents();
    (total_items, total_price)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ecomdemo_core::{CurrencyCode, Email, UserId};

    pub(crate) fn snapshot(id: i32, price: &str) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(price.parse().unwrap(), CurrencyCode::USD),
            image: format!("https://img.example/{id}.jpg"),
            category: "Electronics".to_string(),
        }
    }

    pub(crate) fn user() -> User {
        User {
            id: UserId::new(1),
            email: Email::parse("test@test.com").unwrap(),
            name: "Demo User".to_string(),
            avatar_url: None,
        }
    }

    fn usd(s: &str) -> Price {
        Price::new(s.parse().unwrap(), CurrencyCode::USD)
    }

    #[test]
    fn test_add_same_product_aggregates_quantity() {
        let state = CartState::default()
            .add_to_cart(snapshot(1, "9.99"))
            .add_to_cart(snapshot(1, "9.99"));

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].quantity, 2);
        assert_eq!(state.total_items, 2);
        assert_eq!(state.total_price, usd("19.98"));
    }

    #[test]
    fn test_add_n_times_totals_n() {
        let mut state = CartState::default();
        for _ in 0..7 {
            state = state.add_to_cart(snapshot(3, "1.25"));
        }
        assert_eq!(state.total_items, 7);
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].quantity, 7);
    }

    #[test]
    fn test_cart_preserves_insertion_order() {
        let state = CartState::default()
            .add_to_cart(snapshot(2, "1.00"))
            .add_to_cart(snapshot(1, "2.00"))
            .add_to_cart(snapshot(2, "1.00"));

        let ids: Vec<i32> = state.cart.iter().map(|i| i.product_id().as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let state = CartState::default().add_to_cart(snapshot(1, "5.00"));
        let after = state.remove_from_cart(ProductId::new(99));
        assert_eq!(after, state);
    }

    #[test]
    fn test_update_quantity_sets_and_recomputes() {
        let state = CartState::default()
            .add_to_cart(snapshot(1, "9.99"))
            .add_to_cart(snapshot(1, "9.99"))
            .update_quantity(ProductId::new(1), 1);

        assert_eq!(state.total_items, 1);
        assert_eq!(state.total_price, usd("9.99"));
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let base = CartState::default()
            .add_to_cart(snapshot(1, "9.99"))
            .add_to_cart(snapshot(2, "4.50"));

        let via_update = base.update_quantity(ProductId::new(1), 0);
        let via_remove = base.remove_from_cart(ProductId::new(1));
        assert_eq!(via_update, via_remove);
    }

    #[test]
    fn test_update_quantity_negative_clamps_to_remove() {
        let base = CartState::default().add_to_cart(snapshot(1, "9.99"));
        let after = base.update_quantity(ProductId::new(1), -5);
        assert!(after.cart.is_empty());
        assert_eq!(after.total_items, 0);
        assert!(after.total_price.is_zero());
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let state = CartState::default().add_to_cart(snapshot(1, "9.99"));
        assert_eq!(state.update_quantity(ProductId::new(2), 5), state);
    }

    #[test]
    fn test_clear_cart_keeps_wishlist_and_user() {
        let state = CartState::default()
            .add_to_cart(snapshot(1, "9.99"))
            .add_to_wishlist(snapshot(2, "3.00"))
            .login(user())
            .clear_cart();

        assert!(state.cart.is_empty());
        assert_eq!(state.total_items, 0);
        assert!(state.total_price.is_zero());
        assert_eq!(state.wishlist.len(), 1);
        assert!(state.is_logged_in());
    }

    #[test]
    fn test_wishlist_add_is_idempotent() {
        let once = CartState::default().add_to_wishlist(snapshot(1, "9.99"));
        let twice = once.add_to_wishlist(snapshot(1, "9.99"));
        assert_eq!(once.wishlist, twice.wishlist);
        assert_eq!(twice.wishlist.len(), 1);
    }

    #[test]
    fn test_wishlist_membership() {
        let state = CartState::default().add_to_wishlist(snapshot(1, "9.99"));
        assert!(state.is_in_wishlist(ProductId::new(1)));
        assert!(!state.is_in_wishlist(ProductId::new(2)));

        let state = state.remove_from_wishlist(ProductId::new(1));
        assert!(!state.is_in_wishlist(ProductId::new(1)));
    }

    #[test]
    fn test_cart_item_count() {
        let state = CartState::default()
            .add_to_cart(snapshot(1, "9.99"))
            .add_to_cart(snapshot(1, "9.99"));
        assert_eq!(state.cart_item_count(ProductId::new(1)), 2);
        assert_eq!(state.cart_item_count(ProductId::new(2)), 0);
    }

    #[test]
    fn test_login_does_not_touch_cart() {
        let state = CartState::default()
            .add_to_cart(snapshot(1, "9.99"))
            .login(user());
        assert!(state.is_logged_in());
        assert_eq!(state.total_items, 1);
    }

    #[test]
    fn test_logout_clears_everything() {
        let state = CartState::default()
            .add_to_cart(snapshot(1, "9.99"))
            .add_to_wishlist(snapshot(2, "3.00"))
            .login(user())
            .logout();

        assert_eq!(state, CartState::default());
    }

    #[test]
    fn test_hydrate_recomputes_totals() {
        let source = CartState::default()
            .add_to_cart(snapshot(1, "9.99"))
            .add_to_cart(snapshot(1, "9.99"))
            .add_to_wishlist(snapshot(2, "3.00"))
            .login(user());

        let hydrated = CartState::default().hydrate(source.snapshot());
        assert_eq!(hydrated, source);
        assert_eq!(hydrated.total_items, 2);
        assert_eq!(hydrated.total_price, usd("19.98"));
    }

    #[test]
    fn test_totals_invariant_over_operation_sequence() {
        let mut state = CartState::default();
        state = state.add_to_cart(snapshot(1, "9.99"));
        state = state.add_to_cart(snapshot(2, "0.33"));
        state = state.add_to_cart(snapshot(2, "0.33"));
        state = state.update_quantity(ProductId::new(2), 7);
        state = state.remove_from_cart(ProductId::new(1));
        state = state.add_to_cart(snapshot(3, "19.95"));

        let expected_items: u32 = state.cart.iter().map(|i| i.quantity).sum();
        let expected_price = state
            .cart
            .iter()
            .fold(Price::zero(CurrencyCode::USD), |acc, i| {
                acc + i.line_total()
            })
            .round_to_cents();

        assert_eq!(state.total_items, expected_items);
        assert_eq!(state.total_price, expected_price);
        assert_eq!(state.total_price, usd("22.26"));
    }

    #[test]
    fn test_transitions_do_not_mutate_input() {
        let state = CartState::default().add_to_cart(snapshot(1, "9.99"));
        let before = state.clone();
        let _ = state.add_to_cart(snapshot(2, "1.00"));
        let _ = state.remove_from_cart(ProductId::new(1));
        let _ = state.logout();
        assert_eq!(state, before);
    }
}
