//! Tagged commands for cart state transitions.
//!
//! The front end submits one command at a time; [`CartState::apply`] is the
//! single dispatch point, mirroring the action/reducer discipline of the
//! shipped app without a hidden global singleton.

use ecomdemo_core::ProductId;

use crate::models::{ProductSnapshot, User};

use super::{CartState, StateSnapshot};

/// A discrete state-transition command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddToCart(ProductSnapshot),
    RemoveFromCart(ProductId),
    UpdateQuantity {
        product_id: ProductId,
        quantity: i64,
    },
    ClearCart,
    AddToWishlist(ProductSnapshot),
    RemoveFromWishlist(ProductId),
    Login(User),
    Logout,
    /// Replace cart/wishlist/user from a persisted snapshot. Startup only.
    Hydrate(StateSnapshot),
}

impl CartState {
    /// Apply a command, producing the next state.
    ///
    /// Pure: the receiver is not mutated. Commands never fail - invalid
    /// quantities are clamped and logical no-ops return an equal state.
    #[must_use]
    pub fn apply(&self, command: Command) -> Self {
        match command {
            Command::AddToCart(product) => self.add_to_cart(product),
            Command::RemoveFromCart(id) => self.remove_from_cart(id),
            Command::UpdateQuantity {
                product_id,
                quantity,
            } => self.update_quantity(product_id, quantity),
            Command::ClearCart => self.clear_cart(),
            Command::AddToWishlist(product) => self.add_to_wishlist(product),
            Command::RemoveFromWishlist(id) => self.remove_from_wishlist(id),
            Command::Login(user) => self.login(user),
            Command::Logout => self.logout(),
            Command::Hydrate(snapshot) => self.hydrate(snapshot),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ecomdemo_core::{CurrencyCode, Price};

    fn snapshot(id: i32, price: &str) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(price.parse().unwrap(), CurrencyCode::USD),
            image: String::new(),
            category: "Jewelry".to_string(),
        }
    }

    #[test]
    fn test_apply_matches_direct_transitions() {
        let direct = CartState::default()
            .add_to_cart(snapshot(1, "9.99"))
            .update_quantity(ProductId::new(1), 3)
            .add_to_wishlist(snapshot(2, "4.00"));

        let dispatched = CartState::default()
            .apply(Command::AddToCart(snapshot(1, "9.99")))
            .apply(Command::UpdateQuantity {
                product_id: ProductId::new(1),
                quantity: 3,
            })
            .apply(Command::AddToWishlist(snapshot(2, "4.00")));

        assert_eq!(direct, dispatched);
    }

    #[test]
    fn test_apply_clear_and_logout() {
        let state = CartState::default().apply(Command::AddToCart(snapshot(1, "9.99")));
        assert_eq!(state.apply(Command::ClearCart).total_items, 0);
        assert_eq!(state.apply(Command::Logout), CartState::default());
    }
}
