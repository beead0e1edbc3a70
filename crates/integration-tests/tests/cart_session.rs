//! End-to-end cart session scenarios.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use ecomdemo_core::ProductId;
use ecomdemo_integration_tests::{demo_user, product};
use ecomdemo_store::cart::Command;
use ecomdemo_store::persistence::MemoryStore;
use ecomdemo_store::session::SessionManager;

async fn fresh_session() -> SessionManager<MemoryStore> {
    SessionManager::start(MemoryStore::new(), Duration::from_secs(1)).await
}

#[tokio::test]
async fn add_same_product_twice_aggregates() {
    let session = fresh_session().await;

    session.dispatch(Command::AddToCart(product(1, "Backpack", "9.99")));
    let state = session.dispatch(Command::AddToCart(product(1, "Backpack", "9.99")));

    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart[0].quantity, 2);
    assert_eq!(state.total_items, 2);
    assert_eq!(state.total_price.to_string(), "$19.98");
}

#[tokio::test]
async fn update_quantity_recomputes_totals() {
    let session = fresh_session().await;
    session.dispatch(Command::AddToCart(product(1, "Backpack", "9.99")));
    session.dispatch(Command::AddToCart(product(1, "Backpack", "9.99")));

    let state = session.dispatch(Command::UpdateQuantity {
        product_id: ProductId::new(1),
        quantity: 1,
    });

    assert_eq!(state.total_items, 1);
    assert_eq!(state.total_price.to_string(), "$9.99");
}

#[tokio::test]
async fn logout_clears_session_data() {
    let session = fresh_session().await;
    session.dispatch(Command::AddToCart(product(1, "Backpack", "9.99")));
    session.dispatch(Command::AddToWishlist(product(2, "Ring", "299.00")));
    session.dispatch(Command::Login(demo_user()));

    let state = session.dispatch(Command::Logout);

    assert_eq!(state.user, None);
    assert!(state.cart.is_empty());
    assert!(state.wishlist.is_empty());
    assert_eq!(state.total_items, 0);
    assert!(state.total_price.is_zero());
}

#[tokio::test]
async fn wishlist_is_a_set() {
    let session = fresh_session().await;
    session.dispatch(Command::AddToWishlist(product(2, "Ring", "299.00")));
    let state = session.dispatch(Command::AddToWishlist(product(2, "Ring", "299.00")));

    assert_eq!(state.wishlist.len(), 1);
    assert!(state.is_in_wishlist(ProductId::new(2)));
}

#[tokio::test]
async fn mixed_operation_sequence_keeps_totals_consistent() {
    let session = fresh_session().await;

    session.dispatch(Command::AddToCart(product(1, "Backpack", "109.95")));
    session.dispatch(Command::AddToCart(product(2, "Shirt", "22.30")));
    session.dispatch(Command::UpdateQuantity {
        product_id: ProductId::new(2),
        quantity: 4,
    });
    session.dispatch(Command::RemoveFromCart(ProductId::new(1)));
    let state = session.dispatch(Command::AddToCart(product(3, "Jacket", "55.99")));

    let expected: u32 = state.cart.iter().map(|i| i.quantity).sum();
    assert_eq!(state.total_items, expected);
    assert_eq!(state.total_price.to_string(), "$145.19");
}
