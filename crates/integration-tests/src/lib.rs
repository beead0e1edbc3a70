//! Shared fixtures for EcomDemo integration tests.
//!
//! Tests drive a real [`SessionManager`](ecomdemo_store::session::SessionManager)
//! against in-memory or temp-directory stores; no network access is involved.

#![cfg_attr(not(test), forbid(unsafe_code))]

use ecomdemo_core::{CurrencyCode, Email, Price, ProductId, UserId};
use ecomdemo_store::models::{ProductSnapshot, User};

/// A product snapshot fixture priced in whole-and-cents USD.
///
/// # Panics
///
/// Panics if `price` is not a valid decimal literal (test input bug).
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn product(id: i32, name: &str, price: &str) -> ProductSnapshot {
    ProductSnapshot {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::new(price.parse().unwrap(), CurrencyCode::USD),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
        category: "Electronics".to_string(),
    }
}

/// The demo user fixture.
///
/// # Panics
///
/// Panics only if the fixture email constant is malformed.
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn demo_user() -> User {
    User {
        id: UserId::new(1),
        email: Email::parse("test@test.com").unwrap(),
        name: "Demo User".to_string(),
        avatar_url: None,
    }
}
