//! EcomDemo store library.
//!
//! This crate owns the client-side core of the EcomDemo storefront app:
//!
//! - [`cart`] - The canonical cart/wishlist/session state and its pure
//!   transitions. All mutations funnel through [`cart::Command`].
//! - [`session`] - The shared state container: serializes transitions and
//!   triggers persistence after every change.
//! - [`persistence`] - Best-effort mirroring of the state to an external
//!   key-value store (load on startup, fire-and-forget saves).
//! - [`fakestore`] - Product supply from the public FakeStore demo REST API,
//!   with retry, timeout, and read caching.
//! - [`checkout`] - Order quote computation (shipping, tax, promo codes).
//! - [`auth`] - Demo credential handling.
//!
//! Screen rendering and navigation live in the front end, not here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod fakestore;
pub mod models;
pub mod persistence;
pub mod session;
