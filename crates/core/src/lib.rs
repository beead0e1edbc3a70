//! EcomDemo Core - Shared types library.
//!
//! This crate provides common types used across all EcomDemo components:
//! - `store` - Cart/wishlist state machine, persistence, and product supply
//! - `cli` - Command-line front end that drives the store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
