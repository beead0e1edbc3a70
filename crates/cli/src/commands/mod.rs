//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod products;
pub mod wishlist;
