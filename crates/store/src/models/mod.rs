//! Domain models.

pub mod product;
pub mod user;

pub use product::{Category, Product, ProductSnapshot};
pub use user::User;
