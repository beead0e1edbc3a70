//! Wire types for the FakeStore REST API.
//!
//! These mirror the JSON shapes the API actually returns; the conversions
//! module turns them into domain models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A product as returned by `GET /products` and `GET /products/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiProduct {
    pub id: i32,
    pub title: String,
    /// JSON number; deserialized as decimal so no float money leaks in.
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Option<ApiRating>,
}

/// Rating block nested in a product.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRating {
    pub rate: f32,
    pub count: u32,
}
