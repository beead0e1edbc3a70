//! Product and category models.

use ecomdemo_core::{CategoryId, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A product as shown in listings and detail views.
///
/// Built from the FakeStore wire format by [`crate::fakestore::conversions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Display category name (already mapped, e.g. "Fashion").
    pub category: String,
    pub image: String,
    /// Average rating, 0.0-5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    pub in_stock: bool,
    pub stock_count: u32,
    pub is_featured: bool,
    pub is_new: bool,
}

impl Product {
    /// The display fields copied into cart and wishlist entries at add time.
    #[must_use]
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
            category: self.category.clone(),
        }
    }
}

/// The subset of product data persisted inside cart and wishlist entries.
///
/// A snapshot is taken when the item is added; later catalog changes do not
/// rewrite existing entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    /// Unit price at add time.
    pub price: Price,
    pub image: String,
    pub category: String,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name (e.g. "Fashion").
    pub name: String,
    /// Raw name used in API paths (e.g. "men's clothing").
    pub api_name: String,
}
