//! Conversions from FakeStore wire types to domain models.

use ecomdemo_core::{CategoryId, ProductId};
use ecomdemo_core::{CurrencyCode, Price};

use crate::models::{Category, Product};

use super::types::ApiProduct;

/// Default rating for products the API returns without one.
const DEFAULT_RATING: f32 = 4.0;

/// Convert an API product into the domain shape.
///
/// The demo API has no stock or merchandising data, so `stock_count`,
/// `is_featured`, and `is_new` are derived deterministically from the product
/// id. Stable across fetches, unlike the RNG the original mock used.
pub fn convert_product(api: ApiProduct) -> Product {
    let (rating, reviews) = api
        .rating
        .map_or((DEFAULT_RATING, 0), |r| (r.rate, r.count));
    let seed = api.id.rem_euclid(10);

    Product {
        id: ProductId::new(api.id),
        name: api.title,
        description: api.description,
        price: Price::new(api.price, CurrencyCode::USD),
        category: format_category(&api.category),
        image: api.image,
        rating,
        reviews,
        in_stock: true,
        stock_count: 10 + u32::try_from((i64::from(api.id) * 7).rem_euclid(50)).unwrap_or(0),
        is_featured: seed >= 7,
        is_new: seed == 4 || seed == 9,
    }
}

/// Map raw API category names to display names.
#[must_use]
pub fn format_category(raw: &str) -> String {
    match raw {
        "men's clothing" | "women's clothing" => "Fashion".to_string(),
        "jewelery" => "Jewelry".to_string(),
        "electronics" => "Electronics".to_string(),
        other => capitalize(other),
    }
}

/// Build category entries from the raw name list, numbered in API order.
pub fn convert_categories(raw: Vec<String>) -> Vec<Category> {
    raw.into_iter()
        .enumerate()
        .map(|(index, api_name)| Category {
            id: CategoryId::new(i32::try_from(index).unwrap_or(i32::MAX) + 1),
            name: format_category(&api_name),
            api_name,
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
