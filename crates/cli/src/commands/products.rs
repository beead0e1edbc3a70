//! Product browsing commands.

use ecomdemo_core::ProductId;
use ecomdemo_store::error::Result;
use ecomdemo_store::fakestore::FakeStoreClient;
use ecomdemo_store::models::Product;

/// List products, optionally limited and/or filtered by category.
pub async fn list(
    client: &FakeStoreClient,
    limit: Option<u32>,
    category: Option<&str>,
) -> Result<()> {
    let mut products = match category {
        Some(name) => {
            let api_name = resolve_category(client, name).await?;
            client.get_products_by_category(&api_name).await?
        }
        None => match limit {
            Some(limit) => client.get_products_limited(limit).await?,
            None => client.get_products().await?,
        },
    };

    // The category endpoint has no limit parameter; truncate locally
    if let (Some(limit), Some(_)) = (limit, category) {
        products.truncate(limit as usize);
    }

    for product in &products {
        println!(
            "{:>4}  {:<10}  {:>8}  {}",
            product.id,
            product.category,
            product.price.to_string(),
            product.name
        );
    }
    println!("{} products", products.len());
    Ok(())
}

/// Show one product in detail.
pub async fn show(client: &FakeStoreClient, id: i32) -> Result<()> {
    let product = client.get_product(ProductId::new(id)).await?;
    print_detail(&product);
    Ok(())
}

/// List categories.
pub async fn categories(client: &FakeStoreClient) -> Result<()> {
    for category in client.get_categories().await? {
        println!("{:>3}  {:<12} ({})", category.id, category.name, category.api_name);
    }
    Ok(())
}

/// Turn a display or raw category name into the raw API name.
async fn resolve_category(client: &FakeStoreClient, name: &str) -> Result<String> {
    let categories = client.get_categories().await?;
    let resolved = categories
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(name) || c.api_name.eq_ignore_ascii_case(name))
        .map_or_else(|| name.to_string(), |c| c.api_name);
    Ok(resolved)
}

fn print_detail(product: &Product) {
    println!("{} (#{})", product.name, product.id);
    println!("  price:    {}", product.price);
    println!("  category: {}", product.category);
    println!(
        "  rating:   {:.1} ({} reviews)",
        product.rating, product.reviews
    );
    println!("  stock:    {}", product.stock_count);
    println!();
    println!("{}", product.description);
}
