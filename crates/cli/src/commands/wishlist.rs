//! Wishlist commands.

use ecomdemo_core::ProductId;
use ecomdemo_store::cart::Command;
use ecomdemo_store::error::Result;
use ecomdemo_store::fakestore::FakeStoreClient;
use ecomdemo_store::persistence::FileStore;
use ecomdemo_store::session::SessionManager;

/// Show the wishlist.
pub fn show(session: &SessionManager<FileStore>) {
    let state = session.state();
    if state.wishlist.is_empty() {
        println!("Wishlist is empty");
        return;
    }
    for item in &state.wishlist {
        println!("{:>4}  {:>8}  {}", item.id, item.price.to_string(), item.name);
    }
}

/// Add a product to the wishlist. Repeat adds are silently ignored.
pub async fn add(
    session: &SessionManager<FileStore>,
    client: &FakeStoreClient,
    id: i32,
) -> Result<()> {
    let product = client.get_product(ProductId::new(id)).await?;
    session.dispatch(Command::AddToWishlist(product.snapshot()));
    session.persist().await;
    println!("Added {} to wishlist", product.name);
    Ok(())
}

/// Remove a product from the wishlist.
pub async fn remove(session: &SessionManager<FileStore>, id: i32) {
    session.dispatch(Command::RemoveFromWishlist(ProductId::new(id)));
    session.persist().await;
    show(session);
}
