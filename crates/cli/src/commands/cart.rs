//! Cart commands.

use ecomdemo_core::ProductId;
use ecomdemo_store::cart::{CartState, Command};
use ecomdemo_store::checkout;
use ecomdemo_store::error::Result;
use ecomdemo_store::fakestore::FakeStoreClient;
use ecomdemo_store::persistence::FileStore;
use ecomdemo_store::session::SessionManager;

/// Show the cart and totals.
pub fn show(session: &SessionManager<FileStore>) {
    print_cart(&session.state());
}

/// Add one unit of a product, fetching its snapshot from the catalog.
pub async fn add(
    session: &SessionManager<FileStore>,
    client: &FakeStoreClient,
    id: i32,
) -> Result<()> {
    let product = client.get_product(ProductId::new(id)).await?;
    let state = session.dispatch(Command::AddToCart(product.snapshot()));
    session.persist().await;
    println!("Added {} to cart", product.name);
    print_cart(&state);
    Ok(())
}

/// Remove a product entirely.
pub async fn remove(session: &SessionManager<FileStore>, id: i32) {
    let state = session.dispatch(Command::RemoveFromCart(ProductId::new(id)));
    session.persist().await;
    print_cart(&state);
}

/// Set the quantity of a product; 0 removes it.
pub async fn set_quantity(session: &SessionManager<FileStore>, id: i32, quantity: i64) {
    let state = session.dispatch(Command::UpdateQuantity {
        product_id: ProductId::new(id),
        quantity,
    });
    session.persist().await;
    print_cart(&state);
}

/// Empty the cart.
pub async fn clear(session: &SessionManager<FileStore>) {
    session.dispatch(Command::ClearCart);
    session.persist().await;
    println!("Cart cleared");
}

/// Price out the order; with `place`, also clear the cart.
pub async fn checkout(session: &SessionManager<FileStore>, promo: Option<&str>, place: bool) {
    let state = session.state();
    if state.cart.is_empty() {
        println!("Cart is empty");
        return;
    }

    let quote = checkout::quote(&state, promo);
    println!("Subtotal  {:>10}", quote.subtotal.to_string());
    println!("Shipping  {:>10}", quote.shipping.to_string());
    println!("Tax       {:>10}", quote.tax.to_string());
    if !quote.discount.is_zero() {
        println!("Discount  {:>10}", format!("-{}", quote.discount));
    }
    println!("Total     {:>10}", quote.total.to_string());

    if place {
        session.dispatch(Command::ClearCart);
        session.persist().await;
        println!();
        println!("Order placed. You will receive a confirmation email shortly.");
    }
}

fn print_cart(state: &CartState) {
    if state.cart.is_empty() {
        println!("Cart is empty");
        return;
    }
    for item in &state.cart {
        println!(
            "{:>4}  x{:<3}  {:>8}  {}",
            item.product.id,
            item.quantity,
            item.line_total().to_string(),
            item.product.name
        );
    }
    println!("{} items, {}", state.total_items, state.total_price);
}
