//! EcomDemo CLI - browse the demo catalog and drive the cart.
//!
//! # Usage
//!
//! ```bash
//! # Browse products
//! ecomdemo products list --limit 5
//! ecomdemo products list --category Fashion
//! ecomdemo products show 1
//! ecomdemo products categories
//!
//! # Cart (persisted across invocations)
//! ecomdemo cart add 1
//! ecomdemo cart set-qty 1 3
//! ecomdemo cart show
//! ecomdemo cart checkout --promo SAVE10 --place
//!
//! # Wishlist and account
//! ecomdemo wishlist add 2
//! ecomdemo account login -e test@test.com -p 123456
//! ecomdemo account register -n "Alice" -e alice@example.com -p hunter22 --confirm hunter22
//! ecomdemo account logout
//! ```
//!
//! Each invocation is one app session: state is hydrated from the storage
//! directory before the command runs and persisted afterwards.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use ecomdemo_store::config::AppConfig;
use ecomdemo_store::fakestore::FakeStoreClient;
use ecomdemo_store::persistence::FileStore;
use ecomdemo_store::session::SessionManager;

mod commands;

#[derive(Parser)]
#[command(name = "ecomdemo")]
#[command(author, version, about = "EcomDemo storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Log in and out
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products
    List {
        /// Limit the number of products
        #[arg(short, long)]
        limit: Option<u32>,

        /// Filter by category (display or API name)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: i32,
    },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart and totals
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: i32,
    },
    /// Remove a product entirely
    Remove {
        /// Product id
        id: i32,
    },
    /// Set the quantity of a product (0 removes it)
    SetQty {
        /// Product id
        id: i32,
        /// New quantity
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Price out the order
    Checkout {
        /// Promo code (SAVE10 or FREESHIP)
        #[arg(short, long)]
        promo: Option<String>,

        /// Place the order (clears the cart)
        #[arg(long)]
        place: bool,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist
    Show,
    /// Add a product
    Add {
        /// Product id
        id: i32,
    },
    /// Remove a product
    Remove {
        /// Product id
        id: i32,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Show the signed-in user
    Show,
    /// Sign in
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (at least 6 characters)
        #[arg(short, long)]
        password: String,

        /// Repeat the password
        #[arg(long)]
        confirm: String,
    },
    /// Sign out (clears cart and wishlist too)
    Logout,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let client = FakeStoreClient::new(&config.api)?;
    let session = SessionManager::start(
        FileStore::new(&config.storage.dir),
        config.storage.load_timeout,
    )
    .await;

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List { limit, category } => {
                commands::products::list(&client, limit, category.as_deref()).await?;
            }
            ProductsAction::Show { id } => commands::products::show(&client, id).await?,
            ProductsAction::Categories => commands::products::categories(&client).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&session),
            CartAction::Add { id } => commands::cart::add(&session, &client, id).await?,
            CartAction::Remove { id } => commands::cart::remove(&session, id).await,
            CartAction::SetQty { id, quantity } => {
                commands::cart::set_quantity(&session, id, quantity).await;
            }
            CartAction::Clear => commands::cart::clear(&session).await,
            CartAction::Checkout { promo, place } => {
                commands::cart::checkout(&session, promo.as_deref(), place).await;
            }
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(&session),
            WishlistAction::Add { id } => commands::wishlist::add(&session, &client, id).await?,
            WishlistAction::Remove { id } => commands::wishlist::remove(&session, id).await,
        },
        Commands::Account { action } => match action {
            AccountAction::Show => commands::account::show(&session),
            AccountAction::Login { email, password } => {
                commands::account::login(&session, &email, &password).await?;
            }
            AccountAction::Register {
                name,
                email,
                password,
                confirm,
            } => {
                commands::account::register(&session, &name, &email, &password, &confirm).await?;
            }
            AccountAction::Logout => commands::account::logout(&session).await,
        },
    }
    Ok(())
}
