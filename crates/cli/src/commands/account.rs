//! Account commands.

use ecomdemo_store::auth;
use ecomdemo_store::cart::Command;
use ecomdemo_store::error::Result;
use ecomdemo_store::persistence::FileStore;
use ecomdemo_store::session::SessionManager;

/// Show the signed-in user, if any.
pub fn show(session: &SessionManager<FileStore>) {
    match session.state().user {
        Some(user) => println!("Signed in as {} <{}>", user.name, user.email),
        None => println!("Not signed in"),
    }
}

/// Validate credentials and sign in.
pub async fn login(session: &SessionManager<FileStore>, email: &str, password: &str) -> Result<()> {
    let user = auth::authenticate(email, password)?;
    let name = user.name.clone();
    session.dispatch(Command::Login(user));
    session.persist().await;
    println!("Welcome, {name}!");
    Ok(())
}

/// Validate a registration form, then sign the new user in.
pub async fn register(
    session: &SessionManager<FileStore>,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<()> {
    let user = auth::register(name, email, password, confirm)?;
    let name = user.name.clone();
    session.dispatch(Command::Login(user));
    session.persist().await;
    println!("Account created. Welcome, {name}!");
    Ok(())
}

/// Sign out. Cart and wishlist are session-scoped and cleared too.
pub async fn logout(session: &SessionManager<FileStore>) {
    session.dispatch(Command::Logout);
    session.persist().await;
    println!("Signed out");
}
