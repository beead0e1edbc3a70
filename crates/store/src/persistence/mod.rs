//! Persistence synchronization.
//!
//! Bridges the pure [`CartState`](crate::cart::CartState) to an external
//! key-value store. Cart, wishlist, and user are serialized independently
//! under namespaced keys, so corruption in one section never blocks recovery
//! of the others.
//!
//! Persistence is best-effort, not transactional: a failed write is logged
//! and dropped, never retried, and never rolls back the in-memory state.

pub mod kv;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError};

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::cart::{CartItem, CartState, StateSnapshot};
use crate::models::{ProductSnapshot, User};

/// Storage keys, namespaced under an app prefix to avoid collisions with
/// anything else in the device store.
pub mod keys {
    pub const CART: &str = "ecomdemo_cart_data";
    pub const WISHLIST: &str = "ecomdemo_wishlist_data";
    pub const USER: &str = "ecomdemo_user_data";
}

/// Mirrors cart state to and from a key-value store.
#[derive(Debug, Clone)]
pub struct PersistenceSync<S> {
    store: S,
    load_timeout: Duration,
}

impl<S: KeyValueStore + Clone + Send + Sync + 'static> PersistenceSync<S> {
    /// Create a sync bridge over `store`. `load_timeout` bounds how long
    /// startup hydration may block the first render.
    pub const fn new(store: S, load_timeout: Duration) -> Self {
        Self {
            store,
            load_timeout,
        }
    }

    /// Read a persisted snapshot. Called exactly once, before the first
    /// transition is accepted.
    ///
    /// Returns `None` on first run (no keys present), on timeout, or on total
    /// store failure - the caller falls open to an empty state. A corrupt or
    /// unreadable section is dropped individually; a broken wishlist must not
    /// block cart recovery.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Option<StateSnapshot> {
        match tokio::time::timeout(self.load_timeout, self.read_snapshot()).await {
            Ok(snapshot) => snapshot,
            Err(_) => {
                warn!(
                    timeout_ms = self.load_timeout.as_millis(),
                    "persisted state load timed out, starting empty"
                );
                None
            }
        }
    }

    async fn read_snapshot(&self) -> Option<StateSnapshot> {
        let (cart_raw, wishlist_raw, user_raw) = tokio::join!(
            self.read_key(keys::CART),
            self.read_key(keys::WISHLIST),
            self.read_key(keys::USER),
        );

        // First run: nothing persisted at all.
        if cart_raw.is_none() && wishlist_raw.is_none() && user_raw.is_none() {
            debug!("no persisted state found");
            return None;
        }

        Some(StateSnapshot {
            cart: parse_section::<Vec<CartItem>>(keys::CART, cart_raw),
            wishlist: parse_section::<Vec<ProductSnapshot>>(keys::WISHLIST, wishlist_raw),
            user: parse_section::<Option<User>>(keys::USER, user_raw),
        })
    }

    /// Read one key, treating store errors as absent.
    async fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read persisted section");
                None
            }
        }
    }

    /// Write a complete snapshot. Each section is serialized and written
    /// independently; failures are logged and swallowed.
    #[instrument(skip_all)]
    pub async fn save(&self, snapshot: &StateSnapshot) {
        self.write_section(keys::CART, &snapshot.cart).await;
        self.write_section(keys::WISHLIST, &snapshot.wishlist).await;
        self.write_section(keys::USER, &snapshot.user).await;
    }

    /// Persist `state` in a background task, fire-and-forget.
    ///
    /// Overlapping saves from rapid successive mutations are fine: each task
    /// writes a complete snapshot and per-key writes are last-write-wins.
    pub fn spawn_save(&self, state: &CartState) {
        let sync = self.clone();
        let snapshot = state.snapshot();
        tokio::spawn(async move {
            sync.save(&snapshot).await;
        });
    }

    async fn write_section<T: serde::Serialize>(&self, key: &str, section: &T) {
        let serialized = match serde_json::to_string(section) {
            Ok(s) => s,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize section, skipping save");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &serialized).await {
            warn!(key, error = %e, "failed to persist section");
        }
    }
}

/// Parse one persisted section, falling back to its empty value when the key
/// is absent or the stored data is corrupt.
fn parse_section<T: DeserializeOwned + Default>(key: &str, raw: Option<String>) -> T {
    raw.map_or_else(T::default, |s| match serde_json::from_str(&s) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "discarding corrupt persisted section");
            T::default()
        }
    })
}
