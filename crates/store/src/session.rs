//! The shared session state container.
//!
//! One [`SessionManager`] is created per app session and handed (by cheap
//! clone) to whichever component needs the cart - no hidden global. It owns
//! the authoritative [`CartState`], serializes transitions so no two ever
//! interleave, and mirrors every change to persistent storage.
//!
//! Hydration ordering is strict: [`SessionManager::start`] finishes the
//! persisted-state load (or times out) before the manager exists, so no
//! command can race the load and be silently overwritten.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::{debug, info};

use crate::cart::{CartState, Command};
use crate::persistence::{KeyValueStore, PersistenceSync};

/// Shared handle to the session state.
///
/// Cheaply cloneable via `Arc`; all clones see the same state.
#[derive(Debug, Clone)]
pub struct SessionManager<S> {
    inner: Arc<SessionInner<S>>,
}

#[derive(Debug)]
struct SessionInner<S> {
    state: Mutex<CartState>,
    sync: PersistenceSync<S>,
}

impl<S: KeyValueStore + Clone + Send + Sync + 'static> SessionManager<S> {
    /// Create a session over `store`, hydrating from persisted state first.
    ///
    /// Blocks until the load completes or `load_timeout` elapses; on timeout
    /// or error the session starts empty (fail-open).
    pub async fn start(store: S, load_timeout: Duration) -> Self {
        let sync = PersistenceSync::new(store, load_timeout);
        let state = match sync.load().await {
            Some(snapshot) => {
                let state = CartState::default().hydrate(snapshot);
                info!(
                    total_items = state.total_items,
                    wishlist = state.wishlist.len(),
                    logged_in = state.is_logged_in(),
                    "restored persisted session"
                );
                state
            }
            None => CartState::default(),
        };

        Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(state),
                sync,
            }),
        }
    }

    /// Apply a command and return the resulting state.
    ///
    /// Transitions are serialized behind a lock, so each command sees the
    /// complete result of the previous one. If the command changed the cart,
    /// wishlist, or user, a background save is triggered (fire-and-forget).
    pub fn dispatch(&self, command: Command) -> CartState {
        let next = {
            let mut guard = self.lock();
            let next = guard.apply(command);
            let changed = next.cart != guard.cart
                || next.wishlist != guard.wishlist
                || next.user != guard.user;
            *guard = next.clone();
            if !changed {
                debug!("command was a no-op, skipping save");
                return next;
            }
            next
        };
        self.inner.sync.spawn_save(&next);
        next
    }

    /// A snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> CartState {
        self.lock().clone()
    }

    /// Persist the current state and wait for the write to finish.
    ///
    /// Saves are normally fire-and-forget; short-lived callers (the CLI) use
    /// this before exiting so the last mutation is on disk.
    pub async fn persist(&self) {
        let snapshot = self.lock().snapshot();
        self.inner.sync.save(&snapshot).await;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CartState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
