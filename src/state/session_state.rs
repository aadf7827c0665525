// ============================================================================
// SESSION STATE - Bearer token, persisted in client storage
// ============================================================================
// The only piece of state shared across screens. Handed to whoever needs it
// as an `Rc<SessionState>`; nothing reads storage behind its back.
// ============================================================================

use std::rc::Rc;

use super::reactivity::ReactiveState;
use super::route_guard::AuthPhase;
use crate::utils::storage::{KeyValueStore, StorageError};

pub struct SessionState {
    store: Rc<dyn KeyValueStore>,
    key: String,
    token: ReactiveState<Option<String>>,
}

impl SessionState {
    /// Restore whatever token the store holds under `key`
    pub fn restore(store: Rc<dyn KeyValueStore>, key: &str) -> Self {
        let token = store.get(key).filter(|token| !token.trim().is_empty());
        if token.is_some() {
            log::info!("🔐 [SESSION] Restored stored token");
        }
        Self {
            store,
            key: key.to_string(),
            token: ReactiveState::new(token),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn phase(&self) -> AuthPhase {
        if self.is_authenticated() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }

    pub fn sign_in(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(&self.key, token)?;
        self.token.set(Some(token.to_string()));
        log::info!("✅ [SESSION] Signed in");
        Ok(())
    }

    /// Forget the token. The in-memory session is cleared even if storage fails.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            log::error!("❌ [SESSION] Could not remove stored token: {}", e);
        }
        if self.is_authenticated() {
            self.token.set(None);
            log::info!("🚪 [SESSION] Session cleared");
        }
    }

    /// Called on every sign-in / sign-out
    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> usize {
        self.token.subscribe(callback)
    }
}
