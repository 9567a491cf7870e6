//! Durable, synchronous storage for the credential and profile.
//!
//! This module provides [`TokenStore`], the process-wide owner of auth
//! state. It is the SDK's analog of origin-scoped browser storage: reads
//! and writes are synchronous, assumed infallible, and survive for the
//! lifetime of the store.
//!
//! # Clear notifications
//!
//! Consumers that mirror the authenticated flag (application contexts, UI
//! state) can register a listener via [`TokenStore::on_clear`]. Listeners
//! run synchronously inside [`TokenStore::clear_all`], so storage and
//! derived state never diverge within the same tick.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use storefront_api::{Credential, TokenStore};
//!
//! let store = Arc::new(TokenStore::new());
//! store.save_credential(Credential::new("token"));
//! assert!(store.is_authenticated());
//!
//! let flag = Arc::new(AtomicBool::new(true));
//! let observed = Arc::clone(&flag);
//! store.on_clear(move || observed.store(false, Ordering::SeqCst));
//!
//! store.clear_all();
//! assert!(!store.is_authenticated());
//! assert!(!flag.load(Ordering::SeqCst));
//! ```

use std::sync::{Mutex, PoisonError, RwLock};

use crate::auth::{Credential, Profile};

type ClearListener = Box<dyn Fn() + Send + Sync>;

#[derive(Debug, Default)]
struct AuthState {
    credential: Option<Credential>,
    profile: Option<Profile>,
}

/// Process-wide store for the [`Credential`] and [`Profile`].
///
/// The store is shared as `Arc<TokenStore>` between the HTTP client (the
/// only component permitted to mutate it as a result of network activity)
/// and any application code that reads auth state.
///
/// # Thread Safety
///
/// `TokenStore` is `Send + Sync`. Interior mutability is serialized by a
/// lock; consumers never observe a half-written state.
#[derive(Default)]
pub struct TokenStore {
    state: RwLock<AuthState>,
    listeners: Mutex<Vec<ClearListener>>,
}

// Verify TokenStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenStore>();
};

impl TokenStore {
    /// Creates an empty store with no credential, profile, or listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists the access credential.
    pub fn save_credential(&self, credential: Credential) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .credential = Some(credential);
    }

    /// Persists the user profile.
    pub fn save_profile(&self, profile: Profile) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .profile = Some(profile);
    }

    /// Returns the stored credential, if any.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .credential
            .clone()
    }

    /// Returns the stored profile, if any.
    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .profile
            .clone()
    }

    /// Returns `true` if a non-empty credential is stored.
    ///
    /// This is the application-level authenticated flag; it is kept in
    /// lockstep with storage because both live behind the same lock.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .credential
            .as_ref()
            .is_some_and(|c| !c.is_empty())
    }

    /// Clears the credential and profile, then notifies clear listeners.
    ///
    /// Listeners run synchronously before this method returns; any listener
    /// reading the store observes the cleared state.
    pub fn clear_all(&self) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.credential = None;
            state.profile = None;
        }

        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener();
        }
    }

    /// Registers a listener invoked synchronously on every [`clear_all`].
    ///
    /// [`clear_all`]: Self::clear_all
    pub fn on_clear(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("TokenStore")
            .field("credential", &state.credential)
            .field("has_profile", &state.profile.is_some())
            .finish()
    }
}
