//! Session state: token, current user, and the durable copy of both.
//!
//! `SessionStore` is the single source of truth for "am I logged in".
//! Consumers either read it directly or `subscribe()` for pushes; nothing
//! else reads the storage keys.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::config::SecureString;
use crate::models::User;
use crate::navigation::{Navigator, Route};
use crate::storage::{Storage, StorageError, TOKEN_KEY, USER_KEY};

/// Point-in-time view of the session, as pushed to subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub current_user: Option<User>,
}

/// Shared session state. Cloning is cheap and every clone sees the same
/// session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    state: RwLock<SessionState>,
    storage: Arc<dyn Storage>,
    navigator: Arc<dyn Navigator>,
    notifier: watch::Sender<SessionSnapshot>,
}

#[derive(Default)]
struct SessionState {
    token: Option<SecureString>,
    current_user: Option<User>,
}

impl SessionState {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_authenticated: self.token.is_some(),
            current_user: self.current_user.clone(),
        }
    }
}

impl SessionStore {
    /// Build the store, rehydrating any persisted session.
    ///
    /// A session is restored only when both the token and a well-formed
    /// user record are present. Anything else starts signed out; storage
    /// problems are logged, never returned.
    pub fn load(storage: Arc<dyn Storage>, navigator: Arc<dyn Navigator>) -> Self {
        let state = rehydrate(storage.as_ref());
        let (notifier, _) = watch::channel(state.snapshot());

        if let Some(user) = &state.current_user {
            tracing::info!(user_id = %user.id, "Restored session from storage");
        }

        Self {
            inner: Arc::new(SessionStoreInner {
                state: RwLock::new(state),
                storage,
                navigator,
                notifier,
            }),
        }
    }

    /// The session token, if signed in.
    pub fn token(&self) -> Option<SecureString> {
        self.inner.state.read().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().token.is_some()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.state.read().current_user.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.read().snapshot()
    }

    /// Receive every session change from now on. The receiver starts out
    /// holding the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.notifier.subscribe()
    }

    /// Sign in: persist token and user together, then publish.
    ///
    /// State is untouched if persisting fails.
    pub fn establish(&self, token: SecureString, user: User) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(&user)?;
        self.inner.storage.set_many(&[
            (TOKEN_KEY, token.expose().to_string()),
            (USER_KEY, user_json),
        ])?;

        let snapshot = {
            let mut state = self.inner.state.write();
            state.token = Some(token);
            state.current_user = Some(user);
            state.snapshot()
        };

        if let Some(user) = &snapshot.current_user {
            tracing::info!(user_id = %user.id, "Session established");
        }
        self.publish(snapshot);
        Ok(())
    }

    /// Sign out: clear storage and state, then send the user to the login
    /// page. Safe to call when already signed out.
    pub fn logout(&self) {
        if let Err(e) = self.inner.storage.remove_many(&[TOKEN_KEY, USER_KEY]) {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }

        let (was_authenticated, snapshot) = {
            let mut state = self.inner.state.write();
            let was_authenticated = state.token.is_some();
            *state = SessionState::default();
            (was_authenticated, state.snapshot())
        };

        if was_authenticated {
            tracing::info!("Session cleared");
        }
        self.publish(snapshot);
        self.inner.navigator.navigate(Route::Login);
    }

    fn publish(&self, snapshot: SessionSnapshot) {
        self.inner.notifier.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("SessionStore")
            .field("token", &state.token)
            .field("current_user", &state.current_user)
            .finish()
    }
}

fn rehydrate(storage: &dyn Storage) -> SessionState {
    let token = match storage.get(TOKEN_KEY) {
        Ok(Some(token)) if !token.is_empty() => token,
        Ok(_) => return SessionState::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored token, starting signed out");
            return SessionState::default();
        }
    };

    let user_json = match storage.get(USER_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => {
            tracing::debug!("Stored token has no user record, starting signed out");
            return SessionState::default();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored user, starting signed out");
            return SessionState::default();
        }
    };

    match serde_json::from_str::<User>(&user_json) {
        Ok(user) => SessionState {
            token: Some(SecureString::new(token)),
            current_user: Some(user),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Stored user record is malformed, starting signed out");
            SessionState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::TracingNavigator;
    use crate::storage::MemoryStorage;

    fn store_with(storage: Arc<MemoryStorage>) -> SessionStore {
        SessionStore::load(storage, Arc::new(TracingNavigator))
    }

    #[test]
    fn test_empty_storage_starts_signed_out() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_token_without_user_starts_signed_out() {
        let storage = Arc::new(MemoryStorage::with_entries([(TOKEN_KEY, "t")]));
        let store = store_with(storage);
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_user_without_token_is_ignored() {
        let storage = Arc::new(MemoryStorage::with_entries([(
            USER_KEY,
            r#"{"id":"1","name":"Ana","email":"ana@example.com"}"#,
        )]));
        let store = store_with(storage);
        assert!(store.current_user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_establish_publishes_snapshot() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        let mut rx = store.subscribe();
        assert!(!rx.borrow_and_update().is_authenticated);

        store
            .establish(
                SecureString::new("tok".to_string()),
                User::new("1", "Ana", "ana@example.com"),
            )
            .unwrap();

        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.current_user.unwrap().name, "Ana");
    }

    #[test]
    fn test_logout_when_signed_out_does_not_notify() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        let rx = store.subscribe();

        store.logout();

        assert!(!rx.has_changed().unwrap());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_debug_hides_token() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        store
            .establish(
                SecureString::new("very-secret".to_string()),
                User::new("1", "Ana", "ana@example.com"),
            )
            .unwrap();
        assert!(!format!("{:?}", store).contains("very-secret"));
    }
}
