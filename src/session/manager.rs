use tokio::sync::watch;

use super::store::{SessionSnapshot, SessionStore};
use crate::api::{ApiClient, ApiError};
use crate::config::SecureString;
use crate::models::{AuthPayload, LoginRequest, RegisterRequest, RegisteredAccount, User};

/// Account operations: register, login, logout, and session accessors.
#[derive(Debug, Clone)]
pub struct SessionManager {
    api: ApiClient,
}

impl SessionManager {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn store(&self) -> &SessionStore {
        self.api.session()
    }

    /// Create an account. The session stays as it was; a separate `login`
    /// is needed.
    pub async fn register(&self, data: &RegisterRequest) -> Result<RegisteredAccount, ApiError> {
        let payload: AuthPayload = self.api.post(&["users", "register"], data).await?;
        tracing::info!(user_id = %payload.user.id, "Account registered");
        Ok(RegisteredAccount {
            user: User::from(payload.user),
        })
    }

    /// Sign in and persist the session.
    ///
    /// A response without a token is rejected and leaves the session as it
    /// was; a session is never established without one.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        let payload: AuthPayload = self.api.post(&["users", "login"], credentials).await?;

        let token = match payload.token {
            Some(token) if !token.is_empty() => SecureString::new(token),
            _ => {
                return Err(self.api.normalizer().report(ApiError::InvalidResponse {
                    message: "login response carried no token".to_string(),
                }));
            }
        };

        let user = User::from(payload.user);
        self.store()
            .establish(token, user.clone())
            .map_err(|e| self.api.normalizer().report(ApiError::from(e)))?;
        Ok(user)
    }

    /// Sign out locally. Never fails and needs no network.
    pub fn logout(&self) {
        self.store().logout();
    }

    pub fn token(&self) -> Option<SecureString> {
        self.store().token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.store().current_user()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.store().subscribe()
    }
}
