use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::error::GatewayError;
use crate::types::{
    AuthorityMode, Jwt, OAuthProvider, PasswordVerification, SessionArtifact, SessionSecret,
    UserIdentity,
};

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Operations available under the administrative service key.
///
/// None of these are reachable from a user-session binding: the separation
/// is structural, not checked at call time.
#[async_trait]
pub trait AdminCapability: Send + Sync {
    /// Build the OAuth redirect URL for the caller to navigate to.
    async fn create_oauth_redirect(
        &self,
        provider: OAuthProvider,
        success_url: &Url,
        failure_url: &Url,
    ) -> Result<Url>;

    /// Exchange the redirect callback pair for a session artifact.
    async fn exchange_oauth_pair(&self, user_id: &str, secret: &str) -> Result<SessionArtifact>;

    /// Create a user account on the provider.
    async fn create_account(
        &self,
        id: &str,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserIdentity>;

    /// Verify an email/password pair. The provider session this creates is
    /// discarded; only the verified user id is used.
    async fn create_password_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<PasswordVerification>;

    /// Mint a JWT for an already-verified user.
    async fn mint_jwt(&self, user_id: &str) -> Result<Jwt>;
}

/// Operations available to a caller bound to their own session.
#[async_trait]
pub trait UserCapability: Send + Sync {
    /// The identity behind the bound session.
    async fn current_identity(&self) -> Result<UserIdentity>;

    /// Revoke the bound session upstream.
    async fn delete_current_session(&self) -> Result<()>;
}

/// A mode-discriminated capability handle.
///
/// Two distinct types behind one discriminant, never one object with
/// optional members: a user-session binding cannot name an administrative
/// operation at all.
#[derive(Clone)]
pub enum Capability {
    Admin(Arc<dyn AdminCapability>),
    User(Arc<dyn UserCapability>),
}

/// Constructs capability handles bound to one authority mode.
///
/// Binding is pure: no network call happens until an operation on the
/// returned capability is invoked, and the handle is built per request and
/// discarded after.
pub trait ClientFactory: Send + Sync {
    /// Bind a capability for `mode`.
    ///
    /// # Errors
    ///
    /// `InvalidAuthorityRequest` if `mode` is [`AuthorityMode::UserSession`]
    /// and `secret` is absent or empty. This is the only way acquisition
    /// itself can fail; provider errors surface from invoked operations.
    fn acquire(&self, mode: AuthorityMode, secret: Option<&SessionSecret>) -> Result<Capability>;

    /// Bind under the administrative service key.
    fn admin(&self) -> Result<Arc<dyn AdminCapability>> {
        match self.acquire(AuthorityMode::Administrative, None)? {
            Capability::Admin(admin) => Ok(admin),
            Capability::User(_) => Err(GatewayError::InvalidAuthorityRequest),
        }
    }

    /// Bind to the caller's own session.
    fn user_session(&self, secret: &SessionSecret) -> Result<Arc<dyn UserCapability>> {
        match self.acquire(AuthorityMode::UserSession, Some(secret))? {
            Capability::User(user) => Ok(user),
            Capability::Admin(_) => Err(GatewayError::InvalidAuthorityRequest),
        }
    }
}
