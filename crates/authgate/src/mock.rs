//! In-memory identity provider for tests.
//!
//! Stands in for the upstream provider behind the same capability traits:
//! accounts, live session secrets, and pending OAuth exchange pairs live in
//! maps, and every delegated operation bumps a call counter so tests can
//! assert that a flow made no provider call at all.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use authgate_core::{
    AdminCapability, AuthorityMode, Capability, ClientFactory, GatewayError, Jwt, OAuthProvider,
    PasswordVerification, Result, SessionArtifact, SessionSecret, UserCapability, UserIdentity,
};
use chrono::{Duration, Utc};
use url::Url;

#[derive(Clone)]
struct Account {
    user_id: String,
    email: String,
    password: String,
    name: String,
}

#[derive(Default)]
struct Inner {
    accounts: Mutex<Vec<Account>>,
    /// Live session secrets (cookie secrets and minted JWTs) -> user id.
    sessions: Mutex<HashMap<String, String>>,
    /// Pending OAuth exchange secrets -> user id, consumed exactly once.
    exchanges: Mutex<HashMap<String, String>>,
    calls: AtomicUsize,
}

#[derive(Clone, Default)]
pub struct MockIdentityProvider {
    inner: Arc<Inner>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_account(&self, user_id: &str, email: &str, password: &str, name: &str) {
        self.inner.accounts.lock().unwrap().push(Account {
            user_id: user_id.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        });
    }

    pub fn seed_exchange(&self, user_id: &str, secret: &str) {
        self.inner
            .exchanges
            .lock()
            .unwrap()
            .insert(secret.to_string(), user_id.to_string());
    }

    /// Number of delegated provider operations invoked so far.
    pub fn provider_calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }
}

impl ClientFactory for MockIdentityProvider {
    fn acquire(&self, mode: AuthorityMode, secret: Option<&SessionSecret>) -> Result<Capability> {
        match mode {
            AuthorityMode::Administrative => Ok(Capability::Admin(Arc::new(MockAdmin {
                inner: self.inner.clone(),
            }))),
            AuthorityMode::UserSession => {
                let secret = secret
                    .filter(|s| !s.is_empty())
                    .ok_or(GatewayError::InvalidAuthorityRequest)?;
                Ok(Capability::User(Arc::new(MockUser {
                    inner: self.inner.clone(),
                    secret: secret.clone(),
                })))
            }
        }
    }
}

fn guest_scope_error() -> GatewayError {
    GatewayError::Upstream {
        status: 401,
        message: "User (role: guests) missing scope (account)".to_string(),
    }
}

struct MockAdmin {
    inner: Arc<Inner>,
}

#[async_trait]
impl AdminCapability for MockAdmin {
    async fn create_oauth_redirect(
        &self,
        provider: OAuthProvider,
        success_url: &Url,
        failure_url: &Url,
    ) -> Result<Url> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let mut url = Url::parse(&format!("https://mock-idp.example.com/oauth/{provider}"))
            .map_err(|e| GatewayError::Upstream {
                status: 500,
                message: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("success", success_url.as_str())
            .append_pair("failure", failure_url.as_str());
        Ok(url)
    }

    async fn exchange_oauth_pair(&self, user_id: &str, secret: &str) -> Result<SessionArtifact> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let mut exchanges = self.inner.exchanges.lock().unwrap();
        match exchanges.get(secret) {
            Some(expected) if expected == user_id => {
                exchanges.remove(secret);
                let session_secret = format!("sess-{user_id}");
                self.inner
                    .sessions
                    .lock()
                    .unwrap()
                    .insert(session_secret.clone(), user_id.to_string());
                Ok(SessionArtifact {
                    secret: SessionSecret::new(session_secret),
                    expire: Utc::now() + Duration::hours(1),
                })
            }
            _ => Err(GatewayError::Upstream {
                status: 401,
                message: "Invalid token passed in the request.".to_string(),
            }),
        }
    }

    async fn create_account(
        &self,
        id: &str,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserIdentity> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let mut accounts = self.inner.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == email) {
            return Err(GatewayError::Upstream {
                status: 409,
                message: "A user with the same email already exists".to_string(),
            });
        }

        accounts.push(Account {
            user_id: id.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        });

        Ok(UserIdentity {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
        })
    }

    async fn create_password_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<PasswordVerification> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let accounts = self.inner.accounts.lock().unwrap();
        accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(|a| PasswordVerification {
                user_id: a.user_id.clone(),
            })
            .ok_or_else(|| GatewayError::Upstream {
                status: 401,
                message: "Invalid credentials. Please check the email and password.".to_string(),
            })
    }

    async fn mint_jwt(&self, user_id: &str) -> Result<Jwt> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let known = self
            .inner
            .accounts
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.user_id == user_id);
        if !known {
            return Err(GatewayError::Upstream {
                status: 404,
                message: "User with the requested ID could not be found.".to_string(),
            });
        }

        let jwt = format!("jwt-{user_id}");
        // A minted JWT authenticates account endpoints like a session secret.
        self.inner
            .sessions
            .lock()
            .unwrap()
            .insert(jwt.clone(), user_id.to_string());
        Ok(Jwt { jwt })
    }
}

struct MockUser {
    inner: Arc<Inner>,
    secret: SessionSecret,
}

#[async_trait]
impl UserCapability for MockUser {
    async fn current_identity(&self) -> Result<UserIdentity> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let sessions = self.inner.sessions.lock().unwrap();
        let user_id = sessions
            .get(self.secret.as_str())
            .ok_or_else(guest_scope_error)?;

        let accounts = self.inner.accounts.lock().unwrap();
        accounts
            .iter()
            .find(|a| a.user_id == *user_id)
            .map(|a| UserIdentity {
                id: a.user_id.clone(),
                email: a.email.clone(),
                name: a.name.clone(),
            })
            .ok_or_else(guest_scope_error)
    }

    async fn delete_current_session(&self) -> Result<()> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let removed = self
            .inner
            .sessions
            .lock()
            .unwrap()
            .remove(self.secret.as_str());
        if removed.is_some() {
            Ok(())
        } else {
            Err(guest_scope_error())
        }
    }
}
