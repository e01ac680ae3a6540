//! User-session capability over the provider REST API.

use async_trait::async_trait;
use authgate_core::{Result, SessionSecret, UserCapability, UserIdentity};

use crate::client::{into_empty_result, into_result, transport_error, IdentityProvider};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const SESSION_HEADER: &str = "X-Appwrite-Session";

/// Capability bound to one caller's session secret.
///
/// Limited to self-referential operations; administrative endpoints are not
/// reachable from here at all.
pub(crate) struct SessionClient {
    provider: IdentityProvider,
    secret: SessionSecret,
}

impl SessionClient {
    pub(crate) fn new(provider: IdentityProvider, secret: SessionSecret) -> Self {
        Self { provider, secret }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.provider
            .http()
            .request(method, self.provider.url(path))
            .header(PROJECT_HEADER, self.provider.project_id())
            .header(SESSION_HEADER, self.secret.as_str())
    }
}

#[async_trait]
impl UserCapability for SessionClient {
    async fn current_identity(&self) -> Result<UserIdentity> {
        let response = self
            .request(reqwest::Method::GET, "/account")
            .send()
            .await
            .map_err(transport_error)?;

        into_result(response).await
    }

    async fn delete_current_session(&self) -> Result<()> {
        let response = self
            .request(reqwest::Method::DELETE, "/account/sessions/current")
            .send()
            .await
            .map_err(transport_error)?;

        into_empty_result(response).await
    }
}
