//! Administrative capability over the provider REST API.

use async_trait::async_trait;
use authgate_core::{
    AdminCapability, GatewayError, Jwt, OAuthProvider, PasswordVerification, Result,
    SessionArtifact, SessionSecret, UserIdentity,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::{into_result, transport_error, IdentityProvider};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";

/// Capability bound to the static service key.
pub(crate) struct AdminClient {
    provider: IdentityProvider,
}

impl AdminClient {
    pub(crate) fn new(provider: IdentityProvider) -> Self {
        Self { provider }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.provider
            .http()
            .post(self.provider.url(path))
            .header(PROJECT_HEADER, self.provider.project_id())
            .header(KEY_HEADER, self.provider.api_key())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeBody<'a> {
    user_id: &'a str,
    secret: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountBody<'a> {
    user_id: &'a str,
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct PasswordSessionBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Session wire shape: only the fields the gateway carries forward.
#[derive(Deserialize)]
struct SessionWire {
    secret: String,
    expire: DateTime<Utc>,
}

#[async_trait]
impl AdminCapability for AdminClient {
    async fn create_oauth_redirect(
        &self,
        provider: OAuthProvider,
        success_url: &Url,
        failure_url: &Url,
    ) -> Result<Url> {
        // The token URL is constructed locally, exactly as the upstream SDK
        // does; the network round trip happens when the browser follows it.
        let base = self
            .provider
            .url(&format!("/account/tokens/oauth2/{provider}"));
        let mut url = Url::parse(&base).map_err(|e| GatewayError::Upstream {
            status: 500,
            message: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("project", self.provider.project_id())
            .append_pair("success", success_url.as_str())
            .append_pair("failure", failure_url.as_str());

        Ok(url)
    }

    async fn exchange_oauth_pair(&self, user_id: &str, secret: &str) -> Result<SessionArtifact> {
        let response = self
            .post("/account/sessions/token")
            .json(&ExchangeBody { user_id, secret })
            .send()
            .await
            .map_err(transport_error)?;

        let session: SessionWire = into_result(response).await?;
        Ok(SessionArtifact {
            secret: SessionSecret::new(session.secret),
            expire: session.expire,
        })
    }

    async fn create_account(
        &self,
        id: &str,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserIdentity> {
        let response = self
            .post("/account")
            .json(&CreateAccountBody {
                user_id: id,
                email,
                password,
                name,
            })
            .send()
            .await
            .map_err(transport_error)?;

        into_result(response).await
    }

    async fn create_password_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<PasswordVerification> {
        let response = self
            .post("/account/sessions/email")
            .json(&PasswordSessionBody { email, password })
            .send()
            .await
            .map_err(transport_error)?;

        into_result(response).await
    }

    async fn mint_jwt(&self, user_id: &str) -> Result<Jwt> {
        let response = self
            .post(&format!("/users/{user_id}/jwts"))
            .send()
            .await
            .map_err(transport_error)?;

        into_result(response).await
    }
}
