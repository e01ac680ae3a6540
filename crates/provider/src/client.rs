//! Identity-provider handle and shared request plumbing.

use std::sync::Arc;

use authgate_core::{AuthorityMode, Capability, ClientFactory, GatewayError, Result, SessionSecret};
use url::Url;

use crate::admin::AdminClient;
use crate::user::SessionClient;

/// Handle on the upstream identity provider.
///
/// Cheap to clone (one shared `reqwest::Client`). Implements
/// [`ClientFactory`]: each acquisition produces a fresh capability with the
/// right credential header bound, used for one request and discarded.
#[derive(Debug, Clone)]
pub struct IdentityProvider {
    http: reqwest::Client,
    endpoint: Url,
    project_id: String,
    api_key: String,
}

impl IdentityProvider {
    /// Create a provider handle for the given endpoint and project.
    ///
    /// `endpoint` is the API root, e.g. `https://cloud.appwrite.io/v1`.
    /// `api_key` is the static service key backing administrative bindings;
    /// it is never exposed to end callers.
    pub fn new(endpoint: Url, project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            project_id: project_id.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub(crate) fn project_id(&self) -> &str {
        &self.project_id
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Build an absolute URL string for an API path (path starts with `/`).
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.as_str().trim_end_matches('/'), path)
    }
}

impl ClientFactory for IdentityProvider {
    fn acquire(&self, mode: AuthorityMode, secret: Option<&SessionSecret>) -> Result<Capability> {
        match mode {
            AuthorityMode::Administrative => {
                Ok(Capability::Admin(Arc::new(AdminClient::new(self.clone()))))
            }
            AuthorityMode::UserSession => {
                let secret = secret
                    .filter(|s| !s.is_empty())
                    .ok_or(GatewayError::InvalidAuthorityRequest)?;
                Ok(Capability::User(Arc::new(SessionClient::new(
                    self.clone(),
                    secret.clone(),
                ))))
            }
        }
    }
}

/// Classify a non-2xx provider response body.
///
/// Appwrite error bodies look like `{"message": "...", "code": 401, ...}`;
/// anything unparseable is passed through raw.
pub(crate) fn upstream_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| body.to_string());
    GatewayError::Upstream { status, message }
}

/// Map a transport-level failure (connect, DNS, body read) to the taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> GatewayError {
    tracing::error!(error = %err, "identity provider request failed");
    GatewayError::Upstream {
        status: err.status().map(|s| s.as_u16()).unwrap_or(502),
        message: err.to_string(),
    }
}

/// Deserialize a success body, or classify the error response.
pub(crate) async fn into_result<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        response.json().await.map_err(transport_error)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(upstream_error(status.as_u16(), &body))
    }
}

/// Like [`into_result`] for operations with no response body.
pub(crate) async fn into_empty_result(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(upstream_error(status.as_u16(), &body))
    }
}
