use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which authority a capability binding acts under.
///
/// Exactly one mode is active per acquisition. The administrative mode is
/// backed by the static service key and is never derived from caller input;
/// the user-session mode is backed by the caller's own session secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityMode {
    Administrative,
    UserSession,
}

/// Opaque session secret as carried on the wire (cookie value or bearer token).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionSecret(String);

impl SessionSecret {
    pub fn new(secret: String) -> Self {
        Self(secret)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SessionSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A provider-issued session: the secret plus its expiry.
///
/// The expiry is whatever the provider set. It is carried verbatim into the
/// cookie `Expires` attribute and never recomputed locally. The gateway holds
/// an artifact only for the lifetime of the request that issued it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionArtifact {
    pub secret: SessionSecret,
    pub expire: DateTime<Utc>,
}

/// The (userId, secret) pair the provider hands back on the OAuth redirect.
///
/// Short-lived: exists only across the redirect round trip and is consumed
/// exactly once to mint a [`SessionArtifact`].
/// Fields default to empty so a missing parameter reaches the provider and
/// surfaces as an upstream failure instead of a deserialization reject.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PendingOAuthExchange {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub secret: String,
}

/// Provider-owned user record. Treated as opaque and never cached.
///
/// The `id` field keeps the provider's `$id` wire name on both input and
/// output: the gateway passes identities through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(rename = "$id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Result of the password-verification step of login.
///
/// The provider session created here is a throwaway: only the user id is
/// used, to mint an unrelated JWT. The session itself is never returned to
/// the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordVerification {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// A minted bearer credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwt {
    pub jwt: String,
}

/// OAuth providers the gateway can orchestrate a redirect for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
}

impl std::fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Google => write!(f, "google"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_identity_uses_provider_wire_name_for_id() {
        let identity: UserIdentity = serde_json::from_value(serde_json::json!({
            "$id": "u-1",
            "email": "ada@example.com",
            "name": "Ada",
        }))
        .unwrap();

        assert_eq!(identity.id, "u-1");

        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["$id"], "u-1");
    }

    #[test]
    fn user_identity_name_defaults_to_empty() {
        let identity: UserIdentity = serde_json::from_value(serde_json::json!({
            "$id": "u-2",
            "email": "b@example.com",
        }))
        .unwrap();

        assert_eq!(identity.name, "");
    }

    #[test]
    fn oauth_provider_display_is_lowercase() {
        assert_eq!(OAuthProvider::Google.to_string(), "google");
    }
}
