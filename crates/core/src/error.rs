use thiserror::Error;

/// Error taxonomy shared by every layer of the gateway.
///
/// The HTTP status mapping lives at the server boundary; these variants only
/// classify what went wrong.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required body or query field is missing.
    #[error("{0}")]
    InvalidInput(String),

    /// No session cookie or bearer token accompanied the request.
    #[error("no session present")]
    NoSessionPresent,

    /// An Authorization header was present but not `Bearer <token>`.
    #[error("malformed authorization header")]
    MalformedCredential,

    /// The provider rejected a login attempt. Expected outcome, not a
    /// server error.
    #[error("invalid credentials: {0}")]
    InvalidCredential(String),

    /// UserSession binding requested without a non-empty session secret.
    #[error("user-session binding requires a session secret")]
    InvalidAuthorityRequest,

    /// Any provider call failure not otherwise classified. The detail
    /// string is the provider's, passed through verbatim.
    #[error("upstream provider error ({status}): {message}")]
    Upstream { status: u16, message: String },
}
