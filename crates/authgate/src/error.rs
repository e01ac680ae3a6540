use authgate_core::GatewayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// HTTP boundary wrapper for [`GatewayError`].
///
/// Handlers return `Result<_, ApiError>` and use `?` on gateway results; the
/// status and JSON body mapping lives here, in one place.
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Reclassify an upstream login failure as an invalid credential.
    ///
    /// A wrong password is an expected outcome, not a server error: it maps
    /// to 401, never 500.
    pub fn login_failure(err: GatewayError) -> Self {
        match err {
            GatewayError::Upstream { message, .. } => {
                Self(GatewayError::InvalidCredential(message))
            }
            other => Self(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            GatewayError::InvalidInput(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            GatewayError::MalformedCredential => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Malformed authorization header." }),
            ),
            GatewayError::NoSessionPresent => {
                (StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" }))
            }
            GatewayError::InvalidCredential(details) => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "error": "Invalid credentials or error during login",
                    "details": details,
                }),
            ),
            GatewayError::InvalidAuthorityRequest => {
                tracing::error!(error = %self.0, "invalid authority binding");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            // Upstream detail passed through verbatim. Acceptable for an
            // internal service; a hardened deployment should redact this.
            GatewayError::Upstream { status, message } => {
                tracing::error!(upstream_status = status, error = %message, "provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Identity provider error", "details": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
