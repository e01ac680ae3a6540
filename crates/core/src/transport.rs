use crate::error::GatewayError;
use crate::types::SessionSecret;

/// Name of the session cookie issued (and cleared) by the gateway.
pub const SESSION_COOKIE: &str = "session";

/// Which wire mechanism carried the caller's session secret.
///
/// The discriminant drives response shaping on logout: a cookie-borne
/// session gets an HTML response and a clearing cookie, a bearer-borne one
/// gets JSON and nothing to clear locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransport {
    Cookie(SessionSecret),
    Bearer(SessionSecret),
}

impl SessionTransport {
    pub fn secret(&self) -> &SessionSecret {
        match self {
            Self::Cookie(secret) | Self::Bearer(secret) => secret,
        }
    }

    pub fn is_cookie(&self) -> bool {
        matches!(self, Self::Cookie(_))
    }
}

/// Locate the caller's session secret on an inbound request.
///
/// Precedence: a non-empty `session` cookie wins; otherwise an
/// `Authorization: Bearer <token>` header. `Ok(None)` means the caller is
/// simply unauthenticated; callers decide whether that is a 401 (inspect)
/// or a 400 (logout).
///
/// # Errors
///
/// `MalformedCredential` when an Authorization header is present but does
/// not parse as `Bearer <token>` with a non-empty token, and no cookie
/// carried the session. Distinct from the absent case on purpose.
pub fn extract_session(
    cookie: Option<&str>,
    authorization: Option<&str>,
) -> Result<Option<SessionTransport>, GatewayError> {
    if let Some(value) = cookie {
        if !value.is_empty() {
            return Ok(Some(SessionTransport::Cookie(SessionSecret::new(
                value.to_string(),
            ))));
        }
    }

    let Some(header) = authorization else {
        return Ok(None);
    };

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(Some(SessionTransport::Bearer(
            SessionSecret::new(token.to_string()),
        ))),
        _ => Err(GatewayError::MalformedCredential),
    }
}
