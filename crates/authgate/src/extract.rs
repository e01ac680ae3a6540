//! Axum extractor for the session transport.

use authgate_core::{extract_session, SessionTransport, SESSION_COOKIE};
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::CookieJar;

use crate::error::ApiError;

/// The caller's session secret, if any, with its transport discriminant.
///
/// `None` means unauthenticated; the handler decides whether that is a 401
/// (inspect) or a 400 (logout). A present-but-unparseable Authorization
/// header rejects with 400 before the handler runs.
pub struct SessionCredential(pub Option<SessionTransport>);

impl<S> FromRequestParts<S> for SessionCredential
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());

        // A non-UTF-8 header value is malformed; fold it to an empty string
        // so the cookie still takes precedence when present.
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .map(|value| value.to_str().unwrap_or(""));

        let transport = extract_session(cookie.as_deref(), authorization)?;
        Ok(SessionCredential(transport))
    }
}
