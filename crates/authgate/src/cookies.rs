//! Session cookie issuance and clearing.
//!
//! The flag set is fixed: HttpOnly, Secure, SameSite=Strict, Path=/. The
//! clearing cookie must carry the identical flags or browsers will not
//! delete the original, so both builders share one base.

use authgate_core::{SessionArtifact, SESSION_COOKIE};
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::OffsetDateTime;

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .build()
}

/// Cookie carrying a freshly issued session artifact.
///
/// The `Expires` attribute is the provider-issued expiry, verbatim.
pub fn issue_session_cookie(artifact: &SessionArtifact) -> Cookie<'static> {
    let mut cookie = session_cookie(artifact.secret.as_str().to_string());
    if let Ok(expires) = OffsetDateTime::from_unix_timestamp(artifact.expire.timestamp()) {
        cookie.set_expires(expires);
    }
    cookie
}

/// Cookie template for removal, flag-identical to the issued one.
///
/// Pass to `CookieJar::remove`, which turns it into an expired empty cookie
/// while keeping the attributes.
pub fn clear_session_cookie() -> Cookie<'static> {
    session_cookie(String::new())
}
