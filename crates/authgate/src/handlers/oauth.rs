//! OAuth redirect orchestration: initiation and callback exchange.

use authgate_core::{OAuthProvider, PendingOAuthExchange};
use axum::{
    extract::{Query, State},
    response::Html,
};
use axum_extra::extract::CookieJar;

use crate::cookies::issue_session_cookie;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /auth - build the provider's OAuth redirect URL (administrative
/// binding) and hand it to the caller as a link.
pub async fn initiate_oauth(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let admin = state.factory.admin()?;

    let redirect_url = admin
        .create_oauth_redirect(
            OAuthProvider::Google,
            &state.config.success_url,
            &state.config.failure_url,
        )
        .await?;

    Ok(Html(format!(
        r#"<button><a href="{redirect_url}">Login with Google</a></button>"#
    )))
}

/// GET /success - consume the redirect callback pair and mint the session.
///
/// The exchange pair is consumed exactly once; the resulting artifact goes
/// out as the session cookie with the provider's expiry verbatim. A missing
/// or invalid pair fails upstream and surfaces as 500.
pub async fn complete_oauth(
    State(state): State<AppState>,
    Query(exchange): Query<PendingOAuthExchange>,
    jar: CookieJar,
) -> Result<(CookieJar, &'static str), ApiError> {
    let admin = state.factory.admin()?;

    let artifact = admin
        .exchange_oauth_pair(&exchange.user_id, &exchange.secret)
        .await?;

    let jar = jar.add(issue_session_cookie(&artifact));
    Ok((jar, "Session set successfully"))
}
