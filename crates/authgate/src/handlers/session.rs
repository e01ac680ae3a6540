//! Session inspection and revocation.

use authgate_core::GatewayError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use serde_json::json;

use crate::cookies::clear_session_cookie;
use crate::error::ApiError;
use crate::extract::SessionCredential;
use crate::state::AppState;

/// GET /user - identity behind the caller's session.
///
/// No transport artifact at all is a 401 with no provider call. A present
/// but invalid/expired artifact propagates the provider failure as a 500;
/// that contract is preserved deliberately (see DESIGN.md).
pub async fn inspect(
    State(state): State<AppState>,
    SessionCredential(transport): SessionCredential,
) -> Result<Json<serde_json::Value>, ApiError> {
    let transport = transport.ok_or(GatewayError::NoSessionPresent)?;

    let user = state.factory.user_session(transport.secret())?;
    let identity = user.current_identity().await?;

    Ok(Json(json!({ "user": identity })))
}

/// POST /logout - revoke the session upstream, then shape the response by
/// transport: cookie-borne sessions get HTML plus a flag-identical clearing
/// cookie, bearer-borne ones get JSON with nothing to clear locally.
pub async fn logout(
    State(state): State<AppState>,
    SessionCredential(transport): SessionCredential,
    jar: CookieJar,
) -> Response {
    let Some(transport) = transport else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No session found." })),
        )
            .into_response();
    };

    let user = match state.factory.user_session(transport.secret()) {
        Ok(user) => user,
        Err(err) => return ApiError(err).into_response(),
    };

    match user.delete_current_session().await {
        Ok(()) => {
            if transport.is_cookie() {
                let jar = jar.remove(clear_session_cookie());
                (
                    jar,
                    Html(
                        r#"
            <p>Logged out successfully</p>
            <a href="/">Return home</a>
        "#,
                    ),
                )
                    .into_response()
            } else {
                Json(json!({ "message": "Logged out successfully." })).into_response()
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "session revocation failed");
            let details = upstream_detail(&err);

            if transport.is_cookie() {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(format!(
                        r#"
            <p>Error logging out: {details}</p>
            <a href="/">Return home</a>
        "#
                    )),
                )
                    .into_response()
            } else {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error logging out", "details": details })),
                )
                    .into_response()
            }
        }
    }
}

fn upstream_detail(err: &GatewayError) -> String {
    match err {
        GatewayError::Upstream { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
