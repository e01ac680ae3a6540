//! Direct registration and password login.

use authgate_core::GatewayError;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RegisterBody {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// The original contract treats empty strings as missing.
fn require<'a>(field: &'a Option<String>) -> Option<&'a str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// POST /register - create an account under administrative authority.
///
/// Uniqueness and password strength are not pre-validated here; a duplicate
/// email or weak password surfaces from the provider as a 500 with details.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(email), Some(password)) = (require(&body.email), require(&body.password)) else {
        return Err(GatewayError::InvalidInput("Email and password are required.".into()).into());
    };

    let admin = state.factory.admin()?;

    let user = admin
        .create_account(
            &Uuid::new_v4().to_string(),
            email,
            password,
            body.name.as_deref().unwrap_or(""),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "user": user,
        })),
    ))
}

/// POST /login - verify the password, then mint a JWT bearer credential.
///
/// Two provider round trips on purpose: the password check creates a
/// throwaway provider session whose only use is the verified user id; the
/// JWT minted afterwards is the credential returned. A failure in either
/// step is a 401, not a 500 - login failures are an expected outcome.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<Value>, ApiError> {
    let (Some(email), Some(password)) = (require(&body.email), require(&body.password)) else {
        return Err(GatewayError::InvalidInput("Email and password are required.".into()).into());
    };

    let admin = state.factory.admin()?;

    let verification = admin
        .create_password_session(email, password)
        .await
        .map_err(ApiError::login_failure)?;

    let jwt = admin
        .mint_jwt(&verification.user_id)
        .await
        .map_err(ApiError::login_failure)?;

    Ok(Json(json!({
        "message": "Login successful.",
        "token": jwt.jwt,
    })))
}
