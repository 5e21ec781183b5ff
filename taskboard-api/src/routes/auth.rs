/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /auth/register` — create an account
/// - `POST /auth/login` — check credentials
///
/// Both return the user **without** the password hash. Login deliberately
/// answers "Invalid email or password" for an unknown email and for a wrong
/// password alike, so responses never reveal whether an account exists.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use taskboard_shared::auth::password::{hash_password, verify_password};
use taskboard_shared::models::user::{CreateUser, User, UserPublic};
use validator::Validate;

/// Register request
///
/// Fields default to empty strings so an absent field fails validation with
/// a field-level message instead of a body-level deserialization error.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 2, message = "First name must be at least 2 characters."))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Last name must be at least 2 characters."))]
    pub last_name: String,

    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,

    #[serde(default)]
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

/// Response envelope for both endpoints
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserPublic,
}

/// Registers a new user
///
/// # Errors
///
/// - 400 `Invalid input` with `details` when validation fails
/// - 400 `User with this email already exists`
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    req.validate().map_err(ApiError::from_validation)?;

    if User::find_by_email(&state.db, &req.email).await?.is_some() {
        return Err(ApiError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&req.password).map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = User::create(
        &state.db,
        CreateUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}

/// Checks credentials and returns the user
///
/// # Errors
///
/// - 400 `Invalid input` with `details` when validation fails
/// - 400 `Invalid email or password` for unknown email or wrong password
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    req.validate().map_err(ApiError::from_validation)?;

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Auth("Invalid email or password".to_string()))?;

    let valid = verify_password(&req.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if !valid {
        return Err(ApiError::Auth("Invalid email or password".to_string()));
    }

    Ok(Json(UserResponse { user: user.into() }))
}
