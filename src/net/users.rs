//! Resource clients for registration, email verification, password reset and
//! the signed-in user's profile.

use super::http::{self, ApiError};
use super::types::User;

/// Registration form body, forwarded to the API verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(serde::Serialize)]
struct TokenBody<'a> {
    token: &'a str,
}

#[derive(serde::Serialize)]
struct ResetRequestBody<'a> {
    email: &'a str,
}

#[derive(serde::Serialize)]
struct ResetConfirmBody<'a> {
    token: &'a str,
    new_password: &'a str,
    new_password_confirm: &'a str,
}

/// Name fields editable from the profile page.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
}

/// Password change body for a signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

/// POST `/users/register/`.
pub async fn register(payload: &RegisterPayload) -> Result<(), ApiError> {
    http::post("/users/register/", payload).await
}

/// POST `/users/verify-email/` with the token from the verification link.
pub async fn verify_email(token: &str) -> Result<(), ApiError> {
    http::post("/users/verify-email/", &TokenBody { token }).await
}

/// POST `/users/reset-password/` to request a reset email.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    http::post("/users/reset-password/", &ResetRequestBody { email }).await
}

/// POST `/users/reset-password/confirm/` with the emailed token.
pub async fn confirm_password_reset(
    token: &str,
    new_password: &str,
    new_password_confirm: &str,
) -> Result<(), ApiError> {
    http::post(
        "/users/reset-password/confirm/",
        &ResetConfirmBody {
            token,
            new_password,
            new_password_confirm,
        },
    )
    .await
}

/// GET `/users/profile/`.
pub async fn profile() -> Result<User, ApiError> {
    http::get_json("/users/profile/").await
}

/// PUT `/users/update/`.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, ApiError> {
    http::put_json("/users/update/", update).await
}

/// POST `/users/change-password/`.
pub async fn change_password(change: &PasswordChange) -> Result<(), ApiError> {
    http::post("/users/change-password/", change).await
}
