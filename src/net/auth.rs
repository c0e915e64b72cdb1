//! Resource client for the login endpoint.

use super::http::{self, ApiError};
use super::types::LoginResponse;

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// POST `/auth/login/` with user credentials.
///
/// # Errors
///
/// Propagates the API's rejection (invalid credentials, inactive account)
/// unchanged.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    http::post_json("/auth/login/", &LoginRequest { email, password }).await
}
