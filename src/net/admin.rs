//! Resource clients for the administrative endpoints.

use super::http::{self, ApiError};
use super::types::{AdminStats, BroadcastResponse, User};

#[derive(serde::Serialize)]
struct BroadcastBody<'a> {
    message: &'a str,
}

/// The user list may be paginated like the job list.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum UserListResponse {
    Paginated { results: Vec<User> },
    Plain(Vec<User>),
}

/// GET `/admin/users/`.
pub async fn users() -> Result<Vec<User>, ApiError> {
    match http::get_json("/admin/users/").await? {
        UserListResponse::Paginated { results } => Ok(results),
        UserListResponse::Plain(items) => Ok(items),
    }
}

/// POST `/admin/users/{id}/activate/`.
pub async fn activate(id: i64) -> Result<(), ApiError> {
    http::post_empty(&format!("/admin/users/{id}/activate/")).await
}

/// POST `/admin/users/{id}/deactivate/`.
pub async fn deactivate(id: i64) -> Result<(), ApiError> {
    http::post_empty(&format!("/admin/users/{id}/deactivate/")).await
}

/// DELETE `/admin/users/{id}/delete/`.
pub async fn remove(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/admin/users/{id}/delete/")).await
}

/// GET `/admin/dashboard/`.
pub async fn dashboard() -> Result<AdminStats, ApiError> {
    http::get_json("/admin/dashboard/").await
}

/// POST `/admin/broadcast/` to message every user.
pub async fn broadcast(message: &str) -> Result<BroadcastResponse, ApiError> {
    http::post_json("/admin/broadcast/", &BroadcastBody { message }).await
}
