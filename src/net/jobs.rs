//! Resource clients for job applications and their analytics.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use super::http::{self, ApiError, encode_component};
use super::types::{JobApplication, JobPayload, JobStats, JobStatus, TimelinePoint};

/// Dashboard list filters, passed through to the API as query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub status: Option<JobStatus>,
    pub company: String,
}

impl JobFilters {
    /// Render as a query string; empty when no filter is active.
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(status) = self.status {
            parts.push(format!("status={}", status.as_str()));
        }
        let company = self.company.trim();
        if !company.is_empty() {
            parts.push(format!("company_name={}", encode_component(company)));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

/// The list endpoint may answer with a DRF-paginated envelope or a bare array.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ListResponse {
    Paginated { results: Vec<JobApplication> },
    Plain(Vec<JobApplication>),
}

/// The timeline endpoint wraps its rows in a `timeline` envelope.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum TimelineResponse {
    Wrapped { timeline: Vec<TimelinePoint> },
    Plain(Vec<TimelinePoint>),
}

/// GET `/jobs/applications/` with the given filters.
pub async fn list(filters: &JobFilters) -> Result<Vec<JobApplication>, ApiError> {
    let path = format!("/jobs/applications/{}", filters.to_query());
    match http::get_json(&path).await? {
        ListResponse::Paginated { results } => Ok(results),
        ListResponse::Plain(items) => Ok(items),
    }
}

/// POST `/jobs/applications/`.
pub async fn create(payload: &JobPayload) -> Result<JobApplication, ApiError> {
    http::post_json("/jobs/applications/", payload).await
}

/// PUT `/jobs/applications/{id}/`.
pub async fn update(id: i64, payload: &JobPayload) -> Result<JobApplication, ApiError> {
    http::put_json(&format!("/jobs/applications/{id}/"), payload).await
}

/// DELETE `/jobs/applications/{id}/`.
pub async fn remove(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/jobs/applications/{id}/")).await
}

/// GET `/jobs/applications/statistics/`.
pub async fn statistics() -> Result<JobStats, ApiError> {
    http::get_json("/jobs/applications/statistics/").await
}

/// GET `/jobs/applications/timeline/`.
pub async fn timeline() -> Result<Vec<TimelinePoint>, ApiError> {
    match http::get_json("/jobs/applications/timeline/").await? {
        TimelineResponse::Wrapped { timeline } => Ok(timeline),
        TimelineResponse::Plain(points) => Ok(points),
    }
}
