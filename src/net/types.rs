//! Wire types for the JobTrack REST API.
//!
//! These mirror the remote contract exactly; the client never constructs a
//! `User` or computes statistics itself, it only deserializes and displays
//! what the API returns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Anything the API sends that is not `admin` is treated as a
/// regular user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

/// A user record as returned by the API. Created server-side; the client only
/// receives and displays it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// First letter of each name, for avatar badges.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

/// Lifecycle stage of a job application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl JobStatus {
    pub const ALL: [Self; 4] = [Self::Applied, Self::Interviewing, Self::Offer, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interviewing => "interviewing",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interviewing => "Interviewing",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
        }
    }

    /// CSS class for the colored status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Applied => "badge badge--applied",
            Self::Interviewing => "badge badge--interviewing",
            Self::Offer => "badge badge--offer",
            Self::Rejected => "badge badge--rejected",
        }
    }

    /// Parse a `<select>` value; `None` for the empty "all statuses" option.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// A job application as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: i64,
    pub company_name: String,
    pub job_title: String,
    pub application_date: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub status_display: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub interview_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl JobApplication {
    /// Human-readable status, preferring the server-rendered label.
    pub fn status_label(&self) -> String {
        self.status_display
            .clone()
            .unwrap_or_else(|| self.status.label().to_owned())
    }
}

/// Create/update body for a job application. Empty optional fields are left
/// out of the payload entirely rather than sent as empty strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobPayload {
    pub company_name: String,
    pub job_title: String,
    pub application_date: String,
    pub status: JobStatus,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<String>,
}

/// One slice of the status-distribution breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct StatusCount {
    pub status: JobStatus,
    pub count: u32,
}

/// One row of the top-companies breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CompanyCount {
    pub company_name: String,
    pub count: u32,
}

/// Per-user statistics from `/jobs/applications/statistics/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct JobStats {
    #[serde(default)]
    pub total_applications: u32,
    #[serde(default)]
    pub applications_this_month: u32,
    #[serde(default)]
    pub applications_this_week: u32,
    #[serde(default)]
    pub status_distribution: Vec<StatusCount>,
    #[serde(default)]
    pub top_companies: Vec<CompanyCount>,
}

/// The API reports timeline months either as numbers (SQL `EXTRACT`) or as
/// pre-rendered labels depending on the aggregation backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MonthKey {
    Number(f64),
    Text(String),
}

impl MonthKey {
    pub fn label(&self) -> String {
        match self {
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "months are 1-12")]
            Self::Number(n) => crate::util::date::month_name(*n as usize)
                .map_or_else(|| n.to_string(), str::to_owned),
            Self::Text(text) => text.clone(),
        }
    }
}

/// One bar of the applications-per-month timeline.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimelinePoint {
    pub month: MonthKey,
    pub count: u32,
}

/// User counters on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserCounts {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub active: u32,
    #[serde(default)]
    pub verified: u32,
}

/// Application counters on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApplicationCounts {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub this_month: u32,
    #[serde(default)]
    pub this_week: u32,
}

/// System-wide statistics from `/admin/dashboard/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AdminStats {
    #[serde(default)]
    pub users: UserCounts,
    #[serde(default)]
    pub applications: ApplicationCounts,
    #[serde(default)]
    pub status_distribution: Vec<StatusCount>,
    #[serde(default)]
    pub top_companies: Vec<CompanyCount>,
}

/// Successful `/auth/login/` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub access: String,
    pub refresh: String,
}

/// `/admin/broadcast/` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BroadcastResponse {
    pub message: String,
    #[serde(default)]
    pub success_count: u32,
    #[serde(default)]
    pub failed_count: u32,
}
