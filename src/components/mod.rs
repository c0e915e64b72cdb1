//! Reusable view components shared across pages.

pub mod footer;
pub mod guard;
pub mod job_form;
pub mod job_stats;
pub mod job_timeline;
pub mod navbar;
pub mod toaster;
