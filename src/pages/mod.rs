//! Top-level routed pages.

pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod verify_email;
