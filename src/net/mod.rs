//! REST API plumbing and per-resource clients.
//!
//! DESIGN
//! ======
//! `http` owns the base URL, bearer-token injection and error mapping. The
//! sibling modules (`auth`, `users`, `jobs`, `admin`) are thin pass-through
//! wrappers mapping one function to one endpoint; they perform no local
//! validation, retry or transformation, and errors propagate unchanged.

pub mod admin;
pub mod auth;
pub mod http;
pub mod jobs;
pub mod types;
pub mod users;
