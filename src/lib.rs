//! # jobtrack-ui
//!
//! Leptos + WASM frontend for the JobTrack job application tracker.
//!
//! All business logic — persistence, validation, email delivery, statistics —
//! lives in an external REST API; this crate renders forms, tables and charts
//! and forwards every operation over HTTP. The only client-held state is the
//! session (current user plus bearer tokens, mirrored to `localStorage`) and
//! per-page view state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
