//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`) and provided to the
//! component tree as `RwSignal` contexts from the root `App`; pages own only
//! their local view state (form fields, loading flags, modal visibility).

pub mod session;
pub mod toast;
