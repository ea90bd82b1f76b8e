//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session calls, post-action
//! navigation) and keeps markup thin.

pub mod home;
pub mod login;
pub mod settings;
