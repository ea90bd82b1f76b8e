//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`navigation`, `session`) and held behind a
//! [`handle::StateHandle`] so the same operations drive Leptos signals in the
//! app and plain cells in tests. Instances are created once in `App` and
//! passed down through context.

pub mod handle;
pub mod navigation;
pub mod session;
