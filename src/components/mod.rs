//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers installed by
//! `App`; `guarded` applies the route guard to every routed view.

pub mod guarded;
pub mod notice_stack;
pub mod page_header;
