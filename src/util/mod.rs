//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, location,
//! console logging, toast notices) from state and page logic so the session
//! and routing code can be exercised without a browser.

pub mod logging;
pub mod notify;
pub mod redirect;
pub mod storage;
