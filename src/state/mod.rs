//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`conversation`, `composer`, `request`, etc.)
//! as plain data with methods, so the rules live here and are unit tested,
//! while components only wrap them in signals and do DOM work.

pub mod composer;
pub mod conversation;
pub mod request;
pub mod session;
pub mod ui;
