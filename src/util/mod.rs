//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue lives here so pages and components keep their logic free of
//! raw `web_sys` calls where possible.

pub mod browser;
