//! Networking modules for the chat backend's REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `outcome` folds a chat round trip into the
//! message it renders as, and `types` defines the wire schema.

pub mod api;
pub mod outcome;
pub mod types;
