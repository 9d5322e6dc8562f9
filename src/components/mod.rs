//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface while reading and writing the shared
//! state signals handed to them by the page that owns them.

pub mod chat_history;
pub mod composer;
pub mod copy_button;
pub mod flash_messages;
pub mod image_modal;
pub mod message;
pub mod new_chat_button;
pub mod thread_list;
