#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Deserialize;

use crate::config::UiConfig;
use crate::net::types::{Flash, HistoryMessage, ThreadId, ThreadSummary};

/// Id of the `<script type="application/json">` element the server renders.
pub const BOOTSTRAP_ELEMENT_ID: &str = "app-bootstrap";

/// Everything the server-rendered page hands to the UI on load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageBootstrap {
    pub username: Option<String>,
    pub active_thread_id: Option<ThreadId>,
    pub threads: Vec<ThreadSummary>,
    /// Raw (unrendered) messages of the active thread, oldest first.
    pub history: Vec<HistoryMessage>,
    pub flashes: Vec<Flash>,
    pub config: UiConfig,
}

impl PageBootstrap {
    pub fn is_active(&self, thread: &ThreadId) -> bool {
        self.active_thread_id.as_ref() == Some(thread)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("bootstrap element #{0} not found")]
    Missing(&'static str),
    #[error("malformed bootstrap json: {0}")]
    Malformed(String),
}

/// Parse the bootstrap document. Blank input yields defaults.
///
/// # Errors
///
/// Returns [`BootstrapError::Malformed`] if the text is not a valid document.
pub fn parse_bootstrap(raw: &str) -> Result<PageBootstrap, BootstrapError> {
    if raw.trim().is_empty() {
        return Ok(PageBootstrap::default());
    }
    serde_json::from_str(raw).map_err(|e| BootstrapError::Malformed(e.to_string()))
}

/// Read the bootstrap from the page, falling back to defaults on any error.
pub fn load_bootstrap() -> PageBootstrap {
    match read_bootstrap() {
        Ok(bootstrap) => {
            log::debug!(
                "bootstrap loaded: {} threads, {} history messages",
                bootstrap.threads.len(),
                bootstrap.history.len()
            );
            bootstrap
        }
        Err(e) => {
            log::warn!("using default bootstrap: {e}");
            PageBootstrap::default()
        }
    }
}

fn read_bootstrap() -> Result<PageBootstrap, BootstrapError> {
    #[cfg(feature = "csr")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
            .ok_or(BootstrapError::Missing(BOOTSTRAP_ELEMENT_ID))?;
        parse_bootstrap(&element.text_content().unwrap_or_default())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(BootstrapError::Missing(BOOTSTRAP_ELEMENT_ID))
    }
}
