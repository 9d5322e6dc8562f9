#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Lifecycle of the outstanding chat request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    /// Request dispatched, typing placeholder shown.
    Sending,
    /// Response received, reply message being rendered.
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("a chat request is already in flight")]
    AlreadyInFlight,
}

/// In-flight guard for chat submissions: at most one request at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestState {
    phase: RequestPhase,
    completed: u64,
}

impl RequestState {
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn in_flight(&self) -> bool {
        self.phase != RequestPhase::Idle
    }

    /// Number of requests that have settled since load.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Idle → Sending.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::AlreadyInFlight`] unless idle.
    pub fn begin(&mut self) -> Result<(), RequestError> {
        if self.in_flight() {
            return Err(RequestError::AlreadyInFlight);
        }
        self.phase = RequestPhase::Sending;
        Ok(())
    }

    /// Sending → Rendering. No-op from any other phase.
    pub fn response_received(&mut self) {
        if self.phase == RequestPhase::Sending {
            self.phase = RequestPhase::Rendering;
        }
    }

    /// Any phase → Idle.
    pub fn settle(&mut self) {
        if self.in_flight() {
            self.completed += 1;
        }
        self.phase = RequestPhase::Idle;
    }
}
