use crate::store::WaitlistRecord;

/// Shown when a failure carries no description of its own.
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Lifecycle of a single waitlist submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    Success,
    /// The store already had this email
    AlreadyJoined,
    Error,
}

/// How a dispatched insert ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Joined,
    AlreadyJoined,
    Failed(String),
}

impl SubmitOutcome {
    /// Failure with a user-facing message, falling back to [`GENERIC_FAILURE`].
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            SubmitOutcome::Failed(GENERIC_FAILURE.to_string())
        } else {
            SubmitOutcome::Failed(message)
        }
    }
}

/// Everything the waitlist form renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    email: String,
    status: Status,
    message: String,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Failure text, empty unless the status is [`Status::Error`].
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Replace the typed email. The input is disabled while a request is in
    /// flight, so edits arriving then are dropped.
    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.is_loading() {
            return;
        }
        self.email = email.into();
    }

    /// Move to [`Status::Loading`] and hand back the record to insert.
    ///
    /// Returns `None` without touching the state when the email is empty or
    /// another request is still in flight.
    pub fn begin_submit(&mut self) -> Option<WaitlistRecord> {
        if self.email.is_empty() || self.is_loading() {
            return None;
        }
        self.status = Status::Loading;
        self.message.clear();
        Some(WaitlistRecord::new(self.email.clone()))
    }

    /// Apply the outcome of the in-flight request. Ignored when nothing is in
    /// flight.
    pub fn resolve(&mut self, outcome: SubmitOutcome) {
        if !self.is_loading() {
            log::warn!("Dropping submit outcome with no request in flight: {:?}", outcome);
            return;
        }
        match outcome {
            SubmitOutcome::Joined => {
                self.status = Status::Success;
                self.email.clear();
            }
            SubmitOutcome::AlreadyJoined => {
                self.status = Status::AlreadyJoined;
                self.email.clear();
            }
            SubmitOutcome::Failed(message) => {
                self.status = Status::Error;
                self.message = message;
            }
        }
    }

    /// Close the result modal.
    pub fn dismiss(&mut self) {
        self.status = Status::Idle;
    }
}
