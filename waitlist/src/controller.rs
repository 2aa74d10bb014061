use crate::state::{SubmissionState, SubmitOutcome};
use crate::store::{WaitlistRecord, WaitlistStore};

/// Issue the single insert for `record` and classify how it ended.
///
/// Every failure is folded into the outcome; nothing is returned as an error.
pub async fn join<S: WaitlistStore>(store: &S, record: &WaitlistRecord) -> SubmitOutcome {
    log::debug!("Adding {} to the waitlist", record.email);

    match store.insert(record).await {
        Ok(()) => {
            log::info!("Waitlist signup stored");
            SubmitOutcome::Joined
        }
        Err(err) if err.is_unique_violation() => {
            log::info!("Email already on the waitlist");
            SubmitOutcome::AlreadyJoined
        }
        Err(err) => {
            log::warn!("Waitlist signup failed: {}", err);
            SubmitOutcome::failed(err.to_string())
        }
    }
}

/// Owns the form state together with the store it writes to.
pub struct FormController<S> {
    store: S,
    state: SubmissionState,
}

impl<S: WaitlistStore> FormController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: SubmissionState::new(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.set_email(email);
    }

    /// Submit the current email. Returns `None` when the submission was not
    /// accepted (empty email).
    pub async fn submit(&mut self) -> Option<SubmitOutcome> {
        let record = self.state.begin_submit()?;
        let outcome = join(&self.store, &record).await;
        self.state.resolve(outcome.clone());
        Some(outcome)
    }

    pub fn dismiss(&mut self) {
        self.state.dismiss();
    }
}
