//! Integration tests for the waitlist form controller
//!
//! These drive the controller against an in-memory store that behaves like
//! the real table: a unique constraint on `email`, plus the ability to fail
//! the next insert with a transport error.

use std::cell::RefCell;

use waitlist::{
    join, FormController, FormView, Status, StoreError, SubmissionState, SubmitOutcome,
    WaitlistRecord, WaitlistStore, GENERIC_FAILURE, UNIQUE_VIOLATION,
};

#[derive(Default)]
struct MemoryStore {
    rows: RefCell<Vec<String>>,
    /// Every insert attempt, in order
    requests: RefCell<Vec<String>>,
    next_failure: RefCell<Option<StoreError>>,
}

impl MemoryStore {
    fn with_rows(rows: &[&str]) -> Self {
        let store = Self::default();
        store
            .rows
            .borrow_mut()
            .extend(rows.iter().map(|r| r.to_string()));
        store
    }

    fn fail_next(&self, err: StoreError) {
        *self.next_failure.borrow_mut() = Some(err);
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl WaitlistStore for MemoryStore {
    async fn insert(&self, record: &WaitlistRecord) -> Result<(), StoreError> {
        self.requests.borrow_mut().push(record.email.clone());

        if let Some(err) = self.next_failure.borrow_mut().take() {
            return Err(err);
        }

        let mut rows = self.rows.borrow_mut();
        if rows.contains(&record.email) {
            return Err(StoreError::Rejected {
                status: 409,
                code: Some(UNIQUE_VIOLATION.to_string()),
                message: "duplicate key value violates unique constraint \"waitlist_email_key\""
                    .to_string(),
            });
        }
        rows.push(record.email.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_scenario_a_new_signup() {
    let mut controller = FormController::new(MemoryStore::default());
    controller.set_email("a@b.edu");

    let outcome = controller.submit().await;

    assert_eq!(outcome, Some(SubmitOutcome::Joined));
    assert_eq!(controller.state().status(), Status::Success);
    assert_eq!(controller.state().email(), "");
    assert_eq!(*controller.store().rows.borrow(), vec!["a@b.edu"]);
}

#[tokio::test]
async fn test_scenario_b_duplicate_signup() {
    let mut controller = FormController::new(MemoryStore::with_rows(&["dup@b.edu"]));
    controller.set_email("dup@b.edu");

    let outcome = controller.submit().await;

    assert_eq!(outcome, Some(SubmitOutcome::AlreadyJoined));
    assert_eq!(controller.state().status(), Status::AlreadyJoined);
    assert_eq!(controller.state().email(), "");
    assert_eq!(controller.state().message(), "");
}

#[tokio::test]
async fn test_scenario_c_network_failure() {
    let store = MemoryStore::default();
    store.fail_next(StoreError::network("timeout"));
    let mut controller = FormController::new(store);
    controller.set_email("x@b.edu");

    controller.submit().await;

    let state = controller.state();
    assert_eq!(state.status(), Status::Error);
    assert_eq!(state.email(), "x@b.edu");
    assert_eq!(state.message(), "timeout");
    assert_eq!(
        FormView::from(state).banner.as_deref(),
        Some("timeout")
    );
}

#[tokio::test]
async fn test_scenario_d_single_request_in_flight() {
    let store = MemoryStore::default();
    let mut state = SubmissionState::new();
    state.set_email("a@b.edu");

    let record = state.begin_submit().expect("first submit is accepted");
    // A second click while the first insert is pending
    assert_eq!(state.begin_submit(), None);

    let outcome = join(&store, &record).await;
    state.resolve(outcome);

    assert_eq!(store.request_count(), 1);
    assert_eq!(state.status(), Status::Success);
}

#[tokio::test]
async fn test_empty_email_sends_nothing() {
    let mut controller = FormController::new(MemoryStore::default());

    assert_eq!(controller.submit().await, None);
    assert_eq!(controller.state().status(), Status::Idle);
    assert_eq!(controller.store().request_count(), 0);
}

#[tokio::test]
async fn test_rejection_without_message_uses_generic_text() {
    let store = MemoryStore::default();
    store.fail_next(StoreError::Rejected {
        status: 500,
        code: None,
        message: String::new(),
    });
    let mut controller = FormController::new(store);
    controller.set_email("x@b.edu");

    controller.submit().await;

    assert_eq!(controller.state().message(), GENERIC_FAILURE);
}

#[tokio::test]
async fn test_other_postgres_error_is_not_treated_as_duplicate() {
    let store = MemoryStore::default();
    store.fail_next(StoreError::from_response(
        403,
        r#"{"code":"42501","message":"permission denied for table waitlist"}"#,
    ));
    let mut controller = FormController::new(store);
    controller.set_email("x@b.edu");

    controller.submit().await;

    assert_eq!(controller.state().status(), Status::Error);
    assert_eq!(
        controller.state().message(),
        "permission denied for table waitlist"
    );
}

#[tokio::test]
async fn test_retry_after_error_then_dismiss() {
    let store = MemoryStore::default();
    store.fail_next(StoreError::network("timeout"));
    let mut controller = FormController::new(store);
    controller.set_email("x@b.edu");

    controller.submit().await;
    assert_eq!(controller.state().status(), Status::Error);

    // Error is sticky until the user submits again
    let outcome = controller.submit().await;
    assert_eq!(outcome, Some(SubmitOutcome::Joined));
    assert_eq!(controller.store().request_count(), 2);

    controller.dismiss();
    assert_eq!(controller.state().status(), Status::Idle);
    assert_eq!(controller.state().email(), "");
}

#[tokio::test]
async fn test_same_email_twice_in_one_visit() {
    let mut controller = FormController::new(MemoryStore::default());

    controller.set_email("a@b.edu");
    controller.submit().await;
    controller.dismiss();

    controller.set_email("a@b.edu");
    let outcome = controller.submit().await;

    assert_eq!(outcome, Some(SubmitOutcome::AlreadyJoined));
    assert_eq!(
        FormView::from(controller.state()).modal.map(|m| m.title),
        Some("Welcome Back!")
    );
}
