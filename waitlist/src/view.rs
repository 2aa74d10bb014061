//! What the waitlist form shows for a given [`SubmissionState`].
//!
//! Rendering code reads a [`FormView`] and nothing else, so every branch of
//! the page can be checked here without a browser.

use crate::state::{Status, SubmissionState};

/// Which of the two result dialogs is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Joined,
    AlreadyJoined,
}

/// Copy for the result dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalCopy {
    pub kind: ModalKind,
    pub title: &'static str,
    pub body: &'static str,
    pub acknowledge: &'static str,
}

pub const JOINED_MODAL: ModalCopy = ModalCopy {
    kind: ModalKind::Joined,
    title: "Welcome to the Square!",
    body: "We've added your email to our early access list. We'll be in touch soon!",
    acknowledge: "Awesome",
};

pub const ALREADY_JOINED_MODAL: ModalCopy = ModalCopy {
    kind: ModalKind::AlreadyJoined,
    title: "Welcome Back!",
    body: "You're already on the list! We love the enthusiasm, hang tight for our launch.",
    acknowledge: "Got it!",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub email: String,
    /// Input and submit button are both disabled
    pub locked: bool,
    /// Submit button shows the spinner instead of its label
    pub busy: bool,
    pub banner: Option<String>,
    pub modal: Option<ModalCopy>,
}

impl From<&SubmissionState> for FormView {
    fn from(state: &SubmissionState) -> Self {
        let loading = state.status() == Status::Loading;
        let banner = match state.status() {
            Status::Error => Some(state.message().to_string()),
            _ => None,
        };
        let modal = match state.status() {
            Status::Success => Some(JOINED_MODAL),
            Status::AlreadyJoined => Some(ALREADY_JOINED_MODAL),
            Status::Idle | Status::Loading | Status::Error => None,
        };

        FormView {
            email: state.email().to_string(),
            locked: loading,
            busy: loading,
            banner,
            modal,
        }
    }
}
