use thiserror::Error;

use crate::{
    application::{language::UserLanguage, use_cases::waitlist::SubmitOutcome},
    domain::entities::submission_status::SubmissionStatus,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A submission is already in progress")]
    AlreadyLoading,
}

/// State behind the waitlist form: the email being typed, where the current
/// attempt stands, and the message shown under the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    email: String,
    status: SubmissionStatus,
    message: Option<String>,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Moves to `loading` and hands back the email to send. Refused while an
    /// attempt is already in flight.
    pub fn begin_submit(&mut self) -> Result<String, SubmitRejected> {
        if self.status.is_loading() {
            return Err(SubmitRejected::AlreadyLoading);
        }
        self.status = SubmissionStatus::Loading;
        self.message = None;
        Ok(self.email.clone())
    }

    pub fn complete(&mut self, outcome: SubmitOutcome, lang: UserLanguage) {
        self.status = outcome.status();
        self.message = Some(outcome.message(lang));
        if outcome == SubmitOutcome::Registered {
            self.email.clear();
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Input and submit button are locked together while an attempt runs.
    pub fn controls_disabled(&self) -> bool {
        self.status.is_loading()
    }
}
