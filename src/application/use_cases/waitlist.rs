use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        dictionaries::{duplicate_message, generic_error_message, success_message},
        language::UserLanguage,
        submission_form::{SubmissionForm, SubmitRejected},
        validators::is_valid_email,
    },
    domain::entities::{submission_status::SubmissionStatus, waitlist_entry::NewWaitlistEntry},
};

/// SQLSTATE reported by Postgres (and relayed by PostgREST) when a unique
/// constraint rejects an insert.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Error reported by a waitlist store. `code` carries the backend's own error
/// code when there is one; transport failures have none.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    pub code: Option<String>,
    pub message: String,
}

impl StoreError {
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    pub fn unique_violation(message: impl Into<String>) -> Self {
        Self::new(Some(UNIQUE_VIOLATION.to_string()), message)
    }

    pub fn is_unique_violation(&self) -> bool {
        self.code.as_deref() == Some(UNIQUE_VIOLATION)
    }
}

/// Remote collection the waitlist is written to.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<(), StoreError>;
}

/// How a single submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Registered,
    AlreadyRegistered,
    Failed,
}

impl SubmitOutcome {
    pub fn status(&self) -> SubmissionStatus {
        match self {
            SubmitOutcome::Registered => SubmissionStatus::Success,
            SubmitOutcome::AlreadyRegistered | SubmitOutcome::Failed => SubmissionStatus::Error,
        }
    }

    pub fn message(&self, lang: UserLanguage) -> String {
        match self {
            SubmitOutcome::Registered => success_message(lang),
            SubmitOutcome::AlreadyRegistered => duplicate_message(lang),
            SubmitOutcome::Failed => generic_error_message(lang),
        }
    }
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    store: Arc<dyn WaitlistStore>,
}

impl WaitlistUseCases {
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        Self { store }
    }

    /// Normalizes `email` and inserts it once. Store failures are folded into
    /// the outcome; only malformed input is returned as an error.
    #[instrument(skip(self, email))]
    pub async fn submit(&self, email: &str) -> AppResult<SubmitOutcome> {
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email address".into()));
        }

        let entry = NewWaitlistEntry::from_raw(email);

        match self.store.insert(&entry).await {
            Ok(()) => {
                tracing::info!("Waitlist entry created");
                Ok(SubmitOutcome::Registered)
            }
            Err(err) if err.is_unique_violation() => {
                tracing::info!("Email already on the waitlist");
                Ok(SubmitOutcome::AlreadyRegistered)
            }
            Err(err) => {
                tracing::error!(error = %err, code = ?err.code, "Waitlist insert failed");
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// Drives `form` through one attempt: `loading`, then `success` or `error`.
    pub async fn submit_form(
        &self,
        form: &mut SubmissionForm,
        lang: UserLanguage,
    ) -> Result<SubmitOutcome, SubmitRejected> {
        let email = form.begin_submit()?;

        let outcome = match self.submit(&email).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!(error = %err, "Rejected waitlist submission");
                SubmitOutcome::Failed
            }
        };

        form.complete(outcome, lang);
        Ok(outcome)
    }
}
