//! In-memory mock implementations of `WaitlistStore`.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    application::use_cases::waitlist::{StoreError, WaitlistStore},
    domain::entities::waitlist_entry::NewWaitlistEntry,
};

/// In-memory waitlist table with a unique constraint on `email`, reporting
/// violations with the same code Postgres uses.
#[derive(Default)]
pub struct InMemoryWaitlistStore {
    emails: Mutex<Vec<String>>,
    insert_calls: AtomicUsize,
}

impl InMemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with already-normalized emails.
    pub fn with_emails(emails: &[&str]) -> Self {
        Self {
            emails: Mutex::new(emails.iter().map(|e| e.to_string()).collect()),
            ..Self::default()
        }
    }

    /// All stored emails in insertion order (for test assertions).
    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().unwrap().clone()
    }

    pub fn count_for(&self, email: &str) -> usize {
        self.emails
            .lock()
            .unwrap()
            .iter()
            .filter(|e| *e == email)
            .count()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistStore for InMemoryWaitlistStore {
    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let mut emails = self.emails.lock().unwrap();

        if emails.iter().any(|e| e == entry.email()) {
            return Err(StoreError::unique_violation(
                "duplicate key value violates unique constraint \"waitlist_email_key\"",
            ));
        }

        emails.push(entry.email().to_string());
        Ok(())
    }
}

/// Store whose every insert fails with a fixed error.
pub struct FailingWaitlistStore {
    error: StoreError,
}

impl FailingWaitlistStore {
    /// Network-level failure: no backend code attached.
    pub fn transport() -> Self {
        Self {
            error: StoreError::transport("connection refused"),
        }
    }

    pub fn with_code(code: &str) -> Self {
        Self {
            error: StoreError::new(Some(code.to_string()), "store rejected insert"),
        }
    }
}

#[async_trait]
impl WaitlistStore for FailingWaitlistStore {
    async fn insert(&self, _entry: &NewWaitlistEntry) -> Result<(), StoreError> {
        Err(self.error.clone())
    }
}
