use serde::Serialize;

/// Record inserted into the `waitlist` collection.
///
/// Only ever built through [`NewWaitlistEntry::from_raw`] so the email is
/// always normalized before it reaches a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWaitlistEntry {
    email: String,
}

impl NewWaitlistEntry {
    /// Trims and lower-cases the address. Shape validation happens upstream.
    pub fn from_raw(email: &str) -> Self {
        Self {
            email: normalize_email(email),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
