use async_trait::async_trait;

use crate::{
    adapters::persistence::PostgresPersistence,
    application::use_cases::waitlist::{StoreError, WaitlistStore},
    domain::entities::waitlist_entry::NewWaitlistEntry,
};

#[async_trait]
impl WaitlistStore for PostgresPersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<(), StoreError> {
        // Uniqueness on email is a table constraint; a repeat surfaces as 23505.
        sqlx::query(r#"INSERT INTO waitlist (email) VALUES ($1)"#)
            .bind(entry.email())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
