use sqlx::PgPool;

use crate::application::use_cases::waitlist::StoreError;

pub mod waitlist;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // Keep the SQLSTATE so the caller can tell a unique violation apart.
            sqlx::Error::Database(db_err) => StoreError::new(
                db_err.code().map(|code| code.into_owned()),
                db_err.message(),
            ),
            _ => StoreError::transport(err.to_string()),
        }
    }
}
