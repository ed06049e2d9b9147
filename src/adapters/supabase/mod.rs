//! Waitlist store backed by a hosted Supabase project, talking to its
//! PostgREST endpoint directly.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    application::use_cases::waitlist::{StoreError, WaitlistStore},
    domain::entities::waitlist_entry::NewWaitlistEntry,
};

const WAITLIST_PATH: &str = "rest/v1/waitlist";

/// Error body PostgREST returns on a failed request.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
}

#[derive(Clone)]
pub struct SupabaseWaitlistStore {
    client: Client,
    endpoint: Url,
    anon_key: SecretString,
}

impl SupabaseWaitlistStore {
    pub fn new(
        client: Client,
        project_url: &Url,
        anon_key: SecretString,
    ) -> Result<Self, url::ParseError> {
        let endpoint = project_url.join(WAITLIST_PATH)?;
        Ok(Self {
            client,
            endpoint,
            anon_key,
        })
    }
}

#[async_trait]
impl WaitlistStore for SupabaseWaitlistStore {
    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<(), StoreError> {
        let key = self.anon_key.expose_secret();
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=minimal")
            .json(&[entry])
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        match response.json::<PostgrestError>().await {
            Ok(body) => Err(StoreError::new(
                body.code,
                body.message
                    .unwrap_or_else(|| format!("Supabase responded with {status}")),
            )),
            Err(_) => Err(StoreError::new(
                None,
                format!("Supabase responded with {status}"),
            )),
        }
    }
}
