use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use strum::{AsRefStr, Display, EnumString};
use url::Url;

/// Where waitlist entries are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    /// Direct connection to the Postgres database behind the waitlist table.
    Postgres,
    /// Hosted Supabase project, reached through its REST endpoint.
    Supabase,
}

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store_backend: StoreBackend,
    /// Required when `store_backend` is `Postgres`.
    pub database_url: Option<String>,
    /// Project URL, e.g. `https://abcd.supabase.co`. Required for `Supabase`.
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<SecretString>,
    /// Address shown in the page footer.
    pub contact_email: String,
    pub cors_origin: HeaderValue,
    pub assets_dir: PathBuf,
    pub log_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let store_backend: StoreBackend =
            get_env_default("STORE_BACKEND", String::from("postgres"))
                .parse()
                .expect("STORE_BACKEND must be either postgres or supabase");
        let database_url = optional_env("DATABASE_URL");
        let supabase_url = optional_env("SUPABASE_URL");
        let supabase_anon_key =
            optional_env("SUPABASE_ANON_KEY").map(|key| SecretString::new(key.into()));
        let contact_email: String =
            get_env_default("CONTACT_EMAIL", "contact@shiftly.com".to_string());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let assets_dir: String = get_env_default("ASSETS_DIR", "assets".to_string());
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            bind_addr,
            store_backend,
            database_url,
            supabase_url,
            supabase_anon_key,
            contact_email,
            cors_origin,
            assets_dir: PathBuf::from(assets_dir),
            log_file: PathBuf::from(log_file),
        }
    }

    /// Project URL with a trailing slash so relative joins keep any path prefix.
    pub fn supabase_base_url(&self) -> Option<Result<Url, url::ParseError>> {
        self.supabase_url.as_deref().map(|raw| {
            if raw.ends_with('/') {
                Url::parse(raw)
            } else {
                Url::parse(&format!("{raw}/"))
            }
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
