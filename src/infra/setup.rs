use crate::{
    adapters::{http::app_state::AppState, supabase::SupabaseWaitlistStore},
    infra::{
        InfraError,
        config::{AppConfig, StoreBackend},
        http_client::try_build_client,
        postgres_persistence,
    },
    use_cases::waitlist::{WaitlistStore, WaitlistUseCases},
};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let store = init_store(&config).await?;

    tracing::info!(backend = %config.store_backend, "Waitlist store ready");

    let waitlist_use_cases = WaitlistUseCases::new(store);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

async fn init_store(config: &AppConfig) -> Result<Arc<dyn WaitlistStore>, InfraError> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or(InfraError::ConfigMissing {
                    var: "DATABASE_URL",
                })?;
            let postgres = postgres_persistence(database_url).await?;
            Ok(Arc::new(postgres) as Arc<dyn WaitlistStore>)
        }
        StoreBackend::Supabase => {
            let project_url = config
                .supabase_base_url()
                .ok_or(InfraError::ConfigMissing {
                    var: "SUPABASE_URL",
                })?
                .map_err(|source| InfraError::InvalidUrl {
                    var: "SUPABASE_URL",
                    source,
                })?;
            let anon_key = config
                .supabase_anon_key
                .clone()
                .ok_or(InfraError::ConfigMissing {
                    var: "SUPABASE_ANON_KEY",
                })?;
            let client = try_build_client().map_err(InfraError::HttpClient)?;
            let store = SupabaseWaitlistStore::new(client, &project_url, anon_key).map_err(
                |source| InfraError::InvalidUrl {
                    var: "SUPABASE_URL",
                    source,
                },
            )?;
            Ok(Arc::new(store) as Arc<dyn WaitlistStore>)
        }
    }
}

pub fn init_tracing(log_file: &Path) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shiftly_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); skipped when the file cannot be created
    let json_layer = File::create(log_file).ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_config;

    #[tokio::test]
    async fn postgres_backend_requires_database_url() {
        let config = test_config();

        let err = init_app_state(config).await.err().unwrap();

        assert!(matches!(
            err,
            InfraError::ConfigMissing {
                var: "DATABASE_URL"
            }
        ));
    }

    #[tokio::test]
    async fn supabase_backend_requires_url_and_key() {
        let mut config = test_config();
        config.store_backend = StoreBackend::Supabase;

        let err = init_app_state(config).await.err().unwrap();
        assert!(matches!(
            err,
            InfraError::ConfigMissing {
                var: "SUPABASE_URL"
            }
        ));

        let mut config = test_config();
        config.store_backend = StoreBackend::Supabase;
        config.supabase_url = Some("https://abcd.supabase.co".to_string());

        let err = init_app_state(config).await.err().unwrap();
        assert!(matches!(
            err,
            InfraError::ConfigMissing {
                var: "SUPABASE_ANON_KEY"
            }
        ));
    }

    #[tokio::test]
    async fn supabase_backend_builds_without_network() {
        let mut config = test_config();
        config.store_backend = StoreBackend::Supabase;
        config.supabase_url = Some("https://abcd.supabase.co".to_string());
        config.supabase_anon_key = Some(secrecy::SecretString::new("anon".into()));

        let state = init_app_state(config).await.unwrap();

        assert_eq!(state.config.store_backend, StoreBackend::Supabase);
    }
}
