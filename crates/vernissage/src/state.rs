//! Application state with repository-based storage.
//!
//! This module defines the shared state passed to all request handlers.
//! Storage is exposed as repository trait objects so handlers never depend
//! on the SQLite backend directly.

use std::sync::Arc;

use axum::extract::FromRef;

use vernissage_auth::AuthConfig;
use vernissage_core::storage::{
    AdminUserRepository, ArtistRepository, ExhibitionRepository, NewsRepository, OrderRepository,
    PaintingRepository, PickupPointRepository, ShopItemRepository,
};

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::fx::RatesClient;
use crate::mail::{MailConfig, Mailer, NoopMailer, SmtpMailer};
use crate::storage::sqlite::SqliteRepository;

/// Shared application state.
///
/// Cloned for each request handler. All repository fields point at the
/// same underlying store.
#[derive(Clone)]
pub struct AppState {
    pub artists: Arc<dyn ArtistRepository>,
    pub paintings: Arc<dyn PaintingRepository>,
    pub exhibitions: Arc<dyn ExhibitionRepository>,
    pub news: Arc<dyn NewsRepository>,
    pub shop_items: Arc<dyn ShopItemRepository>,
    pub pickup_points: Arc<dyn PickupPointRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub admins: Arc<dyn AdminUserRepository>,

    /// Outbound email transport. Noop when SMTP is not configured.
    pub mailer: Arc<dyn Mailer>,
    /// Currency rate fetcher with cache-aside.
    pub rates: RatesClient,

    pub config: Config,
    pub auth: AuthConfig,
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> AuthConfig {
        state.auth.clone()
    }
}

impl AppState {
    /// Creates the production state: SQLite storage, in-memory rate cache
    /// and SMTP mail when configured.
    pub async fn new(config: Config, auth: AuthConfig) -> Result<Self, anyhow::Error> {
        let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);

        let mailer: Arc<dyn Mailer> = match MailConfig::from_env() {
            Some(mail_config) => Arc::new(SmtpMailer::new(&mail_config)?),
            None => Arc::new(NoopMailer),
        };

        Ok(Self::build(repo, mailer, config, auth))
    }

    fn build(
        repo: Arc<SqliteRepository>,
        mailer: Arc<dyn Mailer>,
        config: Config,
        auth: AuthConfig,
    ) -> Self {
        let cache = Arc::new(MemoryCache::new(config.cache_max_entries));
        let rates = RatesClient::new(
            cache,
            config.rates_provider_url.clone(),
            config.rates_ttl(),
        );

        Self {
            artists: repo.clone(),
            paintings: repo.clone(),
            exhibitions: repo.clone(),
            news: repo.clone(),
            shop_items: repo.clone(),
            pickup_points: repo.clone(),
            orders: repo.clone(),
            admins: repo,
            mailer,
            rates,
            config,
            auth,
        }
    }
}

#[cfg(test)]
mod test_support {
    use super::*;

    impl AppState {
        /// Creates an AppState backed by an in-memory database for tests.
        pub async fn for_tests() -> Self {
            let repo = Arc::new(
                SqliteRepository::new_in_memory()
                    .await
                    .expect("in-memory database"),
            );
            let config = Config {
                sqlite_path: ":memory:".to_string(),
                min_order_cents: 0,
                rates_provider_url: "http://127.0.0.1:1/latest".to_string(),
                rates_ttl_seconds: 600,
                supported_currencies: vec![
                    "EUR".to_string(),
                    "USD".to_string(),
                    "GBP".to_string(),
                ],
                cache_max_entries: 100,
                mail_admin: None,
                admin_username: None,
                admin_password: None,
            };
            let auth = AuthConfig {
                jwt_secret: "test-secret".to_string(),
                token_ttl_seconds: 3600,
            };
            Self::build(repo, Arc::new(NoopMailer), config, auth)
        }

        /// Same as [`AppState::for_tests`] but with a minimum order total.
        pub async fn for_tests_with_minimum(min_order_cents: i64) -> Self {
            let mut state = Self::for_tests().await;
            state.config.min_order_cents = min_order_cents;
            state
        }
    }
}
