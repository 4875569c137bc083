use std::sync::Arc;

use anyhow::Context;

use parentportal_config::cors::CorsConfig;
use parentportal_config::email::EmailConfig;
use parentportal_config::jwt::JwtConfig;
use parentportal_db::init_db_pool;

use crate::store::{BalanceSource, PgPortalStore, PortalStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PortalStore>,
    pub balances: Arc<dyn BalanceSource>,
    pub jwt_config: JwtConfig,
    pub email_config: EmailConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// State over any store; configs are passed in so tests can pin them.
    pub fn new<S>(
        store: Arc<S>,
        jwt_config: JwtConfig,
        email_config: EmailConfig,
        cors_config: CorsConfig,
    ) -> Self
    where
        S: PortalStore + BalanceSource + 'static,
    {
        Self {
            store: store.clone(),
            balances: store,
            jwt_config,
            email_config,
            cors_config,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("email_config", &self.email_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let pool = init_db_pool()
        .await
        .context("Failed to connect to database")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(AppState::new(
        Arc::new(PgPortalStore::new(pool)),
        JwtConfig::from_env(),
        EmailConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
