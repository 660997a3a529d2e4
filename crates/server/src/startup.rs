use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::account::{
    repo::seaorm::SeaOrmAccountRepository, repository::AccountRepository, AccountService, AccountServiceConfig,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve `server.host` (IP literal or hostname) and `server.port` to the listen address.
async fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let host = cfg.server.host.as_str();
    tokio::net::lookup_host((host, cfg.server.port))
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("server address {host}: {e}")))?
        .next()
        .ok_or_else(|| StartupError::InvalidConfig(format!("server address {host}: no addresses")))
}

/// Wire the account service onto a repository.
pub fn build_state(repo: Arc<dyn AccountRepository>, cfg: &AppConfig) -> AppState {
    let svc_cfg = AccountServiceConfig { expose_internal_errors: cfg.service.expose_internal_errors };
    AppState { accounts: Arc::new(AccountService::new(repo, svc_cfg)) }
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let addr = bind_addr(&cfg).await?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;
        info!("migrations applied");
    }

    let repo: Arc<dyn AccountRepository> = Arc::new(SeaOrmAccountRepository { db });
    let state = build_state(repo, &cfg);
    let app: Router = routes::build_router(state, build_cors());

    info!(%addr, expose_internal_errors = cfg.service.expose_internal_errors, "starting account service");
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(anyhow::Error::from)?;
    axum::serve(listener, app).await.map_err(anyhow::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_addr_from_ip_literal() {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg).await.unwrap().to_string(), "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn bind_addr_resolves_hostname() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "localhost".into();
        cfg.server.port = 9090;
        let addr = bind_addr(&cfg).await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9090);
    }
}
