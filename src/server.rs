//! Process bootstrap: storage wiring, binding, and graceful shutdown.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::{AppState, TrustedHeaderAuthenticator, router};
use crate::config::{ConfigError, ServiceConfig, StorageConfig};
use crate::todo::{
    adapters::{
        memory::InMemoryTodoRepository,
        postgres::{self, BootstrapError, PostgresTodoRepository},
    },
    ports::TodoRepository,
};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The persistence store could not be prepared.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// The listening socket could not be bound.
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    /// The server loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Creates the repository selected by `storage`.
///
/// For `PostgreSQL` this connects and applies the schema before returning.
///
/// # Errors
///
/// Returns [`ServerError::Bootstrap`] when the database is unreachable or
/// the schema cannot be applied.
pub async fn build_repository(
    storage: &StorageConfig,
) -> Result<Arc<dyn TodoRepository>, ServerError> {
    match storage {
        StorageConfig::InMemory => {
            tracing::warn!("using in-memory storage; todos are lost on exit");
            Ok(Arc::new(InMemoryTodoRepository::new()))
        }
        StorageConfig::Postgres {
            database_url,
            pool_size,
        } => {
            let pool = postgres::connect(database_url, *pool_size).await?;
            postgres::ensure_schema(&pool).await?;
            tracing::info!(pool_size = *pool_size, "connected to PostgreSQL");
            Ok(Arc::new(PostgresTodoRepository::new(pool)))
        }
    }
}

/// Builds the shared handler state for `config`.
///
/// # Errors
///
/// Returns [`ServerError`] when storage bootstrap fails.
pub async fn build_state(config: &ServiceConfig) -> Result<AppState, ServerError> {
    let repository = build_repository(&config.storage).await?;
    let authenticator = TrustedHeaderAuthenticator::new(config.identity_header.clone());
    Ok(AppState::new(repository, config.anonymous_access)
        .with_authenticator(Arc::new(authenticator)))
}

/// Runs the HTTP server until SIGINT or SIGTERM.
///
/// # Errors
///
/// Returns [`ServerError`] when bootstrap, binding, or serving fails.
pub async fn serve(config: ServiceConfig) -> Result<(), ServerError> {
    let address = config.socket_addr()?;
    let state = build_state(&config).await?;
    tracing::info!(
        anonymous_access = %config.anonymous_access,
        identity_header = config.identity_header.as_str(),
        "todo services initialised"
    );

    let listener = TcpListener::bind(address).await.map_err(ServerError::Bind)?;
    match listener.local_addr() {
        Ok(bound) => tracing::info!("listening on {bound}"),
        Err(error) => tracing::warn!(%error, "could not determine local address"),
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::domain::TodoQuery;

    #[tokio::test]
    async fn in_memory_storage_starts_empty() {
        let repository = build_repository(&StorageConfig::InMemory)
            .await
            .expect("in-memory storage always builds");

        let count = repository
            .count(&TodoQuery::default())
            .await
            .expect("count succeeds");

        assert_eq!(count, 0);
    }
}
