//! Runs the todo HTTP service.
//!
//! Configuration comes from the environment, optionally seeded from a
//! `.env` file in the working directory. See [`todo_service::config`] for
//! the recognised variables. Any start-up failure exits with status 1.

use std::process::ExitCode;

use todo_service::{
    config::ServiceConfig,
    server,
    telemetry::{self, LogFormat},
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            if telemetry::init(LogFormat::default()).is_ok() {
                tracing::error!(%error, "configuration error");
            }
            return ExitCode::FAILURE;
        }
    };

    if telemetry::init(config.log_format).is_err() {
        return ExitCode::FAILURE;
    }

    tracing::info!(
        storage = config.storage.mode_name(),
        "starting todo service"
    );

    match server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "todo service stopped");
            ExitCode::FAILURE
        }
    }
}
