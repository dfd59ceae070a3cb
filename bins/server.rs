use std::process::ExitCode;

use configs::AppConfig;
use tracing::{error, info};
use uuid::Uuid;

fn build_runtime(cfg: &AppConfig) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = cfg.server.worker_threads {
        builder.worker_threads(threads);
    }
    builder.build()
}

fn main() -> ExitCode {
    // .env first so RUST_LOG, LOG_FORMAT and the config fallbacks see it
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Uuid::new_v4();
    std::panic::set_hook(Box::new(move |panic| {
        error!(%instance, message = %panic, "panic outside a request");
    }));

    let cfg = match AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = format!("{:#}", e), "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let rt = match build_runtime(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        %instance,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "granum starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(%instance, "granum stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%instance, error = format!("{:#}", e), "server exited with error");
            ExitCode::FAILURE
        }
    }
}
