use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

/// `config.toml` when present and valid, otherwise environment variables.
fn load_config() -> (AppConfig, Option<anyhow::Error>) {
    match AppConfig::load_and_validate() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::from_env(), Some(e)),
    }
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG and DATABASE_URL apply
    dotenv().ok();
    let (cfg, file_err) = load_config();
    common::utils::logging::init_logging(cfg.logging.json);
    info!(service = "server", event = "logger_init", "tracing subscriber initialized");
    if let Some(e) = file_err {
        warn!(service = "server", event = "config_fallback", error = %e, "config file unusable, using environment");
    }
    if let Err(e) = cfg.database.validate() {
        error!(service = "server", event = "config_invalid", error = %e, "invalid database configuration");
        return std::process::ExitCode::FAILURE;
    }

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads.filter(|w| *w > 0) { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "server service starting"
    );

    // run() returns after Ctrl+C once in-flight requests have drained
    rt.block_on(async move {
        match server::run(cfg).await {
            Ok(()) => {
                info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
