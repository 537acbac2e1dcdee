// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result
    )
)]

use clap::Parser;
use color_eyre::eyre::Result;
use shopping_list_daemon::cors::{build_cors_layer, normalize_origins, DEFAULT_CORS_ORIGINS};
use shopping_list_daemon::grpc_logging::GrpcLoggingLayer;
use shopping_list_daemon::logging::{self, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use shopping_list_daemon::server::proto::shopping_list_server::ShoppingListServer;
use shopping_list_daemon::server::{
    new_shared_store, ShoppingListService, ShutdownSignal, FILE_DESCRIPTOR_SET,
};
use shopping_list_daemon::user_config::{load_user_config, UserConfig};
use shopping_list_daemon::utils::APP_FOLDER;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tonic::transport::Server;
use tracing::{info, warn};

const DEFAULT_ADDR: &str = "127.0.0.1:50051";

/// Shopping list daemon - in-memory item store served over gRPC and gRPC-Web
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to (falls back to ~/.shopping-list/config.toml, then 127.0.0.1:50051)
    #[arg(short, long, env = "SHOPPING_LIST_ADDR")]
    addr: Option<String>,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins.
    #[arg(
        long,
        env = "SHOPPING_LIST_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Enable JSON log format
    #[arg(long, env = "SHOPPING_LIST_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "SHOPPING_LIST_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.shopping-list/logs)
    #[arg(long, env = "SHOPPING_LIST_LOG_DIR")]
    log_dir: Option<String>,
}

fn report_server_error(
    addr: std::net::SocketAddr,
    log_file: &std::path::Path,
    e: &tonic::transport::Error,
) {
    let err_string = format!("{e:?}");
    eprintln!();
    if err_string.contains("AddrInUse") {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another shopping-list-daemon may already be running.");
        eprintln!("Stop it with `shopping-list shutdown`, or pick another port:");
        eprintln!("  shopping-list-daemon --addr 127.0.0.1:{}", addr.port().saturating_add(1));
    } else {
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir.map_or_else(
        || {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_FOLDER)
                .join("logs")
        },
        PathBuf::from,
    );

    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // ~/.shopping-list/config.toml is optional
    let user_cfg = load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let addr: std::net::SocketAddr = args
        .addr
        .or(user_cfg.daemon.addr)
        .unwrap_or_else(|| DEFAULT_ADDR.to_string())
        .parse()?;

    let cors_origins = normalize_origins(&args.cors_origins);
    info!("CORS origins: {}", cors_origins.join(", "));
    let cors = build_cors_layer(cors_origins);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(ShutdownSignal::None);
    let shutdown_tx = Arc::new(shutdown_tx);

    let exe_path = std::env::current_exe().ok();
    let service = ShoppingListService::new(new_shared_store(), shutdown_tx, exe_path);

    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    info!("Starting shopping-list daemon on {} (gRPC + gRPC-Web)", addr);

    let server_result = Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(GrpcLoggingLayer)
        .layer(tonic_web::GrpcWebLayer::new())
        .add_service(reflection_service)
        .add_service(ShoppingListServer::new(service))
        .serve_with_shutdown(addr, async move {
            while shutdown_rx.changed().await.is_ok() {
                if *shutdown_rx.borrow() == ShutdownSignal::Shutdown {
                    info!("Received shutdown signal, stopping server...");
                    break;
                }
            }
        })
        .await;

    if let Err(e) = server_result {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Shopping-list daemon stopped");
    Ok(())
}
