//! # HTDocs Server - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging, instala el handler de
//! Ctrl+C y corre el loop de accept hasta que llegue la interrupción.

use htdocs_server::config::Config;
use htdocs_server::server::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::new();

    // RUST_LOG tiene prioridad sobre --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }
    config.log_summary();

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    let handle = server.shutdown_handle();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Interrupt received, shutting down");
        handle.shutdown();
    }) {
        error!("Failed to install Ctrl+C handler: {}", e);
        std::process::exit(1);
    }

    // Bloquea hasta que el handler de Ctrl+C pida el cierre
    server.run();

    server.shutdown();
    info!("Server stopped.");
}
