/**
 * Pixelboard Server Entry Point
 *
 * This is the main entry point for the pixelboard backend server.
 * It loads configuration, initializes the Axum HTTP server with the
 * change-feed watcher and accrual job, and serves until interrupted.
 */

use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing; RUST_LOG overrides the default filter
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Server initialization started");

    let config = pixelboard::backend::server::config::ServerConfig::from_env()?;

    // Create the Axum app, store connection, and background tasks
    let (app, tasks) = pixelboard::backend::server::init::create_app(&config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is listening on {}", addr);

    // Run the server until the shutdown signal, then drain
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Explicit teardown of the watcher and accrual tasks
    tasks.shutdown();
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {:?}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
