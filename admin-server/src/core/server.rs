use std::net::SocketAddr;

use crate::core::{Config, ServerState};
use crate::routes::build_app;

/// HTTP server lifecycle
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (tests, embedded setups)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config)
                .await
                .map_err(|e| anyhow::anyhow!("State initialization failed: {e}"))?,
        };

        // Build fully configured app with all middleware, then apply state
        let app = build_app(&state).with_state(state.clone());
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));

        self.print_startup_banner(&addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("🚀 HTTP server listening on {}", addr);

        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("✅ Server shutdown complete");
        Ok(())
    }

    fn print_startup_banner(&self, addr: &SocketAddr) {
        println!();
        println!("╔══════════════════════════════════════════════════════════╗");
        println!("║                 Heron Admin Server                        ║");
        println!("╠══════════════════════════════════════════════════════════╣");
        println!("║ 🌐 HTTP Listener   : http://{:<29} ║", addr);
        println!("║ 🗄  Database        : {:<36} ║", self.config.db_path());
        println!("║ ⚙  Environment     : {:<36} ║", self.config.environment);
        println!("╚══════════════════════════════════════════════════════════╝");
        println!();
    }
}

/// Graceful shutdown handler
///
/// Listens for SIGTERM (Kubernetes) and Ctrl+C signals
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
