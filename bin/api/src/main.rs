//! Palaver control API server.
//!
//! Exposes the node's forum feature over HTTP: creating and listing
//! forums, inspecting post counts, and managing the invitations that share
//! a forum with a contact. Forum and sharing state live behind the engine
//! interfaces; this binary wires in the in-memory reference engines.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default settings (localhost:7000)
//! palaver-api
//!
//! # Run on custom address
//! palaver-api --bind 0.0.0.0:8080
//!
//! # Enable debug logging
//! RUST_LOG=debug palaver-api
//! ```

mod error;
mod handlers;
mod output;
mod router;
mod state;

use palaver::forum::MemoryForumEngine;
use palaver::sharing::MemorySharingEngine;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "palaver_api=info".into()),
        )
        .init();

    // Parse command line args
    let bind_addr = std::env::args()
        .nth(1)
        .filter(|arg| arg == "--bind")
        .and_then(|_| std::env::args().nth(2))
        .unwrap_or_else(|| "127.0.0.1:7000".to_string());

    let state = AppState {
        forums: Arc::new(MemoryForumEngine::new()),
        sharing: Arc::new(MemorySharingEngine::new()),
    };

    let app = router::router(state);

    // Start server
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Palaver control API running on http://{}", bind_addr);
    info!("");
    info!("Endpoints:");
    info!("  GET    /forums                    - List forums");
    info!("  POST   /forums                    - Create a forum");
    info!("  GET    /forums/pending            - List pending invitations");
    info!("  POST   /forums/pending            - Send an invitation");
    info!("  POST   /forums/pending/accept     - Accept an invitation");
    info!("  GET    /forums/:forumId           - Get forum details");
    info!("  GET    /forums/:forumId/postCount - Post-count summary");

    axum::serve(listener, app).await?;

    Ok(())
}
