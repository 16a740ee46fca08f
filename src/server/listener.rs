use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!(
        addr = %cfg.listen_addr,
        root = %cfg.document_root.display(),
        "Listening"
    );

    serve(listener, Arc::new(cfg)).await
}

/// Accepts connections forever, one task per connection.
///
/// A failing connection is logged and never stops the loop.
pub async fn serve(listener: TcpListener, cfg: Arc<Config>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let cfg = Arc::clone(&cfg);
        tokio::spawn(async move {
            let conn = Connection::new(socket, cfg);
            if let Err(e) = conn.run().await {
                tracing::error!(peer = %peer, error = %e, "Connection dropped");
            }
        });
    }
}
