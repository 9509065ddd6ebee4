use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::{Config, ServerConfig};
use crate::content::FsResolver;
use crate::http::connection::Connection;
use crate::http::dispatcher::Dispatcher;
use crate::http::response::HeaderTable;

/// Builds the shared dispatcher from configuration. Called once at startup.
pub fn dispatcher_from_config(cfg: &Config) -> Arc<Dispatcher> {
    Arc::new(Dispatcher::new(
        HeaderTable::from_config(&cfg.headers),
        Arc::new(FsResolver::new(cfg.static_files.root.clone())),
        cfg.static_files.index.clone(),
    ))
}

/// Binds the listening socket with the configured backlog.
pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = tokio::net::lookup_host(&cfg.listen_addr)
        .await
        .with_context(|| format!("resolving {}", cfg.listen_addr))?
        .next()
        .with_context(|| format!("{} did not resolve to any address", cfg.listen_addr))?;

    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("binding {}", addr))?;

    Ok(socket.listen(cfg.backlog)?)
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, dispatcher_from_config(cfg), &cfg.server).await
}

/// Accept loop.
///
/// In sequential mode the next `accept` waits until the current connection
/// is closed. Each connection still runs on its own task so that a panic in
/// a handler surfaces as a join error instead of taking the loop down.
pub async fn serve(
    listener: TcpListener,
    dispatcher: Arc<Dispatcher>,
    cfg: &ServerConfig,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, dispatcher.clone())
            .with_read_buffer_size(cfg.read_buffer_size)
            .with_read_timeout(cfg.read_timeout());

        let task = tokio::spawn(async move {
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });

        if cfg.concurrent {
            continue;
        }

        if let Err(e) = task.await {
            error!("Connection task for {} failed: {}", peer, e);
        }
    }
}
