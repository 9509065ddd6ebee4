use tinyhttpd::config::Config;
use tinyhttpd::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    tracing::info!(
        listen_addr = %cfg.server.listen_addr,
        root = %cfg.static_files.root.display(),
        concurrent = cfg.server.concurrent,
        "Starting tinyhttpd"
    );

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
