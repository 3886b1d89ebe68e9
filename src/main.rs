mod api;
mod config;
mod data;
mod error;
mod models;
mod pager;
mod render;
mod sorter;
mod table;

use std::sync::{Arc, Mutex};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::table::WalletTable;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // RUST_LOG wins; default to info
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();

    info!("Wallet dashboard starting...");

    let cfg = config::load()?;
    info!("  Bind: {}:{}", cfg.bind_addr, cfg.port);
    info!(
        "  Data: {}",
        cfg.data_path.as_deref().unwrap_or("bundled sample")
    );

    // Records are read once; the table owns them from here on
    let records = data::load(cfg.data_path.as_deref());
    let table = Arc::new(Mutex::new(WalletTable::new(records)));

    let api_handle = tokio::spawn({
        let cfg = cfg.clone();
        let table = Arc::clone(&table);
        async move { api::serve(cfg, table).await }
    });

    tokio::select! {
        res = api_handle => match res {
            Ok(Ok(_)) => info!("Dashboard exited cleanly"),
            Ok(Err(e)) => error!("Dashboard error: {:?}", e),
            Err(e) => error!("Dashboard task panicked: {:?}", e),
        },
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received, stopping...");
        }
    }

    info!("Wallet dashboard stopped.");
    Ok(())
}
