//! identityd: HTTP daemon for USB gadget identity configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gadget_id_core::paths::{self, IdentityPaths};
use gadget_id_core::store::IdentityStore;
use tracing::info;

mod proto;
mod routes;

#[derive(Parser)]
#[command(name = "identityd", version, about = "USB gadget identity API daemon")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Directory holding the identity files.
    #[arg(long, default_value = paths::SYSTEM_DIR)]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let store = IdentityStore::new(IdentityPaths::in_dir(&args.dir));
    let app = routes::router(store);

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    info!(listen = %args.listen, dir = %args.dir.display(), "identityd listening");
    axum::serve(listener, app).await?;

    Ok(())
}
