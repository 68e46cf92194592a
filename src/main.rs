use std::env;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use hello_time::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let address = env::args().nth(1).unwrap_or("0.0.0.0:8080".into());
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("cannot listen on {address}"))?;
    info!("listening on {address}");
    server::run(listener).await?;
    Ok(())
}
