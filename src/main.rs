use tracing_subscriber::{EnvFilter, fmt};

use temporal_client::{get_temporal_client, get_temporal_client_with_namespace};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let client = match std::env::args().nth(1) {
        Some(namespace) => get_temporal_client_with_namespace(&namespace).await?,
        None => get_temporal_client().await?,
    };

    tracing::info!(
        address = client.address(),
        namespace = client.namespace(),
        "workflow service reachable"
    );
    Ok(())
}
