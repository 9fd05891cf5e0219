use std::sync::Arc;

use tiktok_gateway::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config);

    let client = HttpScraperClient::connect(&config.upstream).await?;
    let state = AppState::new(config.clone(), Arc::new(client));

    Server::new(config).serve(build_router(state)).await?;

    Ok(())
}
