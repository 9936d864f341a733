use crate::app_config::AppConfig;
use crate::domain::UsageWindow;
use crate::store::UsageStore;
use tracing::info;

mod app_config;
mod domain;
mod store;
mod summit;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let login_client = summit::new_client()?;
    let credentials = summit::login(&login_client, &config).await?;
    let client = summit::authorized_client(&credentials)?;
    info!("✅  Authenticated with the Summit API");

    let summit_ids = summit::list_summit_ids(&client, &config).await?;
    info!("✅  Enumerated {} devices", summit_ids.len());

    let window = UsageWindow::yesterday(&config.reporting().utc_offset());
    let rows = summit::collect(&client, &config, &summit_ids, &window).await?;
    info!("✅  Collected {} rows for {}", rows.len(), window);

    let store = UsageStore::connect(&config).await?;
    store.init_schema().await?;
    store.insert_rows(&rows).await?;

    info!("🔥 {} run complete, {} rows stored", env!("CARGO_PKG_NAME"), rows.len());

    Ok(())
}
