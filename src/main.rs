use std::sync::Arc;

use clap::Parser;
use currency_converter_tui::{
    api::FixerApi,
    app::{
        App, Converter,
        schedule::{Debouncer, RefreshTimer},
    },
    config::Args,
    db::{self, CREDENTIAL_KEY},
    logging::setup_logging,
    services::RateRepository,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Args::parse().into_config()?;
    let _guard = setup_logging(&config.log_dir)?;

    let connection = db::connect(&config.db_path).await?;

    if let Some(api_key) = &config.api_key {
        db::save_setting(&connection, CREDENTIAL_KEY, api_key.trim()).await?;
    }
    let saved_key = db::load_setting(&connection, CREDENTIAL_KEY).await?;

    let api = Arc::new(FixerApi::new(&config.base_url));
    let repository = RateRepository::new(api);
    let mut converter = Converter::new(
        repository,
        Debouncer::new(config.debounce),
        RefreshTimer::new(config.refresh_interval),
    );

    if let Some(saved_key) = saved_key {
        info!("Using saved API key");
        converter.set_credential(&saved_key);
    }

    let mut app = App::new(converter, connection);
    app.run().await?;

    info!("Exiting");
    Ok(())
}
