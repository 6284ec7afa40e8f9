use std::sync::Arc;

use currency_converter::cache::CachedRates;
use currency_converter::config::Config;
use currency_converter::converter::Converter;
use currency_converter::models::AppState;
use currency_converter::rates::{RateClient, RateSource};
use currency_converter::routes;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let config = Config::from_env();
    let client = Arc::new(RateClient::with_url(config.rates_url.clone()));
    let rates: Arc<dyn RateSource> = if config.cache_ttl.is_zero() {
        client
    } else {
        Arc::new(CachedRates::new(client, config.cache_ttl))
    };
    let state = AppState::new(Converter::new(rates));
    let router = routes::init(state);
    info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
