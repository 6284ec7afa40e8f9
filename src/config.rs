use std::{net::SocketAddr, time::Duration};

use crate::rates::SOURCE_URL;

/// Runtime settings for the API binary, all defaulted so it starts with an
/// empty environment.
pub struct Config {
    pub listen_addr: SocketAddr,
    pub rates_url: String,
    pub cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr: SocketAddr = std::env::var("CONVERTER_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .expect("Invalid CONVERTER_LISTEN_ADDR");
        let rates_url = std::env::var("CONVERTER_RATES_URL").unwrap_or_else(|_| SOURCE_URL.to_string());
        // 0 turns the response cache off
        let ttl_secs: u64 = std::env::var("CONVERTER_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .unwrap_or(600);
        Self {
            listen_addr,
            rates_url,
            cache_ttl: Duration::from_secs(ttl_secs),
        }
    }
}
