use async_trait::async_trait;

use crate::{models::RateMap, AppError, Result};

// url для получения курсов валют
pub const SOURCE_URL: &str = "https://api.exchangeratesapi.io/latest";

/// A source of conversion rates. The production implementation talks to the
/// public exchange-rate API; tests plug in stubs.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Rates for `base`, restricted to `targets` when given. One outbound
    /// request, no retries.
    async fn get_rates(&self, base: &str, targets: Option<&[String]>) -> Result<RateMap>;
}

#[derive(Debug, Clone)]
pub struct RateClient {
    client: reqwest::Client,
    url: String,
}

impl RateClient {
    pub fn new() -> Self {
        Self::with_url(SOURCE_URL)
    }
    /// Point the client at a different rates endpoint (config override, stub
    /// servers in tests).
    pub fn with_url(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder().gzip(true).build().unwrap();
        Self {
            client,
            url: url.into(),
        }
    }
}

impl Default for RateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for RateClient {
    async fn get_rates(&self, base: &str, targets: Option<&[String]>) -> Result<RateMap> {
        let mut query = vec![("base".to_string(), base.to_string())];
        if let Some(targets) = targets {
            query.push(("symbols".to_string(), targets.join(",")));
        }
        tracing::debug!("requesting rates for base {base}");
        let response = self.client.get(&self.url).query(&query).send().await?;
        let status = response.status();
        let body = response.json::<serde_json::Value>().await?;
        if status.is_success() {
            let rates = body
                .get("rates")
                .and_then(|v| serde_json::from_value::<RateMap>(v.clone()).ok())
                .unwrap_or_default();
            tracing::debug!("received {} rates for base {base}", rates.len());
            Ok(rates)
        } else {
            let reason = match body.get("error") {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => status.to_string(),
            };
            Err(AppError::RatesNotAvailable(reason))
        }
    }
}
