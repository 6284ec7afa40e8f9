use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::RateMap;
use crate::rates::RateSource;
use crate::Result;

/// TTL-bounded response cache in front of a rate source, so identical
/// requests inside the freshness window cost one upstream call. Failures are
/// never stored.
pub struct CachedRates {
    inner: Arc<dyn RateSource>,
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, RateMap)>>,
}

impl CachedRates {
    pub fn new(inner: Arc<dyn RateSource>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn key(base: &str, targets: Option<&[String]>) -> String {
        match targets {
            Some(targets) => format!("{base}|{}", targets.join(",")),
            None => base.to_string(),
        }
    }
}

#[async_trait]
impl RateSource for CachedRates {
    async fn get_rates(&self, base: &str, targets: Option<&[String]>) -> Result<RateMap> {
        let key = CachedRates::key(base, targets);
        {
            let entries = self.entries.lock().await;
            if let Some((stored_at, rates)) = entries.get(&key) {
                if stored_at.elapsed() < self.ttl {
                    tracing::debug!("rate cache hit: {key}");
                    return Ok(rates.clone());
                }
            }
        }
        let rates = self.inner.get_rates(base, targets).await?;
        self.entries
            .lock()
            .await
            .insert(key, (Instant::now(), rates.clone()));
        Ok(rates)
    }
}
