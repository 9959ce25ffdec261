use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::GeocoderConfig;
use crate::entities::Coordinates;
use crate::error::Error;

#[derive(Clone, Debug)]
pub struct Provider {
    pub base_url: String,
    pub country_codes: Option<String>,
}

// Nominatim-format search hit; lat/lon arrive as strings.
#[derive(Clone, Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

// Seam for the debounce machinery and for tests that script outcomes.
#[async_trait]
pub trait ResolveAddress: Send + Sync {
    async fn resolve(&self, address: &str) -> Option<Coordinates>;
}

pub struct Geocoder {
    client: reqwest::Client,
    providers: Vec<Provider>,
}

impl Geocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            providers: config.providers.clone(),
        })
    }

    async fn query_provider(
        &self,
        provider: &Provider,
        address: &str,
    ) -> Result<Option<Coordinates>, reqwest::Error> {
        let mut request = self
            .client
            .get(&provider.base_url)
            .query(&[("format", "json")])
            .query(&[("q", address)])
            .query(&[("limit", "1")]);

        if let Some(codes) = &provider.country_codes {
            request = request.query(&[("countrycodes", codes.as_str())]);
        }

        let hits: Vec<SearchHit> = request.send().await?.error_for_status()?.json().await?;

        // Out-of-range or unparseable components count as no match.
        Ok(hits.first().and_then(|hit| {
            let latitude = hit.lat.parse().ok()?;
            let longitude = hit.lon.parse().ok()?;
            Coordinates::new(latitude, longitude)
        }))
    }
}

#[async_trait]
impl ResolveAddress for Geocoder {
    // Providers are tried in order; the first parsed hit wins. Transport
    // errors, bad statuses, and malformed bodies fall through to the next
    // provider. Exhaustion is an expected outcome, not an error.
    #[tracing::instrument(skip(self))]
    async fn resolve(&self, address: &str) -> Option<Coordinates> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }

        for provider in &self.providers {
            match self.query_provider(provider, address).await {
                Ok(Some(coordinates)) => return Some(coordinates),
                Ok(None) => {
                    tracing::debug!(provider = %provider.base_url, "no match");
                }
                Err(err) => {
                    tracing::warn!(provider = %provider.base_url, error = %err, "provider unavailable");
                }
            }
        }

        None
    }
}
