//! Thin HTTP client for the NexusHub WoW-Classic price API.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use goldwatch_core::{GoldwatchError, Sample};

/// Public NexusHub WoW-Classic API root.
pub const DEFAULT_BASE_URL: &str = "https://api.nexushub.co/wow-classic/v1";

const CONNECTOR: &str = "goldwatch-nexushub";

/// One scan row of the `/prices` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceRow {
    market_value: f64,
    quantity: f64,
    scanned_at: DateTime<Utc>,
}

/// Envelope NexusHub wraps every prices response in.
#[derive(Debug, Deserialize)]
struct PricesEnvelope {
    data: Vec<PriceRow>,
}

/// HTTP client for the NexusHub prices endpoint.
///
/// One instance per connector; `reqwest::Client` already pools connections
/// internally.
#[derive(Debug)]
pub struct NexusHubClient {
    base_url: Url,
    http: reqwest::Client,
}

impl NexusHubClient {
    /// Build a client against [`DEFAULT_BASE_URL`] with a 10s timeout.
    ///
    /// # Errors
    /// Returns `Err(GoldwatchError::Fetch)` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self, GoldwatchError> {
        Self::with_base_url(DEFAULT_BASE_URL, Duration::from_secs(10))
    }

    /// Build a client against a custom API root (tests point this at a local
    /// mock server).
    ///
    /// # Errors
    /// Returns `Err(GoldwatchError::InvalidArg)` for a malformed base URL and
    /// `Err(GoldwatchError::Fetch)` if the HTTP client cannot be constructed.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, GoldwatchError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(GoldwatchError::InvalidArg(format!(
                "base url must start with http:// or https://, got: {trimmed}"
            )));
        }
        let base_url = Url::parse(trimmed)
            .map_err(|e| GoldwatchError::InvalidArg(format!("invalid base url: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GoldwatchError::fetch(CONNECTOR, format!("building http client: {e}")))?;
        Ok(Self { base_url, http })
    }

    /// Fetch price scans for `slug` under the given market path segment
    /// (`{realm}-{faction}` for servers, `{region}` with `region=true` for
    /// regions). Rows come back with prices and quantities rounded to whole
    /// copper/integers.
    ///
    /// # Errors
    /// - `Err(GoldwatchError::NotFound)` on HTTP 404 or an empty data array.
    /// - `Err(GoldwatchError::Fetch)` on transport errors or other non-success
    ///   statuses.
    /// - `Err(GoldwatchError::Data)` when the body is not the expected shape.
    pub async fn prices(
        &self,
        market: &str,
        slug: &str,
        timerange: Option<u32>,
        region: bool,
    ) -> Result<Vec<Sample>, GoldwatchError> {
        let mut url = Url::parse(&format!(
            "{}/items/{market}/{slug}/prices",
            self.base_url.as_str().trim_end_matches('/')
        ))
        .map_err(|e| GoldwatchError::InvalidArg(format!("invalid request url: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(days) = timerange {
                query.append_pair("timerange", &days.to_string());
            }
            if region {
                query.append_pair("region", "true");
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "fetching nexushub price history");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| GoldwatchError::fetch(CONNECTOR, format!("request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GoldwatchError::not_found(format!("item {slug} on {market}")));
        }
        if !status.is_success() {
            return Err(GoldwatchError::fetch(
                CONNECTOR,
                format!("status {status} for {url}"),
            ));
        }

        let envelope: PricesEnvelope = response
            .json()
            .await
            .map_err(|e| GoldwatchError::Data(format!("malformed prices response: {e}")))?;
        if envelope.data.is_empty() {
            return Err(GoldwatchError::not_found(format!(
                "history for {slug} on {market} in the requested window"
            )));
        }

        Ok(envelope
            .data
            .into_iter()
            .map(|row| Sample {
                ts: row.scanned_at,
                price: row.market_value.round(),
                quantity: row.quantity.round().max(0.0) as u64,
            })
            .collect())
    }
}
