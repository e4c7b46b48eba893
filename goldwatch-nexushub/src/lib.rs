//! goldwatch-nexushub
//!
//! Production connector that implements the `goldwatch_core` contracts on top
//! of the NexusHub WoW-Classic REST API. Exposes per-server and region-wide
//! price history.
#![warn(missing_docs)]

/// HTTP client for the NexusHub prices endpoint.
pub mod client;

use std::time::Duration;

use async_trait::async_trait;
use goldwatch_core::connector::{
    GoldwatchConnector, RegionHistoryProvider, ServerHistoryProvider,
};
use goldwatch_core::{
    Faction, GoldwatchError, ItemName, Realm, Region, Source, TimeSeries,
};

use client::{DEFAULT_BASE_URL, NexusHubClient};

/// Public connector type. Production users construct with
/// [`NexusHubConnector::new`]; tests use [`NexusHubConnector::builder`] to
/// point it at a mock server.
#[derive(Debug)]
pub struct NexusHubConnector {
    client: NexusHubClient,
}

impl NexusHubConnector {
    /// Connector against the public NexusHub API with default settings.
    ///
    /// # Errors
    /// Returns `Err(GoldwatchError::Fetch)` if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, GoldwatchError> {
        Ok(Self {
            client: NexusHubClient::new()?,
        })
    }

    /// Builder for overriding the API root and request timeout.
    #[must_use]
    pub fn builder() -> NexusHubConnectorBuilder {
        NexusHubConnectorBuilder::default()
    }
}

/// Builder for [`NexusHubConnector`].
pub struct NexusHubConnectorBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for NexusHubConnectorBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl NexusHubConnectorBuilder {
    /// Override the API root (e.g. a local mock server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `Err(GoldwatchError::InvalidArg)` for a malformed base URL and
    /// `Err(GoldwatchError::Fetch)` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<NexusHubConnector, GoldwatchError> {
        Ok(NexusHubConnector {
            client: NexusHubClient::with_base_url(&self.base_url, self.timeout)?,
        })
    }
}

impl GoldwatchConnector for NexusHubConnector {
    fn name(&self) -> &'static str {
        "goldwatch-nexushub"
    }

    fn vendor(&self) -> &'static str {
        "NexusHub"
    }

    fn as_server_history_provider(&self) -> Option<&dyn ServerHistoryProvider> {
        Some(self as &dyn ServerHistoryProvider)
    }

    fn as_region_history_provider(&self) -> Option<&dyn RegionHistoryProvider> {
        Some(self as &dyn RegionHistoryProvider)
    }
}

#[async_trait]
impl ServerHistoryProvider for NexusHubConnector {
    async fn server_history(
        &self,
        item: &ItemName,
        realm: &Realm,
        faction: Faction,
        timerange: Option<u32>,
    ) -> Result<TimeSeries, GoldwatchError> {
        let market = format!("{}-{}", realm.slug(), faction.slug());
        let samples = self
            .client
            .prices(&market, &item.slug(), timerange, false)
            .await?;
        Ok(TimeSeries::new(
            Source::Server {
                realm: realm.clone(),
                faction,
            },
            samples,
        ))
    }
}

#[async_trait]
impl RegionHistoryProvider for NexusHubConnector {
    async fn region_history(
        &self,
        item: &ItemName,
        region: Region,
        timerange: Option<u32>,
    ) -> Result<TimeSeries, GoldwatchError> {
        let samples = self
            .client
            .prices(region.slug(), &item.slug(), timerange, true)
            .await?;
        Ok(TimeSeries::new(Source::Region(region), samples))
    }
}
