//! Mock connector for CI-safe tests and examples. Provides deterministic
//! auction-history data from static fixtures; no network access.

use async_trait::async_trait;
use goldwatch_core::connector::{
    GoldwatchConnector, RegionHistoryProvider, ServerHistoryProvider,
};
use goldwatch_core::{
    Faction, GoldwatchError, ItemName, Realm, Region, Source, TimeSeries,
};

mod fixtures;

/// Mock connector with deterministic fixture data.
///
/// The reserved item name `FAIL` forces a connector failure so orchestrator
/// fallback paths can be exercised; unknown items map to `NotFound`.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the fixture-backed connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(item: &ItemName, capability: &'static str) -> Result<(), GoldwatchError> {
        if item.as_str() == "FAIL" {
            return Err(GoldwatchError::fetch(
                "goldwatch-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl GoldwatchConnector for MockConnector {
    fn name(&self) -> &'static str {
        "goldwatch-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_server_history_provider(&self) -> Option<&dyn ServerHistoryProvider> {
        Some(self as &dyn ServerHistoryProvider)
    }

    fn as_region_history_provider(&self) -> Option<&dyn RegionHistoryProvider> {
        Some(self as &dyn RegionHistoryProvider)
    }
}

#[async_trait]
impl ServerHistoryProvider for MockConnector {
    async fn server_history(
        &self,
        item: &ItemName,
        realm: &Realm,
        faction: Faction,
        timerange: Option<u32>,
    ) -> Result<TimeSeries, GoldwatchError> {
        Self::maybe_fail(item, "server-history")?;
        let samples = fixtures::server_samples(&item.slug(), timerange)
            .ok_or_else(|| GoldwatchError::not_found(format!("history for {}", item.slug())))?;
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
impl RegionHistoryProvider for MockConnector {
    async fn region_history(
        &self,
        item: &ItemName,
        region: Region,
        timerange: Option<u32>,
    ) -> Result<TimeSeries, GoldwatchError> {
        Self::maybe_fail(item, "region-history")?;
        let samples = fixtures::region_samples(&item.slug(), timerange).ok_or_else(|| {
            GoldwatchError::not_found(format!("region history for {}", item.slug()))
        })?;
        Ok(TimeSeries::new(Source::Region(region), samples))
    }
}
