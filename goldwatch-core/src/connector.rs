use async_trait::async_trait;

use crate::{Faction, GoldwatchError, ItemName, Realm, Region, TimeSeries};

/// Focused role trait for connectors that provide per-server auction history.
#[async_trait]
pub trait ServerHistoryProvider: Send + Sync {
    /// Fetch historical price/quantity samples for one item on one realm's
    /// auction house, ordered by ascending timestamp.
    ///
    /// `timerange` is the number of days of history to retrieve; `None` asks
    /// for the connector's full available history. A window with no data is an
    /// error (`NotFound`), never a silent empty series.
    async fn server_history(
        &self,
        item: &ItemName,
        realm: &Realm,
        faction: Faction,
        timerange: Option<u32>,
    ) -> Result<TimeSeries, GoldwatchError>;
}

/// Focused role trait for connectors that provide region-wide auction history.
#[async_trait]
pub trait RegionHistoryProvider: Send + Sync {
    /// Fetch historical price/quantity samples for one item aggregated over a
    /// region, ordered by ascending timestamp.
    ///
    /// Same window and empty-data semantics as
    /// [`ServerHistoryProvider::server_history`].
    async fn region_history(
        &self,
        item: &ItemName,
        region: Region,
        timerange: Option<u32>,
    ) -> Result<TimeSeries, GoldwatchError>;
}

/// Primary connector interface.
///
/// A connector advertises the roles it supports by returning `Some` from the
/// corresponding `as_*` accessor; the orchestrator routes requests through
/// those accessors and skips connectors that opt out.
pub trait GoldwatchConnector: Send + Sync {
    /// Stable connector name, used in error tagging and provider ordering.
    fn name(&self) -> &'static str;

    /// Upstream vendor the connector talks to.
    fn vendor(&self) -> &'static str;

    /// Access the server-history role, if supported.
    fn as_server_history_provider(&self) -> Option<&dyn ServerHistoryProvider> {
        None
    }

    /// Access the region-history role, if supported.
    fn as_region_history_provider(&self) -> Option<&dyn RegionHistoryProvider> {
        None
    }
}
