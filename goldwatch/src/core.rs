use std::sync::Arc;

use goldwatch_core::connector::{RegionHistoryProvider, ServerHistoryProvider};
use goldwatch_core::{
    AlignedSeries, CompareOptions, Faction, GoldwatchConfig, GoldwatchConnector, GoldwatchError,
    ItemName, Realm, Region, ThreadRngSource, TimeSeries, align, repair_region_prices,
};

/// Orchestrator that routes history requests across registered connectors.
pub struct Goldwatch {
    connectors: Vec<Arc<dyn GoldwatchConnector>>,
    cfg: GoldwatchConfig,
}

impl std::fmt::Debug for Goldwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Goldwatch")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a [`Goldwatch`] orchestrator.
pub struct GoldwatchBuilder {
    connectors: Vec<Arc<dyn GoldwatchConnector>>,
    cfg: GoldwatchConfig,
}

impl Default for GoldwatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GoldwatchBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no connectors; register at least one via
    /// [`with_connector`](Self::with_connector) before calling `build`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: GoldwatchConfig::default(),
        }
    }

    /// Register a connector. Registration order is the provider priority:
    /// earlier connectors are tried first and later ones only on failure.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn GoldwatchConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Default number of days of history when callers pass no window.
    /// `None` requests each connector's full available history.
    #[must_use]
    pub const fn default_timerange_days(mut self, days: Option<u32>) -> Self {
        self.cfg.default_timerange_days = days;
        self
    }

    /// Default threshold multiplier used when repair is requested.
    #[must_use]
    pub const fn repair_threshold(mut self, k: f64) -> Self {
        self.cfg.repair_threshold = k;
        self
    }

    /// Timeout applied to each individual provider call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `Err(GoldwatchError::InvalidArg)` if no connector is registered.
    pub fn build(self) -> Result<Goldwatch, GoldwatchError> {
        if self.connectors.is_empty() {
            return Err(GoldwatchError::InvalidArg(
                "at least one connector must be registered".into(),
            ));
        }
        Ok(Goldwatch {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

impl Goldwatch {
    /// Entry point for building an orchestrator.
    #[must_use]
    pub fn builder() -> GoldwatchBuilder {
        GoldwatchBuilder::new()
    }

    fn window(&self, days: Option<u32>) -> Option<u32> {
        days.or(self.cfg.default_timerange_days)
    }

    /// Fetch per-server history for an item, trying connectors in priority
    /// order.
    ///
    /// # Errors
    /// - `Err(GoldwatchError::Unsupported)` if no connector provides server
    ///   history.
    /// - `Err(GoldwatchError::AllProvidersFailed)` when every capable
    ///   connector fails; single-provider failures are returned as-is.
    pub async fn server_history(
        &self,
        item: &ItemName,
        realm: &Realm,
        faction: Faction,
        days: Option<u32>,
    ) -> Result<TimeSeries, GoldwatchError> {
        let window = self.window(days);
        let mut failures = Vec::new();
        let mut capable = 0usize;
        for connector in &self.connectors {
            let Some(provider) = connector.as_server_history_provider() else {
                continue;
            };
            capable += 1;
            match self
                .bounded(connector.name(), provider.server_history(item, realm, faction, window))
                .await
            {
                Ok(series) => return Ok(series),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = connector.name(), error = %e, "server history provider failed");
                    failures.push(e);
                }
            }
        }
        Err(Self::exhausted("server-history", capable, failures))
    }

    /// Fetch region-wide history for an item, trying connectors in priority
    /// order.
    ///
    /// # Errors
    /// Same taxonomy as [`server_history`](Self::server_history).
    pub async fn region_history(
        &self,
        item: &ItemName,
        region: Region,
        days: Option<u32>,
    ) -> Result<TimeSeries, GoldwatchError> {
        let window = self.window(days);
        let mut failures = Vec::new();
        let mut capable = 0usize;
        for connector in &self.connectors {
            let Some(provider) = connector.as_region_history_provider() else {
                continue;
            };
            capable += 1;
            match self
                .bounded(connector.name(), provider.region_history(item, region, window))
                .await
            {
                Ok(series) => return Ok(series),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = connector.name(), error = %e, "region history provider failed");
                    failures.push(e);
                }
            }
        }
        Err(Self::exhausted("region-history", capable, failures))
    }

    /// Fetch, align, and optionally repair a server-vs-region comparison for
    /// one item. The returned series feeds straight into chart generation.
    /// When `opts.threshold` is unset, the configured
    /// [`repair_threshold`](GoldwatchBuilder::repair_threshold) applies.
    ///
    /// # Errors
    /// - Fetch errors per [`server_history`](Self::server_history) and
    ///   [`region_history`](Self::region_history).
    /// - `Err(GoldwatchError::EmptyInput)` if the two series share no
    ///   overlapping time window; callers must surface this instead of
    ///   rendering an empty chart.
    /// - `Err(GoldwatchError::InvalidThreshold)` if repair is requested with a
    ///   non-positive threshold.
    pub async fn comparison(
        &self,
        item: &ItemName,
        realm: &Realm,
        faction: Faction,
        region: Region,
        days: Option<u32>,
        opts: CompareOptions,
    ) -> Result<AlignedSeries, GoldwatchError> {
        let server = self.server_history(item, realm, faction, days).await?;
        let regional = self.region_history(item, region, days).await?;

        let mut aligned = align(&server, &regional)?;
        if aligned.is_empty() {
            return Err(GoldwatchError::empty_input(
                "no overlapping window between server and region series",
            ));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            item = %item,
            points = aligned.len(),
            repair = opts.repair,
            "aligned comparison series"
        );

        if opts.repair {
            let threshold = opts.threshold.unwrap_or(self.cfg.repair_threshold);
            let mut noise = ThreadRngSource::new();
            repair_region_prices(&mut aligned, threshold, &mut noise)?;
        }
        Ok(aligned)
    }

    async fn bounded<F>(&self, connector: &'static str, fut: F) -> Result<TimeSeries, GoldwatchError>
    where
        F: Future<Output = Result<TimeSeries, GoldwatchError>>,
    {
        match tokio::time::timeout(self.cfg.provider_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(GoldwatchError::fetch(
                connector,
                format!("timed out after {:?}", self.cfg.provider_timeout),
            )),
        }
    }

    fn exhausted(
        capability: &'static str,
        capable: usize,
        mut failures: Vec<GoldwatchError>,
    ) -> GoldwatchError {
        if capable == 0 {
            return GoldwatchError::unsupported(capability);
        }
        if failures.len() == 1 {
            return failures.remove(0);
        }
        GoldwatchError::AllProvidersFailed(failures)
    }
}
