//! Goldwatch orchestrates auction-house history requests across pluggable
//! connectors and turns the results into chart-ready, cleaned series.
//!
//! Overview
//! - Routes requests to connectors implementing the `goldwatch_core` contracts.
//! - Providers are tried in registration order; failures fall through to the
//!   next capable connector and are aggregated when everything fails.
//! - `comparison` fetches a server series and a region series for one item,
//!   maps both onto a shared time axis (the coarser cadence wins), and
//!   optionally repairs corrupted region prices against the server series.
//! - An alignment with no overlapping window is a visible `EmptyInput` error,
//!   never a silently empty result: an empty chart is indistinguishable from
//!   "no anomaly" and would defeat the tool.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use goldwatch::{CompareOptions, Goldwatch};
//! use goldwatch_core::{Faction, ItemName, Realm, Region};
//! use goldwatch_nexushub::NexusHubConnector;
//!
//! let gw = Goldwatch::builder()
//!     .with_connector(Arc::new(NexusHubConnector::new()?))
//!     .build()?;
//!
//! let aligned = gw
//!     .comparison(
//!         &ItemName::new("Saronite Ore"),
//!         &Realm::new("Skyfury"),
//!         Faction::Alliance,
//!         Region::Us,
//!         Some(7),
//!         CompareOptions { repair: true, threshold: None },
//!     )
//!     .await?;
//! // aligned.times() / aligned.server_prices() / aligned.region_prices()
//! // feed straight into the chart layer.
//! ```
#![warn(missing_docs)]

mod core;

pub use crate::core::{Goldwatch, GoldwatchBuilder};
pub use goldwatch_core::{
    AlignedSeries, CompareOptions, Faction, GoldwatchConfig, GoldwatchError, ItemName, Realm,
    Region, Sample, Source, TimeSeries,
};
