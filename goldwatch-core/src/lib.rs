//! goldwatch-core
//!
//! Core traits and algorithms shared across the goldwatch ecosystem.
//!
//! - `connector`: the `GoldwatchConnector` trait and history role traits.
//! - `timeseries`: cadence inference, series alignment, and outlier repair.
//! - `types`: re-exports of the shared DTOs from `goldwatch-types`.
//!
//! The algorithms here are synchronous and allocation-light; only the
//! connector traits are async (via `async-trait`), since fetching history is
//! the one operation that touches the network.
#![warn(missing_docs)]

/// Connector role traits and the primary `GoldwatchConnector` interface.
pub mod connector;
/// Time-series utilities: cadence inference, alignment, and outlier repair.
pub mod timeseries;
/// Re-exports of the shared DTOs from `goldwatch-types`.
pub mod types;

pub use connector::GoldwatchConnector;
pub use timeseries::align::{align, nearest_within};
pub use timeseries::infer::estimate_step_seconds;
pub use timeseries::repair::{
    NoiseSource, ReanchorPolicy, RngNoise, ThreadRngSource, repair_paired_prices,
    repair_region_prices, repair_region_prices_with,
};
pub use types::*;
