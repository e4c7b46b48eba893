//! Goldwatch-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod ident;
mod series;

pub use config::{CompareOptions, GoldwatchConfig};
pub use error::GoldwatchError;
pub use ident::{Faction, ItemName, Realm, Region, Source};
pub use series::{AlignedSeries, Sample, TimeSeries};
