//! Re-export of foundational types from `goldwatch-types`.
// Consolidated re-exports so downstream crates can depend on `goldwatch-core` only

pub use goldwatch_types::{
    AlignedSeries, CompareOptions, Faction, GoldwatchConfig, GoldwatchError, ItemName, Realm,
    Region, Sample, Source, TimeSeries,
};
