use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the goldwatch workspace.
///
/// Covers alignment preconditions, repair parameter validation, paired-array
/// contract violations, connector-tagged fetch failures, not-found conditions,
/// and an aggregate for multi-provider attempts.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum GoldwatchError {
    /// No usable samples on one side of an alignment, or no overlapping window.
    #[error("empty input: {which}")]
    EmptyInput {
        /// Which input was empty (e.g. "server series", "aligned overlap").
        which: String,
    },

    /// The outlier-repair threshold multiplier was not a positive finite number.
    #[error("invalid threshold: {value}")]
    InvalidThreshold {
        /// The rejected threshold value.
        value: f64,
    },

    /// Paired price arrays differ in length. This is a programming-contract
    /// violation, not a recoverable runtime condition.
    #[error("misaligned input: server has {server} points, region has {region} points")]
    Misaligned {
        /// Length of the server price array.
        server: usize,
        /// Length of the region price array.
        region: usize,
    },

    /// An individual connector failed to fetch history.
    #[error("{connector} fetch failed: {msg}")]
    Fetch {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The upstream source has no data for the requested item/window.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "history for saronite-ore".
        what: String,
    },

    /// Issues with the returned or expected data (bad fields, bad ordering, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// All registered providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<GoldwatchError>),

    /// No registered connector implements the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label (e.g. "server-history", "region-history").
        capability: String,
    },
}

impl GoldwatchError {
    /// Helper: build an `EmptyInput` error for a description of the empty side.
    pub fn empty_input(which: impl Into<String>) -> Self {
        Self::EmptyInput {
            which: which.into(),
        }
    }

    /// Helper: build an `InvalidThreshold` error for a rejected multiplier.
    #[must_use]
    pub const fn invalid_threshold(value: f64) -> Self {
        Self::InvalidThreshold { value }
    }

    /// Helper: build a `Misaligned` error from the two observed lengths.
    #[must_use]
    pub const fn misaligned(server: usize, region: usize) -> Self {
        Self::Misaligned { server, region }
    }

    /// Helper: build a `Fetch` error with the connector name and message.
    pub fn fetch(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Fetch {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `Unsupported` error for a capability label.
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }
}
