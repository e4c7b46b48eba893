//! Identifiers for items and the markets they are priced on.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GoldwatchError;

/// An item name as a player would type it (e.g. "Saronite Ore").
///
/// The NexusHub API addresses items by slug; [`ItemName::slug`] derives it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemName(String);

impl ItemName {
    /// Wrap a display name. Leading/trailing whitespace is trimmed.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    /// The display name as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL slug: lowercase with spaces replaced by hyphens.
    #[must_use]
    pub fn slug(&self) -> String {
        self.0.to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A realm (server) name, e.g. "Skyfury".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Realm(String);

impl Realm {
    /// Wrap a realm name. Leading/trailing whitespace is trimmed.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    /// The realm name as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL slug: lowercase with spaces replaced by hyphens.
    #[must_use]
    pub fn slug(&self) -> String {
        self.0.to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Realm {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Faction side of an auction house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Alliance auction house.
    Alliance,
    /// Horde auction house.
    Horde,
}

impl Faction {
    /// URL slug used by the NexusHub API.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Alliance => "alliance",
            Self::Horde => "horde",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alliance => f.write_str("Alliance"),
            Self::Horde => f.write_str("Horde"),
        }
    }
}

impl FromStr for Faction {
    type Err = GoldwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alliance" => Ok(Self::Alliance),
            "horde" => Ok(Self::Horde),
            other => Err(GoldwatchError::InvalidArg(format!(
                "unknown faction: {other}"
            ))),
        }
    }
}

/// Region aggregate a realm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Americas/Oceania region.
    Us,
    /// Europe region.
    Eu,
}

impl Region {
    /// URL slug used by the NexusHub API.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Us => f.write_str("US"),
            Self::Eu => f.write_str("EU"),
        }
    }
}

impl FromStr for Region {
    type Err = GoldwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            other => Err(GoldwatchError::InvalidArg(format!(
                "unknown region: {other}"
            ))),
        }
    }
}

/// The market a [`crate::TimeSeries`] was sampled from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// A single realm/faction auction house.
    Server {
        /// Realm the series belongs to.
        realm: Realm,
        /// Faction side on that realm.
        faction: Faction,
    },
    /// A region-wide aggregate.
    Region(Region),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server { realm, faction } => write!(f, "{realm}-{faction}"),
            Self::Region(region) => write!(f, "{region}"),
        }
    }
}
