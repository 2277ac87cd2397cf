//! Battle-configuration enumerations consumed by deferred enemy targeting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Archetype key of a fighter, as registered by the battle-configuration
/// subsystem (e.g. `"goblin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FighterType(String);

impl FighterType {
    /// Creates a fighter type from its archetype key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the archetype key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FighterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Level at which an enemy fighter is instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FighterLevel(pub u32);

impl From<u32> for FighterLevel {
    fn from(level: u32) -> Self {
        Self(level)
    }
}

/// Encounter modifier applied when battle setup instantiates an enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialFlag {
    /// A regular encounter.
    #[default]
    None,
    /// The enemy is a boss.
    Boss,
    /// The enemy is an elite variant.
    Elite,
    /// The enemy acts before the party on the first turn.
    Ambush,
    /// The encounter is driven by a scripted event.
    Scripted,
}

impl SpecialFlag {
    /// Returns the `snake_case` name of the flag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Boss => "boss",
            Self::Elite => "elite",
            Self::Ambush => "ambush",
            Self::Scripted => "scripted",
        }
    }
}
