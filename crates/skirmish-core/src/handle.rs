//! Opaque handles forwarded through the menu pipeline.
//!
//! Each handle names something owned by another subsystem (a move in the
//! move registry, a fighter on the field, an alternate executor, a child
//! menu). The pipeline copies handles into selections and directives but
//! never looks behind them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a handle with a fresh random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing identifier.
            #[must_use]
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Returns the underlying identifier.
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

define_handle!(
    /// Handle to a move payload in the move registry.
    MoveId
);

define_handle!(
    /// Handle to a battle participant.
    FighterId
);

define_handle!(
    /// Handle to an alternate executor that runs a move instead of the
    /// default dispatch.
    ExecutorId
);

define_handle!(
    /// Handle to a navigable child menu.
    MenuId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_handles_are_distinct() {
        assert_ne!(FighterId::new(), FighterId::new());
    }

    #[test]
    fn test_handle_round_trips_uuid() {
        let id = Uuid::from_u128(7);

        let fighter = FighterId::from_uuid(id);

        assert_eq!(fighter.as_uuid(), id);
        assert_eq!(FighterId::from(id), fighter);
    }

    #[test]
    fn test_handle_serializes_as_bare_uuid() {
        let id = Uuid::from_u128(42);

        let json = serde_json::to_value(MoveId::from_uuid(id)).unwrap();

        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }

    #[test]
    fn test_handle_display_matches_uuid() {
        let id = Uuid::from_u128(3);

        assert_eq!(MenuId::from_uuid(id).to_string(), id.to_string());
    }
}
