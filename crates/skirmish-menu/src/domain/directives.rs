//! Directives: selections bound to the fighter performing them.
//!
//! Directives are the output of the pipeline and are handed to the battle
//! execution engine as-is. Absent moves or targets are forwarded untouched;
//! rejecting incomplete directives is the engine's job.

use serde::{Deserialize, Serialize};
use skirmish_core::handle::{ExecutorId, FighterId, MoveId};

/// A move bound to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundDirective {
    /// The move to perform.
    pub move_id: Option<MoveId>,
    /// The default target chosen in the menu.
    pub target: Option<FighterId>,
    /// The fighter performing the move.
    pub owner: FighterId,
    /// Alternate executor for the move.
    pub executor_override: Option<ExecutorId>,
}

/// A move bound to its owner, scaled by a player-supplied quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundDirectiveWithNumber {
    /// The move to perform.
    pub move_id: Option<MoveId>,
    /// The default target chosen in the menu.
    pub target: Option<FighterId>,
    /// The fighter performing the move.
    pub owner: FighterId,
    /// Alternate executor for the move.
    pub executor_override: Option<ExecutorId>,
    /// The quantity entered by the player.
    pub number: i32,
}

impl BoundDirectiveWithNumber {
    #[must_use]
    pub fn new(directive: BoundDirective, number: i32) -> Self {
        Self {
            move_id: directive.move_id,
            target: directive.target,
            owner: directive.owner,
            executor_override: directive.executor_override,
            number,
        }
    }

    /// Returns the directive without its number.
    #[must_use]
    pub fn directive(&self) -> BoundDirective {
        BoundDirective {
            move_id: self.move_id,
            target: self.target,
            owner: self.owner,
            executor_override: self.executor_override,
        }
    }
}

/// Terminal value of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    Standard(BoundDirective),
    WithNumber(BoundDirectiveWithNumber),
}

impl Directive {
    /// Returns the fields shared by both directive kinds.
    #[must_use]
    pub fn base(&self) -> BoundDirective {
        match self {
            Self::Standard(directive) => *directive,
            Self::WithNumber(directive) => directive.directive(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> FighterId {
        self.base().owner
    }

    #[must_use]
    pub fn move_id(&self) -> Option<MoveId> {
        self.base().move_id
    }

    #[must_use]
    pub fn target(&self) -> Option<FighterId> {
        self.base().target
    }

    #[must_use]
    pub fn executor_override(&self) -> Option<ExecutorId> {
        self.base().executor_override
    }

    /// Returns the player-supplied quantity, if any.
    #[must_use]
    pub fn number(&self) -> Option<i32> {
        match self {
            Self::Standard(_) => None,
            Self::WithNumber(directive) => Some(directive.number),
        }
    }
}
