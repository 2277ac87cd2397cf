//! Selections: snapshots of a picked action, not yet bound to an owner.
//!
//! A [`Selection`] is one of four kinds. Move-carrying kinds (basic, typed,
//! number input) bind into a [`Directive`] once the acting fighter is known.
//! The enemy-target kind is a sentinel read by battle setup and never binds.

use serde::{Deserialize, Serialize};
use skirmish_core::encounter::{FighterLevel, FighterType, SpecialFlag};
use skirmish_core::error::DomainError;
use skirmish_core::handle::{ExecutorId, FighterId, MoveId};

use super::directives::{BoundDirective, BoundDirectiveWithNumber, Directive};

/// This move, on this default target, possibly with an execution override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveChoice {
    pub(crate) description: String,
    pub(crate) move_id: Option<MoveId>,
    pub(crate) target: Option<FighterId>,
    pub(crate) executor_override: Option<ExecutorId>,
}

impl MoveChoice {
    /// Creates a choice without an executor override.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        move_id: Option<MoveId>,
        target: Option<FighterId>,
    ) -> Self {
        Self {
            description: description.into(),
            move_id,
            target,
            executor_override: None,
        }
    }

    /// Routes the move through `executor` instead of the default dispatch.
    #[must_use]
    pub fn with_executor_override(mut self, executor: ExecutorId) -> Self {
        self.executor_override = Some(executor);
        self
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn move_id(&self) -> Option<MoveId> {
        self.move_id
    }

    #[must_use]
    pub fn target(&self) -> Option<FighterId> {
        self.target
    }

    #[must_use]
    pub fn executor_override(&self) -> Option<ExecutorId> {
        self.executor_override
    }

    fn bind(&self, owner: FighterId) -> BoundDirective {
        BoundDirective {
            move_id: self.move_id,
            target: self.target,
            owner,
            executor_override: self.executor_override,
        }
    }
}

/// Deferred enemy instantiation parameters carried by an enemy-target
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTargetRequest {
    fighter_type: FighterType,
    fighter_level: FighterLevel,
    special_flag: SpecialFlag,
}

impl EnemyTargetRequest {
    #[must_use]
    pub fn new(
        fighter_type: FighterType,
        fighter_level: FighterLevel,
        special_flag: SpecialFlag,
    ) -> Self {
        Self {
            fighter_type,
            fighter_level,
            special_flag,
        }
    }

    #[must_use]
    pub fn fighter_type(&self) -> &FighterType {
        &self.fighter_type
    }

    #[must_use]
    pub fn fighter_level(&self) -> FighterLevel {
        self.fighter_level
    }

    #[must_use]
    pub fn special_flag(&self) -> SpecialFlag {
        self.special_flag
    }
}

/// Discriminant of a [`Selection`], used for branching and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Basic,
    Typed,
    NumberInput,
    EnemyTarget,
}

impl SelectionKind {
    /// Returns the `snake_case` name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Typed => "typed",
            Self::NumberInput => "number_input",
            Self::EnemyTarget => "enemy_target",
        }
    }
}

/// A picked menu entry, not yet bound to the fighter performing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection<T = ()> {
    /// A plain move selection.
    Basic(MoveChoice),
    /// A move selection carrying the item payload of a typed action.
    Typed {
        /// The item payload.
        item: T,
        /// The move choice.
        choice: MoveChoice,
    },
    /// A move selection parameterized by a player-supplied quantity.
    NumberInput {
        /// The quantity entered by the player.
        number: i32,
        /// The move choice.
        choice: MoveChoice,
    },
    /// A deferred enemy-instantiation request. Has no move, target or
    /// description.
    EnemyTarget(EnemyTargetRequest),
}

/// Outcome of branching a selection on its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The selection was bound to an owner.
    Bound(Directive),
    /// The selection asks battle setup to instantiate an enemy.
    DeferredEnemy(EnemyTargetRequest),
}

impl<T> Selection<T> {
    /// Creates a basic selection.
    #[must_use]
    pub fn basic(choice: MoveChoice) -> Self {
        Self::Basic(choice)
    }

    /// Creates a typed selection carrying `item`.
    #[must_use]
    pub fn typed(item: T, choice: MoveChoice) -> Self {
        Self::Typed { item, choice }
    }

    /// Creates a number-input selection.
    #[must_use]
    pub fn number_input(number: i32, choice: MoveChoice) -> Self {
        Self::NumberInput { number, choice }
    }

    /// Creates an enemy-target sentinel selection.
    #[must_use]
    pub fn enemy_target(request: EnemyTargetRequest) -> Self {
        Self::EnemyTarget(request)
    }

    #[must_use]
    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::Basic(_) => SelectionKind::Basic,
            Self::Typed { .. } => SelectionKind::Typed,
            Self::NumberInput { .. } => SelectionKind::NumberInput,
            Self::EnemyTarget(_) => SelectionKind::EnemyTarget,
        }
    }

    /// Returns the move choice, or `None` for enemy-target selections.
    #[must_use]
    pub fn choice(&self) -> Option<&MoveChoice> {
        match self {
            Self::Basic(choice)
            | Self::Typed { choice, .. }
            | Self::NumberInput { choice, .. } => Some(choice),
            Self::EnemyTarget(_) => None,
        }
    }

    /// Returns the description. Enemy-target selections describe nothing.
    #[must_use]
    pub fn description(&self) -> &str {
        self.choice().map_or("", MoveChoice::description)
    }

    #[must_use]
    pub fn move_id(&self) -> Option<MoveId> {
        self.choice().and_then(MoveChoice::move_id)
    }

    #[must_use]
    pub fn target(&self) -> Option<FighterId> {
        self.choice().and_then(MoveChoice::target)
    }

    #[must_use]
    pub fn executor_override(&self) -> Option<ExecutorId> {
        self.choice().and_then(MoveChoice::executor_override)
    }

    #[must_use]
    pub fn item(&self) -> Option<&T> {
        match self {
            Self::Typed { item, .. } => Some(item),
            _ => None,
        }
    }

    #[must_use]
    pub fn number(&self) -> Option<i32> {
        match self {
            Self::NumberInput { number, .. } => Some(*number),
            _ => None,
        }
    }

    /// Returns the deferred enemy request of an enemy-target selection.
    #[must_use]
    pub fn enemy_request(&self) -> Option<&EnemyTargetRequest> {
        match self {
            Self::EnemyTarget(request) => Some(request),
            _ => None,
        }
    }

    /// Binds this selection to the fighter performing it.
    ///
    /// Move, target and executor override are copied into the directive
    /// unchanged, including absent values. The item of a typed selection is
    /// not part of the directive. The selection itself is left untouched, so
    /// the same template can be bound to several candidate owners.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnbindableSelection` for enemy-target
    /// selections; use [`Selection::resolve`] to branch on kind instead.
    pub fn bind(&self, owner: FighterId) -> Result<Directive, DomainError> {
        match self {
            Self::Basic(choice) | Self::Typed { choice, .. } => {
                Ok(Directive::Standard(choice.bind(owner)))
            }
            Self::NumberInput { number, choice } => Ok(Directive::WithNumber(
                BoundDirectiveWithNumber::new(choice.bind(owner), *number),
            )),
            Self::EnemyTarget(_) => Err(DomainError::UnbindableSelection {
                kind: SelectionKind::EnemyTarget.as_str(),
            }),
        }
    }

    /// Binds move selections and hands enemy-target selections back as
    /// deferred requests.
    #[must_use]
    pub fn resolve(&self, owner: FighterId) -> Resolution {
        match self {
            Self::Basic(choice) | Self::Typed { choice, .. } => {
                Resolution::Bound(Directive::Standard(choice.bind(owner)))
            }
            Self::NumberInput { number, choice } => Resolution::Bound(Directive::WithNumber(
                BoundDirectiveWithNumber::new(choice.bind(owner), *number),
            )),
            Self::EnemyTarget(request) => Resolution::DeferredEnemy(request.clone()),
        }
    }

    /// Attaches a player-supplied quantity to a move selection.
    ///
    /// A typed item is dropped; it is consumed before the number prompt.
    /// An existing number is replaced.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for enemy-target selections.
    pub fn into_number_input(self, number: i32) -> Result<Self, DomainError> {
        match self {
            Self::Basic(choice)
            | Self::Typed { choice, .. }
            | Self::NumberInput { choice, .. } => Ok(Self::NumberInput { number, choice }),
            Self::EnemyTarget(_) => Err(DomainError::Validation(
                "enemy_target selection cannot take a number".to_owned(),
            )),
        }
    }
}
