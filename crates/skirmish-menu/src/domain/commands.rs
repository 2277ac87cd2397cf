//! Commands for the menu pipeline.

use std::fmt::Debug;

use skirmish_core::command::{Command, PipelineStage};
use skirmish_core::handle::FighterId;
use uuid::Uuid;

use super::actions::Action;
use super::selections::Selection;

/// Command to convert a picked action into a selection.
#[derive(Debug, Clone)]
pub struct ConvertAction<T = ()> {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The picked action.
    pub action: Action<T>,
}

impl<T: Debug + Send + Sync> Command for ConvertAction<T> {
    fn command_type(&self) -> &'static str {
        "menu.convert_action"
    }

    fn stage(&self) -> PipelineStage {
        PipelineStage::Conversion
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to attach a player-supplied quantity to a selection.
#[derive(Debug, Clone)]
pub struct EnterNumber<T = ()> {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The selection awaiting a number.
    pub selection: Selection<T>,
    /// The quantity entered by the player.
    pub number: i32,
}

impl<T: Debug + Send + Sync> Command for EnterNumber<T> {
    fn command_type(&self) -> &'static str {
        "menu.enter_number"
    }

    fn stage(&self) -> PipelineStage {
        PipelineStage::NumberEntry
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to bind a selection to the fighter performing it.
#[derive(Debug, Clone)]
pub struct BindSelection<T = ()> {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The selection to bind.
    pub selection: Selection<T>,
    /// The acting fighter.
    pub owner: FighterId,
}

impl<T: Debug + Send + Sync> Command for BindSelection<T> {
    fn command_type(&self) -> &'static str {
        "menu.bind_selection"
    }

    fn stage(&self) -> PipelineStage {
        PipelineStage::Binding
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to branch a selection on its kind, binding move selections and
/// deferring enemy-target selections.
#[derive(Debug, Clone)]
pub struct ResolveSelection<T = ()> {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The selection to resolve.
    pub selection: Selection<T>,
    /// The acting fighter, used when the selection binds.
    pub owner: FighterId,
}

impl<T: Debug + Send + Sync> Command for ResolveSelection<T> {
    fn command_type(&self) -> &'static str {
        "menu.resolve_selection"
    }

    fn stage(&self) -> PipelineStage {
        PipelineStage::Binding
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
