//! Command handlers for the menu pipeline.
//!
//! Each handler runs one pipeline step for a command and logs it under the
//! command's correlation ID. Handlers are synchronous and side-effect free
//! apart from tracing.

use std::fmt::Debug;

use skirmish_core::command::Command;
use skirmish_core::error::DomainError;
use tracing::{debug, instrument, warn};

use crate::domain::commands::{BindSelection, ConvertAction, EnterNumber, ResolveSelection};
use crate::domain::directives::Directive;
use crate::domain::selections::{Resolution, Selection};

/// Handles the `ConvertAction` command: converts the picked action into a
/// selection snapshot.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id))]
pub fn handle_convert_action<T>(command: &ConvertAction<T>) -> Selection<T>
where
    T: Clone + Debug + Send + Sync,
{
    let selection = command.action.to_selection();

    debug!(
        command_type = command.command_type(),
        stage = command.stage().as_str(),
        kind = selection.kind().as_str(),
        description = selection.description(),
        "converted action into selection"
    );
    if command.action.sub_menu().is_some() {
        debug!("converted action opens a sub-menu; selection carries no move");
    }

    selection
}

/// Handles the `EnterNumber` command: attaches the entered quantity to the
/// selection.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the selection is an enemy-target
/// selection.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id, number = command.number))]
pub fn handle_enter_number<T>(command: &EnterNumber<T>) -> Result<Selection<T>, DomainError>
where
    T: Clone + Debug + Send + Sync,
{
    let selection = command
        .selection
        .clone()
        .into_number_input(command.number)
        .inspect_err(|err| warn!(error = %err, "rejected number input"))?;

    debug!(
        command_type = command.command_type(),
        stage = command.stage().as_str(),
        "attached number to selection"
    );
    Ok(selection)
}

/// Handles the `BindSelection` command: binds the selection to its owner.
///
/// # Errors
///
/// Returns `DomainError::UnbindableSelection` if the selection is an
/// enemy-target selection.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id, owner = %command.owner))]
pub fn handle_bind_selection<T>(command: &BindSelection<T>) -> Result<Directive, DomainError>
where
    T: Debug + Send + Sync,
{
    let directive = command
        .selection
        .bind(command.owner)
        .inspect_err(|err| warn!(error = %err, "rejected binding"))?;

    if directive.move_id().is_none() {
        debug!("bound directive has no move; forwarding as-is");
    }
    debug!(
        command_type = command.command_type(),
        stage = command.stage().as_str(),
        kind = command.selection.kind().as_str(),
        "bound selection into directive"
    );

    Ok(directive)
}

/// Handles the `ResolveSelection` command: binds move selections and hands
/// enemy-target selections back as deferred requests.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id, owner = %command.owner))]
pub fn handle_resolve_selection<T>(command: &ResolveSelection<T>) -> Resolution
where
    T: Debug + Send + Sync,
{
    let resolution = command.selection.resolve(command.owner);

    match &resolution {
        Resolution::Bound(directive) => debug!(
            command_type = command.command_type(),
            stage = command.stage().as_str(),
            has_move = directive.move_id().is_some(),
            "resolved selection into directive"
        ),
        Resolution::DeferredEnemy(request) => debug!(
            command_type = command.command_type(),
            stage = command.stage().as_str(),
            fighter_type = %request.fighter_type(),
            special_flag = request.special_flag().as_str(),
            "deferred enemy-target selection to battle setup"
        ),
    }

    resolution
}
