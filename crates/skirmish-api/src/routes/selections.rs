//! Routes for converting picked actions into selections.

use axum::{Json, Router, routing::post};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use skirmish_core::handle::{ExecutorId, FighterId, MenuId, MoveId};
use skirmish_menu::application::command_handlers;
use skirmish_menu::domain::commands;
use skirmish_menu::domain::{Action, Selection};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;

/// Request body for POST /selections: the picked action.
#[derive(Debug, Deserialize)]
pub struct ConvertActionRequest {
    /// Text shown in the menu.
    pub display_text: String,
    /// Command text; defaults to the display text.
    #[serde(default)]
    pub command_text: Option<String>,
    /// Alternate text.
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub hidden: bool,
    /// Child menu; makes the action an internal node.
    #[serde(default)]
    pub sub_menu: Option<MenuId>,
    #[serde(default)]
    pub move_id: Option<MoveId>,
    /// Default target of the move.
    #[serde(default)]
    pub actor: Option<FighterId>,
    #[serde(default)]
    pub executor_override: Option<ExecutorId>,
    /// Item payload; makes the action typed. An explicit `null` is a
    /// payload, only a missing key leaves the action untyped.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub item: Option<Value>,
}

// Runs only when the key is present, so `null` becomes `Some(Value::Null)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ConvertActionRequest {
    fn into_action(self) -> Action<Value> {
        let mut action = match self.item {
            Some(item) => Action::typed(item, self.display_text),
            None => Action::without_item(self.display_text),
        };
        if let Some(command_text) = self.command_text {
            action = action.with_command_text(command_text);
        }
        if let Some(alt_text) = self.alt_text {
            action = action.with_alt_text(alt_text);
        }
        if self.disabled {
            action = action.disabled();
        }
        if self.hidden {
            action = action.hidden();
        }
        if let Some(menu) = self.sub_menu {
            return action.with_sub_menu(menu);
        }
        if let Some(move_id) = self.move_id {
            action = action.with_move(move_id, self.actor);
        } else if let Some(actor) = self.actor {
            action = action.with_actor(actor);
        }
        if let Some(executor) = self.executor_override {
            action = action.with_executor_override(executor);
        }
        action
    }
}

/// Request body for POST /selections/number-input.
#[derive(Debug, Deserialize)]
pub struct EnterNumberRequest {
    /// The selection awaiting a number.
    pub selection: Selection<Value>,
    /// The quantity entered by the player.
    pub number: i32,
}

/// POST /selections
#[instrument(skip(request), fields(display_text = %request.display_text))]
async fn convert_action(Json(request): Json<ConvertActionRequest>) -> Json<Selection<Value>> {
    let command = commands::ConvertAction {
        correlation_id: Uuid::new_v4(),
        action: request.into_action(),
    };

    info!(correlation_id = %command.correlation_id, "handling convert_action command");

    Json(command_handlers::handle_convert_action(&command))
}

/// POST /selections/number-input
#[instrument(skip(request), fields(number = request.number))]
async fn enter_number(
    Json(request): Json<EnterNumberRequest>,
) -> Result<Json<Selection<Value>>, ApiError> {
    let command = commands::EnterNumber {
        correlation_id: Uuid::new_v4(),
        selection: request.selection,
        number: request.number,
    };

    info!(correlation_id = %command.correlation_id, "handling enter_number command");

    let selection = command_handlers::handle_enter_number(&command)?;

    Ok(Json(selection))
}

/// Returns the router for the selection stage.
pub fn router() -> Router {
    Router::new()
        .route("/selections", post(convert_action))
        .route("/selections/number-input", post(enter_number))
}
