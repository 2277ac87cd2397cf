//! Routes for binding selections to the fighter performing them.

use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use skirmish_core::handle::FighterId;
use skirmish_menu::application::command_handlers;
use skirmish_menu::domain::commands;
use skirmish_menu::domain::{Directive, EnemyTargetRequest, Resolution, Selection};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;

/// Request body for POST /directives and POST /resolutions.
#[derive(Debug, Deserialize)]
pub struct BindSelectionRequest {
    /// The selection to bind.
    pub selection: Selection<Value>,
    /// The fighter performing the move.
    pub owner: FighterId,
}

/// Response body for POST /resolutions.
#[derive(Debug, Serialize)]
pub struct ResolutionResponse {
    /// `bound` or `deferred_enemy`.
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<Directive>,
    /// Enemy parameters for battle setup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<EnemyTargetRequest>,
}

impl From<Resolution> for ResolutionResponse {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Bound(directive) => Self {
                outcome: "bound",
                directive: Some(directive),
                request: None,
            },
            Resolution::DeferredEnemy(request) => Self {
                outcome: "deferred_enemy",
                directive: None,
                request: Some(request),
            },
        }
    }
}

/// POST /directives
#[instrument(skip(request), fields(owner = %request.owner))]
async fn bind_selection(
    Json(request): Json<BindSelectionRequest>,
) -> Result<Json<Directive>, ApiError> {
    let command = commands::BindSelection {
        correlation_id: Uuid::new_v4(),
        selection: request.selection,
        owner: request.owner,
    };

    info!(correlation_id = %command.correlation_id, "handling bind_selection command");

    let directive = command_handlers::handle_bind_selection(&command)?;

    Ok(Json(directive))
}

/// POST /resolutions
#[instrument(skip(request), fields(owner = %request.owner))]
async fn resolve_selection(Json(request): Json<BindSelectionRequest>) -> Json<ResolutionResponse> {
    let command = commands::ResolveSelection {
        correlation_id: Uuid::new_v4(),
        selection: request.selection,
        owner: request.owner,
    };

    info!(correlation_id = %command.correlation_id, "handling resolve_selection command");

    Json(command_handlers::handle_resolve_selection(&command).into())
}

/// Returns the router for the binding stage.
pub fn router() -> Router {
    Router::new()
        .route("/directives", post(bind_selection))
        .route("/resolutions", post(resolve_selection))
}
