//! Domain layer for the menu pipeline.

pub mod actions;
pub mod commands;
pub mod directives;
pub mod selections;

pub use actions::{Action, ActionNode, MoveBinding};
pub use directives::{BoundDirective, BoundDirectiveWithNumber, Directive};
pub use selections::{EnemyTargetRequest, MoveChoice, Resolution, Selection, SelectionKind};
