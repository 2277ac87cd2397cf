//! Command abstractions for the menu pipeline.

use uuid::Uuid;

/// Step of the action → selection → directive pipeline a command drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// A picked action becomes a selection.
    Conversion,
    /// A selection receives a player-supplied quantity.
    NumberEntry,
    /// A selection is bound to the fighter performing it.
    Binding,
}

impl PipelineStage {
    /// Returns the `snake_case` name of the stage, for log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conversion => "conversion",
            Self::NumberEntry => "number_entry",
            Self::Binding => "binding",
        }
    }
}

/// Trait that all pipeline commands implement.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// The type name for this command (for logging/routing).
    fn command_type(&self) -> &'static str;

    /// The pipeline step this command drives.
    fn stage(&self) -> PipelineStage;

    /// Correlation ID to trace this command through the system.
    fn correlation_id(&self) -> Uuid;
}
