//! Route modules organized by pipeline stage.

pub mod directives;
pub mod health;
pub mod selections;
