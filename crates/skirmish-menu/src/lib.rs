//! Skirmish: menu action to battle directive conversion pipeline.
//!
//! Responsible for turning a picked menu entry into a selection snapshot
//! and, once the acting fighter is known, binding that snapshot into a
//! directive the battle execution engine can run.

pub mod application;
pub mod domain;
