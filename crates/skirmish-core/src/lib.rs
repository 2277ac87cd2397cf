//! Skirmish Core: shared boundary types.
//!
//! This crate defines the opaque handles and battle-configuration
//! enumerations the menu pipeline forwards without inspecting, along with
//! the shared error type and command abstraction. It contains no pipeline
//! logic.

pub mod command;
pub mod encounter;
pub mod error;
pub mod handle;
