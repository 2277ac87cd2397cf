//! Application layer for the menu pipeline.

pub mod command_handlers;
