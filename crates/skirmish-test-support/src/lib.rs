//! Shared test fixtures for the Skirmish battle menu pipeline.
//!
//! Production actions and selections are immutable; tests assemble them
//! through their public constructors using the handles and canned menus
//! provided here.

mod fixture;
mod ids;

pub use fixture::BattleMenuFixture;
pub use ids::{fixed_executor, fixed_fighter, fixed_menu, fixed_move};
