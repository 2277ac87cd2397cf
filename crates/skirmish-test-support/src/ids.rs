//! Deterministic handles for tests.
//!
//! Each family uses its own high bits so that, e.g., `fixed_fighter(1)` and
//! `fixed_move(1)` never share an identifier.

use skirmish_core::handle::{ExecutorId, FighterId, MenuId, MoveId};
use uuid::Uuid;

const FIGHTER_PREFIX: u128 = 0x0001 << 112;
const MOVE_PREFIX: u128 = 0x0002 << 112;
const EXECUTOR_PREFIX: u128 = 0x0003 << 112;
const MENU_PREFIX: u128 = 0x0004 << 112;

/// Returns the `n`th deterministic fighter handle.
#[must_use]
pub fn fixed_fighter(n: u32) -> FighterId {
    FighterId::from_uuid(Uuid::from_u128(FIGHTER_PREFIX | u128::from(n)))
}

/// Returns the `n`th deterministic move handle.
#[must_use]
pub fn fixed_move(n: u32) -> MoveId {
    MoveId::from_uuid(Uuid::from_u128(MOVE_PREFIX | u128::from(n)))
}

/// Returns the `n`th deterministic executor handle.
#[must_use]
pub fn fixed_executor(n: u32) -> ExecutorId {
    ExecutorId::from_uuid(Uuid::from_u128(EXECUTOR_PREFIX | u128::from(n)))
}

/// Returns the `n`th deterministic menu handle.
#[must_use]
pub fn fixed_menu(n: u32) -> MenuId {
    MenuId::from_uuid(Uuid::from_u128(MENU_PREFIX | u128::from(n)))
}
