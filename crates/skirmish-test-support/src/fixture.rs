//! Canned battle menu: a small roster with moves, actions, and selections.

use skirmish_core::encounter::{FighterLevel, FighterType, SpecialFlag};
use skirmish_core::handle::{ExecutorId, FighterId, MenuId, MoveId};
use skirmish_menu::domain::{Action, EnemyTargetRequest, MoveChoice, Selection};

use crate::ids::{fixed_executor, fixed_fighter, fixed_menu, fixed_move};

/// A battle menu with two party members, one enemy, and a handful of moves.
///
/// Every handle is deterministic, so two fixtures built in the same test
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleMenuFixture {
    /// Party member acting this turn.
    pub hero: FighterId,
    /// Second party member, used as an alternate owner.
    pub mage: FighterId,
    /// The enemy on the field.
    pub goblin: FighterId,
    /// Basic physical attack.
    pub strike: MoveId,
    /// HP drain scaled by a number prompt.
    pub drain: MoveId,
    /// Move that consumes an inventory item.
    pub use_item: MoveId,
    /// Executor that runs counter-attacks outside the default dispatch.
    pub counter_executor: ExecutorId,
    /// Child menu listing skills.
    pub skills_menu: MenuId,
}

impl Default for BattleMenuFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleMenuFixture {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hero: fixed_fighter(1),
            mage: fixed_fighter(2),
            goblin: fixed_fighter(3),
            strike: fixed_move(1),
            drain: fixed_move(2),
            use_item: fixed_move(3),
            counter_executor: fixed_executor(1),
            skills_menu: fixed_menu(1),
        }
    }

    /// "Attack": strike aimed at the goblin.
    #[must_use]
    pub fn attack_action(&self) -> Action {
        Action::new("Attack").with_move(self.strike, Some(self.goblin))
    }

    /// "Skills": opens the skills menu.
    #[must_use]
    pub fn skills_action(&self) -> Action {
        Action::new("Skills")
            .with_command_text("skills")
            .with_sub_menu(self.skills_menu)
    }

    /// "Drain HP": drain aimed at the goblin, awaiting a number.
    #[must_use]
    pub fn drain_action(&self) -> Action {
        Action::new("Drain HP")
            .with_command_text("drain")
            .with_move(self.drain, Some(self.goblin))
    }

    /// "Counter": strike routed through the counter executor.
    #[must_use]
    pub fn counter_action(&self) -> Action {
        Action::new("Counter")
            .with_alt_text("Retaliate on the next hit")
            .with_move(self.strike, Some(self.goblin))
            .with_executor_override(self.counter_executor)
    }

    /// "Potion x3": typed action carrying the item key, aimed at the hero.
    #[must_use]
    pub fn potion_action(&self) -> Action<String> {
        Action::typed(String::from("potion"), "Potion x3")
            .with_command_text("potion")
            .with_move(self.use_item, Some(self.hero))
    }

    /// Number-input selection for the drain move.
    #[must_use]
    pub fn drain_selection(&self, number: i32) -> Selection {
        Selection::number_input(
            number,
            MoveChoice::new("Drain HP", Some(self.drain), Some(self.goblin)),
        )
    }

    /// Deferred request for a level-3 goblin boss.
    #[must_use]
    pub fn goblin_boss_request(&self) -> EnemyTargetRequest {
        EnemyTargetRequest::new(FighterType::new("goblin"), FighterLevel(3), SpecialFlag::Boss)
    }

    /// Enemy-target selection for a level-3 goblin boss.
    #[must_use]
    pub fn goblin_boss_selection(&self) -> Selection {
        Selection::enemy_target(self.goblin_boss_request())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_handles_are_distinct() {
        let fixture = BattleMenuFixture::new();

        assert_ne!(fixture.hero, fixture.mage);
        assert_ne!(fixture.hero, fixture.goblin);
        assert_ne!(fixture.strike, fixture.drain);
        assert_ne!(fixture.hero.as_uuid(), fixture.strike.as_uuid());
    }

    #[test]
    fn test_fixture_is_deterministic() {
        assert_eq!(BattleMenuFixture::new(), BattleMenuFixture::default());
    }
}
