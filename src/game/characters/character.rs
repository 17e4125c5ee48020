// Player character data

use super::combat::{CombatState, CombatStateMachine};
use super::stats::CharacterStats;

/// The player-controlled side-scroller character
///
/// Plain data: the host engine owns physics, camera and animation and
/// reaches this state only through the input dispatcher, plus the stat
/// fields below which UI or save layers may read and write freely.
#[derive(Debug)]
pub struct Character {
    /// Current health
    pub health: f32,
    /// Current energy (mana)
    pub energy: f32,
    /// Melee combo chain
    pub combat: CombatStateMachine,

    /// Spell selection overlay is up; suppresses melee, range and interact
    spell_menu_open: bool,
}

impl Character {
    /// Spawn a character with full resources
    pub fn new(stats: &CharacterStats) -> Self {
        Self {
            health: stats.max_health,
            energy: stats.max_energy,
            combat: CombatStateMachine::new(),
            spell_menu_open: false,
        }
    }

    /// Current melee combo stage
    pub fn melee_combo(&self) -> CombatState {
        self.combat.state()
    }

    /// Overwrite the melee combo stage
    pub fn set_melee_combo(&mut self, stage: CombatState) {
        self.combat.set_state(stage);
    }

    /// Check if the spell menu is shown
    pub fn is_spell_menu_open(&self) -> bool {
        self.spell_menu_open
    }

    pub(crate) fn open_spell_menu(&mut self) {
        self.spell_menu_open = true;
    }

    pub(crate) fn close_spell_menu(&mut self) {
        self.spell_menu_open = false;
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new(&CharacterStats::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_character_defaults() {
        let character = Character::default();
        assert_relative_eq!(character.health, 100.0);
        assert_relative_eq!(character.energy, 40.0);
        assert_eq!(character.melee_combo(), CombatState::NotAttacking);
        assert!(!character.is_spell_menu_open());
    }

    #[test]
    fn test_custom_stats() {
        let stats = CharacterStats {
            max_health: 250.0,
            max_energy: 10.0,
        };
        let character = Character::new(&stats);
        assert_relative_eq!(character.health, 250.0);
        assert_relative_eq!(character.energy, 10.0);
    }

    #[test]
    fn test_spell_menu_toggle() {
        let mut character = Character::default();
        character.open_spell_menu();
        assert!(character.is_spell_menu_open());
        character.close_spell_menu();
        assert!(!character.is_spell_menu_open());
    }

    #[test]
    fn test_melee_combo_writable() {
        let mut character = Character::default();
        character.set_melee_combo(CombatState::Combo2);
        assert_eq!(character.melee_combo(), CombatState::Combo2);
    }
}
