// Character stats

/// Starting values for the player character's resources
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    /// Health points at spawn
    pub max_health: f32,
    /// Energy (mana) at spawn
    pub max_energy: f32,
}

pub const BASE_STATS: CharacterStats = CharacterStats {
    max_health: 100.0,
    max_energy: 40.0,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}
