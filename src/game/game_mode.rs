// Game mode - picks the default playable pawn

use log::{info, warn};

use super::characters::{Character, CharacterStats};

/// Asset path of the default playable pawn
pub const DEFAULT_PAWN_PATH: &str = "/Game/SideScrollerCPP/Blueprints/SideScrollerCharacter";

/// Session rules; currently only the default pawn class
///
/// `P` is the host's handle for a pawn class. Looking the class up is the
/// host's job; the game mode asks once, at construction.
#[derive(Debug, Clone)]
pub struct GameMode<P> {
    default_pawn_class: Option<P>,
}

impl<P> GameMode<P> {
    /// Create the game mode, resolving the default pawn through `resolve`
    pub fn new(resolve: impl FnOnce(&str) -> Option<P>) -> Self {
        let default_pawn_class = resolve(DEFAULT_PAWN_PATH);
        if default_pawn_class.is_some() {
            info!("Default pawn bound to {}", DEFAULT_PAWN_PATH);
        } else {
            warn!("Could not resolve default pawn {}", DEFAULT_PAWN_PATH);
        }
        Self { default_pawn_class }
    }

    /// The bound default pawn class, if resolution succeeded
    pub fn default_pawn_class(&self) -> Option<&P> {
        self.default_pawn_class.as_ref()
    }

    /// Spawn the player character for a new session
    pub fn spawn_default_pawn(&self, stats: &CharacterStats) -> Option<Character> {
        self.default_pawn_class
            .as_ref()
            .map(|_| Character::new(stats))
    }
}
