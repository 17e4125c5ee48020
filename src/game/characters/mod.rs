// Character system
//
// This module contains everything related to the playable character:
// - Character data and stats
// - Melee combo state machine
// - Input dispatch gated by the spell menu

pub mod character;
pub mod combat;
pub mod dispatch;
pub mod stats;

// Re-export commonly used types
pub use character::Character;
pub use combat::{CombatState, CombatStateMachine};
pub use dispatch::{InputDispatcher, MOVE_RIGHT_DIRECTION};
pub use stats::{CharacterStats, BASE_STATS};
