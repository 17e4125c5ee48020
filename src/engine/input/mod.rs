// Input handling system
//
// Translates window input into the discrete action edges and analog axis
// samples the game core consumes, the way an engine's action-binding
// registry would.
//
// ## Architecture
//
// - `action`: Actions, axes, spell slots and default bindings
// - `config`: Bindings and remapping
// - `player`: Held-input state and edge detection
// - `event`: Per-tick input events
// - `manager`: Window events in, per-tick events out
//
// ## Usage Example
//
// ```rust
// use cyber_mage::engine::input::InputManager;
//
// let mut input = InputManager::with_defaults();
//
// // In your event loop, forward window events
// input.process_keyboard_event(&key_event);
//
// // Once per simulation tick
// for event in input.drain_tick() {
//     dispatcher.dispatch(&mut character, event);
// }
// ```

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, Axis, InputSource, SpellSlot};
pub use config::{Binding, InputConfig};
pub use error::InputError;
pub use event::InputEvent;
pub use manager::InputManager;
pub use player::PlayerInput;
