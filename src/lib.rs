//! Cyber Mage - core of a side-scrolling action game.
//!
//! The host engine owns physics, camera, rendering and animation. This crate
//! owns the player character's combat state: a melee combo chain and a spell
//! menu flag that gates which inputs reach it.
//!
//! - **engine**: host capability traits, input bindings and the tick clock
//! - **game**: the character, its combo state machine, the input dispatcher
//!   and the game mode that picks the default pawn

pub mod engine;
pub mod game;
