// Input events handed to the game core once per tick

use glam::Vec3;

use super::action::{Action, Axis};

/// A single host-reported input occurrence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button-down edge of an action
    Pressed(Action),
    /// Button-up edge of an action
    Released(Action),
    /// Analog axis sample for this tick
    Axis(Axis, f32),
    /// A finger touched the screen
    TouchStarted { finger: u64, location: Vec3 },
    /// A finger left the screen
    TouchStopped { finger: u64, location: Vec3 },
}
