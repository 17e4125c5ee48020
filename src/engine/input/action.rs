// Game action definitions and mappings

use std::fmt;
use std::str::FromStr;

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::error::InputError;

/// Represents all discrete in-game actions (button edges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    Jump,

    // Combat
    MeleeAttack,
    RangeAttack,

    // Spell slots
    Spell1,
    Spell2,
    Spell3,
    Spell4, // Handler exists, no default binding

    // World
    Interact,

    // UI mode
    SpellList,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Jump,
        Action::MeleeAttack,
        Action::RangeAttack,
        Action::Spell1,
        Action::Spell2,
        Action::Spell3,
        Action::Spell4,
        Action::Interact,
        Action::SpellList,
    ];

    /// Name used by the host's action-binding registry
    pub fn name(self) -> &'static str {
        match self {
            Self::Jump => "Jump",
            Self::MeleeAttack => "MeleeAttack",
            Self::RangeAttack => "RangeAttack",
            Self::Spell1 => "Spell1",
            Self::Spell2 => "Spell2",
            Self::Spell3 => "Spell3",
            Self::Spell4 => "Spell4",
            Self::Interact => "Interact",
            Self::SpellList => "SpellList",
        }
    }

    /// Spell slot triggered by this action, if any
    pub fn spell_slot(self) -> Option<SpellSlot> {
        match self {
            Self::Spell1 => Some(SpellSlot::One),
            Self::Spell2 => Some(SpellSlot::Two),
            Self::Spell3 => Some(SpellSlot::Three),
            Self::Spell4 => Some(SpellSlot::Four),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| InputError::UnknownAction(s.to_string()))
    }
}

/// Continuous analog axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    MoveRight,
}

impl Axis {
    pub const ALL: [Axis; 1] = [Axis::MoveRight];

    pub fn name(self) -> &'static str {
        match self {
            Self::MoveRight => "MoveRight",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.name() == s)
            .ok_or_else(|| InputError::UnknownAxis(s.to_string()))
    }
}

/// One of the four spell slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellSlot {
    One,
    Two,
    Three,
    Four,
}

impl SpellSlot {
    /// 1-based slot number as shown to the player
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default action bindings
pub fn default_action_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::mouse(MouseButton::Left), Action::MeleeAttack),
        (InputSource::mouse(MouseButton::Right), Action::RangeAttack),
        (InputSource::key(KeyCode::Digit1), Action::Spell1),
        (InputSource::key(KeyCode::Digit2), Action::Spell2),
        (InputSource::key(KeyCode::Digit3), Action::Spell3),
        (InputSource::key(KeyCode::KeyE), Action::Interact),
        (InputSource::key(KeyCode::Tab), Action::SpellList),
    ]
}

/// Default axis bindings as (source, axis, scale)
pub fn default_axis_bindings() -> Vec<(InputSource, Axis, f32)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Axis::MoveRight, -1.0),
        (InputSource::key(KeyCode::ArrowLeft), Axis::MoveRight, -1.0),
        (InputSource::key(KeyCode::KeyD), Axis::MoveRight, 1.0),
        (InputSource::key(KeyCode::ArrowRight), Axis::MoveRight, 1.0),
    ]
}
