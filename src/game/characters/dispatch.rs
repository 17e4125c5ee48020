// Input dispatch - routes input events to combat and movement

use glam::Vec3;
use log::debug;

use super::character::Character;
use crate::engine::host::{HostCapabilities, Notification, NotificationColor, NotificationSink};
use crate::engine::input::{Action, Axis, InputEvent, SpellSlot};

/// World direction the `MoveRight` axis pushes along
pub const MOVE_RIGHT_DIRECTION: Vec3 = Vec3::NEG_Y;

/// Routes host input to the character, gated by the spell menu
///
/// Melee, range and interact are ignored while the spell menu is open.
/// Spell slots are not gated.
#[derive(Debug)]
pub struct InputDispatcher<H, S> {
    host: H,
    sink: S,
}

impl<H: HostCapabilities, S: NotificationSink> InputDispatcher<H, S> {
    pub fn new(host: H, sink: S) -> Self {
        Self { host, sink }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (H, S) {
        (self.host, self.sink)
    }

    /// Route one input event to its handler
    pub fn dispatch(&mut self, character: &mut Character, event: InputEvent) {
        match event {
            InputEvent::Axis(Axis::MoveRight, value) => self.on_move_axis(value),
            InputEvent::Pressed(action) => self.on_action_pressed(character, action),
            InputEvent::Released(Action::Jump) => self.on_jump_released(),
            InputEvent::Released(Action::SpellList) => self.on_spell_list_released(character),
            // No release handler bound
            InputEvent::Released(_) => {}
            InputEvent::TouchStarted { finger, location } => self.on_touch_start(finger, location),
            InputEvent::TouchStopped { finger, location } => self.on_touch_end(finger, location),
        }
    }

    fn on_action_pressed(&mut self, character: &mut Character, action: Action) {
        match action {
            Action::Jump => self.on_jump_pressed(),
            Action::MeleeAttack => self.on_melee_pressed(character),
            Action::RangeAttack => self.on_range_pressed(character),
            Action::Interact => self.on_interact_pressed(character),
            Action::SpellList => self.on_spell_list_pressed(character),
            Action::Spell1 | Action::Spell2 | Action::Spell3 | Action::Spell4 => {
                if let Some(slot) = action.spell_slot() {
                    self.on_spell_pressed(slot);
                }
            }
        }
    }

    /// Lateral movement, every tick
    pub fn on_move_axis(&mut self, value: f32) {
        self.host.add_movement_input(MOVE_RIGHT_DIRECTION, value);
    }

    pub fn on_jump_pressed(&mut self) {
        self.host.jump();
    }

    pub fn on_jump_released(&mut self) {
        self.host.stop_jumping();
    }

    /// Swing the melee weapon and advance the combo chain
    pub fn on_melee_pressed(&mut self, character: &mut Character) {
        if character.is_spell_menu_open() {
            debug!("Melee attack suppressed by spell menu");
            return;
        }

        self.notify(NotificationColor::Red, "Melee Attack!");
        match character.combat.advance() {
            Some(stage) => {
                debug!(
                    "Melee combo advanced {:?} -> {:?}",
                    character.combat.previous_state(),
                    stage
                );
                if let Some(text) = stage.announcement() {
                    self.notify(NotificationColor::Magenta, text);
                }
            }
            None => debug!(
                "Melee combo already at final stage ({} extra presses)",
                character.combat.absorbed_presses()
            ),
        }
    }

    pub fn on_range_pressed(&mut self, character: &Character) {
        if character.is_spell_menu_open() {
            debug!("Range attack suppressed by spell menu");
            return;
        }
        self.notify(NotificationColor::Green, "Range Attack!");
    }

    /// Cast from a spell slot, whether or not the spell menu is open
    pub fn on_spell_pressed(&mut self, slot: SpellSlot) {
        self.notify(
            NotificationColor::Blue,
            format!("Spell Attack {}!", slot.number()),
        );
    }

    pub fn on_interact_pressed(&mut self, character: &Character) {
        if character.is_spell_menu_open() {
            debug!("Interact suppressed by spell menu");
            return;
        }
        self.notify(NotificationColor::Yellow, "Interact with object!");
    }

    pub fn on_spell_list_pressed(&mut self, character: &mut Character) {
        character.open_spell_menu();
    }

    pub fn on_spell_list_released(&mut self, character: &mut Character) {
        character.close_spell_menu();
    }

    /// Any touch jumps
    pub fn on_touch_start(&mut self, finger: u64, location: Vec3) {
        debug!("Touch {} started at {}", finger, location);
        self.host.jump();
    }

    pub fn on_touch_end(&mut self, finger: u64, location: Vec3) {
        debug!("Touch {} stopped at {}", finger, location);
        self.host.stop_jumping();
    }

    fn notify(&mut self, color: NotificationColor, message: impl Into<String>) {
        self.sink.notify(Notification::new(color, message));
    }
}
