// Input manager - turns raw window events into per-tick input events

use super::action::{Axis, InputSource};
use super::config::{Binding, InputConfig};
use super::event::InputEvent;
use super::player::PlayerInput;
use glam::Vec3;
use winit::event::{ElementState, KeyEvent, MouseButton, Touch, TouchPhase};
use winit::keyboard::PhysicalKey;

/// Collects input for the local player and hands it out once per tick
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,

    /// Edges and touches received since the last tick, in arrival order
    pending: Vec<InputEvent>,
}

impl InputManager {
    /// Create an input manager with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
            pending: Vec::new(),
        }
    }

    /// Create an input manager with the default bindings
    pub fn with_defaults() -> Self {
        Self::new(InputConfig::with_defaults())
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_source(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.process_source(InputSource::mouse(button), state);
    }

    /// Process a touch event from winit (only start/stop edges matter)
    pub fn process_touch(&mut self, touch: &Touch) {
        let location = Vec3::new(touch.location.x as f32, touch.location.y as f32, 0.0);
        match touch.phase {
            TouchPhase::Started => self.touch_started(touch.id, location),
            TouchPhase::Ended | TouchPhase::Cancelled => self.touch_stopped(touch.id, location),
            TouchPhase::Moved => {}
        }
    }

    /// Feed a press or release of a source
    pub fn process_source(&mut self, source: InputSource, state: ElementState) {
        match state {
            ElementState::Pressed => match self.config.binding(source) {
                Some(Binding::Action(action)) => {
                    if self.player.press(action, source) {
                        self.pending.push(InputEvent::Pressed(action));
                    }
                }
                Some(Binding::Axis(axis, scale)) => {
                    self.player.hold_axis(source, axis, scale);
                }
                None => log::trace!("Ignoring unbound input {:?}", source),
            },
            // Released by what the source holds, not by its current binding
            ElementState::Released => {
                if let Some(action) = self.player.release(source) {
                    self.pending.push(InputEvent::Released(action));
                }
                self.player.release_axis(source);
            }
        }
    }

    /// Register a finger touching the screen
    pub fn touch_started(&mut self, finger: u64, location: Vec3) {
        self.pending
            .push(InputEvent::TouchStarted { finger, location });
    }

    /// Register a finger leaving the screen
    pub fn touch_stopped(&mut self, finger: u64, location: Vec3) {
        self.pending
            .push(InputEvent::TouchStopped { finger, location });
    }

    /// Take this tick's events: queued edges first, then one sample per axis
    pub fn drain_tick(&mut self) -> Vec<InputEvent> {
        let mut events = std::mem::take(&mut self.pending);
        events.extend(
            Axis::ALL
                .into_iter()
                .map(|axis| InputEvent::Axis(axis, self.player.axis_value(axis))),
        );
        events
    }

    /// Get the player's held-input state
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Get the bindings
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Get mutable bindings for remapping
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Drop all held and queued input (e.g. on focus loss or pause)
    ///
    /// Every held action gets its release edge queued, so the character
    /// never keeps state from a button whose physical release it will not see.
    pub fn reset(&mut self) {
        self.pending.clear();
        for action in self.player.held_actions() {
            log::debug!("Releasing {} on input reset", action);
            self.pending.push(InputEvent::Released(action));
        }
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::Action;
    use winit::keyboard::KeyCode;

    fn key(code: KeyCode) -> InputSource {
        InputSource::key(code)
    }

    #[test]
    fn test_empty_tick_still_samples_axis() {
        let mut manager = InputManager::with_defaults();
        let events = manager.drain_tick();
        assert_eq!(events, vec![InputEvent::Axis(Axis::MoveRight, 0.0)]);
    }

    #[test]
    fn test_press_release_edges_in_order() {
        let mut manager = InputManager::with_defaults();
        manager.process_source(key(KeyCode::Tab), ElementState::Pressed);
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        manager.process_source(key(KeyCode::Tab), ElementState::Released);

        let events = manager.drain_tick();
        assert_eq!(
            events,
            vec![
                InputEvent::Pressed(Action::SpellList),
                InputEvent::Pressed(Action::MeleeAttack),
                InputEvent::Released(Action::SpellList),
                InputEvent::Axis(Axis::MoveRight, 0.0),
            ]
        );
    }

    #[test]
    fn test_held_action_does_not_repeat() {
        let mut manager = InputManager::with_defaults();
        manager.process_source(key(KeyCode::Space), ElementState::Pressed);
        manager.drain_tick();
        manager.process_source(key(KeyCode::Space), ElementState::Pressed);

        let events = manager.drain_tick();
        assert!(!events.contains(&InputEvent::Pressed(Action::Jump)));
        assert!(manager.player().is_pressed(Action::Jump));
    }

    #[test]
    fn test_axis_follows_held_keys() {
        let mut manager = InputManager::with_defaults();
        manager.process_source(key(KeyCode::KeyA), ElementState::Pressed);
        assert_eq!(
            manager.drain_tick(),
            vec![InputEvent::Axis(Axis::MoveRight, -1.0)]
        );

        // Still held on the next tick
        assert_eq!(
            manager.drain_tick(),
            vec![InputEvent::Axis(Axis::MoveRight, -1.0)]
        );

        manager.process_source(key(KeyCode::KeyA), ElementState::Released);
        assert_eq!(
            manager.drain_tick(),
            vec![InputEvent::Axis(Axis::MoveRight, 0.0)]
        );
    }

    #[test]
    fn test_unbound_source_ignored() {
        let mut manager = InputManager::with_defaults();
        manager.process_source(key(KeyCode::KeyQ), ElementState::Pressed);
        assert_eq!(manager.drain_tick().len(), 1);
    }

    #[test]
    fn test_touch_events_queued() {
        let mut manager = InputManager::with_defaults();
        let location = Vec3::new(10.0, 20.0, 0.0);
        manager.touch_started(0, location);
        manager.touch_stopped(0, location);

        let events = manager.drain_tick();
        assert_eq!(events[0], InputEvent::TouchStarted { finger: 0, location });
        assert_eq!(events[1], InputEvent::TouchStopped { finger: 0, location });
    }

    #[test]
    fn test_remapped_spell4() {
        let mut manager = InputManager::with_defaults();
        manager
            .config_mut()
            .bind_named(key(KeyCode::Digit4), "Spell4", 1.0)
            .unwrap();
        manager.process_source(key(KeyCode::Digit4), ElementState::Pressed);

        assert_eq!(manager.drain_tick()[0], InputEvent::Pressed(Action::Spell4));
    }

    #[test]
    fn test_reset_releases_held_actions() {
        let mut manager = InputManager::with_defaults();
        manager.process_source(key(KeyCode::KeyD), ElementState::Pressed);
        manager.process_source(key(KeyCode::Space), ElementState::Pressed);
        manager.process_source(key(KeyCode::Tab), ElementState::Pressed);
        manager.reset();

        assert_eq!(
            manager.drain_tick(),
            vec![
                InputEvent::Released(Action::Jump),
                InputEvent::Released(Action::SpellList),
                InputEvent::Axis(Axis::MoveRight, 0.0),
            ]
        );

        // The later physical releases are not edges any more
        manager.process_source(key(KeyCode::Tab), ElementState::Released);
        manager.process_source(key(KeyCode::Space), ElementState::Released);
        assert_eq!(
            manager.drain_tick(),
            vec![InputEvent::Axis(Axis::MoveRight, 0.0)]
        );
    }

    #[test]
    fn test_reset_with_nothing_held() {
        let mut manager = InputManager::with_defaults();
        manager.process_source(key(KeyCode::KeyE), ElementState::Pressed);
        manager.process_source(key(KeyCode::KeyE), ElementState::Released);
        manager.reset();

        assert_eq!(
            manager.drain_tick(),
            vec![InputEvent::Axis(Axis::MoveRight, 0.0)]
        );
    }

    #[test]
    fn test_focus_loss_closes_spell_menu() {
        use crate::engine::host::{HostCapabilities, Notification};
        use crate::game::characters::{Character, CombatState, InputDispatcher};

        #[derive(Default)]
        struct IdleHost;

        impl HostCapabilities for IdleHost {
            fn add_movement_input(&mut self, _direction: Vec3, _scale: f32) {}
            fn jump(&mut self) {}
            fn stop_jumping(&mut self) {}
        }

        let mut manager = InputManager::with_defaults();
        let mut dispatcher = InputDispatcher::new(IdleHost, Vec::<Notification>::new());
        let mut character = Character::default();
        let mut run_tick = |manager: &mut InputManager, character: &mut Character| {
            for event in manager.drain_tick() {
                dispatcher.dispatch(character, event);
            }
        };

        manager.process_source(key(KeyCode::Tab), ElementState::Pressed);
        run_tick(&mut manager, &mut character);
        assert!(character.is_spell_menu_open());

        manager.reset();
        manager.process_source(key(KeyCode::Tab), ElementState::Released);
        run_tick(&mut manager, &mut character);
        assert!(!character.is_spell_menu_open());

        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        run_tick(&mut manager, &mut character);
        assert_eq!(character.melee_combo(), CombatState::Combo1);
    }

    #[test]
    fn test_second_source_keeps_action_held() {
        let mut manager = InputManager::with_defaults();
        manager.process_source(key(KeyCode::Space), ElementState::Pressed);
        manager.process_source(key(KeyCode::KeyW), ElementState::Pressed);
        manager.process_source(key(KeyCode::Space), ElementState::Released);
        assert_eq!(
            manager.drain_tick(),
            vec![
                InputEvent::Pressed(Action::Jump),
                InputEvent::Axis(Axis::MoveRight, 0.0),
            ]
        );
        assert!(manager.player().is_pressed(Action::Jump));

        manager.process_source(key(KeyCode::KeyW), ElementState::Released);
        assert_eq!(
            manager.drain_tick(),
            vec![
                InputEvent::Released(Action::Jump),
                InputEvent::Axis(Axis::MoveRight, 0.0),
            ]
        );
    }

    #[test]
    fn test_rebinding_held_source_still_releases() {
        let mut manager = InputManager::with_defaults();
        manager.process_source(key(KeyCode::Tab), ElementState::Pressed);
        manager
            .config_mut()
            .bind(key(KeyCode::Tab), Action::Interact);
        manager.process_source(key(KeyCode::Tab), ElementState::Released);

        assert_eq!(
            manager.drain_tick(),
            vec![
                InputEvent::Pressed(Action::SpellList),
                InputEvent::Released(Action::SpellList),
                InputEvent::Axis(Axis::MoveRight, 0.0),
            ]
        );
    }
}
