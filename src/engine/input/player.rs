// Per-player input state management

use super::action::{Action, Axis, InputSource};
use std::collections::{HashMap, HashSet};

/// Held-input state for the local player
///
/// Turns raw press/release reports into edges. An action is held while any
/// of its sources is down: the first source going down is the press edge,
/// the last one coming up is the release edge.
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Sources currently holding each action, never empty
    held_sources: HashMap<Action, HashSet<InputSource>>,

    /// Held axis sources and their contribution
    held_axis_sources: HashMap<InputSource, (Axis, f32)>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held by any source
    pub fn is_pressed(&self, action: Action) -> bool {
        self.held_sources.contains_key(&action)
    }

    /// Register a source going down, returns true on a button-down edge
    pub(crate) fn press(&mut self, action: Action, source: InputSource) -> bool {
        let sources = self.held_sources.entry(action).or_default();
        let was_idle = sources.is_empty();
        sources.insert(source);
        was_idle
    }

    /// Register a source coming up
    ///
    /// Returns the action whose last held source this was, i.e. a
    /// button-up edge. The source is looked up wherever it is held, so a
    /// key rebound while down still releases what it pressed.
    pub(crate) fn release(&mut self, source: InputSource) -> Option<Action> {
        let action = self
            .held_sources
            .iter()
            .find(|(_, sources)| sources.contains(&source))
            .map(|(action, _)| *action)?;

        let sources = self.held_sources.get_mut(&action)?;
        sources.remove(&source);
        if sources.is_empty() {
            self.held_sources.remove(&action);
            Some(action)
        } else {
            None
        }
    }

    /// Start holding a source that feeds an axis
    pub(crate) fn hold_axis(&mut self, source: InputSource, axis: Axis, scale: f32) {
        self.held_axis_sources.insert(source, (axis, scale));
    }

    /// Stop holding an axis source
    pub(crate) fn release_axis(&mut self, source: InputSource) {
        self.held_axis_sources.remove(&source);
    }

    /// Current value of an axis: sum of held contributions, clamped to [-1, 1]
    pub fn axis_value(&self, axis: Axis) -> f32 {
        self.held_axis_sources
            .values()
            .filter(|(bound, _)| *bound == axis)
            .fold(0.0_f32, |sum, (_, scale)| sum + scale)
            .clamp(-1.0, 1.0)
    }

    /// Actions currently held by at least one source, in declaration order
    pub fn held_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.is_pressed(*action))
            .collect()
    }

    /// Forget all held input without producing edges
    pub fn reset(&mut self) {
        self.held_sources.clear();
        self.held_axis_sources.clear();
    }
}
