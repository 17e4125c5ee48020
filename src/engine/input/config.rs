// Input configuration and remapping system

use super::action::{default_action_bindings, default_axis_bindings, Action, Axis, InputSource};
use super::error::InputError;
use std::collections::HashMap;

/// What a single input source drives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    /// Press/release edges of a discrete action
    Action(Action),
    /// Contribution `scale` to an analog axis while held
    Axis(Axis, f32),
}

/// Maps input sources (keys/buttons) to actions and axes
///
/// A source drives at most one thing; binding it again replaces the
/// previous binding.
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Binding>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty input configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with the default bindings
    pub fn with_defaults() -> Self {
        let mut config = Self::new();
        config.reset_to_defaults();
        config
    }

    /// Bind an input source to an action
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.unbind_source(source);
        self.bindings.insert(source, Binding::Action(action));
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Bind an input source to an axis with the given scale
    pub fn bind_axis(&mut self, source: InputSource, axis: Axis, scale: f32) {
        self.unbind_source(source);
        self.bindings.insert(source, Binding::Axis(axis, scale));
    }

    /// Bind a source to an action or axis by its registry name
    ///
    /// Action names take precedence; the scale only applies to axes.
    pub fn bind_named(
        &mut self,
        source: InputSource,
        name: &str,
        scale: f32,
    ) -> Result<(), InputError> {
        if let Ok(action) = name.parse::<Action>() {
            self.bind(source, action);
            return Ok(());
        }
        match name.parse::<Axis>() {
            Ok(axis) => {
                self.bind_axis(source, axis, scale);
                Ok(())
            }
            Err(_) => Err(InputError::UnknownBinding(name.to_string())),
        }
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(Binding::Action(action)) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(sources) = self.action_to_sources.remove(&action) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    /// Get whatever an input source is bound to
    pub fn binding(&self, source: InputSource) -> Option<Binding> {
        self.bindings.get(&source).copied()
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        match self.binding(source) {
            Some(Binding::Action(action)) => Some(action),
            _ => None,
        }
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an input source is bound to anything
    pub fn is_bound(&self, source: InputSource) -> bool {
        self.bindings.contains_key(&source)
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Check if an axis has any bindings
    pub fn has_axis_binding(&self, axis: Axis) -> bool {
        self.bindings
            .values()
            .any(|binding| matches!(binding, Binding::Axis(bound, _) if *bound == axis))
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }

    /// Reset to the default bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, action) in default_action_bindings() {
            self.bind(source, action);
        }
        for (source, axis, scale) in default_axis_bindings() {
            self.bind_axis(source, axis, scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyF);
        config.bind(source, Action::MeleeAttack);

        assert_eq!(config.get_action(source), Some(Action::MeleeAttack));
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::new();
        let source1 = InputSource::key(KeyCode::KeyF);
        let source2 = InputSource::mouse(MouseButton::Left);

        config.bind(source1, Action::MeleeAttack);
        config.bind(source2, Action::MeleeAttack);
        assert_eq!(config.get_sources(Action::MeleeAttack).len(), 2);

        config.unbind_action(Action::MeleeAttack);
        assert_eq!(config.get_action(source1), None);
        assert_eq!(config.get_action(source2), None);
    }

    #[test]
    fn test_rebind_source_to_axis() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyD);

        config.bind(source, Action::Interact);
        config.bind_axis(source, Axis::MoveRight, 1.0);

        assert_eq!(config.get_action(source), None);
        assert!(!config.has_binding(Action::Interact));
        assert_eq!(config.binding(source), Some(Binding::Axis(Axis::MoveRight, 1.0)));
    }

    #[test]
    fn test_bind_named() {
        let mut config = InputConfig::new();
        let key_q = InputSource::key(KeyCode::KeyQ);
        let key_j = InputSource::key(KeyCode::KeyJ);

        config.bind_named(key_q, "Spell4", 1.0).unwrap();
        config.bind_named(key_j, "MoveRight", -1.0).unwrap();

        assert_eq!(config.get_action(key_q), Some(Action::Spell4));
        assert_eq!(config.binding(key_j), Some(Binding::Axis(Axis::MoveRight, -1.0)));
    }

    #[test]
    fn test_bind_named_unknown() {
        let mut config = InputConfig::new();
        let result = config.bind_named(InputSource::key(KeyCode::KeyQ), "Teleport", 1.0);
        assert_eq!(result, Err(InputError::UnknownBinding("Teleport".to_string())));
        assert!(!config.is_bound(InputSource::key(KeyCode::KeyQ)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "no action or axis named Teleport"
        );
    }

    #[test]
    fn test_clear() {
        let mut config = InputConfig::with_defaults();
        config.clear();

        assert!(!config.has_binding(Action::Jump));
        assert!(!config.has_axis_binding(Axis::MoveRight));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new();
        config.bind(InputSource::key(KeyCode::KeyZ), Action::Jump);
        config.reset_to_defaults();

        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyZ)), None);
        assert!(config.has_binding(Action::SpellList));
        assert!(config.has_axis_binding(Axis::MoveRight));
        assert!(!config.has_binding(Action::Spell4));
    }
}
