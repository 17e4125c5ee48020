// Melee combo state machine

/// Stage of the melee combo chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CombatState {
    /// No swing in progress
    #[default]
    NotAttacking,
    /// First swing of the chain
    Combo1,
    /// Second swing
    Combo2,
    /// Final swing, further presses stay here
    Combo3,
}

impl CombatState {
    /// Stage reached by one more melee press
    ///
    /// `Combo3` absorbs: there is no way out of it through melee input.
    pub fn next(self) -> Self {
        match self {
            Self::NotAttacking => Self::Combo1,
            Self::Combo1 => Self::Combo2,
            Self::Combo2 | Self::Combo3 => Self::Combo3,
        }
    }

    /// Ordinal position in the chain (0 for `NotAttacking`)
    pub fn combo_index(self) -> u8 {
        match self {
            Self::NotAttacking => 0,
            Self::Combo1 => 1,
            Self::Combo2 => 2,
            Self::Combo3 => 3,
        }
    }

    /// Check if this is the terminal stage
    pub fn is_final(self) -> bool {
        self == Self::Combo3
    }

    /// Overlay text announcing that this stage was entered
    pub fn announcement(self) -> Option<String> {
        match self {
            Self::NotAttacking => None,
            stage => Some(format!("Melee Combo {}!", stage.combo_index())),
        }
    }
}

/// Owns the melee combo stage and advances it on melee triggers
///
/// Nothing resets the chain on its own; the host may call [`reset`]
/// when it decides the combo was interrupted or timed out.
///
/// [`reset`]: CombatStateMachine::reset
#[derive(Debug, Default)]
pub struct CombatStateMachine {
    current_state: CombatState,
    previous_state: CombatState,
    /// Presses that landed while already at the final stage
    absorbed_presses: u32,
}

impl CombatStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current stage
    pub fn state(&self) -> CombatState {
        self.current_state
    }

    /// Get the stage before the last transition
    pub fn previous_state(&self) -> CombatState {
        self.previous_state
    }

    /// Number of melee presses swallowed by the final stage
    pub fn absorbed_presses(&self) -> u32 {
        self.absorbed_presses
    }

    /// Advance the chain by one melee press
    ///
    /// Returns the newly entered stage, or `None` when the press was
    /// absorbed by `Combo3`.
    pub fn advance(&mut self) -> Option<CombatState> {
        let next = self.current_state.next();
        if next == self.current_state {
            self.absorbed_presses += 1;
            return None;
        }
        self.previous_state = self.current_state;
        self.current_state = next;
        Some(next)
    }

    /// Overwrite the stage (external writers such as a save system)
    ///
    /// Any change of stage starts a fresh absorbed-press count.
    pub fn set_state(&mut self, state: CombatState) {
        if self.current_state != state {
            self.previous_state = self.current_state;
            self.current_state = state;
            self.absorbed_presses = 0;
        }
    }

    /// Drop back to `NotAttacking`
    pub fn reset(&mut self) {
        self.set_state(CombatState::NotAttacking);
    }
}
