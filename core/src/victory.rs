use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryState {
    #[default]
    NoWin,
    WinShown,
}

impl VictoryState {
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::WinShown)
    }
}

impl From<bool> for VictoryState {
    fn from(triggered: bool) -> Self {
        if triggered { Self::WinShown } else { Self::NoWin }
    }
}

/// What caused the board to be re-evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    UserToggle,
    /// Initial render of a fresh or restored board.
    Restore,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VictoryTransition {
    Unchanged,
    /// `NoWin -> WinShown`, the effect must fire.
    Celebrate,
    /// `WinShown -> NoWin`.
    Cleared,
}

impl VictoryTransition {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub const fn celebrates(self) -> bool {
        matches!(self, Self::Celebrate)
    }
}

/// Steps the victory state machine. Only a user toggle may start a celebration, so a stale win is never replayed on
/// reload.
pub const fn next_victory_state(
    state: VictoryState,
    has_win: bool,
    trigger: Trigger,
) -> (VictoryState, VictoryTransition) {
    use VictoryState::*;
    match (state, has_win, trigger) {
        (NoWin, true, Trigger::UserToggle) => (WinShown, VictoryTransition::Celebrate),
        (WinShown, false, _) => (NoWin, VictoryTransition::Cleared),
        (state, _, _) => (state, VictoryTransition::Unchanged),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_win_celebrates_once() {
        let (state, transition) = next_victory_state(VictoryState::NoWin, true, Trigger::UserToggle);
        assert_eq!(state, VictoryState::WinShown);
        assert!(transition.celebrates());

        let (state, transition) = next_victory_state(state, true, Trigger::UserToggle);
        assert_eq!(state, VictoryState::WinShown);
        assert_eq!(transition, VictoryTransition::Unchanged);
    }

    #[test]
    fn restore_never_celebrates() {
        let (state, transition) = next_victory_state(VictoryState::NoWin, true, Trigger::Restore);
        assert_eq!(state, VictoryState::NoWin);
        assert!(!transition.has_update());
    }

    #[test]
    fn losing_the_win_clears_regardless_of_trigger() {
        for trigger in [Trigger::UserToggle, Trigger::Restore] {
            let (state, transition) = next_victory_state(VictoryState::WinShown, false, trigger);
            assert_eq!(state, VictoryState::NoWin);
            assert_eq!(transition, VictoryTransition::Cleared);
        }
    }
}
