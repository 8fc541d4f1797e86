//! Match State Machine
//!
//! Decides whether physics runs and which overlay the renderer shows.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    AwaitingStart,
    Playing,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    ScoreLimitReached,
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: MatchPhase,
    pub to: MatchPhase,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    phase: MatchPhase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::AwaitingStart,
        }
    }

    /// Get current phase
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from = self.phase;

        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                log::info!("Match phase {:?} -> {:?} on {:?}", from, to, action);
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: MatchAction) -> Option<MatchPhase> {
        match (self.phase, action) {
            (MatchPhase::AwaitingStart, MatchAction::Start) => Some(MatchPhase::Playing),
            (MatchPhase::Playing, MatchAction::ScoreLimitReached) => Some(MatchPhase::GameOver),
            (MatchPhase::GameOver, MatchAction::Restart) => Some(MatchPhase::Playing),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let fsm = MatchFsm::new();
        assert_eq!(fsm.phase(), MatchPhase::AwaitingStart);
        assert!(!fsm.is_playing());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(MatchAction::Start);
        assert!(result.success);
        assert_eq!(result.from, MatchPhase::AwaitingStart);
        assert_eq!(result.to, MatchPhase::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(MatchAction::Restart);
        assert!(!result.success);
        assert_eq!(fsm.phase(), MatchPhase::AwaitingStart);
        assert!(!fsm.can_transition(MatchAction::ScoreLimitReached));
    }

    #[test]
    fn test_full_match_flow() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Start);
        fsm.transition(MatchAction::ScoreLimitReached);
        assert!(fsm.is_game_over());
        assert!(!fsm.can_transition(MatchAction::Start));
        fsm.transition(MatchAction::Restart);
        assert_eq!(fsm.phase(), MatchPhase::Playing);
    }
}
