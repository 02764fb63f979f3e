//! Frame driver state machine
//!
//! The browser loop is `Idle` until started, then `Running` forever: every
//! rendered frame requests the next one. Keeping the state explicit lets
//! tests step frames by hand without `requestAnimationFrame`.

use game_core::{Canvas, Game};

/// Driver states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Idle,
    Running,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    /// Input bound, first frame about to run
    Start,
    /// A frame was updated and rendered
    FrameDone,
}

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: FsmState,
    to_state: FsmState,
    action: FrameAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> FsmState {
        self.from_state
    }

    pub fn to_state(&self) -> FsmState {
        self.to_state
    }

    pub fn action(&self) -> FrameAction {
        self.action
    }
}

/// Drives one game tick per display refresh
#[derive(Debug)]
pub struct FrameDriver {
    state: FsmState,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            state: FsmState::Idle,
            frames: 0,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Current state name, for log lines
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    /// Frames completed since start
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.state == FsmState::Running
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: FrameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Run one frame (`update` then `render`) if the driver is running.
    ///
    /// Returns whether a frame ran. The caller schedules the next frame.
    pub fn run_frame<C: Canvas + ?Sized>(&mut self, game: &mut Game, canvas: &mut C) -> bool {
        if !self.is_running() {
            return false;
        }
        game.tick(canvas);
        self.frames += 1;
        self.transition(FrameAction::FrameDone).success
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: FrameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Idle, FrameAction::Start) => Some(FsmState::Running),
            (FsmState::Running, FrameAction::FrameDone) => Some(FsmState::Running),

            // Invalid transition
            _ => None,
        }
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
