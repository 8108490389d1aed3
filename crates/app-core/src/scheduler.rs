/// Run state for the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Two-state frame scheduler, decoupled from the platform refresh signal.
///
/// The front-end requests the next animation frame only while `Running`;
/// tests drive frames synchronously by checking `is_running` themselves.
#[derive(Clone, Copy, Debug)]
pub struct FrameScheduler {
    state: RunState,
}

impl FrameScheduler {
    /// Starts `Running`; the loop begins immediately on load.
    pub fn new() -> Self {
        Self {
            state: RunState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn pause(&mut self) {
        self.state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = RunState::Running;
    }

    /// Flip the state; returns true if the scheduler is now running (the
    /// caller must re-kick the refresh signal in that case).
    pub fn toggle(&mut self) -> bool {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        };
        self.is_running()
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
